//! Structured diagnostic sinks
//!
//! Diagnostics are one-line JSON objects with deterministic key ordering:
//! the event name first, then severity, then context fields sorted
//! alphabetically. One log line = one event. Output is synchronous and
//! unbuffered.

use std::fmt;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use super::events::Event;

/// Diagnostic severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Normal operations
    Info = 0,
    /// Recoverable issues
    Warn = 1,
    /// Operation failures
    Error = 2,
}

impl Severity {
    /// Returns the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Destination for store diagnostics.
///
/// The store takes a boxed sink at construction; hosts that embed the
/// store hand in their own implementation to redirect diagnostics.
pub trait DiagnosticSink {
    /// Report one event with its severity and context fields
    fn emit(&self, severity: Severity, event: Event, fields: &[(&str, &str)]);
}

/// Render one diagnostic line.
///
/// Builds the JSON by hand to guarantee key ordering: event, severity,
/// then fields sorted alphabetically by key.
pub fn format_line(severity: Severity, event: Event, fields: &[(&str, &str)]) -> String {
    let mut output = String::with_capacity(256);

    output.push_str("{\"event\":\"");
    output.push_str(event.as_str());
    output.push('"');

    output.push_str(",\"severity\":\"");
    output.push_str(severity.as_str());
    output.push('"');

    let mut sorted_fields: Vec<_> = fields.iter().collect();
    sorted_fields.sort_by_key(|(k, _)| *k);

    for (key, value) in sorted_fields {
        output.push_str(",\"");
        escape_json_string(&mut output, key);
        output.push_str("\":\"");
        escape_json_string(&mut output, value);
        output.push('"');
    }

    output.push('}');
    output.push('\n');
    output
}

/// Escape special characters for JSON strings
fn escape_json_string(output: &mut String, s: &str) {
    for c in s.chars() {
        match c {
            '"' => output.push_str("\\\""),
            '\\' => output.push_str("\\\\"),
            '\n' => output.push_str("\\n"),
            '\r' => output.push_str("\\r"),
            '\t' => output.push_str("\\t"),
            c if c.is_control() => {
                output.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => output.push(c),
        }
    }
}

/// Default sink: one JSON line per event, errors to stderr, the rest to
/// stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonLineSink;

impl DiagnosticSink for JsonLineSink {
    fn emit(&self, severity: Severity, event: Event, fields: &[(&str, &str)]) {
        let line = format_line(severity, event, fields);
        // One write_all per line, best effort
        if severity >= Severity::Error {
            let _ = io::stderr().write_all(line.as_bytes());
        } else {
            let _ = io::stdout().write_all(line.as_bytes());
        }
    }
}

/// Capturing sink for tests and embedding hosts that want to inspect
/// diagnostics after the fact. Clones share the same buffer.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
    /// Create an empty capturing sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of every line emitted so far
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().expect("sink lock poisoned").clone()
    }

    /// Returns true if any captured line carries the given event
    pub fn contains_event(&self, event: Event) -> bool {
        let needle = format!("\"event\":\"{}\"", event.as_str());
        self.lines().iter().any(|line| line.contains(&needle))
    }
}

impl DiagnosticSink for MemorySink {
    fn emit(&self, severity: Severity, event: Event, fields: &[(&str, &str)]) {
        let line = format_line(severity, event, fields);
        self.lines.lock().expect("sink lock poisoned").push(line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Info < Severity::Warn);
        assert!(Severity::Warn < Severity::Error);
    }

    #[test]
    fn test_line_is_valid_json() {
        let line = format_line(Severity::Info, Event::StoreLoaded, &[("count", "3")]);
        let parsed: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(parsed["event"], "STORE_LOADED");
        assert_eq!(parsed["severity"], "INFO");
        assert_eq!(parsed["count"], "3");
    }

    #[test]
    fn test_line_deterministic_field_ordering() {
        let a = format_line(
            Severity::Warn,
            Event::LoadFailed,
            &[("zebra", "1"), ("apple", "2")],
        );
        let b = format_line(
            Severity::Warn,
            Event::LoadFailed,
            &[("apple", "2"), ("zebra", "1")],
        );
        assert_eq!(a, b);
        assert!(a.find("apple").unwrap() < a.find("zebra").unwrap());
    }

    #[test]
    fn test_line_event_comes_first() {
        let line = format_line(Severity::Error, Event::SaveFailed, &[]);
        assert!(line.find("\"event\"").unwrap() < line.find("\"severity\"").unwrap());
    }

    #[test]
    fn test_line_escapes_special_chars() {
        let line = format_line(
            Severity::Error,
            Event::SaveFailed,
            &[("error", "disk \"full\"\nretry later")],
        );
        let parsed: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(parsed["error"], "disk \"full\"\nretry later");
    }

    #[test]
    fn test_line_is_one_line() {
        let line = format_line(Severity::Info, Event::StoreLoaded, &[("a", "1"), ("b", "2")]);
        assert_eq!(line.chars().filter(|c| *c == '\n').count(), 1);
        assert!(line.ends_with('\n'));
    }

    #[test]
    fn test_memory_sink_captures_events() {
        let sink = MemorySink::new();
        sink.emit(Severity::Error, Event::SaveFailed, &[("path", "x.json")]);
        assert_eq!(sink.lines().len(), 1);
        assert!(sink.contains_event(Event::SaveFailed));
        assert!(!sink.contains_event(Event::LoadFailed));
    }
}
