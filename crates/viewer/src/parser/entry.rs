use serde::{Deserialize, Serialize};

use super::format::format_message;
use super::header::EntryHeader;
use crate::filter::EntryFilter;

/// Recognized severity levels, most to least severe (RFC 5424 names).
///
/// Used for UI enumeration only — the parser accepts any word token as a
/// level.
pub const LEVELS: [&str; 8] = [
    "emergency", "alert", "critical", "error", "warning", "notice", "info", "debug",
];

/// Messages longer than this (or spanning more than two lines) are flagged
/// `is_long` so the presentation layer can collapse them.
const LONG_MESSAGE_BYTES: usize = 300;

/// One structured log record, shaped for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Entry creation time as recorded in the file, `YYYY-MM-DD HH:MM:SS`.
    pub timestamp: String,
    /// Environment/channel token preceding the level (e.g. "production").
    pub channel: String,
    /// Severity, always lower-cased regardless of source casing.
    pub level: String,
    /// Display-normalized message body; newlines preserved.
    pub message: String,
    /// True if the raw message has more than one internal newline or is
    /// longer than 300 bytes.
    pub is_long: bool,
    /// True if the active query matched this entry's message or timestamp.
    pub has_search_match: bool,
}

/// A completed entry as assembled from the stream: header captures plus the
/// raw trimmed message, before display formatting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedEntry {
    pub timestamp: String,
    pub channel: String,
    /// Lower-cased at construction.
    pub level: String,
    /// Outer whitespace trimmed, internal newlines preserved.
    pub message: String,
}

impl ParsedEntry {
    /// Shape this entry for display: format the message and derive the
    /// display flags. Flags are computed from the raw message, matching the
    /// source system.
    pub fn into_display(self, filter: &EntryFilter) -> LogEntry {
        let is_long = self.message.bytes().filter(|&b| b == b'\n').count() > 1
            || self.message.len() > LONG_MESSAGE_BYTES;
        let has_search_match =
            filter.query_matches(&self.message) || filter.query_matches(&self.timestamp);

        LogEntry {
            message: format_message(&self.message),
            timestamp: self.timestamp,
            channel: self.channel,
            level: self.level,
            is_long,
            has_search_match,
        }
    }
}

/// Accumulator for the entry currently being assembled. Started from a
/// matched header line; continuation lines are appended verbatim.
#[derive(Debug)]
pub(crate) struct EntryBuilder {
    timestamp: String,
    channel: String,
    level: String,
    message: String,
}

impl EntryBuilder {
    /// Begin a new entry from a matched header. The message buffer starts
    /// with the remainder of the header line after the colon.
    ///
    /// `line` must be the line `header` was matched against, without its
    /// line terminator.
    pub(crate) fn start(header: &EntryHeader<'_>, line: &str) -> Self {
        Self {
            timestamp: header.timestamp.to_string(),
            channel: header.channel.to_string(),
            level: header.level.to_lowercase(),
            message: line[header.message_start..].to_string(),
        }
    }

    /// Append a continuation line, preserving the line break.
    pub(crate) fn push_line(&mut self, line: &str) {
        self.message.push('\n');
        self.message.push_str(line);
    }

    /// Finalize: trailing/leading whitespace is trimmed off the assembled
    /// message so entry boundaries never leak newlines into it.
    pub(crate) fn finish(self) -> ParsedEntry {
        ParsedEntry {
            timestamp: self.timestamp,
            channel: self.channel,
            level: self.level,
            message: self.message.trim().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::header::match_header;

    fn build(lines: &[&str]) -> ParsedEntry {
        let header = match_header(lines[0]).expect("first line must be a header");
        let mut builder = EntryBuilder::start(&header, lines[0]);
        for line in &lines[1..] {
            builder.push_line(line);
        }
        builder.finish()
    }

    // ─── Assembly ───────────────────────────────────────────────

    #[test]
    fn test_single_line_entry() {
        let entry = build(&["[2023-01-01 12:00:00] production.ERROR: boom"]);
        assert_eq!(entry.timestamp, "2023-01-01 12:00:00");
        assert_eq!(entry.channel, "production");
        assert_eq!(entry.level, "error");
        assert_eq!(entry.message, "boom");
    }

    #[test]
    fn test_level_lowercased() {
        let entry = build(&["[2023-01-01 12:00:00] local.WaRnInG: x"]);
        assert_eq!(entry.level, "warning");
    }

    #[test]
    fn test_multiline_message_preserves_blank_lines() {
        let entry = build(&[
            "[2023-01-01 12:00:00] local.ERROR: first",
            "second",
            "",
            "fourth",
        ]);
        assert_eq!(entry.message, "first\nsecond\n\nfourth");
    }

    #[test]
    fn test_trailing_blank_lines_trimmed() {
        let entry = build(&["[2023-01-01 12:00:00] local.INFO: msg", "", ""]);
        assert_eq!(entry.message, "msg");
    }

    // ─── Display flags ──────────────────────────────────────────

    #[test]
    fn test_is_long_by_newline_count() {
        let filter = EntryFilter::none();
        let two_lines = build(&["[2023-01-01 12:00:00] local.INFO: a", "b"]);
        assert!(!two_lines.into_display(&filter).is_long);

        let three_lines = build(&["[2023-01-01 12:00:00] local.INFO: a", "b", "c"]);
        assert!(three_lines.into_display(&filter).is_long);
    }

    #[test]
    fn test_is_long_by_length() {
        let filter = EntryFilter::none();
        let long = "x".repeat(301);
        let line = format!("[2023-01-01 12:00:00] local.INFO: {long}");
        let entry = build(&[line.as_str()]);
        assert!(entry.into_display(&filter).is_long);
    }

    #[test]
    fn test_no_search_match_without_query() {
        let filter = EntryFilter::none();
        let entry = build(&["[2023-01-01 12:00:00] local.INFO: hello"]);
        assert!(!entry.into_display(&filter).has_search_match);
    }

    #[test]
    fn test_search_match_on_message() {
        let filter = EntryFilter::new(None, Some("HELLO")).unwrap();
        let entry = build(&["[2023-01-01 12:00:00] local.INFO: well hello there"]);
        assert!(entry.into_display(&filter).has_search_match);
    }

    #[test]
    fn test_search_match_on_timestamp() {
        let filter = EntryFilter::new(None, Some("2023-01-01")).unwrap();
        let entry = build(&["[2023-01-01 12:00:00] local.INFO: nothing here"]);
        assert!(entry.into_display(&filter).has_search_match);
    }
}
