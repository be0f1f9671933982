//! Whole-file extraction: parse every entry out of a complete in-memory
//! buffer in one pass. Used for files below the large-file threshold and
//! for cross-file search.

use std::path::Path;

use crate::filter::EntryFilter;

use super::entry::{EntryBuilder, LogEntry, ParsedEntry};
use super::header::match_header;

/// Extract every entry from `content`, in file order (oldest first).
///
/// Each entry's message spans from just after its header's colon to just
/// before the next header line (or end of buffer), so literal newlines,
/// dumps, and stack traces stay inside a single entry. Lines before the
/// first header have no entry to belong to and are dropped.
pub fn parse_str(content: &str) -> Vec<ParsedEntry> {
    let mut entries = Vec::new();
    let mut pending: Option<EntryBuilder> = None;

    for line in content.lines() {
        if let Some(header) = match_header(line) {
            if let Some(builder) = pending.take() {
                entries.push(builder.finish());
            }
            pending = Some(EntryBuilder::start(&header, line));
        } else if let Some(ref mut builder) = pending {
            builder.push_line(line);
        }
    }

    if let Some(builder) = pending {
        entries.push(builder.finish());
    }

    entries
}

/// Extract and filter, shaping the survivors for display.
pub fn parse_filtered(content: &str, filter: &EntryFilter) -> Vec<LogEntry> {
    parse_str(content)
        .into_iter()
        .filter(|entry| filter.accepts(entry))
        .map(|entry| entry.into_display(filter))
        .collect()
}

/// Read and parse a log file whole. A missing or unreadable file yields no
/// entries rather than an error; callers that need to distinguish the two
/// check existence first (see `view::LogView::page`).
pub fn parse_file(path: &Path, filter: &EntryFilter) -> Vec<LogEntry> {
    match std::fs::read_to_string(path) {
        Ok(content) => parse_filtered(&content, filter),
        Err(err) => {
            tracing::warn!(
                path = %path.display(),
                error = %err,
                "log file unreadable, returning no entries"
            );
            Vec::new()
        }
    }
}
