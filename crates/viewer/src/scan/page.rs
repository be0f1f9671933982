//! The seek/collect paginator.
//!
//! Matching entries are numbered 1-based in stream order; page P covers
//! matches `(P-1)*100 + 1 ..= P*100`. The scanner skips the first
//! `(P-1)*100` matching entries, collects up to 100 more, and stops —
//! entries that fail the filter count toward neither phase.

use std::io::{self, BufRead};

use serde::Serialize;

use crate::filter::EntryFilter;
use crate::parser::entry::LogEntry;

use super::reader::EntryReader;

/// Entries per page. Fixed in the viewer protocol, not configurable.
pub const PAGE_SIZE: usize = 100;

/// One page of matching entries.
#[derive(Debug, Clone, Serialize)]
pub struct Page {
    pub entries: Vec<LogEntry>,
    /// True when the page came back full. A full page is taken to mean
    /// more pages exist; "exactly 100 remaining" and "more than 100
    /// remaining" are not distinguished. This is a known approximation,
    /// not an exact count.
    pub has_more: bool,
}

impl Page {
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
            has_more: false,
        }
    }
}

/// The two phases of a page scan.
enum ScanState {
    /// Skipping matching entries that belong to earlier pages.
    Seeking { remaining: usize },
    /// Accumulating the requested page.
    Collecting,
}

/// Produce page `page` (1-based) of the entries in `reader` that pass
/// `filter`, reading the stream exactly once and stopping as soon as the
/// page is full.
///
/// Requesting a page past the last matching entry yields an empty page.
pub fn scan_page<R: BufRead>(
    reader: R,
    filter: &EntryFilter,
    page: usize,
) -> io::Result<Page> {
    let page = page.max(1);
    let skip = (page - 1) * PAGE_SIZE;

    let mut reader = EntryReader::new(reader);
    let mut state = if skip > 0 {
        ScanState::Seeking { remaining: skip }
    } else {
        ScanState::Collecting
    };
    let mut entries = Vec::new();

    while let Some(entry) = reader.next_entry()? {
        if !filter.accepts(&entry) {
            continue;
        }

        match state {
            ScanState::Seeking { ref mut remaining } => {
                *remaining -= 1;
                if *remaining == 0 {
                    state = ScanState::Collecting;
                }
            }
            ScanState::Collecting => {
                entries.push(entry.into_display(filter));
                if entries.len() == PAGE_SIZE {
                    tracing::trace!(page, "page full, stopping scan early");
                    break;
                }
            }
        }
    }

    let has_more = entries.len() == PAGE_SIZE;
    Ok(Page { entries, has_more })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    use crate::parser::whole;

    /// A log with `n` entries; every third entry is an ERROR, the rest INFO.
    fn sample_log(n: usize) -> String {
        let mut content = String::new();
        for i in 0..n {
            let level = if i % 3 == 0 { "ERROR" } else { "INFO" };
            content.push_str(&format!(
                "[2023-01-01 {:02}:{:02}:{:02}] production.{}: message {}\n",
                i / 3600,
                (i / 60) % 60,
                i % 60,
                level,
                i
            ));
        }
        content
    }

    fn page_of(content: &str, filter: &EntryFilter, page: usize) -> Page {
        scan_page(Cursor::new(content), filter, page).unwrap()
    }

    // ─── Page boundaries ────────────────────────────────────────

    #[test]
    fn test_first_page_full_with_more() {
        let content = sample_log(250);
        let page = page_of(&content, &EntryFilter::none(), 1);
        assert_eq!(page.entries.len(), PAGE_SIZE);
        assert!(page.has_more);
        assert_eq!(page.entries[0].message, "message 0");
        assert_eq!(page.entries[99].message, "message 99");
    }

    #[test]
    fn test_second_page_continues_where_first_stopped() {
        let content = sample_log(250);
        let page = page_of(&content, &EntryFilter::none(), 2);
        assert_eq!(page.entries.len(), PAGE_SIZE);
        assert!(page.has_more);
        assert_eq!(page.entries[0].message, "message 100");
        assert_eq!(page.entries[99].message, "message 199");
    }

    #[test]
    fn test_last_partial_page() {
        let content = sample_log(250);
        let page = page_of(&content, &EntryFilter::none(), 3);
        assert_eq!(page.entries.len(), 50);
        assert!(!page.has_more);
        assert_eq!(page.entries[0].message, "message 200");
        assert_eq!(page.entries[49].message, "message 249");
    }

    #[test]
    fn test_page_past_the_end_is_empty() {
        let content = sample_log(250);
        let page = page_of(&content, &EntryFilter::none(), 4);
        assert!(page.entries.is_empty());
        assert!(!page.has_more);
    }

    #[test]
    fn test_exactly_full_last_page_still_reports_more() {
        // The documented approximation: 100 entries total ⇒ page 1 is full
        // ⇒ has_more is true even though page 2 is empty.
        let content = sample_log(100);
        let page = page_of(&content, &EntryFilter::none(), 1);
        assert_eq!(page.entries.len(), PAGE_SIZE);
        assert!(page.has_more);
        assert!(page_of(&content, &EntryFilter::none(), 2).entries.is_empty());
    }

    #[test]
    fn test_page_zero_treated_as_first() {
        let content = sample_log(5);
        let page = page_of(&content, &EntryFilter::none(), 0);
        assert_eq!(page.entries.len(), 5);
    }

    // ─── Filters drive the numbering ────────────────────────────

    #[test]
    fn test_only_matching_entries_are_counted() {
        // 360 entries, every third is an ERROR → 120 matches.
        let content = sample_log(360);
        let filter = EntryFilter::new(Some("error"), None).unwrap();

        let first = page_of(&content, &filter, 1);
        assert_eq!(first.entries.len(), PAGE_SIZE);
        assert!(first.has_more);
        assert_eq!(first.entries[0].message, "message 0");
        assert_eq!(first.entries[1].message, "message 3");

        let second = page_of(&content, &filter, 2);
        assert_eq!(second.entries.len(), 20);
        assert!(!second.has_more);
        assert_eq!(second.entries[0].message, "message 300");
    }

    #[test]
    fn test_query_filter_applies_to_accumulated_message() {
        let content = "\
[2023-01-01 12:00:00] local.ERROR: top line
needle in the continuation
[2023-01-01 12:01:00] local.ERROR: no match here
";
        let filter = EntryFilter::new(None, Some("needle")).unwrap();
        let page = page_of(content, &filter, 1);
        assert_eq!(page.entries.len(), 1);
        assert!(page.entries[0].has_search_match);
    }

    // ─── Equivalence with whole-file parse + slice ──────────────

    #[test]
    fn test_equivalent_to_whole_file_slice() {
        let mut content = sample_log(230);
        // Make some entries multi-line so boundary handling is exercised.
        content.push_str("[2023-01-01 23:59:59] production.ERROR: final\nwith trace\n");

        let cases: [(Option<&str>, Option<&str>); 3] = [
            (None, None),
            (Some("error"), None),
            (None, Some("message 1")),
        ];

        for (level, query) in cases {
            let filter = EntryFilter::new(level, query).unwrap();
            let all = whole::parse_filtered(&content, &filter);
            for page_no in 1..=3 {
                let page = page_of(&content, &filter, page_no);
                let start = (page_no - 1) * PAGE_SIZE;
                let expected: Vec<_> = all
                    .iter()
                    .skip(start)
                    .take(PAGE_SIZE)
                    .cloned()
                    .collect();
                assert_eq!(
                    page.entries, expected,
                    "page {} diverged for level={:?} query={:?}",
                    page_no, level, query
                );
            }
        }
    }
}
