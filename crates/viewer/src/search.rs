//! Cross-file search: run the whole-file parser over every listed log file
//! and keep the files that produced matches.
//!
//! Always parses whole files regardless of size — cross-file search is not
//! paginated. Inherited scope limit from the original feature.

use std::path::Path;

use serde::Serialize;

use crate::filter::EntryFilter;
use crate::parser::whole;
use crate::parser::LogEntry;

/// One searched file and its matching entries, in file order.
#[derive(Debug, Clone, Serialize)]
pub struct FileMatches {
    pub file: String,
    pub entries: Vec<LogEntry>,
}

/// Search `files` (as produced by the lister, newest first) under `dir`.
///
/// Files with zero matches are omitted; result order follows `files`.
/// Without a query there is nothing to search for and the result is empty.
pub fn search_files(dir: &Path, files: &[String], filter: &EntryFilter) -> Vec<FileMatches> {
    if !filter.has_query() {
        return Vec::new();
    }

    files
        .iter()
        .filter_map(|file| {
            let entries = whole::parse_file(&dir.join(file), filter);
            if entries.is_empty() {
                None
            } else {
                Some(FileMatches {
                    file: file.clone(),
                    entries,
                })
            }
        })
        .collect()
}
