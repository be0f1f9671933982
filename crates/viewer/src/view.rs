//! The viewer facade: one entry point per request kind, strategy selection
//! by file size.
//!
//! Files below the configured threshold are read whole (every matching
//! entry is returned, no pagination); files at or above it go through the
//! streaming paginated scanner so memory stays bounded.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::ViewerConfig;
use crate::files;
use crate::filter::EntryFilter;
use crate::scan::{scan_page, Page};
use crate::search::{self, FileMatches};
use crate::parser::whole;

#[derive(Error, Debug)]
pub enum ViewError {
    /// The requested file is not in the log directory. Distinct from a
    /// file that exists but has no matching entries.
    #[error("Log file not found: {0}")]
    FileNotFound(String),
}

/// Stateless request-serving surface over one configured log directory.
/// Every call re-reads the underlying files; nothing is cached between
/// requests.
pub struct LogView {
    config: ViewerConfig,
}

impl LogView {
    pub fn new(config: ViewerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    /// Matching log files, newest first, filenames only.
    pub fn files(&self) -> Vec<String> {
        files::list_log_files(self.log_dir(), &self.config.pattern)
    }

    /// Serve one page of `file` under `filter`.
    ///
    /// Small files return every matching entry and `has_more` false (the
    /// page number is not applied); large files return page `page` of the
    /// matching entries. A missing file is an error; a file that turns
    /// unreadable mid-request degrades to an empty page.
    pub fn page(&self, file: &str, filter: &EntryFilter, page: usize) -> Result<Page, ViewError> {
        let path = self.resolve(file)?;

        let size = match std::fs::metadata(&path) {
            Ok(meta) if meta.is_file() => meta.len(),
            _ => return Err(ViewError::FileNotFound(file.to_string())),
        };

        if size >= self.config.threshold_bytes() {
            tracing::debug!(file, size, page, "serving large file via streaming scanner");
            self.stream_page(&path, filter, page)
        } else {
            let entries = whole::parse_file(&path, filter);
            Ok(Page {
                entries,
                has_more: false,
            })
        }
    }

    /// Search every listed file for the filter's query.
    pub fn search(&self, filter: &EntryFilter) -> Vec<FileMatches> {
        search::search_files(self.log_dir(), &self.files(), filter)
    }

    fn stream_page(&self, path: &Path, filter: &EntryFilter, page: usize) -> Result<Page, ViewError> {
        let handle = match File::open(path) {
            Ok(handle) => handle,
            Err(err) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %err,
                    "log file unreadable, returning empty page"
                );
                return Ok(Page::empty());
            }
        };

        // The handle is dropped when scanning returns, full page or not.
        match scan_page(BufReader::new(handle), filter, page) {
            Ok(page) => Ok(page),
            Err(err) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %err,
                    "stream failed mid-scan, returning empty page"
                );
                Ok(Page::empty())
            }
        }
    }

    /// Resolve a requested filename inside the log directory. Only bare
    /// filenames are served; anything path-like is rejected as not found.
    fn resolve(&self, file: &str) -> Result<PathBuf, ViewError> {
        if file.is_empty() || file.contains(['/', '\\']) || file == "." || file == ".." {
            return Err(ViewError::FileNotFound(file.to_string()));
        }
        Ok(self.log_dir().join(file))
    }

    fn log_dir(&self) -> &Path {
        Path::new(&self.config.log_dir)
    }
}
