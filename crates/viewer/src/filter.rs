//! Entry filtering: severity match plus free-text query.
//!
//! The query is compiled once per request as a case-insensitive literal
//! through the ripgrep matcher stack, then applied to each completed
//! entry's message and timestamp.

use grep_matcher::Matcher;
use grep_regex::{RegexMatcher, RegexMatcherBuilder};
use thiserror::Error;

use crate::parser::entry::ParsedEntry;

#[derive(Error, Debug)]
pub enum FilterError {
    #[error("Invalid search query: {0}")]
    InvalidQuery(String),
}

/// Filter predicates for one request. Blank level/query inputs mean
/// "no filter".
#[derive(Debug, Clone)]
pub struct EntryFilter {
    level: Option<String>,
    query: Option<QueryMatcher>,
}

impl EntryFilter {
    pub fn new(level: Option<&str>, query: Option<&str>) -> Result<Self, FilterError> {
        let level = level
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(str::to_lowercase);

        let query = match query.map(str::trim).filter(|q| !q.is_empty()) {
            Some(q) => Some(QueryMatcher::new(q)?),
            None => None,
        };

        Ok(Self { level, query })
    }

    /// A filter that accepts everything.
    pub fn none() -> Self {
        Self {
            level: None,
            query: None,
        }
    }

    pub fn has_query(&self) -> bool {
        self.query.is_some()
    }

    /// Should this completed entry be included in the result set?
    ///
    /// Level must match exactly (entries carry lower-cased levels); the
    /// query must appear in the message or the timestamp.
    pub fn accepts(&self, entry: &ParsedEntry) -> bool {
        if let Some(ref level) = self.level {
            if entry.level != *level {
                return false;
            }
        }

        if let Some(ref query) = self.query {
            if !query.is_match(&entry.message) && !query.is_match(&entry.timestamp) {
                return false;
            }
        }

        true
    }

    /// Does the active query match `text`? False when no query is set.
    pub(crate) fn query_matches(&self, text: &str) -> bool {
        self.query.as_ref().is_some_and(|q| q.is_match(text))
    }
}

/// Case-insensitive literal matcher over the user's query string.
#[derive(Debug, Clone)]
struct QueryMatcher {
    matcher: RegexMatcher,
}

impl QueryMatcher {
    fn new(query: &str) -> Result<Self, FilterError> {
        let matcher = RegexMatcherBuilder::new()
            .case_insensitive(true)
            .fixed_strings(true)
            .multi_line(false)
            .build(query)
            .map_err(|e| FilterError::InvalidQuery(e.to_string()))?;

        Ok(Self { matcher })
    }

    #[inline]
    fn is_match(&self, text: &str) -> bool {
        self.matcher.is_match(text.as_bytes()).unwrap_or(false)
    }
}
