//! Log entry extraction for bracketed-timestamp application logs.
//!
//! The wire format is one header line per entry:
//!
//! ```text
//! [2023-01-01 12:00:00] production.ERROR: something went wrong
//! ```
//!
//! followed by any number of continuation lines (stack traces, dumps)
//! until the next header or end of file.
//!
//! - `header.rs`: header-line recognition
//! - `entry.rs`: the structured entry model
//! - `format.rs`: message display normalization
//! - `whole.rs`: one-pass extraction from a complete buffer

pub mod entry;
pub mod format;
pub mod header;
pub mod whole;

// Re-export commonly used types
pub use entry::{LogEntry, ParsedEntry, LEVELS};
pub use header::match_header;
