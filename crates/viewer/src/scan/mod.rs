//! Streaming extraction for large files.
//!
//! - `reader.rs`: line-at-a-time entry assembly over any `BufRead`
//! - `page.rs`: the seek/collect paginator built on the reader
//!
//! Memory stays bounded by one in-progress entry plus the output page,
//! which is what makes arbitrarily large files servable.

pub mod page;
pub mod reader;

pub use page::{scan_page, Page, PAGE_SIZE};
pub use reader::EntryReader;
