//! Line-at-a-time entry assembly.
//!
//! `EntryReader` is the explicit form of the scan state: it owns the
//! reader, the accumulator for the entry currently being assembled, and a
//! reusable line buffer. Each `next_entry()` call pulls lines until an
//! entry completes (next header or end of stream), so callers can stop
//! early without touching the rest of the file.

use std::io::{self, BufRead};

use crate::parser::entry::{EntryBuilder, ParsedEntry};
use crate::parser::header::match_header;

pub struct EntryReader<R: BufRead> {
    reader: R,
    pending: Option<EntryBuilder>,
    line: String,
    done: bool,
}

impl<R: BufRead> EntryReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: None,
            line: String::new(),
            done: false,
        }
    }

    /// Pull the next completed entry, or `None` at end of stream.
    ///
    /// A header line finalizes the in-progress entry (if any) and starts
    /// the next accumulator; any other line is appended to the current
    /// message verbatim. End of stream finalizes whatever is in progress.
    /// Lines before the first header belong to no entry and are dropped.
    pub fn next_entry(&mut self) -> io::Result<Option<ParsedEntry>> {
        if self.done {
            return Ok(self.pending.take().map(EntryBuilder::finish));
        }

        loop {
            self.line.clear();
            if self.reader.read_line(&mut self.line)? == 0 {
                self.done = true;
                return Ok(self.pending.take().map(EntryBuilder::finish));
            }

            let line = self
                .line
                .trim_end_matches('\n')
                .trim_end_matches('\r');

            if let Some(header) = match_header(line) {
                let completed = self.pending.take().map(EntryBuilder::finish);
                self.pending = Some(EntryBuilder::start(&header, line));
                if completed.is_some() {
                    return Ok(completed);
                }
            } else if let Some(ref mut builder) = self.pending {
                builder.push_line(line);
            }
        }
    }
}
