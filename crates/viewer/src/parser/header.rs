//! Entry header recognition.
//!
//! A header line starts a new log entry and has the exact shape
//! `[YYYY-MM-DD HH:MM:SS] channel.LEVEL:` at column 0. Anything else is a
//! continuation of the previous entry's message — log frameworks emit stack
//! traces and dumps as literal newlines with no header, so the next header
//! (or end of stream) is the only reliable entry boundary.

/// Captured pieces of a matched header line. Borrows from the input line.
#[derive(Debug, PartialEq, Eq)]
pub struct EntryHeader<'a> {
    /// `YYYY-MM-DD HH:MM:SS`, digits checked by shape only.
    pub timestamp: &'a str,
    /// Environment/channel token before the level (e.g. "production").
    pub channel: &'a str,
    /// Level token as written in the file; not yet lower-cased.
    pub level: &'a str,
    /// Byte offset of the first character after the matching colon.
    pub message_start: usize,
}

/// Timestamp shape between the brackets: `d` marks a required digit.
const TIMESTAMP_SHAPE: &[u8] = b"dddd-dd-dd dd:dd:dd";

/// Match a header at the start of `line`.
///
/// Channel and level are one-or-more word characters (ASCII letters,
/// digits, underscore). Any word token is accepted as a level; the
/// recognized-severity table is a UI concern, not a parsing restriction.
pub fn match_header(line: &str) -> Option<EntryHeader<'_>> {
    let bytes = line.as_bytes();

    // "[" + 19-char timestamp + "] " + shortest "c.l:" tail
    if bytes.len() < 26 || bytes[0] != b'[' {
        return None;
    }

    for (i, &shape) in TIMESTAMP_SHAPE.iter().enumerate() {
        let b = bytes[1 + i];
        let ok = match shape {
            b'd' => b.is_ascii_digit(),
            literal => b == literal,
        };
        if !ok {
            return None;
        }
    }

    if bytes[20] != b']' || bytes[21] != b' ' {
        return None;
    }

    let channel_start = 22;
    let mut pos = channel_start;
    while pos < bytes.len() && is_word_byte(bytes[pos]) {
        pos += 1;
    }
    if pos == channel_start || pos >= bytes.len() || bytes[pos] != b'.' {
        return None;
    }
    let channel_end = pos;

    let level_start = pos + 1;
    pos = level_start;
    while pos < bytes.len() && is_word_byte(bytes[pos]) {
        pos += 1;
    }
    if pos == level_start || pos >= bytes.len() || bytes[pos] != b':' {
        return None;
    }

    // All checked bytes are ASCII, so these slices sit on char boundaries.
    Some(EntryHeader {
        timestamp: &line[1..20],
        channel: &line[channel_start..channel_end],
        level: &line[level_start..pos],
        message_start: pos + 1,
    })
}

fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}
