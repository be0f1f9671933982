//! Message display normalization.
//!
//! Structured dumps (`array (...)`, object dumps, inline JSON) keep their
//! line structure verbatim so indentation-sensitive content stays readable;
//! ordinary prose gets its intra-line whitespace runs collapsed. Line breaks
//! are preserved in both cases.

/// Normalize a raw entry message for display.
pub fn format_message(message: &str) -> String {
    let message = message.trim();

    if looks_like_dump(message) {
        // Keep the structure; only strip per-line outer whitespace.
        message
            .lines()
            .map(str::trim)
            .collect::<Vec<_>>()
            .join("\n")
    } else {
        // Collapse whitespace runs to single spaces, line by line.
        message
            .lines()
            .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Heuristic: does the message contain a structured dump?
///
/// Matches `array (`-style tokens (any whitespace before the paren), a
/// brace-delimited block on a single line, or a `stdClass Object` marker,
/// all case-insensitive — the shapes PHP-style loggers emit for arrays and
/// objects.
fn looks_like_dump(message: &str) -> bool {
    let lower = message.to_lowercase();

    if lower.contains("stdclass object") {
        return true;
    }

    for (idx, _) in lower.match_indices("array") {
        if lower[idx + 5..].trim_start().starts_with('(') {
            return true;
        }
    }

    lower.lines().any(|line| match (line.find('{'), line.rfind('}')) {
        (Some(open), Some(close)) => close > open,
        _ => false,
    })
}
