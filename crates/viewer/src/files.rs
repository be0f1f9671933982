//! Log file enumeration.
//!
//! Lists the configured directory, keeps regular files whose names match
//! the configured pattern, and returns bare filenames newest first —
//! reverse lexical order, which is chronological for the date-stamped
//! names log writers produce (`laravel-2023-01-15.log`, ...).

use std::path::Path;

/// List matching log files in `dir`, newest first, filenames only.
///
/// A missing or unreadable directory yields an empty list.
pub fn list_log_files(dir: &Path, pattern: &str) -> Vec<String> {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            tracing::warn!(
                dir = %dir.display(),
                error = %err,
                "log directory unreadable, no files listed"
            );
            return Vec::new();
        }
    };

    let mut files: Vec<String> = entries
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().map(|t| t.is_file()).unwrap_or(false))
        .filter_map(|entry| entry.file_name().into_string().ok())
        .filter(|name| glob_match(pattern, name))
        .collect();

    files.sort_unstable();
    files.reverse();
    files
}

/// Match `name` against a filename glob: `*` matches any run of bytes
/// (including none), `?` matches a single byte, everything else is
/// literal. No directory separators or character classes.
pub fn glob_match(pattern: &str, name: &str) -> bool {
    let p = pattern.as_bytes();
    let n = name.as_bytes();

    let mut pi = 0;
    let mut ni = 0;
    // Last `*` seen: (pattern index after it, name index it is matching from)
    let mut star: Option<(usize, usize)> = None;

    while ni < n.len() {
        if pi < p.len() && (p[pi] == b'?' || p[pi] == n[ni]) {
            pi += 1;
            ni += 1;
        } else if pi < p.len() && p[pi] == b'*' {
            star = Some((pi + 1, ni));
            pi += 1;
        } else if let Some((star_pi, star_ni)) = star {
            // Backtrack: let the last `*` swallow one more byte.
            pi = star_pi;
            ni = star_ni + 1;
            star = Some((star_pi, star_ni + 1));
        } else {
            return false;
        }
    }

    while pi < p.len() && p[pi] == b'*' {
        pi += 1;
    }
    pi == p.len()
}
