//! Raw input normalization.

use super::{Location, DEFAULT_SCHEME};

const SCHEMES: [&str; 2] = ["http://", "https://"];

/// Strips leading and trailing `/` (and surrounding whitespace).
pub fn trim_separators(raw: &str) -> &str {
    raw.trim_matches(|c: char| c == '/' || c.is_whitespace())
}

/// True if `s` starts with a recognized network scheme.
pub fn has_scheme(s: &str) -> bool {
    SCHEMES.iter().any(|scheme| s.starts_with(scheme))
}

/// Normalizes raw input into a [`Location`].
///
/// Returns `None` when nothing is left after trimming. Inputs without a
/// scheme get [`DEFAULT_SCHEME`]. Normalizing an already-normalized folder
/// prefix yields the same prefix.
pub fn normalize(raw: &str) -> Option<Location> {
    let trimmed = trim_separators(raw);
    if trimmed.is_empty() {
        return None;
    }
    let target = if has_scheme(trimmed) {
        trimmed.to_string()
    } else {
        tracing::debug!(input = trimmed, "no scheme, defaulting to {}", DEFAULT_SCHEME);
        format!("{DEFAULT_SCHEME}{trimmed}")
    };
    Some(Location::for_target(target))
}

/// Drops the last `/`-separated segment of `target` and returns the rest with
/// one trailing `/`, or an empty string if `target` has no separator.
pub fn parent_folder(target: &str) -> String {
    match target.rsplit_once('/') {
        Some((head, _)) => format!("{head}/"),
        None => String::new(),
    }
}
