//! Depth-tracked brace scan.

/// Scans from `start` (just inside an already-open `{`) to the brace that
/// closes it and returns `text[start..=close]`.
///
/// Braces inside string literals are counted like any other; returns `None`
/// if the text ends before depth returns to zero.
pub(crate) fn close_object(text: &str, start: usize) -> Option<&str> {
    let mut depth: usize = 1;
    for (offset, byte) in text.as_bytes().get(start..)?.iter().enumerate() {
        match byte {
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return text.get(start..=start + offset);
                }
            }
            _ => {}
        }
    }
    None
}
