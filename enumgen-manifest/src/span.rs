//! Locate names and keys in definition source for diagnostic labels.

use miette::SourceSpan;

/// Find the first place `name` appears as a quoted string value.
///
/// Falls back to a bare search, which is less precise.
pub(crate) fn find_name_span(src: &str, name: &str) -> Option<SourceSpan> {
    let quoted = format!("\"{}\"", name);
    if let Some(pos) = src.find(&quoted) {
        // +1 to skip the opening quote
        return Some(SourceSpan::from((pos + 1, name.len())));
    }

    if name.is_empty() {
        return None;
    }

    src.find(name).map(|pos| SourceSpan::from((pos, name.len())))
}

/// Like [`find_name_span`], but picks the last quoted occurrence.
pub(crate) fn find_last_name_span(src: &str, name: &str) -> Option<SourceSpan> {
    let quoted = format!("\"{}\"", name);
    match src.rfind(&quoted) {
        Some(pos) => Some(SourceSpan::from((pos + 1, name.len()))),
        None => find_name_span(src, name),
    }
}

/// Find `key` at the start of a line, as in `key = value` or `"key": value`.
pub(crate) fn find_key_span(src: &str, key: &str) -> Option<SourceSpan> {
    let mut offset = 0;
    for line in src.split_inclusive('\n') {
        let trimmed = line.trim_start();
        let lead = line.len() - trimmed.len();

        let bare = trimmed
            .strip_prefix(key)
            .is_some_and(|rest| rest.trim_start().starts_with('='));
        if bare {
            return Some(SourceSpan::from((offset + lead, key.len())));
        }

        let quoted = trimmed
            .strip_prefix(&format!("\"{}\"", key))
            .is_some_and(|rest| rest.trim_start().starts_with(':'));
        if quoted {
            return Some(SourceSpan::from((offset + lead + 1, key.len())));
        }

        offset += line.len();
    }
    None
}

/// Convert a 1-based line and column into a byte offset.
///
/// A column of 0 points at the start of the line.
pub(crate) fn offset_of(src: &str, line: usize, column: usize) -> Option<usize> {
    if line == 0 {
        return None;
    }

    let mut offset = 0;
    for (index, text) in src.split_inclusive('\n').enumerate() {
        if index + 1 == line {
            return Some(offset + column.saturating_sub(1).min(text.len()));
        }
        offset += text.len();
    }

    // Errors at end of input report the line after the last newline
    (line == src.split_inclusive('\n').count() + 1).then_some(src.len())
}
