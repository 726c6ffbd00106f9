//! Context snippets around matches
use std::cmp::{max, min};

/// Words around `[first, last]`, padded by `padding` words on each side and clipped to the text
///
/// The right edge is exclusive, as in a slice: `last + padding` itself is not included. At least
/// `last` is always included, even with no padding.
pub fn context(words: &[String], first: usize, last: usize, padding: usize) -> &[String] {
    let (first, last) = (min(first, last), max(first, last));
    let end = min(last.saturating_add(max(padding, 1)), words.len());
    let start = min(first.saturating_sub(padding), end);
    &words[start..end]
}

/// The context joined with single spaces
pub fn extract(words: &[String], first: usize, last: usize, padding: usize) -> String {
    context(words, first, last, padding).join(" ")
}
