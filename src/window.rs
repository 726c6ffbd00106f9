//! Sliding windows over a word sequence
//!
//! Window bounds are logical: a forward window near the start of the text may begin before word
//! 0, in which case its slice is clipped to the words that exist.
use std::cmp::{max, min};

/// One window: logical `[start, end)` bounds plus the words actually covered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Window<'w> {
    pub start: isize,
    pub end: isize,
    pub words: &'w [String],
}

impl<'w> Window<'w> {
    /// Absolute position of `words[0]`
    pub fn offset(&self) -> usize {
        max(self.start, 0) as usize
    }

    /// Absolute position of the last word in the slice, if any
    pub fn last_position(&self) -> Option<usize> {
        if self.words.is_empty() { None } else { Some(self.offset() + self.words.len() - 1) }
    }
}

fn clip(pos: isize, len: usize) -> usize {
    min(max(pos, 0) as usize, len)
}

/// Windows sweeping left to right, including short windows at both ends of the text
///
/// The first window ends just past word 1, so the opening words are seen both as the first and as
/// the last word of some window. Sweeping stops once the window starts at the final word.
#[derive(Debug, Clone)]
pub struct ForwardWindows<'w> {
    words: &'w [String],
    size: isize,
    pos: isize,
}

impl<'w> ForwardWindows<'w> {
    pub fn new(words: &'w [String], window_size: usize) -> Self {
        assert!(window_size > 0, "window size must be at least 1");
        let size = window_size as isize;
        ForwardWindows {
            words: words,
            size: size,
            // for a size of 1 this still begins at word 0
            pos: min(2 - size, 0),
        }
    }
}

impl<'w> Iterator for ForwardWindows<'w> {
    type Item = Window<'w>;

    fn next(&mut self) -> Option<Window<'w>> {
        let len = self.words.len();
        // an empty text has nothing to cover, not even partial windows
        if len == 0 || self.pos >= len as isize {
            return None;
        }
        let (start, end) = (self.pos, self.pos + self.size);
        self.pos += 1;
        Some(Window {
            start: start,
            end: end,
            words: &self.words[clip(start, len)..clip(end, len)],
        })
    }
}

/// Full size windows sweeping right to left, starting flush with the end of the text
///
/// No partial windows are produced, so a text shorter than the window yields nothing.
/// The co-occurrence scan does not use this direction; see `scan`.
#[derive(Debug, Clone)]
pub struct BackwardWindows<'w> {
    words: &'w [String],
    size: usize,
    end: usize,
}

impl<'w> BackwardWindows<'w> {
    pub fn new(words: &'w [String], window_size: usize) -> Self {
        assert!(window_size > 0, "window size must be at least 1");
        BackwardWindows {
            words: words,
            size: window_size,
            end: words.len(),
        }
    }
}

impl<'w> Iterator for BackwardWindows<'w> {
    type Item = Window<'w>;

    fn next(&mut self) -> Option<Window<'w>> {
        if self.end < self.size {
            return None;
        }
        let (start, end) = (self.end - self.size, self.end);
        self.end -= 1;
        Some(Window {
            start: start as isize,
            end: end as isize,
            words: &self.words[start..end],
        })
    }
}
