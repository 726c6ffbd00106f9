//! Windowed co-occurrence detection
//!
//! The scan sweeps forward windows over a document's words and looks at the edges of each
//! window:
//!
//! 1. If the first word is a subject, the whole window is searched for a keyword. A hit is a
//!    pair (subject left of keyword); a miss is a lone subject.
//! 2. Otherwise, if the first word is a keyword and the window holds no subject at all, it is a
//!    lone keyword. When a subject is present, some other window reports it.
//! 3. Independently, if the last word is a subject and the window holds a keyword, that is a
//!    pair with the subject right of the keyword.
//!
//! Overlapping windows report the same occurrence more than once. Nothing is deduplicated.
use std::cmp::{max, min};
use crate::matcher::first_match;
use crate::vocab::Vocabulary;
use crate::window::{ForwardWindows, Window};

/// One detection; positions are absolute indices into the word sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchTuple<'w> {
    Subject {
        subject: &'w str,
        position: usize,
    },
    Keyword {
        keyword: &'w str,
        position: usize,
    },
    Pair {
        subject: &'w str,
        subject_position: usize,
        keyword: &'w str,
        keyword_position: usize,
    },
}

impl<'w> MatchTuple<'w> {
    pub fn subject(&self) -> Option<(&'w str, usize)> {
        match *self {
            MatchTuple::Subject { subject, position } => Some((subject, position)),
            MatchTuple::Pair { subject, subject_position, .. } => Some((subject, subject_position)),
            MatchTuple::Keyword { .. } => None,
        }
    }

    pub fn keyword(&self) -> Option<(&'w str, usize)> {
        match *self {
            MatchTuple::Keyword { keyword, position } => Some((keyword, position)),
            MatchTuple::Pair { keyword, keyword_position, .. } => Some((keyword, keyword_position)),
            MatchTuple::Subject { .. } => None,
        }
    }

    /// Leftmost and rightmost matched positions (equal for lone matches)
    pub fn span(&self) -> (usize, usize) {
        match *self {
            MatchTuple::Subject { position, .. } |
            MatchTuple::Keyword { position, .. } => (position, position),
            MatchTuple::Pair { subject_position, keyword_position, .. } => (
                min(subject_position, keyword_position),
                max(subject_position, keyword_position)),
        }
    }
}

/// Lazy stream of match tuples for one document, in window order
///
/// Clone it (or call `scan` again) to restart from the beginning.
#[derive(Clone)]
pub struct CooccurrenceScan<'w, 'v> {
    windows: ForwardWindows<'w>,
    vocab: &'v Vocabulary,
    // step 3 of a window that also matched on its first word
    pending: Option<MatchTuple<'w>>,
}

/// Scan `words` for subjects and keywords within `window_size` words of each other
pub fn scan<'w, 'v>(words: &'w [String], vocab: &'v Vocabulary, window_size: usize)
    -> CooccurrenceScan<'w, 'v> {
    CooccurrenceScan {
        windows: ForwardWindows::new(words, window_size),
        vocab: vocab,
        pending: None,
    }
}

impl<'w, 'v> CooccurrenceScan<'w, 'v> {
    /// Detection on the first word of the window
    fn leading(&self, window: &Window<'w>) -> Option<MatchTuple<'w>> {
        let head = &window.words[..min(1, window.words.len())];
        let offset = window.offset();
        if let Some((_, subject)) = first_match(head, self.vocab.subjects()) {
            Some(match first_match(window.words, self.vocab.keywords()) {
                Some((keyword_pos, keyword)) => MatchTuple::Pair {
                    subject: subject,
                    subject_position: offset,
                    keyword: keyword,
                    keyword_position: offset + keyword_pos,
                },
                None => MatchTuple::Subject { subject: subject, position: offset },
            })
        } else if let Some((_, keyword)) = first_match(head, self.vocab.keywords()) {
            match first_match(window.words, self.vocab.subjects()) {
                Some(_) => None,
                None => Some(MatchTuple::Keyword { keyword: keyword, position: offset }),
            }
        } else {
            None
        }
    }

    /// Detection on the last word of the window, pairs only
    fn trailing(&self, window: &Window<'w>) -> Option<MatchTuple<'w>> {
        let tail = window.words.len().saturating_sub(1);
        let (_, subject) = first_match(&window.words[tail..], self.vocab.subjects())?;
        let offset = window.offset();
        first_match(window.words, self.vocab.keywords())
            .map(|(keyword_pos, keyword)| MatchTuple::Pair {
                subject: subject,
                subject_position: offset + tail,
                keyword: keyword,
                keyword_position: offset + keyword_pos,
            })
    }
}

impl<'w, 'v> Iterator for CooccurrenceScan<'w, 'v> {
    type Item = MatchTuple<'w>;

    fn next(&mut self) -> Option<MatchTuple<'w>> {
        loop {
            if let Some(found) = self.pending.take() {
                return Some(found);
            }
            let window = self.windows.next()?;
            trace!("Window {}..{}: {:?}", window.start, window.end, window.words);
            match (self.leading(&window), self.trailing(&window)) {
                (Some(lead), trail) => {
                    self.pending = trail;
                    return Some(lead);
                }
                (None, Some(trail)) => return Some(trail),
                (None, None) => continue,
            }
        }
    }
}
