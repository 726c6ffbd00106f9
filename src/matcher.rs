//! Find vocabulary terms in a run of words
use std::collections::HashSet;
use std::hash::BuildHasher;

/// First word (in order) that is in `terms`, with its position relative to `words`
///
/// Matching is exact equality against normalized tokens, never substring containment.
pub fn first_match<'w, S: BuildHasher>(words: &'w [String], terms: &HashSet<String, S>)
    -> Option<(usize, &'w str)> {
    words.iter()
        .position(|word| terms.contains(word))
        .map(|pos| (pos, words[pos].as_str()))
}
