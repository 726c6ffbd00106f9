//! Transcript normalization and word segmentation
//!
//! Text is lower cased, abbreviation periods are split from the following letter, the literal
//! normalization rules are applied in order, and then the text is cut into words on unicode word
//! boundaries. Whitespace is dropped and punctuation becomes separate tokens.
use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;
use crate::errors::*;
use crate::vocab::NormalizationRules;

/// Contractions split off the end of a word, as treebank tokenizers do
const CLITICS: &[&str] = &[
    "n't", "'s", "'re", "'ve", "'ll", "'d", "'m",
    "n’t", "’s", "’re", "’ve", "’ll", "’d", "’m",
];

/// Turns raw transcript text into a word sequence
pub struct Tokenizer<'r> {
    rules: &'r NormalizationRules,
    sentence_period: Regex,
}

impl<'r> Tokenizer<'r> {
    pub fn new(rules: &'r NormalizationRules) -> Result<Self> {
        Ok(Tokenizer {
            rules: rules,
            // "u.s.policy" would otherwise be one word
            sentence_period: Regex::new(r"([a-z])\.([a-z])")?,
        })
    }

    /// Everything short of splitting: lower case, period fixup, then literal rules
    pub fn normalize(&self, text: &str) -> String {
        let spaced = self.split_periods(text.to_lowercase());
        self.rules.apply(&spaced)
    }

    /// Space after every period between two letters
    ///
    /// Matches can't overlap, so "u.s.policy" needs a second pass for the "s.p".
    fn split_periods(&self, mut text: String) -> String {
        while self.sentence_period.is_match(&text) {
            text = self.sentence_period.replace_all(&text, "${1}. ${2}").into_owned();
        }
        text
    }

    /// The word sequence for one document
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        split_words(&self.normalize(text))
    }
}

/// Split already normalized text into word and punctuation tokens
pub fn split_words(text: &str) -> Vec<String> {
    let mut words = vec![];
    for segment in text.split_word_bounds() {
        if segment.chars().all(char::is_whitespace) {
            continue;
        }
        if segment.chars().any(char::is_alphanumeric) {
            split_clitic(segment, &mut words);
        } else {
            words.push(segment.to_string());
        }
    }
    words
}

fn split_clitic(word: &str, words: &mut Vec<String>) {
    for clitic in CLITICS {
        if word.len() > clitic.len() && word.ends_with(clitic) {
            let stem = &word[..word.len() - clitic.len()];
            words.push(stem.to_string());
            words.push(clitic.to_string());
            return;
        }
    }
    words.push(word.to_string());
}
