//! Per-document driver: tokenize, scan, emit and append, one document at a time
use crate::errors::*;
use crate::extracts::RecordSink;
use crate::record::{RecordEmitter, ScanOptions};
use crate::scan::scan;
use crate::tokenize::Tokenizer;
use crate::transcript::Document;
use crate::vocab::{NormalizationRules, Vocabulary};

/// Counts for one document, or summed over a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    pub documents: usize,
    pub tokens: usize,
    pub matches: usize,
    pub written: usize,
    pub suppressed: usize,
}

impl Stats {
    fn add(&mut self, other: &Stats) {
        self.documents += other.documents;
        self.tokens += other.tokens;
        self.matches += other.matches;
        self.written += other.written;
        self.suppressed += other.suppressed;
    }
}

/// Holds the immutable configuration for a run
pub struct Extractor<'a> {
    vocab: &'a Vocabulary,
    options: &'a ScanOptions,
    tokenizer: Tokenizer<'a>,
}

impl<'a> Extractor<'a> {
    pub fn new(vocab: &'a Vocabulary, rules: &'a NormalizationRules, options: &'a ScanOptions)
        -> Result<Self> {
        options.validate()?;
        Ok(Extractor {
            vocab: vocab,
            options: options,
            tokenizer: Tokenizer::new(rules)?,
        })
    }

    /// Scan one document to completion, writing every surviving record in scan order
    pub fn process_document<S: RecordSink>(&self, doc: &Document, sink: &mut S) -> Result<Stats> {
        let emitter = RecordEmitter::new(self.vocab, self.options);
        let words = self.tokenizer.tokenize(&doc.text);
        let mut stats = Stats { documents: 1, tokens: words.len(), ..Default::default() };
        for found in scan(&words, self.vocab, self.options.window_size) {
            stats.matches += 1;
            match emitter.emit(&doc.metadata, &words, &found)? {
                Some(record) => {
                    sink.append(&record)?;
                    stats.written += 1;
                }
                None => stats.suppressed += 1,
            }
        }
        debug!("{}: {} tokens, {} matches, {} rows written, {} suppressed",
            doc.metadata.file_path.display(), stats.tokens, stats.matches, stats.written,
            stats.suppressed);
        Ok(stats)
    }

    /// Process documents in order, stopping at the first failure
    pub fn run<I, S>(&self, docs: I, sink: &mut S) -> Result<Stats>
        where I: IntoIterator<Item=Result<Document>>, S: RecordSink {
        let mut total = Stats::default();
        for doc in docs {
            let doc = doc?;
            info!("Processing {}", doc.metadata.file_path.display());
            total.add(&self.process_document(&doc, sink)?);
        }
        Ok(total)
    }
}
