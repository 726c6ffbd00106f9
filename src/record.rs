//! Extract records: one output row per reported match
use chrono::Local;
use crate::context::extract;
use crate::errors::*;
use crate::scan::MatchTuple;
use crate::transcript::ShowInfo;
use crate::vocab::Vocabulary;

/// Column names of the extract log, in order
pub const HEADERS: [&str; 12] = [
    "extract_date", "file", "show_date", "show_id", "show_name",
    "subject", "subject_code", "keyword", "keyword_code", "keyword_id",
    "relevant?", "extract",
];

/// How `extract_date` is written
pub const TIMESTAMP_FORMAT: &str = "%m/%d/%y %H:%M:%S";

/// Tunables for scanning and emitting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOptions {
    /// Subjects and keywords must fall inside a window of this many words
    pub window_size: usize,
    /// Words of context on either side of a match
    pub context_size: usize,
    pub suppress_lone_subjects: bool,
    pub suppress_lone_keywords: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        ScanOptions {
            window_size: 10,
            context_size: 20,
            suppress_lone_subjects: false,
            suppress_lone_keywords: false,
        }
    }
}

impl ScanOptions {
    pub fn validate(&self) -> Result<()> {
        if self.window_size == 0 {
            return Err(Error::InvalidConfig("the window size must be at least 1".to_string()));
        }
        Ok(())
    }
}

/// One row of the extract log
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExtractRecord {
    pub extract_date: String,
    pub file: String,
    pub show_date: String,
    pub show_id: String,
    pub show_name: String,
    pub subject: String,
    pub subject_code: String,
    pub keyword: String,
    pub keyword_code: String,
    pub keyword_id: String,
    /// Filled in by a reviewer later; always blank here
    pub relevant: String,
    pub extract: String,
}

impl ExtractRecord {
    /// Fields in `HEADERS` order
    pub fn fields(&self) -> [&str; 12] {
        [
            &self.extract_date, &self.file, &self.show_date, &self.show_id, &self.show_name,
            &self.subject, &self.subject_code, &self.keyword, &self.keyword_code, &self.keyword_id,
            &self.relevant, &self.extract,
        ]
    }
}

/// Turns match tuples into records, applying the suppression flags
pub struct RecordEmitter<'a> {
    vocab: &'a Vocabulary,
    options: &'a ScanOptions,
}

impl<'a> RecordEmitter<'a> {
    pub fn new(vocab: &'a Vocabulary, options: &'a ScanOptions) -> Self {
        RecordEmitter { vocab: vocab, options: options }
    }

    /// Whether this tuple's record would be dropped by a suppression flag
    pub fn suppressed(&self, found: &MatchTuple) -> bool {
        match *found {
            MatchTuple::Subject { .. } => self.options.suppress_lone_subjects,
            MatchTuple::Keyword { .. } => self.options.suppress_lone_keywords,
            MatchTuple::Pair { .. } => false,
        }
    }

    /// Record for a tuple stamped with the current local time, or None if suppressed
    pub fn emit(&self, show: &ShowInfo, words: &[String], found: &MatchTuple)
        -> Result<Option<ExtractRecord>> {
        if self.suppressed(found) {
            return Ok(None);
        }
        let now = Local::now().format(TIMESTAMP_FORMAT).to_string();
        self.record(&now, show, words, found).map(Some)
    }

    /// Record for a tuple with an explicit timestamp, ignoring suppression
    ///
    /// Fails if a matched term has no vocabulary metadata.
    pub fn record(&self, extract_date: &str, show: &ShowInfo, words: &[String], found: &MatchTuple)
        -> Result<ExtractRecord> {
        let mut record = ExtractRecord {
            extract_date: extract_date.to_string(),
            file: show.file_path.display().to_string(),
            show_date: show.show_date.clone(),
            show_id: show.show_id.clone(),
            show_name: show.show_name.clone(),
            ..Default::default()
        };
        if let Some((subject, _)) = found.subject() {
            record.subject_code = self.vocab.subject_code(subject)?.to_string();
            record.subject = subject.to_string();
        }
        if let Some((keyword, _)) = found.keyword() {
            let info = self.vocab.keyword_info(keyword)?;
            record.keyword = keyword.to_string();
            record.keyword_code = info.code.clone();
            record.keyword_id = info.id.clone();
        }
        let (first, last) = found.span();
        record.extract = extract(words, first, last, self.options.context_size);
        Ok(record)
    }
}
