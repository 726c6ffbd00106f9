//! Controlled vocabularies: subjects, keywords and normalization rules
//!
//! All three are read from header-less CSV files once at startup and are immutable afterwards.
//! Subjects have a code, keywords have a code and an id, and normalization rules are literal
//! `source,replacement` pairs applied in file order.
use std::fs::File;
use std::io;
use std::path::Path;
use crate::errors::*;
use crate::farm::{FarmMap, FarmSet, new_farm, new_farm_set};

/// Metadata attached to a keyword
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordInfo {
    pub code: String,
    pub id: String,
}

/// Subject and keyword terms, with their codes
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    subjects: FarmSet<String>,
    keywords: FarmSet<String>,
    subject_codes: FarmMap<String, String>,
    keyword_info: FarmMap<String, KeywordInfo>,
}

impl Vocabulary {
    pub fn new() -> Self {
        Vocabulary {
            subjects: new_farm_set(),
            keywords: new_farm_set(),
            subject_codes: new_farm(),
            keyword_info: new_farm(),
        }
    }

    /// Read the subject (term, code) and keyword (term, code, id) files
    pub fn from_files<P: AsRef<Path>, Q: AsRef<Path>>(subject_path: P, keyword_path: Q) -> Result<Self> {
        let mut vocab = Vocabulary::new();
        vocab.read_subjects(File::open(subject_path.as_ref())?,
            &subject_path.as_ref().display().to_string())?;
        vocab.read_keywords(File::open(keyword_path.as_ref())?,
            &keyword_path.as_ref().display().to_string())?;
        info!("Loaded {} subjects and {} keywords", vocab.subjects.len(), vocab.keywords.len());
        Ok(vocab)
    }

    /// Add subjects from CSV rows of exactly (term, code)
    pub fn read_subjects<R: io::Read>(&mut self, reader: R, source: &str) -> Result<()> {
        for row in read_rows(reader, source, 2)? {
            self.add_subject(&row[0], &row[1]);
        }
        Ok(())
    }

    /// Add keywords from CSV rows of exactly (term, code, id)
    pub fn read_keywords<R: io::Read>(&mut self, reader: R, source: &str) -> Result<()> {
        for row in read_rows(reader, source, 3)? {
            self.add_keyword(&row[0], &row[1], &row[2]);
        }
        Ok(())
    }

    /// Terms are lower cased, since they are matched against lower cased text.
    /// A repeated term keeps the latest code.
    pub fn add_subject(&mut self, term: &str, code: &str) {
        let term = normalize_term(term);
        self.subject_codes.insert(term.clone(), code.to_string());
        self.subjects.insert(term);
    }

    pub fn add_keyword(&mut self, term: &str, code: &str, id: &str) {
        let term = normalize_term(term);
        self.keyword_info.insert(term.clone(), KeywordInfo {
            code: code.to_string(),
            id: id.to_string(),
        });
        self.keywords.insert(term);
    }

    pub fn subjects(&self) -> &FarmSet<String> {
        &self.subjects
    }

    pub fn keywords(&self) -> &FarmSet<String> {
        &self.keywords
    }

    /// Code of a subject; a missing subject is a fatal inconsistency
    pub fn subject_code(&self, term: &str) -> Result<&str> {
        self.subject_codes.get(term)
            .map(|code| code.as_str())
            .ok_or_else(|| Error::UnknownTerm { kind: "subject", term: term.to_string() })
    }

    /// Code and id of a keyword; a missing keyword is a fatal inconsistency
    pub fn keyword_info(&self, term: &str) -> Result<&KeywordInfo> {
        self.keyword_info.get(term)
            .ok_or_else(|| Error::UnknownTerm { kind: "keyword", term: term.to_string() })
    }
}

fn normalize_term(term: &str) -> String {
    let lower = term.to_lowercase();
    if lower != term {
        debug!("Lower casing vocabulary term {:?}", term);
    }
    lower
}

/// Literal substring replacements, applied in order before tokenizing
///
/// Overlapping rules are order sensitive, so this is a list and never a hash map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizationRules {
    rules: Vec<(String, String)>,
}

impl NormalizationRules {
    pub fn new() -> Self {
        NormalizationRules { rules: vec![] }
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let rules = NormalizationRules::from_reader(File::open(path.as_ref())?,
            &path.as_ref().display().to_string())?;
        info!("Loaded {} normalization rules", rules.len());
        Ok(rules)
    }

    /// Read CSV rows of exactly (source, replacement)
    pub fn from_reader<R: io::Read>(reader: R, source: &str) -> Result<Self> {
        let mut rules = NormalizationRules::new();
        for row in read_rows(reader, source, 2)? {
            if row[0].is_empty() {
                return Err(Error::InvalidConfig(format!(
                    "empty normalization source in {} at line {}",
                    source, row.position().map(|p| p.line()).unwrap_or(0))));
            }
            rules.push(&row[0], &row[1]);
        }
        Ok(rules)
    }

    /// Append a rule. Repeating a source keeps its original place but takes the new replacement.
    pub fn push(&mut self, source: &str, replacement: &str) {
        match self.rules.iter_mut().find(|rule| rule.0 == source) {
            Some(rule) => rule.1 = replacement.to_string(),
            None => self.rules.push((source.to_string(), replacement.to_string())),
        }
    }

    /// Apply every rule to the whole text, in order
    pub fn apply(&self, text: &str) -> String {
        let mut text = text.to_string();
        for &(ref source, ref replacement) in &self.rules {
            if text.contains(source.as_str()) {
                text = text.replace(source.as_str(), replacement);
            }
        }
        text
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item=&(String, String)> {
        self.rules.iter()
    }
}

/// Read header-less CSV rows that must each have exactly `expected` columns
fn read_rows<R: io::Read>(reader: R, source: &str, expected: usize) -> Result<Vec<csv::StringRecord>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);
    let mut rows = vec![];
    for record in csv_reader.records() {
        let record = record?;
        if record.len() != expected {
            return Err(Error::MalformedRow {
                file: source.to_string(),
                line: record.position().map(|p| p.line()).unwrap_or(0),
                expected: expected,
                found: record.len(),
            });
        }
        rows.push(record);
    }
    Ok(rows)
}
