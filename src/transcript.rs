//! Transcript files and their show metadata
//!
//! A transcript is a UTF-8 text file. It may open with a block of `Key: value` header lines
//! ended by a blank line:
//!
//! ```text
//! Show-Name: Evening News
//! Show-Date: 2019-03-04
//! Show-Id: E42
//!
//! Good evening. The economy ...
//! ```
//!
//! Recognised keys are `Show-Name`, `Show-Date` and `Show-Id` (any case). Others are ignored. A
//! block without any recognised key is not a header and stays part of the text.
use std::fs;
use std::path::{Path, PathBuf};
use std::vec;
use nom::IResult;
use nom::bytes::complete::{take_till, take_while1};
use nom::character::complete::{char, line_ending, space0};
use nom::multi::many1;
use nom::sequence::{separated_pair, terminated, tuple};
use walkdir::WalkDir;
use crate::errors::*;

/// Metadata for the show a transcript belongs to
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ShowInfo {
    pub file_path: PathBuf,
    pub show_date: String,
    pub show_id: String,
    pub show_name: String,
}

/// A transcript's text and metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub text: String,
    pub metadata: ShowInfo,
}

fn header_name(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_ascii_alphanumeric() || c == '-' || c == '_')(input)
}

fn header_value(input: &str) -> IResult<&str, &str> {
    take_till(|c: char| c == '\r' || c == '\n')(input)
}

fn header_line(input: &str) -> IResult<&str, (&str, &str)> {
    terminated(
        separated_pair(header_name, tuple((space0, char(':'), space0)), header_value),
        line_ending)(input)
}

fn header_block(input: &str) -> IResult<&str, Vec<(&str, &str)>> {
    terminated(many1(header_line), line_ending)(input)
}

/// Split a transcript into metadata and text
pub fn parse_transcript(path: &Path, content: &str) -> Document {
    let mut metadata = ShowInfo { file_path: path.to_path_buf(), ..Default::default() };
    let mut text = content;
    if let Ok((rest, headers)) = header_block(content) {
        let mut recognised = false;
        for (name, value) in headers {
            let value = value.trim_end().to_string();
            match name.to_ascii_lowercase().as_str() {
                "show-name" => metadata.show_name = value,
                "show-date" => metadata.show_date = value,
                "show-id" => metadata.show_id = value,
                _ => {
                    debug!("Ignoring header {:?} in {}", name, path.display());
                    continue;
                }
            }
            recognised = true;
        }
        if recognised {
            text = rest;
        }
    }
    Document {
        text: text.to_string(),
        metadata: metadata,
    }
}

/// Read and parse one transcript file
pub fn read_transcript(path: &Path) -> Result<Document> {
    let bytes = fs::read(path)?;
    let content = String::from_utf8(bytes).map_err(|err| Error::BadTranscript {
        path: path.to_path_buf(),
        reason: format!("not valid UTF-8 ({})", err.utf8_error()),
    })?;
    Ok(parse_transcript(path, &content))
}

/// Transcripts from a single file or (recursively) from a directory of `.txt` files
///
/// Yields one result per file, in sorted path order. Read failures are yielded, not skipped.
pub struct TranscriptSource {
    paths: vec::IntoIter<PathBuf>,
}

impl TranscriptSource {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let mut paths = vec![];
        if fs::metadata(path)?.is_dir() {
            for entry in WalkDir::new(path).follow_links(true) {
                let entry = entry?;
                let is_txt = entry.path().extension()
                    .map_or(false, |ext| ext.to_string_lossy().eq_ignore_ascii_case("txt"));
                if entry.file_type().is_file() && is_txt {
                    paths.push(entry.into_path());
                }
            }
            paths.sort();
            info!("Found {} transcripts under {}", paths.len(), path.display());
        } else {
            paths.push(path.to_path_buf());
        }
        Ok(TranscriptSource { paths: paths.into_iter() })
    }

    /// Paths still to be read
    pub fn paths(&self) -> &[PathBuf] {
        self.paths.as_slice()
    }
}

impl Iterator for TranscriptSource {
    type Item = Result<Document>;

    fn next(&mut self) -> Option<Result<Document>> {
        self.paths.next().map(|path| read_transcript(&path))
    }
}
