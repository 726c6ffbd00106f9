//
// Errors
//
use std::io;
use std::result;
use std::error;
use std::fmt;
use std::path::PathBuf;

/// Type alias for nearword errors
pub type Result<X> = result::Result<X, Error>;

/// Wrapper for many kinds of errors occuring while loading vocabularies, reading transcripts and
/// writing extracts
#[derive(Debug)]
pub enum Error {
    IOError(io::Error),
    CsvError(csv::Error),
    WalkError(walkdir::Error),
    RegexError(regex::Error),
    /// A vocabulary or normalization row with the wrong number of columns
    MalformedRow {
        file: String,
        line: u64,
        expected: usize,
        found: usize,
    },
    /// A matched term that the vocabulary has no metadata for
    UnknownTerm {
        kind: &'static str,
        term: String,
    },
    InvalidConfig(String),
    BadTranscript {
        path: PathBuf,
        reason: String,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::IOError(ref err) => write!(f, "IO error: {}", err),
            Error::CsvError(ref err) => write!(f, "CSV error: {}", err),
            Error::WalkError(ref err) => write!(f, "Error walking transcript directory: {}", err),
            Error::RegexError(ref err) => write!(f, "Regex error: {}", err),
            Error::MalformedRow { ref file, line, expected, found } => write!(f,
                "Malformed row in {} at line {}: expected {} columns but found {}",
                file, line, expected, found),
            Error::UnknownTerm { kind, ref term } => write!(f,
                "The {} {:?} was matched but is missing from the loaded vocabulary. \
                This is a bug: the scanner should only match loaded terms.",
                kind, term),
            Error::InvalidConfig(ref info) => write!(f, "Invalid configuration: {}", info),
            Error::BadTranscript { ref path, ref reason } => write!(f,
                "Could not read transcript {}: {}", path.display(), reason),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match *self {
            Error::IOError(ref err) => Some(err),
            Error::CsvError(ref err) => Some(err),
            Error::WalkError(ref err) => Some(err),
            Error::RegexError(ref err) => Some(err),
            Error::MalformedRow { .. } => None,
            Error::UnknownTerm { .. } => None,
            Error::InvalidConfig(_) => None,
            Error::BadTranscript { .. } => None,
        }
    }
}
//
// Convert everything else into Error
//
impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::IOError(err)
    }
}
impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Error::CsvError(err)
    }
}
impl From<walkdir::Error> for Error {
    fn from(err: walkdir::Error) -> Self {
        Error::WalkError(err)
    }
}
impl From<regex::Error> for Error {
    fn from(err: regex::Error) -> Self {
        Error::RegexError(err)
    }
}

//
// Convert Error into a general io Error
//
impl From<Error> for io::Error {
    fn from(err: Error) -> Self {
        match err {
            Error::IOError(inner) => inner,
            other => io::Error::new(io::ErrorKind::Other, other),
        }
    }
}
