//! Find subjects and keywords mentioned near each other in transcripts
//!
//! Transcripts are normalized into word sequences, swept with fixed size windows, and every
//! subject/keyword pair (or lone subject or keyword) found is written with its surrounding words
//! to a cumulative CSV log for human review. The binaries are thin wrappers around `pipeline`.


#[macro_use] extern crate log;
pub mod errors;
pub mod farm;
pub mod vocab;
pub mod tokenize;
pub mod window;
pub mod matcher;
pub mod scan;
pub mod context;
pub mod record;
pub mod extracts;
pub mod transcript;
pub mod pipeline;
