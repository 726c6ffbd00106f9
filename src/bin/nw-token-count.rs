//! Count the normalized tokens in each transcript
//!
//! Handy for checking what the extractor will actually see: the count uses the same lower
//! casing, period fixup and normalization rules. Transcripts are tokenized in parallel but
//! reported in path order, followed by the total.

// argument parsing
#[macro_use] extern crate clap;
extern crate env_logger;
extern crate rayon;
// lastly, this library
extern crate nearword;

use std::process;
use rayon::prelude::*;

use nearword::errors::*;
use nearword::tokenize::Tokenizer;
use nearword::transcript::{read_transcript, TranscriptSource};
use nearword::vocab::NormalizationRules;

pub fn main() {
    // Main can't return a Result, and the ? operator needs the enclosing function to return Result
    if let Err(err) = inner_main() {
        eprintln!("Could not recover: {}. Exiting.", err);
        process::exit(1);
    }
}
pub fn inner_main() -> Result<()> {
    env_logger::init();
    let args = app_from_crate!()
        .args_from_usage(
            "--normalizefile [FILE] 'normalization rules, rows of term,replacement'
             <transcript> 'transcript file or directory of transcripts'")
        .get_matches();

    let rules = match args.value_of("normalizefile") {
        Some(path) => NormalizationRules::from_file(path)?,
        None => NormalizationRules::new(),
    };
    let tokenizer = Tokenizer::new(&rules)?;
    let paths = TranscriptSource::open(args.value_of("transcript").unwrap_or("."))?
        .paths()
        .to_vec();

    let counts = paths.par_iter()
        .map(|path| read_transcript(path).map(|doc| tokenizer.tokenize(&doc.text).len()))
        .collect::<Result<Vec<usize>>>()?;

    for (path, count) in paths.iter().zip(&counts) {
        println!("{}\t{}", path.display(), count);
    }
    println!("total\t{}", counts.iter().sum::<usize>());
    Ok(())
}
