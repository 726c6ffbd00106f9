//! Extract the context around subjects and keywords found near each other in transcripts
//!
//! Reads the subject, keyword and normalization vocabularies, scans every transcript under the
//! given path, and appends one row per match to the extract log (created with a header if it
//! does not exist yet).

// argument parsing
#[macro_use] extern crate clap;
// logging
#[macro_use] extern crate log;
extern crate env_logger;
// lastly, this library
extern crate nearword;

use std::process;
use clap::Arg;

use nearword::errors::*;
use nearword::extracts::ExtractLog;
use nearword::pipeline::Extractor;
use nearword::record::ScanOptions;
use nearword::transcript::TranscriptSource;
use nearword::vocab::{NormalizationRules, Vocabulary};

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
        .arg(Arg::from_usage("--window [N] 'number of words that subject and keyword must be within'")
            .default_value("10"))
        .arg(Arg::from_usage("--context [N] 'number of words before and after subject and keyword to extract'")
            .default_value("20"))
        .arg(Arg::from_usage("--subjectfile [FILE] 'subject list, rows of term,code'")
            .default_value("subjects.csv"))
        .arg(Arg::from_usage("--keywordfile [FILE] 'keyword list, rows of term,code,id'")
            .default_value("keywords.csv"))
        .arg(Arg::from_usage("--normalizefile [FILE] 'normalization rules, rows of term,replacement'")
            .default_value("normalize_terms.csv"))
        .arg(Arg::from_usage("--output [FILE] 'extract log to create or append to'")
            .default_value("extracts.csv"))
        .args_from_usage(
            "--suppress-lone-subjects 'do not write rows for subjects found but not co-located with keywords'
             --suppress-lone-keywords 'do not write rows for keywords found but not co-located with subjects'
             <transcript> 'transcript file or directory of transcripts'")
        .get_matches();

    let options = ScanOptions {
        window_size: value_t!(args, "window", usize).unwrap_or_else(|e| e.exit()),
        context_size: value_t!(args, "context", usize).unwrap_or_else(|e| e.exit()),
        suppress_lone_subjects: args.is_present("suppress-lone-subjects"),
        suppress_lone_keywords: args.is_present("suppress-lone-keywords"),
    };
    options.validate()?;

    // Load everything before touching the output, so bad vocabularies abort cleanly
    let vocab = Vocabulary::from_files(
        args.value_of("subjectfile").unwrap_or("subjects.csv"),
        args.value_of("keywordfile").unwrap_or("keywords.csv"))?;
    let rules = NormalizationRules::from_file(
        args.value_of("normalizefile").unwrap_or("normalize_terms.csv"))?;
    let extractor = Extractor::new(&vocab, &rules, &options)?;
    let transcripts = TranscriptSource::open(args.value_of("transcript").unwrap_or("."))?;

    let mut log = ExtractLog::open(args.value_of("output").unwrap_or("extracts.csv"))?;
    let outcome = extractor.run(transcripts, &mut log);
    // Rows written before a failure are kept
    let written = log.finish()?;
    let stats = outcome?;
    info!("{} documents, {} tokens, {} matches, {} rows written, {} suppressed",
        stats.documents, stats.tokens, stats.matches, written, stats.suppressed);
    Ok(())
}
