//! End to end runs: vocabulary files and transcripts on disk in, extract log out
extern crate csv;
extern crate nearword;
extern crate tempfile;

use std::fs;
use std::path::Path;
use tempfile::tempdir;

use nearword::errors::Error;
use nearword::extracts::ExtractLog;
use nearword::pipeline::{Extractor, Stats};
use nearword::record::{ExtractRecord, ScanOptions, HEADERS};
use nearword::transcript::TranscriptSource;
use nearword::vocab::{NormalizationRules, Vocabulary};

/// Write the vocabularies and return (vocab, rules)
fn load_vocab(dir: &Path) -> (Vocabulary, NormalizationRules) {
    let subjects = dir.join("subjects.csv");
    let keywords = dir.join("keywords.csv");
    let rules = dir.join("normalize_terms.csv");
    fs::write(&subjects, "economy,S1\nfederal_reserve,S2\n").unwrap();
    fs::write(&keywords, "inflation,K1,101\nrates,K2,102\n").unwrap();
    fs::write(&rules, "federal reserve,federal_reserve\n").unwrap();
    (Vocabulary::from_files(&subjects, &keywords).unwrap(),
     NormalizationRules::from_file(&rules).unwrap())
}

fn run(dir: &Path, transcripts: &Path, output: &Path, options: &ScanOptions) -> Stats {
    let (vocab, rules) = load_vocab(dir);
    let extractor = Extractor::new(&vocab, &rules, options).unwrap();
    let mut log = ExtractLog::open(output).unwrap();
    let stats = extractor.run(TranscriptSource::open(transcripts).unwrap(), &mut log).unwrap();
    assert_eq!(log.finish().unwrap(), stats.written);
    stats
}

fn read_rows(output: &Path) -> Vec<csv::StringRecord> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_path(output)
        .unwrap();
    reader.records().map(|r| r.unwrap()).collect()
}

#[test]
fn nearby_pair_is_extracted_with_show_metadata() {
    let dir = tempdir().unwrap();
    let shows = dir.path().join("shows");
    fs::create_dir(&shows).unwrap();
    fs::write(shows.join("evening.txt"),
        "Show-Name: Evening News\nShow-Date: 2019-03-04\nShow-Id: E42\n\n\
         The economy is facing serious inflation pressures this year").unwrap();
    let output = dir.path().join("extracts.csv");
    let options = ScanOptions { context_size: 5, ..Default::default() };
    let stats = run(dir.path(), &shows, &output, &options);
    assert_eq!(stats.documents, 1);
    assert_eq!(stats.tokens, 9);

    let rows = read_rows(&output);
    assert_eq!(rows[0].iter().collect::<Vec<_>>(), HEADERS.to_vec());
    let pair = rows.iter().find(|r| &r[5] == "economy" && &r[7] == "inflation").unwrap();
    assert_eq!(pair.len(), 12);
    assert_eq!(&pair[1], shows.join("evening.txt").display().to_string().as_str());
    assert_eq!(&pair[2], "2019-03-04");
    assert_eq!(&pair[3], "E42");
    assert_eq!(&pair[4], "Evening News");
    assert_eq!(&pair[6], "S1");
    assert_eq!(&pair[8], "K1");
    assert_eq!(&pair[9], "101");
    assert_eq!(&pair[10], "");
    assert_eq!(&pair[11], "the economy is facing serious inflation pressures this year");
    // every other row is the lone keyword seen again from its own window
    assert!(rows[1..].iter().all(|r| &r[7] == "inflation"));
}

#[test]
fn distant_terms_are_lone_records() {
    let dir = tempdir().unwrap();
    let transcript = dir.path().join("show.txt");
    fs::write(&transcript, "inflation fears precede any real economy talk much later well \
                            beyond the window boundary").unwrap();
    let output = dir.path().join("extracts.csv");
    let options = ScanOptions { window_size: 3, ..Default::default() };
    let stats = run(dir.path(), &transcript, &output, &options);
    assert_eq!(stats.matches, stats.written);

    let rows = read_rows(&output);
    let records = &rows[1..];
    assert!(records.iter().all(|r| r[5].is_empty() || r[7].is_empty()));
    assert!(records.iter().any(|r| &r[5] == "economy" && r[7].is_empty()));
    assert!(records.iter().any(|r| &r[7] == "inflation" && r[5].is_empty()));
}

#[test]
fn suppressing_lone_subjects() {
    let dir = tempdir().unwrap();
    let transcript = dir.path().join("show.txt");
    fs::write(&transcript, "The Federal Reserve spoke. Much later, after a long pause with \
                            plenty of filler words, the economy and rates came up.").unwrap();
    let output = dir.path().join("extracts.csv");
    let options = ScanOptions {
        window_size: 4,
        suppress_lone_subjects: true,
        ..Default::default()
    };
    let stats = run(dir.path(), &transcript, &output, &options);
    assert!(stats.suppressed > 0);

    let rows = read_rows(&output);
    assert!(rows.len() > 1);
    assert!(rows[1..].iter().all(|r| !r[7].is_empty()));
    assert!(rows[1..].iter().any(|r| &r[5] == "economy" && &r[7] == "rates"));
    assert!(rows[1..].iter().all(|r| &r[5] != "federal_reserve"));
}

#[test]
fn appending_repairs_a_missing_newline() {
    let dir = tempdir().unwrap();
    let transcript = dir.path().join("show.txt");
    fs::write(&transcript, "the economy").unwrap();
    let output = dir.path().join("extracts.csv");
    // as left behind by a spreadsheet program
    fs::write(&output, format!("{}\r\nold,row,,,,economy,S1,,,,yes,the economy", HEADERS.join(",")))
        .unwrap();
    let stats = run(dir.path(), &transcript, &output, &ScanOptions::default());
    assert!(stats.written > 0);

    let rows = read_rows(&output);
    assert_eq!(rows.len(), 2 + stats.written);
    assert_eq!(&rows[1][10], "yes");
    assert_eq!(&rows[1][11], "the economy");
    assert!(rows[2..].iter().all(|r| r.len() == 12 && &r[5] == "economy"));
}

#[test]
fn second_run_appends_without_a_header() {
    let dir = tempdir().unwrap();
    let transcript = dir.path().join("show.txt");
    fs::write(&transcript, "inflation").unwrap();
    let output = dir.path().join("extracts.csv");
    let first = run(dir.path(), &transcript, &output, &ScanOptions::default());
    let second = run(dir.path(), &transcript, &output, &ScanOptions::default());
    let rows = read_rows(&output);
    assert_eq!(rows.len(), 1 + first.written + second.written);
    assert_eq!(rows.iter().filter(|r| &r[0] == "extract_date").count(), 1);
}

#[test]
fn unreadable_transcript_is_an_error() {
    let dir = tempdir().unwrap();
    let shows = dir.path().join("shows");
    fs::create_dir(&shows).unwrap();
    fs::write(shows.join("a.txt"), "the economy").unwrap();
    fs::write(shows.join("b.txt"), vec![0xff, 0xfe, 0x00]).unwrap();
    let (vocab, rules) = load_vocab(dir.path());
    let options = ScanOptions::default();
    let extractor = Extractor::new(&vocab, &rules, &options).unwrap();
    let mut rows: Vec<ExtractRecord> = vec![];
    match extractor.run(TranscriptSource::open(&shows).unwrap(), &mut rows) {
        Err(Error::BadTranscript { ref path, .. }) => assert_eq!(path, &shows.join("b.txt")),
        other => panic!("unexpected {:?}", other),
    }
    assert!(!rows.is_empty());
}

#[test]
fn malformed_vocabulary_is_fatal() {
    let dir = tempdir().unwrap();
    let subjects = dir.path().join("subjects.csv");
    let keywords = dir.path().join("keywords.csv");
    fs::write(&subjects, "economy,S1\n").unwrap();
    fs::write(&keywords, "inflation,K1\n").unwrap();
    match Vocabulary::from_files(&subjects, &keywords) {
        Err(Error::MalformedRow { expected, found, .. }) => {
            assert_eq!(expected, 3);
            assert_eq!(found, 2);
        }
        other => panic!("unexpected {:?}", other.map(|_| ())),
    }
}
