//! The cumulative extract log
//!
//! A CSV file that only ever grows. New files start with the header row; existing files are
//! appended to without one.
use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::Path;
use crate::errors::*;
use crate::record::{ExtractRecord, HEADERS};

/// Anything extract records can be written to
pub trait RecordSink {
    fn append(&mut self, record: &ExtractRecord) -> Result<()>;
}

impl RecordSink for Vec<ExtractRecord> {
    fn append(&mut self, record: &ExtractRecord) -> Result<()> {
        self.push(record.clone());
        Ok(())
    }
}

/// Append-only extract log on disk
pub struct ExtractLog {
    writer: csv::Writer<File>,
    rows: usize,
}

impl ExtractLog {
    /// Create the log with a header, or open an existing one for appending
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let appending = path.exists();
        let file = if appending {
            info!("Appending to existing extracts in {}", path.display());
            let mut file = OpenOptions::new().read(true).append(true).open(path)?;
            if fix_newline(&mut file)? {
                info!("Added a missing final newline to {}", path.display());
            }
            file
        } else {
            info!("Creating new extracts file {}", path.display());
            File::create(path)?
        };
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(file);
        if !appending {
            writer.write_record(&HEADERS)?;
        }
        Ok(ExtractLog { writer: writer, rows: 0 })
    }

    /// Flush everything and report how many rows this run wrote
    pub fn finish(mut self) -> Result<usize> {
        self.writer.flush()?;
        Ok(self.rows)
    }
}

impl RecordSink for ExtractLog {
    fn append(&mut self, record: &ExtractRecord) -> Result<()> {
        self.writer.write_record(&record.fields())?;
        self.rows += 1;
        Ok(())
    }
}

/// Make sure a non-empty file ends with a newline, so appended rows start on their own line.
///
/// Spreadsheet programs often save CSV without one. Returns whether a newline was added.
fn fix_newline(file: &mut File) -> Result<bool> {
    let length = file.seek(SeekFrom::End(0))?;
    if length == 0 {
        return Ok(false);
    }
    file.seek(SeekFrom::End(-1))?;
    let mut last = [0u8; 1];
    file.read_exact(&mut last)?;
    if last[0] == b'\n' {
        Ok(false)
    } else {
        file.write_all(b"\n")?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn record(subject: &str) -> ExtractRecord {
        ExtractRecord {
            extract_date: "03/04/19 10:00:00".to_string(),
            file: "a.txt".to_string(),
            subject: subject.to_string(),
            subject_code: "S1".to_string(),
            extract: "the economy, again".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn new_file_gets_a_header() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("extracts.csv");
        let mut log = ExtractLog::open(&path).unwrap();
        log.append(&record("economy")).unwrap();
        assert_eq!(log.finish().unwrap(), 1);
        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content,
            "extract_date,file,show_date,show_id,show_name,subject,subject_code,keyword,\
             keyword_code,keyword_id,relevant?,extract\n\
             03/04/19 10:00:00,a.txt,,,,economy,S1,,,,,\"the economy, again\"\n");
    }

    #[test]
    fn existing_file_is_appended_without_header() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("extracts.csv");
        fs::write(&path, "old row\n").unwrap();
        let mut log = ExtractLog::open(&path).unwrap();
        log.append(&record("economy")).unwrap();
        log.finish().unwrap();
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("old row\n03/04/19 10:00:00,"));
        assert_eq!(content.lines().count(), 2);
    }

    #[test]
    fn missing_final_newline_is_repaired() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("extracts.csv");
        fs::write(&path, "header\r\nold row").unwrap();
        let mut log = ExtractLog::open(&path).unwrap();
        log.append(&record("economy")).unwrap();
        log.finish().unwrap();
        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<_> = content.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "old row");
        assert!(lines[2].starts_with("03/04/19 10:00:00,a.txt"));
    }

    #[test]
    fn empty_existing_file_stays_headerless() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("extracts.csv");
        fs::write(&path, "").unwrap();
        let log = ExtractLog::open(&path).unwrap();
        assert_eq!(log.finish().unwrap(), 0);
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }
}
