//! CSV report sink.
//!
//! Rows are written raw: fields are not quoted or comma-escaped, so a comma
//! inside a field shifts the columns after it. The stock rule explanations
//! are written comma-free, and the behavior is pinned by a test; see
//! DESIGN.md before adding quoting.

use crate::error::ScanError;
use crate::models::Finding;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Column header written once per fresh report file.
pub const CSV_HEADER: &str = "Condition,File Name,Invalid Character,Path,Rule Violation";

/// Buffered writer around the report file. The handle is released when the
/// sink is dropped, on every exit path.
pub struct ReportSink {
    writer: BufWriter<File>,
    path: PathBuf,
}

impl ReportSink {
    /// Open the report file. Fresh runs truncate and write the header row;
    /// append runs reuse an existing file without repeating the header. An
    /// append run against a missing file creates it, header included.
    pub fn open(path: &Path, append: bool) -> Result<Self, ScanError> {
        let exists = path.exists();
        let file = if append {
            OpenOptions::new().create(true).append(true).open(path)
        } else {
            File::create(path)
        }
        .map_err(|e| ScanError::report(path, e))?;

        let mut sink = Self {
            writer: BufWriter::new(file),
            path: path.to_path_buf(),
        };
        if !append || !exists {
            sink.write_line(CSV_HEADER)?;
        }
        Ok(sink)
    }

    /// Append one finding as a raw CSV row.
    pub fn write_finding(&mut self, f: &Finding) -> Result<(), ScanError> {
        self.write_line(&format!(
            "{},{},{},{},{}",
            f.severity, f.file_name, f.token, f.path, f.message
        ))
    }

    /// Flush buffered rows to disk.
    pub fn finish(mut self) -> Result<(), ScanError> {
        self.writer
            .flush()
            .map_err(|e| ScanError::report(&self.path, e))
    }

    fn write_line(&mut self, line: &str) -> Result<(), ScanError> {
        writeln!(self.writer, "{line}").map_err(|e| ScanError::report(&self.path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Severity;
    use std::fs;
    use tempfile::tempdir;

    fn finding(message: &str) -> Finding {
        Finding {
            severity: Severity::Error,
            file_name: "bad.tmp".to_string(),
            token: ".tmp".to_string(),
            path: "/share/bad.tmp".to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn test_fresh_file_gets_header_and_rows() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("results.csv");
        let mut sink = ReportSink::open(&path, false).unwrap();
        sink.write_finding(&finding("Files cannot be of this type.")).unwrap();
        sink.finish().unwrap();

        let body = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = body.lines().collect();
        assert_eq!(lines[0], CSV_HEADER);
        assert_eq!(
            lines[1],
            "Error,bad.tmp,.tmp,/share/bad.tmp,Files cannot be of this type."
        );
    }

    #[test]
    fn test_append_to_existing_file_skips_header() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("results.csv");

        let mut sink = ReportSink::open(&path, false).unwrap();
        sink.write_finding(&finding("first run")).unwrap();
        sink.finish().unwrap();

        let mut sink = ReportSink::open(&path, true).unwrap();
        sink.write_finding(&finding("second run")).unwrap();
        sink.finish().unwrap();

        let body = fs::read_to_string(&path).unwrap();
        let headers = body.lines().filter(|l| *l == CSV_HEADER).count();
        assert_eq!(headers, 1);
        assert_eq!(body.lines().count(), 3);
    }

    #[test]
    fn test_append_to_missing_file_writes_header() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("results.csv");
        let sink = ReportSink::open(&path, true).unwrap();
        sink.finish().unwrap();

        let body = fs::read_to_string(&path).unwrap();
        assert_eq!(body.lines().next(), Some(CSV_HEADER));
    }

    #[test]
    fn test_fresh_run_truncates_previous_report() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("results.csv");

        let mut sink = ReportSink::open(&path, false).unwrap();
        sink.write_finding(&finding("stale row")).unwrap();
        sink.finish().unwrap();

        let sink = ReportSink::open(&path, false).unwrap();
        sink.finish().unwrap();

        let body = fs::read_to_string(&path).unwrap();
        assert_eq!(body.lines().count(), 1);
    }

    #[test]
    fn test_fields_are_not_comma_escaped() {
        // Documented limitation: a comma inside a field shifts the columns
        // after it.
        let dir = tempdir().unwrap();
        let path = dir.path().join("results.csv");
        let mut sink = ReportSink::open(&path, false).unwrap();
        sink.write_finding(&finding("one, two")).unwrap();
        sink.finish().unwrap();

        let body = fs::read_to_string(&path).unwrap();
        let row = body.lines().nth(1).unwrap();
        assert_eq!(row.split(',').count(), 6);
        assert!(!row.contains('"'));
    }
}
