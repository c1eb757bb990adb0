//! Streaming FASTA reader and line-wrapping writer
//!
//! The reader yields one [`Record`] at a time. Header text is taken from the
//! line after the `>` marker and trimmed (only trailing whitespace with
//! [`FastaReader::keep_raw_headers`]); every following line up to the next
//! header is trimmed and appended to the sequence. Lines that appear before
//! the first header have no record to belong to and are dropped.

use std::fs::File;
use std::io::{self, BufRead, BufWriter, Write};
use std::path::Path;
use thiserror::Error;

use super::{create_output, open_input};
use crate::types::{Record, HEADER_MARKER};

#[derive(Debug, Error)]
pub enum FastaError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Line width must be at least 1")]
    InvalidLineWidth,
}

pub type FastaResult<T> = Result<T, FastaError>;

/// Lazy FASTA record iterator over any buffered reader
pub struct FastaReader<R: BufRead> {
    reader: R,
    line: String,
    pending_header: Option<String>,
    line_number: usize,
    dropped_lines: usize,
    raw_headers: bool,
    finished: bool,
}

impl FastaReader<Box<dyn BufRead + Send>> {
    /// Open a FASTA file (optionally `.gz`) for streaming.
    pub fn from_path<P: AsRef<Path>>(path: P) -> FastaResult<Self> {
        Ok(Self::new(open_input(path)?))
    }
}

impl<R: BufRead> FastaReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: String::with_capacity(256),
            pending_header: None,
            line_number: 0,
            dropped_lines: 0,
            raw_headers: false,
            finished: false,
        }
    }

    /// Keep header text exactly as written after the marker, leading
    /// whitespace included, so `header_line()` reproduces the input line.
    pub fn keep_raw_headers(mut self) -> Self {
        self.raw_headers = true;
        self
    }

    /// Lines discarded because no header preceded them.
    pub fn dropped_lines(&self) -> usize {
        self.dropped_lines
    }

    fn next_line(&mut self) -> FastaResult<bool> {
        self.line.clear();
        if self.reader.read_line(&mut self.line)? == 0 {
            self.finished = true;
            return Ok(false);
        }
        self.line_number += 1;
        Ok(true)
    }

    fn read_record(&mut self) -> FastaResult<Option<Record>> {
        let raw = self.raw_headers;
        let header = loop {
            if let Some(header) = self.pending_header.take() {
                break header;
            }
            if self.finished || !self.next_line()? {
                return Ok(None);
            }
            if let Some(rest) = self.line.strip_prefix(HEADER_MARKER) {
                break header_text(rest, raw);
            }
            self.dropped_lines += 1;
            log::trace!("Dropping line {} outside of any record", self.line_number);
        };

        let mut sequence = String::new();
        while !self.finished && self.next_line()? {
            if let Some(rest) = self.line.strip_prefix(HEADER_MARKER) {
                self.pending_header = Some(header_text(rest, raw));
                break;
            }
            sequence.push_str(self.line.trim());
        }

        Ok(Some(Record { header, sequence }))
    }
}

fn header_text(rest: &str, raw: bool) -> String {
    if raw {
        rest.trim_end().to_string()
    } else {
        rest.trim().to_string()
    }
}

impl<R: BufRead> Iterator for FastaReader<R> {
    type Item = FastaResult<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.read_record() {
            Ok(Some(record)) => Some(Ok(record)),
            Ok(None) => None,
            Err(e) => {
                self.finished = true;
                Some(Err(e))
            }
        }
    }
}

/// Read every record of a FASTA file into memory.
pub fn read_records<P: AsRef<Path>>(path: P) -> FastaResult<Vec<Record>> {
    FastaReader::from_path(path)?.collect()
}

/// FASTA writer that wraps sequence lines to a fixed width
pub struct FastaWriter<W: Write> {
    writer: W,
    line_width: Option<usize>,
    header_suffix: String,
    written: usize,
}

impl FastaWriter<BufWriter<File>> {
    /// Create an output file (and its parent directories).
    pub fn create<P: AsRef<Path>>(path: P) -> FastaResult<Self> {
        Ok(Self::new(create_output(path)?))
    }
}

impl<W: Write> FastaWriter<W> {
    /// Writer that emits each sequence on a single line.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            line_width: None,
            header_suffix: String::new(),
            written: 0,
        }
    }

    /// Wrap sequences to at most `width` characters per line.
    pub fn with_line_width(mut self, width: usize) -> FastaResult<Self> {
        if width == 0 {
            return Err(FastaError::InvalidLineWidth);
        }
        self.line_width = Some(width);
        Ok(self)
    }

    /// Text appended verbatim to every header line.
    pub fn with_header_suffix<S: Into<String>>(mut self, suffix: S) -> Self {
        self.header_suffix = suffix.into();
        self
    }

    pub fn write_record(&mut self, record: &Record) -> FastaResult<()> {
        writeln!(self.writer, "{}{}", record.header_line(), self.header_suffix)?;

        let sequence = record.sequence.as_bytes();
        match self.line_width {
            Some(width) => {
                for chunk in sequence.chunks(width) {
                    self.writer.write_all(chunk)?;
                    self.writer.write_all(b"\n")?;
                }
            }
            None if !sequence.is_empty() => {
                self.writer.write_all(sequence)?;
                self.writer.write_all(b"\n")?;
            }
            None => {}
        }

        self.written += 1;
        Ok(())
    }

    /// Records written so far.
    pub fn written(&self) -> usize {
        self.written
    }

    pub fn flush(&mut self) -> FastaResult<()> {
        self.writer.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn parse(text: &str) -> Vec<Record> {
        FastaReader::new(Cursor::new(text))
            .collect::<FastaResult<Vec<_>>>()
            .unwrap()
    }

    #[test]
    fn test_parse_multiline_records() {
        let records = parse(">seq1 Cas12a\nMSKL\nEKFT\n>seq2\nMAPK\n");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0], Record::new("seq1 Cas12a", "MSKLEKFT"));
        assert_eq!(records[1], Record::new("seq2", "MAPK"));
    }

    #[test]
    fn test_header_trimmed_and_crlf_handled() {
        let records = parse(">  h1 \r\nAA\r\nCC\r\n");
        assert_eq!(records, vec![Record::new("h1", "AACC")]);
    }

    #[test]
    fn test_last_record_without_trailing_newline() {
        let records = parse(">h1\nAA\n>h2\nGG");
        assert_eq!(records[1], Record::new("h2", "GG"));
    }

    #[test]
    fn test_empty_input_yields_nothing() {
        assert!(parse("").is_empty());
    }

    #[test]
    fn test_leading_sequence_lines_dropped() {
        let mut reader = FastaReader::new(Cursor::new("AAAA\nCCCC\n>h1\nGG\n"));
        let first = reader.next().unwrap().unwrap();
        assert_eq!(first, Record::new("h1", "GG"));
        assert!(reader.next().is_none());
        assert_eq!(reader.dropped_lines(), 2);
    }

    #[test]
    fn test_raw_headers_keep_leading_space() {
        let mut reader = FastaReader::new(Cursor::new("> h1 desc  \nMK\n")).keep_raw_headers();
        let record = reader.next().unwrap().unwrap();
        assert_eq!(record.header, " h1 desc");
        assert_eq!(record.header_line(), "> h1 desc");
    }

    #[test]
    fn test_no_header_lines_at_all() {
        assert!(parse("ACGT\nACGT\n").is_empty());
    }

    #[test]
    fn test_header_without_sequence() {
        let records = parse(">lonely\n>h2\nMK\n");
        assert_eq!(records[0], Record::new("lonely", ""));
        assert_eq!(records[1], Record::new("h2", "MK"));
    }

    #[test]
    fn test_writer_wraps_and_suffixes() {
        let mut writer = FastaWriter::new(Vec::new())
            .with_line_width(3)
            .unwrap()
            .with_header_suffix(" | subtype=cas12k");
        writer.write_record(&Record::new("h1", "ABCDEFG")).unwrap();
        writer.write_record(&Record::new("h2", "")).unwrap();
        assert_eq!(writer.written(), 2);

        let text = String::from_utf8(writer.into_inner()).unwrap();
        assert_eq!(text, ">h1 | subtype=cas12k\nABC\nDEF\nG\n>h2 | subtype=cas12k\n");
    }

    #[test]
    fn test_writer_rejects_zero_width() {
        let result = FastaWriter::new(Vec::new()).with_line_width(0);
        assert!(matches!(result, Err(FastaError::InvalidLineWidth)));
    }

    #[test]
    fn test_written_file_parses_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("out.fasta");
        let records = vec![Record::new("a", "MKVLAA"), Record::new("b", "GG")];

        let mut writer = FastaWriter::create(&path).unwrap().with_line_width(4).unwrap();
        for record in &records {
            writer.write_record(record).unwrap();
        }
        writer.flush().unwrap();
        drop(writer);

        assert_eq!(read_records(&path).unwrap(), records);
    }
}
