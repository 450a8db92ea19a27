use std::fs::{self, File};
use std::collections::VecDeque;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::error::{AppError, Result, RowError};
use crate::models::AttendedLabels;

use super::guard;
use super::record::{join_fields, strip_line_terminator, FieldSplitter};

/// A table row with a fixed CSV layout.
pub trait CsvRecord: Sized {
    const HEADER: &'static str;
    const MIN_FIELDS: usize;

    fn to_fields(&self, options: &EncodeOptions) -> Vec<String>;

    /// Builds a row from its fields; `line` is the physical line the record
    /// starts on. Fewer than `MIN_FIELDS` fields is a `TooFewFields` error.
    fn from_fields(line: usize, fields: &[String]) -> std::result::Result<Self, RowError>;

    /// Rejects rows that would not survive an import. Run before export.
    fn check(&self) -> std::result::Result<(), RowError> {
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct EncodeOptions {
    pub attended_labels: AttendedLabels,
}

/// Receives rows as they are decoded.
pub trait RowSink<T> {
    fn accept(&mut self, row: T);
}

impl<T> RowSink<T> for Vec<T> {
    fn accept(&mut self, row: T) {
        self.push(row);
    }
}

impl<T, F> RowSink<T> for F
where
    F: FnMut(T),
{
    fn accept(&mut self, row: T) {
        self(row)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRow {
    pub line: usize,
    pub reason: RowError,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportReport {
    pub imported: usize,
    pub skipped: Vec<SkippedRow>,
}

impl ImportReport {
    fn record<T, S: RowSink<T>>(
        &mut self,
        line: usize,
        parsed: std::result::Result<T, RowError>,
        sink: &mut S,
    ) {
        match parsed {
            Ok(row) => {
                sink.accept(row);
                self.imported += 1;
            }
            Err(reason) => {
                tracing::warn!(line, "Skipping CSV row: {}", reason);
                self.skipped.push(SkippedRow { line, reason });
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct Imported<T> {
    pub rows: Vec<T>,
    pub report: ImportReport,
}

pub fn too_few_fields<T: CsvRecord>(fields: &[String]) -> RowError {
    RowError::TooFewFields {
        expected: T::MIN_FIELDS,
        found: fields.len(),
    }
}

fn validate_rows<T: CsvRecord>(rows: &[&T]) -> Result<()> {
    for (index, row) in rows.iter().enumerate() {
        row.check()
            .map_err(|e| AppError::Validation(format!("row {}: {}", index + 1, e)))?;
    }
    Ok(())
}

fn write_rows<T: CsvRecord, W: Write>(
    rows: &[&T],
    writer: &mut W,
    options: &EncodeOptions,
) -> Result<usize> {
    writeln!(writer, "{}", T::HEADER)?;
    for row in rows {
        writeln!(writer, "{}", join_fields(&row.to_fields(options)))?;
    }
    writer.flush()?;
    Ok(rows.len())
}

/// Writes the header and every row. All rows are checked before the first
/// byte is written.
pub fn write_records<'a, T, I, W>(rows: I, writer: &mut W, options: &EncodeOptions) -> Result<usize>
where
    T: CsvRecord + 'a,
    I: IntoIterator<Item = &'a T>,
    W: Write,
{
    let rows: Vec<&T> = rows.into_iter().collect();
    validate_rows(&rows)?;
    write_rows(&rows, writer, options)
}

pub fn export_records<'a, T, I>(rows: I, path: &Path, options: &EncodeOptions) -> Result<usize>
where
    T: CsvRecord + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let rows: Vec<&T> = rows.into_iter().collect();
    validate_rows(&rows)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let mut writer = BufWriter::new(File::create(path)?);
    let count = write_rows(&rows, &mut writer, options)?;
    tracing::info!("Exported {} rows to {}", count, path.display());
    Ok(count)
}

struct PhysicalLine {
    number: usize,
    bytes: Vec<u8>,
}

/// A record whose quoted field is still open at the end of a line.
struct OpenRecord {
    start: usize,
    splitter: FieldSplitter,
    invalid_utf8: bool,
    // Lines after `start`, replayed as fresh records if the quote never closes.
    held: Vec<PhysicalLine>,
}

impl OpenRecord {
    fn new(start: usize) -> Self {
        Self {
            start,
            splitter: FieldSplitter::new(),
            invalid_utf8: false,
            held: Vec::new(),
        }
    }
}

fn read_physical_line<R: BufRead>(
    reader: &mut R,
    line_no: &mut usize,
) -> Result<Option<PhysicalLine>> {
    let mut bytes = Vec::new();
    if reader.read_until(b'\n', &mut bytes)? == 0 {
        return Ok(None);
    }
    *line_no += 1;
    Ok(Some(PhysicalLine {
        number: *line_no,
        bytes,
    }))
}

fn read_header<T: CsvRecord, R: BufRead>(reader: &mut R) -> Result<()> {
    let invalid = || AppError::InvalidHeader {
        expected: T::HEADER,
    };
    let mut raw = Vec::new();
    if reader.read_until(b'\n', &mut raw)? == 0 {
        return Err(invalid());
    }
    let raw = std::str::from_utf8(&raw).map_err(|_| invalid())?;
    let header = strip_line_terminator(raw);
    let header = header.strip_prefix('\u{feff}').unwrap_or(header);
    if !header.eq_ignore_ascii_case(T::HEADER) {
        return Err(invalid());
    }
    Ok(())
}

/// Decodes every record after the header into `sink`.
///
/// A bad header or an I/O failure aborts the decode. Problems confined to
/// one row only skip that row; they are listed in the returned report.
/// A quote left open until the end of input skips only the line it starts
/// on; the lines it swallowed are decoded again as records of their own.
pub fn decode_records<T, R, S>(mut reader: R, sink: &mut S) -> Result<ImportReport>
where
    T: CsvRecord,
    R: BufRead,
    S: RowSink<T>,
{
    read_header::<T, R>(&mut reader)?;

    let mut report = ImportReport::default();
    let mut line_no = 1;
    let mut replay: VecDeque<PhysicalLine> = VecDeque::new();
    let mut open: Option<OpenRecord> = None;

    loop {
        let line = match replay.pop_front() {
            Some(line) => line,
            None => match read_physical_line(&mut reader, &mut line_no)? {
                Some(line) => line,
                None => match open.take() {
                    Some(record) => {
                        report.record::<T, S>(record.start, Err(RowError::UnterminatedQuote), sink);
                        replay.extend(record.held);
                        continue;
                    }
                    None => break,
                },
            },
        };

        let mut record = match open.take() {
            Some(record) => record,
            None if line.bytes.iter().all(u8::is_ascii_whitespace) => continue,
            None => OpenRecord::new(line.number),
        };

        let still_open = {
            let text = String::from_utf8_lossy(&line.bytes);
            record.invalid_utf8 |= std::str::from_utf8(&line.bytes).is_err();
            let content = strip_line_terminator(&text);
            record.splitter.feed(content);
            if record.splitter.in_quotes() {
                record.splitter.push_raw(&text[content.len()..]);
            }
            record.splitter.in_quotes()
        };

        if still_open {
            if line.number != record.start {
                record.held.push(line);
            }
            open = Some(record);
            continue;
        }

        let start = record.start;
        let parsed = if record.invalid_utf8 {
            Err(RowError::InvalidEncoding)
        } else {
            record
                .splitter
                .finish()
                .and_then(|fields| T::from_fields(start, &fields))
        };
        report.record(start, parsed, sink);
    }

    Ok(report)
}

pub fn read_records<T: CsvRecord, R: BufRead>(reader: R) -> Result<Vec<T>> {
    let mut rows = Vec::new();
    decode_records::<T, _, _>(reader, &mut rows)?;
    Ok(rows)
}

/// Checks the file with [`guard::check_import_file`], then decodes it.
pub fn import_records<T: CsvRecord>(path: &Path) -> Result<Imported<T>> {
    let size = guard::check_import_file(path)?;
    tracing::debug!("Importing {} ({} bytes)", path.display(), size);

    let reader = BufReader::new(File::open(path)?);
    let mut rows = Vec::new();
    let report = decode_records::<T, _, _>(reader, &mut rows)?;

    tracing::info!(
        "Imported {} rows from {} ({} skipped)",
        report.imported,
        path.display(),
        report.skipped.len()
    );
    Ok(Imported { rows, report })
}
