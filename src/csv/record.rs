use std::borrow::Cow;
use std::mem;

use crate::error::RowError;

/// Quotes a field when it holds a comma, a double quote or a line break.
pub fn escape_field(field: &str) -> Cow<'_, str> {
    if field.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

pub fn join_fields<S: AsRef<str>>(fields: &[S]) -> String {
    fields
        .iter()
        .map(|f| escape_field(f.as_ref()))
        .collect::<Vec<_>>()
        .join(",")
}

/// Splits CSV text into fields, one physical line at a time.
///
/// A record whose quoted field spans a line break is fed line by line;
/// [`FieldSplitter::in_quotes`] tells the caller that the record is not
/// finished yet.
#[derive(Debug, Default)]
pub struct FieldSplitter {
    fields: Vec<String>,
    buf: String,
    in_quotes: bool,
}

impl FieldSplitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn in_quotes(&self) -> bool {
        self.in_quotes
    }

    pub fn feed(&mut self, text: &str) {
        let mut chars = text.chars().peekable();
        while let Some(ch) = chars.next() {
            match (self.in_quotes, ch) {
                (false, '"') => self.in_quotes = true,
                (false, ',') => self.fields.push(mem::take(&mut self.buf)),
                (true, '"') => {
                    if chars.peek() == Some(&'"') {
                        chars.next();
                        self.buf.push('"');
                    } else {
                        self.in_quotes = false;
                    }
                }
                _ => self.buf.push(ch),
            }
        }
    }

    /// Appends text verbatim to the current field (line breaks inside quotes).
    pub fn push_raw(&mut self, text: &str) {
        self.buf.push_str(text);
    }

    pub fn finish(mut self) -> Result<Vec<String>, RowError> {
        if self.in_quotes {
            return Err(RowError::UnterminatedQuote);
        }
        self.fields.push(self.buf);
        Ok(self.fields)
    }
}

/// Splits a single complete line.
pub fn split_record(line: &str) -> Result<Vec<String>, RowError> {
    let mut splitter = FieldSplitter::new();
    splitter.feed(line);
    splitter.finish()
}

pub fn strip_line_terminator(line: &str) -> &str {
    line.strip_suffix('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .unwrap_or(line)
}
