//! Conversions between CSV field text and typed column values.

use chrono::{Local, NaiveDateTime};

use crate::error::RowError;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn optional_text(field: &str) -> Option<String> {
    if field.trim().is_empty() {
        None
    } else {
        Some(field.to_string())
    }
}

pub fn optional_int(column: &'static str, field: &str) -> Result<Option<i32>, RowError> {
    let trimmed = field.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse()
        .map(Some)
        .map_err(|_| RowError::InvalidNumber {
            column,
            value: field.to_string(),
        })
}

pub fn required_id(column: &'static str, field: &str) -> Result<i64, RowError> {
    field.trim().parse().map_err(|_| RowError::InvalidNumber {
        column,
        value: field.to_string(),
    })
}

/// Parses a timestamp column. Unparseable values fall back to the current
/// local time; they never reject the row.
pub fn optional_timestamp(line: usize, field: &str) -> Option<NaiveDateTime> {
    let trimmed = field.trim();
    if trimmed.is_empty() {
        return None;
    }
    match NaiveDateTime::parse_from_str(trimmed, TIMESTAMP_FORMAT) {
        Ok(ts) => Some(ts),
        Err(e) => {
            tracing::warn!(
                line,
                value = trimmed,
                "Invalid timestamp ({}), using current time",
                e
            );
            Some(Local::now().naive_local())
        }
    }
}

pub fn format_int(value: Option<i32>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

pub fn format_timestamp(value: Option<&NaiveDateTime>) -> String {
    value
        .map(|ts| ts.format(TIMESTAMP_FORMAT).to_string())
        .unwrap_or_default()
}
