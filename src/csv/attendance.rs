use std::io::{BufRead, Write};
use std::path::Path;

use crate::error::{Result, RowError};
use crate::models::{parse_attended, AttendanceRecord, AttendedLabels};

use super::codec::{self, too_few_fields, CsvRecord, EncodeOptions, Imported};
use super::fields::required_id;

pub const ATTENDANCE_HEADER: &str = "MemberId,SessionId,Attended";

impl CsvRecord for AttendanceRecord {
    const HEADER: &'static str = ATTENDANCE_HEADER;
    const MIN_FIELDS: usize = 3;

    fn to_fields(&self, options: &EncodeOptions) -> Vec<String> {
        vec![
            self.member_id.to_string(),
            self.session_id.to_string(),
            options.attended_labels.label(self.attended).to_string(),
        ]
    }

    fn from_fields(_line: usize, fields: &[String]) -> std::result::Result<Self, RowError> {
        let [member_id, session_id, attended, ..] = fields else {
            return Err(too_few_fields::<Self>(fields));
        };

        let attended = parse_attended(attended).ok_or_else(|| RowError::InvalidValue {
            column: "Attended",
            value: attended.clone(),
        })?;
        let record = AttendanceRecord::new(
            required_id("MemberId", member_id)?,
            required_id("SessionId", session_id)?,
            attended,
        );
        record.validate()?;
        Ok(record)
    }

    fn check(&self) -> std::result::Result<(), RowError> {
        self.validate()
    }
}

pub fn write_attendance<W: Write>(
    records: &[AttendanceRecord],
    writer: &mut W,
    labels: AttendedLabels,
) -> Result<usize> {
    codec::write_records(
        records,
        writer,
        &EncodeOptions {
            attended_labels: labels,
        },
    )
}

pub fn export_attendance(
    records: &[AttendanceRecord],
    path: &Path,
    labels: AttendedLabels,
) -> Result<usize> {
    codec::export_records(
        records,
        path,
        &EncodeOptions {
            attended_labels: labels,
        },
    )
}

pub fn read_attendance<R: BufRead>(reader: R) -> Result<Vec<AttendanceRecord>> {
    codec::read_records(reader)
}

pub fn import_attendance(path: &Path) -> Result<Imported<AttendanceRecord>> {
    codec::import_records(path)
}
