//! CSV import and export of workout plans and attendance records.

pub mod attendance;
pub mod codec;
pub mod fields;
pub mod guard;
pub mod record;
pub mod workout_plans;

pub use attendance::{
    export_attendance, import_attendance, read_attendance, write_attendance, ATTENDANCE_HEADER,
};
pub use codec::{
    decode_records, export_records, import_records, read_records, write_records, CsvRecord,
    EncodeOptions, ImportReport, Imported, RowSink, SkippedRow,
};
pub use guard::{check_import_file, MAX_IMPORT_BYTES};
pub use workout_plans::{
    export_workout_plans, import_workout_plans, read_workout_plans, write_workout_plans,
    WORKOUT_PLAN_HEADER,
};
