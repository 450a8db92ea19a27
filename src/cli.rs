use std::fs::File;
use std::io::{BufReader, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;

use crate::config::Config;
use crate::csv::{self, CsvRecord, EncodeOptions, ImportReport};
use crate::models::{AttendanceRecord, AttendedLabels, WorkoutPlan};
use crate::version::LONG_VERSION;

#[derive(Parser, Debug)]
#[command(name = "gymflow", version, long_version = LONG_VERSION)]
#[command(about = "Import and export gym workout plans and attendance as CSV")]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate a CSV file and report skipped rows
    Check {
        file: PathBuf,
        #[arg(long, value_enum)]
        kind: TableKind,
    },
    /// Decode a CSV file and print its rows as JSON
    Import {
        file: PathBuf,
        #[arg(long, value_enum)]
        kind: TableKind,
    },
    /// Encode rows from a JSON file as CSV
    Export {
        json: PathBuf,
        #[arg(long, value_enum)]
        kind: TableKind,
        /// Output path, defaults to a file in the export directory
        #[arg(long)]
        out: Option<PathBuf>,
        #[arg(long, value_enum)]
        attended_labels: Option<LabelsArg>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum TableKind {
    WorkoutPlans,
    Attendance,
}

impl TableKind {
    pub fn default_file_name(&self) -> &'static str {
        match self {
            TableKind::WorkoutPlans => "workout_plans.csv",
            TableKind::Attendance => "attendance.csv",
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LabelsArg {
    CompletedPending,
    YesNo,
}

impl From<LabelsArg> for AttendedLabels {
    fn from(arg: LabelsArg) -> Self {
        match arg {
            LabelsArg::CompletedPending => AttendedLabels::CompletedPending,
            LabelsArg::YesNo => AttendedLabels::YesNo,
        }
    }
}

/// Parse cli args shorthand
pub fn parse() -> Args {
    Args::parse()
}

/// Runs a command, writing user-facing output to `out`.
pub fn run<W: Write>(args: Args, config: &Config, out: &mut W) -> anyhow::Result<()> {
    match args.command {
        Command::Check { file, kind } => {
            let report = match kind {
                TableKind::WorkoutPlans => csv::import_workout_plans(&file)?.report,
                TableKind::Attendance => csv::import_attendance(&file)?.report,
            };
            write_report(out, &file, &report)?;
        }
        Command::Import { file, kind } => match kind {
            TableKind::WorkoutPlans => print_json(out, &csv::import_workout_plans(&file)?.rows)?,
            TableKind::Attendance => print_json(out, &csv::import_attendance(&file)?.rows)?,
        },
        Command::Export {
            json,
            kind,
            out: out_path,
            attended_labels,
        } => {
            let path = out_path.unwrap_or_else(|| config.default_export_path(kind.default_file_name()));
            let options = EncodeOptions {
                attended_labels: attended_labels
                    .map(AttendedLabels::from)
                    .unwrap_or(config.attended_labels),
            };
            let count = match kind {
                TableKind::WorkoutPlans => export_json::<WorkoutPlan>(&json, &path, &options)?,
                TableKind::Attendance => export_json::<AttendanceRecord>(&json, &path, &options)?,
            };
            writeln!(out, "Wrote {} rows to {}", count, path.display())?;
        }
    }
    Ok(())
}

fn export_json<T>(json: &Path, path: &Path, options: &EncodeOptions) -> anyhow::Result<usize>
where
    T: CsvRecord + serde::de::DeserializeOwned,
{
    let reader = BufReader::new(File::open(json)?);
    let rows: Vec<T> = serde_json::from_reader(reader)?;
    Ok(csv::export_records(&rows, path, options)?)
}

fn print_json<W: Write, T: Serialize>(out: &mut W, rows: &[T]) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, rows)?;
    writeln!(out)?;
    Ok(())
}

fn write_report<W: Write>(out: &mut W, file: &Path, report: &ImportReport) -> anyhow::Result<()> {
    writeln!(
        out,
        "{}: {} rows imported, {} skipped",
        file.display(),
        report.imported,
        report.skipped.len()
    )?;
    for skipped in &report.skipped {
        writeln!(out, "  line {}: {}", skipped.line, skipped.reason)?;
    }
    Ok(())
}
