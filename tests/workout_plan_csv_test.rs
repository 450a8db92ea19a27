mod common;

use gymflow::csv::{
    export_workout_plans, import_workout_plans, read_workout_plans, write_workout_plans,
    WORKOUT_PLAN_HEADER,
};
use gymflow::error::{AppError, ErrorKind, RowError};
use gymflow::models::WorkoutPlan;

fn encode(plans: &[WorkoutPlan]) -> String {
    let mut out = Vec::new();
    write_workout_plans(plans, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

fn decode(text: &str) -> Vec<WorkoutPlan> {
    read_workout_plans(text.as_bytes()).unwrap()
}

#[test]
fn test_round_trip_preserves_everything_but_id() {
    let mut hard = common::minimal_plan("Leg day");
    hard.difficulty = Some("Hard".to_string());
    let plans = vec![common::full_plan(), hard];

    let decoded = decode(&encode(&plans));

    assert_eq!(decoded.len(), 2);
    assert_eq!(decoded[0], common::without_id(plans[0].clone()));
    assert_eq!(decoded[1], plans[1]);
    assert_eq!(decoded[0].title, "Upper body strength");
    assert_eq!(decoded[1].difficulty.as_deref(), Some("Hard"));
}

#[test]
fn test_encoded_layout() {
    let text = encode(&[common::full_plan()]);
    let mut lines = text.lines();

    assert_eq!(lines.next(), Some(WORKOUT_PLAN_HEADER));
    assert_eq!(
        lines.next(),
        Some("Upper body strength,\"Bench, rows and \"\"pull-aparts\"\"\",Intermediate,Chest,Strength,60,\"Barbell, bench\",4,8,120,7,3,2024-05-01 18:30:00")
    );
    assert_eq!(lines.next(), None);
}

#[test]
fn test_title_with_comma_round_trips() {
    let decoded = decode(&encode(&[common::minimal_plan("Plan, with comma")]));
    assert_eq!(decoded[0].title, "Plan, with comma");
}

#[test]
fn test_field_with_newline_round_trips() {
    let mut plan = common::minimal_plan("Circuit");
    plan.description = Some("Round one\nRound two".to_string());
    let plans = vec![plan, common::minimal_plan("After")];

    assert_eq!(decode(&encode(&plans)), plans);
}

#[test]
fn test_null_duration_stays_null() {
    let plan = common::minimal_plan("Stretching");
    assert_eq!(plan.duration_minutes, None);

    let decoded = decode(&encode(&[plan]));
    assert_eq!(decoded[0].duration_minutes, None);
    assert_eq!(decoded[0].description, None);
    assert_eq!(decoded[0].created_at, None);
}

#[test]
fn test_header_with_swapped_columns_fails_regardless_of_case() {
    let header = WORKOUT_PLAN_HEADER
        .replace("Title,Description", "Description,Title")
        .to_uppercase();
    let text = format!("{}\nPush,,,,,,,,,,7,2,\n", header);

    let err = read_workout_plans(text.as_bytes()).unwrap_err();
    assert!(matches!(err, AppError::InvalidHeader { expected } if expected == WORKOUT_PLAN_HEADER));
    assert_eq!(err.kind(), ErrorKind::Validation);
}

#[test]
fn test_lowercase_header_is_accepted() {
    let text = format!("{}\nPush,,,,,,,,,,7,2,\n", WORKOUT_PLAN_HEADER.to_lowercase());
    assert_eq!(decode(&text).len(), 1);
}

#[test]
fn test_short_row_is_skipped() {
    let text = format!(
        "{}\nBroken,row,with,few,fields\nPush,,,,,,,,,,7,2,\n",
        WORKOUT_PLAN_HEADER
    );
    let decoded = decode(&text);
    assert_eq!(decoded.len(), 1);
    assert_eq!(decoded[0].title, "Push");
}

#[test]
fn test_non_numeric_row_is_skipped_and_later_rows_decode() {
    let text = format!(
        "{}\nFirst,,,,,30,,,,,7,2,\nBad,,,,,thirty,,,,,7,2,\nLast,,,,,45,,,,,7,2,\n",
        WORKOUT_PLAN_HEADER
    );
    let decoded = decode(&text);
    let titles: Vec<_> = decoded.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["First", "Last"]);
}

#[test]
fn test_invalid_timestamp_is_replaced_not_rejected() {
    let text = format!("{}\nPush,,,,,,,,,,7,2,not a date\n", WORKOUT_PLAN_HEADER);
    let decoded = decode(&text);
    assert_eq!(decoded.len(), 1);
    assert!(decoded[0].created_at.is_some());
}

#[test]
fn test_export_creates_parent_dirs_and_import_reads_back() {
    let dir = common::temp_dir("gymflow-plans");
    let path = dir.join("nested").join("deeper").join("plans.csv");
    let plans = vec![common::full_plan(), common::minimal_plan("Cardio")];

    let written = export_workout_plans(&plans, &path).unwrap();
    assert_eq!(written, 2);

    let imported = import_workout_plans(&path).unwrap();
    assert_eq!(imported.report.imported, 2);
    assert!(imported.report.skipped.is_empty());
    assert_eq!(
        imported.rows,
        plans.into_iter().map(common::without_id).collect::<Vec<_>>()
    );
}

#[test]
fn test_import_reports_skipped_lines() {
    let dir = common::temp_dir("gymflow-plans-report");
    let path = common::write_file(
        &dir,
        "plans.csv",
        &format!(
            "{}\nOk,,,,,,,,,,7,2,\n\"Unclosed,,,,,,,,,,7,2,\n",
            WORKOUT_PLAN_HEADER
        ),
    );

    let imported = import_workout_plans(&path).unwrap();
    assert_eq!(imported.rows.len(), 1);
    assert_eq!(imported.report.skipped.len(), 1);
    assert_eq!(imported.report.skipped[0].line, 3);
    assert_eq!(imported.report.skipped[0].reason, RowError::UnterminatedQuote);
}

#[test]
fn test_stray_quote_mid_file_keeps_following_rows() {
    let dir = common::temp_dir("gymflow-plans-stray-quote");
    let path = common::write_file(
        &dir,
        "plans.csv",
        &format!(
            "{}\n\"Unclosed,,,,,,,,,,7,2,\nGood,,,,,,,,,,7,2,\nGood2,,,,,,,,,,7,2,\n",
            WORKOUT_PLAN_HEADER
        ),
    );

    let imported = import_workout_plans(&path).unwrap();
    let titles: Vec<_> = imported.rows.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["Good", "Good2"]);
    assert_eq!(imported.report.skipped.len(), 1);
    assert_eq!(imported.report.skipped[0].line, 2);
    assert_eq!(imported.report.skipped[0].reason, RowError::UnterminatedQuote);
}

#[test]
fn test_latin1_row_is_skipped_not_fatal() {
    let dir = common::temp_dir("gymflow-plans-latin1");
    let path = dir.join("plans.csv");
    let mut bytes = format!("{}\nFirst,,,,,,,,,,7,2,\n", WORKOUT_PLAN_HEADER).into_bytes();
    bytes.extend_from_slice(b"Caf\xe9 circuit,,,,,,,,,,7,2,\nLater,,,,,,,,,,7,2,\n");
    std::fs::write(&path, bytes).unwrap();

    let imported = import_workout_plans(&path).unwrap();
    let titles: Vec<_> = imported.rows.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["First", "Later"]);
    assert_eq!(imported.report.skipped[0].line, 3);
    assert_eq!(imported.report.skipped[0].reason, RowError::InvalidEncoding);
}

#[test]
fn test_export_refuses_rows_that_cannot_be_imported() {
    let dir = common::temp_dir("gymflow-plans-invalid-export");
    let path = dir.join("plans.csv");
    let plans = vec![common::minimal_plan("Fine"), WorkoutPlan::new("", 0, 2)];

    let err = export_workout_plans(&plans, &path).unwrap_err();
    assert!(matches!(&err, AppError::Validation(msg) if msg.starts_with("row 2:")));
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert!(!path.exists());
}
