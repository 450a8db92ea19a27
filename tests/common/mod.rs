#![allow(dead_code)]

use std::path::{Path, PathBuf};

use chrono::{NaiveDate, NaiveDateTime};

use gymflow::models::{AttendanceRecord, WorkoutPlan};

pub fn temp_dir(prefix: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("{}-{}", prefix, uuid::Uuid::new_v4()));
    std::fs::create_dir_all(&dir).expect("Failed to create temp dir");
    dir
}

pub fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).expect("Failed to write test file");
    path
}

pub fn timestamp(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, min, s)
        .unwrap()
}

// Test data creation helpers
pub fn full_plan() -> WorkoutPlan {
    WorkoutPlan {
        id: Some(42),
        title: "Upper body strength".to_string(),
        description: Some("Bench, rows and \"pull-aparts\"".to_string()),
        difficulty: Some("Intermediate".to_string()),
        muscle_group: Some("Chest".to_string()),
        workout_type: Some("Strength".to_string()),
        duration_minutes: Some(60),
        equipment_needed: Some("Barbell, bench".to_string()),
        target_sets: Some(4),
        target_reps: Some(8),
        rest_seconds: Some(120),
        member_id: 7,
        trainer_id: 3,
        created_at: Some(timestamp(2024, 5, 1, 18, 30, 0)),
    }
}

pub fn minimal_plan(title: &str) -> WorkoutPlan {
    WorkoutPlan::new(title, 11, 2)
}

pub fn attendance_records() -> Vec<AttendanceRecord> {
    vec![
        AttendanceRecord {
            id: Some(1),
            member_id: 7,
            session_id: 100,
            attended: true,
        },
        AttendanceRecord::new(8, 100, false),
        AttendanceRecord::new(9, 101, true),
    ]
}

/// Drops the identifier, which never survives an import.
pub fn without_id(mut plan: WorkoutPlan) -> WorkoutPlan {
    plan.id = None;
    plan
}
