use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::RowError;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WorkoutPlan {
    /// Assigned by the database; `None` until the plan has been stored.
    #[serde(default)]
    pub id: Option<i64>,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub difficulty: Option<String>,
    #[serde(default)]
    pub muscle_group: Option<String>,
    #[serde(default)]
    pub workout_type: Option<String>,
    #[serde(default)]
    pub duration_minutes: Option<i32>,
    #[serde(default)]
    pub equipment_needed: Option<String>,
    #[serde(default)]
    pub target_sets: Option<i32>,
    #[serde(default)]
    pub target_reps: Option<i32>,
    #[serde(default)]
    pub rest_seconds: Option<i32>,
    pub member_id: i64,
    pub trainer_id: i64,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
}

impl WorkoutPlan {
    pub fn new(title: impl Into<String>, member_id: i64, trainer_id: i64) -> Self {
        Self {
            title: title.into(),
            member_id,
            trainer_id,
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<(), RowError> {
        if self.title.trim().is_empty() {
            return Err(RowError::Validation("title must not be empty".to_string()));
        }
        if self.member_id <= 0 {
            return Err(RowError::Validation(format!(
                "member id must be positive, got {}",
                self.member_id
            )));
        }
        if self.trainer_id <= 0 {
            return Err(RowError::Validation(format!(
                "trainer id must be positive, got {}",
                self.trainer_id
            )));
        }
        Ok(())
    }
}
