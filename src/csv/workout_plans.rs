use std::io::{BufRead, Write};
use std::path::Path;

use crate::error::{Result, RowError};
use crate::models::WorkoutPlan;

use super::codec::{self, too_few_fields, CsvRecord, EncodeOptions, Imported};
use super::fields::{
    format_int, format_timestamp, optional_int, optional_text, optional_timestamp, required_id,
};

pub const WORKOUT_PLAN_HEADER: &str = "Title,Description,Difficulty,MuscleGroup,WorkoutType,DurationMinutes,EquipmentNeeded,TargetSets,TargetReps,RestSeconds,MemberId,TrainerId,CreatedAt";

impl CsvRecord for WorkoutPlan {
    const HEADER: &'static str = WORKOUT_PLAN_HEADER;
    const MIN_FIELDS: usize = 13;

    fn to_fields(&self, _options: &EncodeOptions) -> Vec<String> {
        vec![
            self.title.clone(),
            self.description.clone().unwrap_or_default(),
            self.difficulty.clone().unwrap_or_default(),
            self.muscle_group.clone().unwrap_or_default(),
            self.workout_type.clone().unwrap_or_default(),
            format_int(self.duration_minutes),
            self.equipment_needed.clone().unwrap_or_default(),
            format_int(self.target_sets),
            format_int(self.target_reps),
            format_int(self.rest_seconds),
            self.member_id.to_string(),
            self.trainer_id.to_string(),
            format_timestamp(self.created_at.as_ref()),
        ]
    }

    fn from_fields(line: usize, fields: &[String]) -> std::result::Result<Self, RowError> {
        let [
            title,
            description,
            difficulty,
            muscle_group,
            workout_type,
            duration,
            equipment,
            sets,
            reps,
            rest,
            member_id,
            trainer_id,
            created_at,
            ..,
        ] = fields
        else {
            return Err(too_few_fields::<Self>(fields));
        };

        let mut plan = WorkoutPlan {
            id: None,
            title: title.clone(),
            description: optional_text(description),
            difficulty: optional_text(difficulty),
            muscle_group: optional_text(muscle_group),
            workout_type: optional_text(workout_type),
            duration_minutes: optional_int("DurationMinutes", duration)?,
            equipment_needed: optional_text(equipment),
            target_sets: optional_int("TargetSets", sets)?,
            target_reps: optional_int("TargetReps", reps)?,
            rest_seconds: optional_int("RestSeconds", rest)?,
            member_id: required_id("MemberId", member_id)?,
            trainer_id: required_id("TrainerId", trainer_id)?,
            created_at: None,
        };
        plan.validate()?;
        plan.created_at = optional_timestamp(line, created_at);
        Ok(plan)
    }

    fn check(&self) -> std::result::Result<(), RowError> {
        self.validate()
    }
}

pub fn write_workout_plans<W: Write>(plans: &[WorkoutPlan], writer: &mut W) -> Result<usize> {
    codec::write_records(plans, writer, &EncodeOptions::default())
}

pub fn export_workout_plans(plans: &[WorkoutPlan], path: &Path) -> Result<usize> {
    codec::export_records(plans, path, &EncodeOptions::default())
}

pub fn read_workout_plans<R: BufRead>(reader: R) -> Result<Vec<WorkoutPlan>> {
    codec::read_records(reader)
}

pub fn import_workout_plans(path: &Path) -> Result<Imported<WorkoutPlan>> {
    codec::import_records(path)
}
