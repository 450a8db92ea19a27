pub mod attendance;
pub mod workout_plan;

pub use attendance::{parse_attended, AttendanceRecord, AttendedLabels};
pub use workout_plan::WorkoutPlan;
