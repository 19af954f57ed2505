//! Wire payload types for the scoring exchange.
//!
//! Field names match the endpoint's request model exactly, including the
//! range suffixes on the rating fields.

use serde::{Deserialize, Serialize};

use wellness_model::{Gender, Occupation, WellnessInput, WorkMode};

/// JSON body POSTed to the scoring endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreRequest {
    pub age: u64,
    pub gender: Gender,
    pub occupation: Occupation,
    pub work_mode: WorkMode,
    pub screen_time_hours: f64,
    pub work_screen_hours: f64,
    pub leisure_screen_hours: f64,
    pub sleep_hours: f64,
    pub sleep_quality_1_5: u8,
    pub stress_level_0_10: u8,
    pub productivity_0_100: u8,
    pub exercise_minutes_per_week: f64,
    pub social_hours_per_week: f64,
}

impl From<&WellnessInput> for ScoreRequest {
    fn from(input: &WellnessInput) -> Self {
        Self {
            age: input.age,
            gender: input.gender,
            occupation: input.occupation,
            work_mode: input.work_mode,
            screen_time_hours: input.screen_time_hours,
            work_screen_hours: input.work_screen_hours,
            leisure_screen_hours: input.leisure_screen_hours,
            sleep_hours: input.sleep_hours,
            sleep_quality_1_5: input.sleep_quality,
            stress_level_0_10: input.stress_level,
            productivity_0_100: input.productivity,
            exercise_minutes_per_week: input.exercise_minutes_per_week,
            social_hours_per_week: input.social_hours_per_week,
        }
    }
}

/// The single numeric result returned by the scoring endpoint.
///
/// The index is opaque to this client; the service produces it clamped to
/// [0, 100].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreResult {
    pub mental_wellness_index: f64,
}
