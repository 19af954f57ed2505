//! Field identifiers for the wellness input form.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One input field of the wellness form.
///
/// Serializes to the snake_case name used in validation reports; the wire
/// payload names (with their range suffixes) live in the client crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Age,
    Gender,
    Occupation,
    WorkMode,
    ScreenTimeHours,
    WorkScreenHours,
    LeisureScreenHours,
    SleepHours,
    SleepQuality,
    StressLevel,
    Productivity,
    ExerciseMinutesPerWeek,
    SocialHoursPerWeek,
}

impl Field {
    /// All fields in form display order.
    pub const ALL: [Field; 13] = [
        Field::Age,
        Field::Gender,
        Field::Occupation,
        Field::WorkMode,
        Field::ScreenTimeHours,
        Field::WorkScreenHours,
        Field::LeisureScreenHours,
        Field::SleepHours,
        Field::SleepQuality,
        Field::StressLevel,
        Field::Productivity,
        Field::ExerciseMinutesPerWeek,
        Field::SocialHoursPerWeek,
    ];

    /// Returns the snake_case field name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Age => "age",
            Field::Gender => "gender",
            Field::Occupation => "occupation",
            Field::WorkMode => "work_mode",
            Field::ScreenTimeHours => "screen_time_hours",
            Field::WorkScreenHours => "work_screen_hours",
            Field::LeisureScreenHours => "leisure_screen_hours",
            Field::SleepHours => "sleep_hours",
            Field::SleepQuality => "sleep_quality",
            Field::StressLevel => "stress_level",
            Field::Productivity => "productivity",
            Field::ExerciseMinutesPerWeek => "exercise_minutes_per_week",
            Field::SocialHoursPerWeek => "social_hours_per_week",
        }
    }

    /// Human-readable label for presentation.
    pub fn label(&self) -> &'static str {
        match self {
            Field::Age => "Age",
            Field::Gender => "Gender",
            Field::Occupation => "Occupation",
            Field::WorkMode => "Work mode",
            Field::ScreenTimeHours => "Screen time (hours/day)",
            Field::WorkScreenHours => "Work screen time (hours/day)",
            Field::LeisureScreenHours => "Leisure screen time (hours/day)",
            Field::SleepHours => "Sleep (hours/night)",
            Field::SleepQuality => "Sleep quality (1-5)",
            Field::StressLevel => "Stress level (0-10)",
            Field::Productivity => "Productivity (0-100)",
            Field::ExerciseMinutesPerWeek => "Exercise (minutes/week)",
            Field::SocialHoursPerWeek => "Social time (hours/week)",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
