//! The in-progress wellness record.

use crate::enums::{Gender, Occupation, WorkMode};

/// A wellness record while the user is still editing it.
///
/// Every field is optional and numeric fields are raw doubles, so partial or
/// out-of-range states are representable without failing. The validation
/// engine decides submittability; only finalization produces a
/// [`crate::WellnessInput`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WellnessDraft {
    pub age: Option<f64>,
    pub gender: Option<Gender>,
    pub occupation: Option<Occupation>,
    pub work_mode: Option<WorkMode>,
    pub screen_time_hours: Option<f64>,
    pub work_screen_hours: Option<f64>,
    pub leisure_screen_hours: Option<f64>,
    pub sleep_hours: Option<f64>,
    pub sleep_quality: Option<f64>,
    pub stress_level: Option<f64>,
    pub productivity: Option<f64>,
    pub exercise_minutes_per_week: Option<f64>,
    pub social_hours_per_week: Option<f64>,
}

impl WellnessDraft {
    /// Fresh draft with every field unset.
    pub fn new() -> Self {
        Self::default()
    }
}
