//! The fully-validated wellness record.

use crate::enums::{Gender, Occupation, WorkMode};

/// A complete wellness record in which every field satisfies its schema
/// constraint.
///
/// The submission pipeline only produces one of these by finalizing a draft
/// that passed validation, so partial records never reach the transport.
#[derive(Debug, Clone, PartialEq)]
pub struct WellnessInput {
    pub age: u64,
    pub gender: Gender,
    pub occupation: Occupation,
    pub work_mode: WorkMode,
    pub screen_time_hours: f64,
    pub work_screen_hours: f64,
    pub leisure_screen_hours: f64,
    pub sleep_hours: f64,
    /// Integer in [1, 5].
    pub sleep_quality: u8,
    /// Integer in [0, 10].
    pub stress_level: u8,
    /// Integer in [0, 100].
    pub productivity: u8,
    pub exercise_minutes_per_week: f64,
    pub social_hours_per_week: f64,
}
