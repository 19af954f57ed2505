//! Validation engine: evaluates a draft against the field schema.
//!
//! Pure functions of the draft; no network or persistent side effects.
//! Re-run on every field mutation, so evaluation stays O(number of fields).

use serde::Serialize;

use wellness_model::{Field, WellnessDraft, WellnessInput};

/// A single field failing its constraint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldIssue {
    /// Which field failed.
    pub field: Field,
    /// Human-readable reason, suitable for per-field display.
    pub message: String,
}

/// Validity of a whole draft: one issue per failing field, in form order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ValidationReport {
    pub issues: Vec<FieldIssue>,
}

impl ValidationReport {
    /// Aggregate validity: the logical AND over all fields.
    pub fn form_is_valid(&self) -> bool {
        self.issues.is_empty()
    }

    /// Per-field validity for the presentation layer.
    pub fn field_is_valid(&self, field: Field) -> bool {
        self.issue_for(field).is_none()
    }

    /// The issue for a field, if it currently fails its constraint.
    pub fn issue_for(&self, field: Field) -> Option<&FieldIssue> {
        self.issues.iter().find(|issue| issue.field == field)
    }
}

/// Evaluate every field of `draft` against the schema.
pub fn validate(draft: &WellnessDraft) -> ValidationReport {
    let mut issues = Vec::new();
    for field in Field::ALL {
        if let Some(issue) = check_field(draft, field) {
            issues.push(issue);
        }
    }
    ValidationReport { issues }
}

fn check_field(draft: &WellnessDraft, field: Field) -> Option<FieldIssue> {
    match field {
        Field::Gender => check_choice(field, draft.gender.is_some()),
        Field::Occupation => check_choice(field, draft.occupation.is_some()),
        Field::WorkMode => check_choice(field, draft.work_mode.is_some()),
        Field::Age => check_number(field, draft.age),
        Field::ScreenTimeHours => check_number(field, draft.screen_time_hours),
        Field::WorkScreenHours => check_number(field, draft.work_screen_hours),
        Field::LeisureScreenHours => check_number(field, draft.leisure_screen_hours),
        Field::SleepHours => check_number(field, draft.sleep_hours),
        Field::SleepQuality => check_number(field, draft.sleep_quality),
        Field::StressLevel => check_number(field, draft.stress_level),
        Field::Productivity => check_number(field, draft.productivity),
        Field::ExerciseMinutesPerWeek => check_number(field, draft.exercise_minutes_per_week),
        Field::SocialHoursPerWeek => check_number(field, draft.social_hours_per_week),
    }
}

fn check_choice(field: Field, present: bool) -> Option<FieldIssue> {
    if present {
        return None;
    }
    Some(missing(field))
}

fn check_number(field: Field, value: Option<f64>) -> Option<FieldIssue> {
    let constraint = field.numeric_constraint()?;
    let value = match value {
        Some(value) => value,
        None => return Some(missing(field)),
    };
    constraint
        .violation(value)
        .map(|message| FieldIssue { field, message })
}

fn missing(field: Field) -> FieldIssue {
    FieldIssue {
        field,
        message: "required field is not set".to_string(),
    }
}

/// Convert a valid draft into a complete [`WellnessInput`].
///
/// Returns the validation report instead when any field fails, so the caller
/// can surface per-field validity. The orchestrator obtains its transport
/// payload exclusively through here, which keeps partial records away from
/// the network.
pub fn finalize(draft: &WellnessDraft) -> Result<WellnessInput, ValidationReport> {
    let report = validate(draft);
    if report.form_is_valid()
        && let Some(input) = complete(draft)
    {
        return Ok(input);
    }
    Err(report)
}

/// Assemble the complete record. Every cast here is guarded by the schema:
/// integer fields were checked for whole-number values within exact-double
/// range, bounded fields for their inclusive bounds.
fn complete(draft: &WellnessDraft) -> Option<WellnessInput> {
    Some(WellnessInput {
        age: as_u64(draft.age?)?,
        gender: draft.gender?,
        occupation: draft.occupation?,
        work_mode: draft.work_mode?,
        screen_time_hours: draft.screen_time_hours?,
        work_screen_hours: draft.work_screen_hours?,
        leisure_screen_hours: draft.leisure_screen_hours?,
        sleep_hours: draft.sleep_hours?,
        sleep_quality: as_u8(draft.sleep_quality?)?,
        stress_level: as_u8(draft.stress_level?)?,
        productivity: as_u8(draft.productivity?)?,
        exercise_minutes_per_week: draft.exercise_minutes_per_week?,
        social_hours_per_week: draft.social_hours_per_week?,
    })
}

fn as_u64(value: f64) -> Option<u64> {
    if value.is_finite() && value.fract() == 0.0 && (0.0..=u64::MAX as f64).contains(&value) {
        Some(value as u64)
    } else {
        None
    }
}

fn as_u8(value: f64) -> Option<u8> {
    if value.is_finite() && value.fract() == 0.0 && (0.0..=f64::from(u8::MAX)).contains(&value) {
        Some(value as u8)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wellness_model::{Gender, Occupation, WorkMode};

    fn valid_draft() -> WellnessDraft {
        WellnessDraft {
            age: Some(30.0),
            gender: Some(Gender::Male),
            occupation: Some(Occupation::Employed),
            work_mode: Some(WorkMode::Remote),
            screen_time_hours: Some(8.0),
            work_screen_hours: Some(6.0),
            leisure_screen_hours: Some(2.0),
            sleep_hours: Some(7.0),
            sleep_quality: Some(4.0),
            stress_level: Some(5.0),
            productivity: Some(70.0),
            exercise_minutes_per_week: Some(150.0),
            social_hours_per_week: Some(5.0),
        }
    }

    #[test]
    fn empty_draft_reports_every_field() {
        let report = validate(&WellnessDraft::new());
        assert!(!report.form_is_valid());
        assert_eq!(report.issues.len(), Field::ALL.len());
        for field in Field::ALL {
            assert!(!report.field_is_valid(field));
        }
    }

    #[test]
    fn valid_draft_has_no_issues() {
        let report = validate(&valid_draft());
        assert!(report.form_is_valid());
        assert!(report.issues.is_empty());
    }

    #[test]
    fn out_of_range_sleep_quality_is_invalid_without_failing() {
        let mut draft = valid_draft();
        draft.sleep_quality = Some(6.0);
        let report = validate(&draft);
        assert!(!report.form_is_valid());
        assert!(!report.field_is_valid(Field::SleepQuality));
        // Every other field stays independently valid.
        for field in Field::ALL {
            if field != Field::SleepQuality {
                assert!(report.field_is_valid(field), "{field} should be valid");
            }
        }
        let issue = report.issue_for(Field::SleepQuality).unwrap();
        assert!(issue.message.contains("above the maximum"));
    }

    #[test]
    fn fractional_age_is_invalid() {
        let mut draft = valid_draft();
        draft.age = Some(30.5);
        let report = validate(&draft);
        assert!(!report.field_is_valid(Field::Age));
    }

    #[test]
    fn negative_hours_are_invalid() {
        let mut draft = valid_draft();
        draft.sleep_hours = Some(-1.0);
        assert!(!validate(&draft).field_is_valid(Field::SleepHours));
    }

    #[test]
    fn finalize_converts_a_valid_draft() {
        let input = finalize(&valid_draft()).unwrap();
        assert_eq!(input.age, 30);
        assert_eq!(input.gender, Gender::Male);
        assert_eq!(input.sleep_quality, 4);
        assert_eq!(input.stress_level, 5);
        assert_eq!(input.productivity, 70);
        assert_eq!(input.exercise_minutes_per_week, 150.0);
    }

    #[test]
    fn finalize_rejects_an_invalid_draft() {
        let mut draft = valid_draft();
        draft.stress_level = Some(11.0);
        let report = finalize(&draft).unwrap_err();
        assert!(!report.form_is_valid());
        assert!(!report.field_is_valid(Field::StressLevel));
    }

    #[test]
    fn report_serializes_with_snake_case_field_names() {
        let mut draft = valid_draft();
        draft.work_mode = None;
        let report = validate(&draft);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["issues"][0]["field"], "work_mode");
    }
}
