//! Validation engine for wellness input records.
//!
//! Given a draft and the field schema from `wellness-model`, computes
//! per-field and aggregate validity, and finalizes submittable drafts into
//! complete input records. Validation failures are values surfaced per
//! field; they never propagate to the network layer and are never logged as
//! system errors.

mod engine;

pub use engine::{FieldIssue, ValidationReport, finalize, validate};

#[cfg(test)]
mod proptests {
    use proptest::prelude::*;

    use super::*;
    use wellness_model::{Field, Gender, Occupation, WellnessDraft, WorkMode};

    /// Independent per-field check, written directly against the schema so
    /// the property does not share code with the engine under test.
    fn field_ok(field: Field, draft: &WellnessDraft) -> bool {
        let value = match field {
            Field::Gender => return draft.gender.is_some(),
            Field::Occupation => return draft.occupation.is_some(),
            Field::WorkMode => return draft.work_mode.is_some(),
            Field::Age => draft.age,
            Field::ScreenTimeHours => draft.screen_time_hours,
            Field::WorkScreenHours => draft.work_screen_hours,
            Field::LeisureScreenHours => draft.leisure_screen_hours,
            Field::SleepHours => draft.sleep_hours,
            Field::SleepQuality => draft.sleep_quality,
            Field::StressLevel => draft.stress_level,
            Field::Productivity => draft.productivity,
            Field::ExerciseMinutesPerWeek => draft.exercise_minutes_per_week,
            Field::SocialHoursPerWeek => draft.social_hours_per_week,
        };
        match (value, field.numeric_constraint()) {
            (Some(value), Some(constraint)) => constraint.accepts(value),
            _ => false,
        }
    }

    fn number() -> impl Strategy<Value = Option<f64>> {
        prop::option::of(-5.0..200.0f64)
    }

    proptest! {
        /// Validity is compositional: the aggregate is the AND over fields,
        /// and each field's validity is independent of the others.
        #[test]
        fn validity_is_and_over_fields(
            age in number(),
            screen_time_hours in number(),
            work_screen_hours in number(),
            leisure_screen_hours in number(),
            sleep_hours in number(),
            sleep_quality in number(),
            stress_level in number(),
            productivity in number(),
            exercise_minutes_per_week in number(),
            social_hours_per_week in number(),
            gender in prop::option::of(Just(Gender::Female)),
            occupation in prop::option::of(Just(Occupation::Student)),
            work_mode in prop::option::of(Just(WorkMode::Hybrid)),
        ) {
            let draft = WellnessDraft {
                age,
                gender,
                occupation,
                work_mode,
                screen_time_hours,
                work_screen_hours,
                leisure_screen_hours,
                sleep_hours,
                sleep_quality,
                stress_level,
                productivity,
                exercise_minutes_per_week,
                social_hours_per_week,
            };
            let report = validate(&draft);
            for field in Field::ALL {
                prop_assert_eq!(report.field_is_valid(field), field_ok(field, &draft));
            }
            let expected = Field::ALL.iter().all(|field| field_ok(*field, &draft));
            prop_assert_eq!(report.form_is_valid(), expected);
            prop_assert_eq!(finalize(&draft).is_ok(), expected);
        }
    }
}
