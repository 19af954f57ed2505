//! Static field schema: constraints and option sets.
//!
//! Pure declarations with no side effects. The validation engine evaluates
//! these against a draft; the presentation layer reads them to render the
//! form.

use crate::field::Field;

/// Largest integer exactly representable in an IEEE double.
///
/// The source client holds every number as a double, so "integer" fields are
/// only meaningful up to this bound; values beyond it cannot survive the
/// wire round-trip intact.
pub const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Numeric constraint for a field: integer-ness plus inclusive bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericConstraint {
    /// The value must be a whole number.
    pub integer: bool,
    /// Inclusive lower bound.
    pub min: Option<f64>,
    /// Inclusive upper bound.
    pub max: Option<f64>,
}

impl NumericConstraint {
    /// Returns why `value` violates this constraint, or `None` if it is
    /// accepted. Out-of-range values are reported, never panicked on.
    pub fn violation(&self, value: f64) -> Option<String> {
        if !value.is_finite() {
            return Some("value is not a finite number".to_string());
        }
        if self.integer {
            if value.fract() != 0.0 {
                return Some(format!("value {value} is not a whole number"));
            }
            if value.abs() > MAX_SAFE_INTEGER {
                return Some(format!("value {value} is too large to represent exactly"));
            }
        }
        if let Some(min) = self.min
            && value < min
        {
            return Some(format!("value {value} is below the minimum {min}"));
        }
        if let Some(max) = self.max
            && value > max
        {
            return Some(format!("value {value} is above the maximum {max}"));
        }
        None
    }

    /// Returns true if `value` satisfies this constraint.
    pub fn accepts(&self, value: f64) -> bool {
        self.violation(value).is_none()
    }

    /// Human-readable description for presentation.
    pub fn describe(&self) -> String {
        let kind = if self.integer { "integer" } else { "number" };
        match (self.min, self.max) {
            (Some(min), Some(max)) => format!("{kind} in [{min}, {max}]"),
            (Some(min), None) => format!("{kind} >= {min}"),
            (None, Some(max)) => format!("{kind} <= {max}"),
            (None, None) => kind.to_string(),
        }
    }
}

/// Display option lists for the choice fields, in form order.
pub const GENDER_OPTIONS: [&str; 2] = ["Male", "Female"];
pub const OCCUPATION_OPTIONS: [&str; 5] = [
    "Employed",
    "Student",
    "Self-employed",
    "Unemployed",
    "Retired",
];
pub const WORK_MODE_OPTIONS: [&str; 3] = ["Remote", "In-person", "Hybrid"];

impl Field {
    /// Returns the numeric constraint for this field, or `None` for choice
    /// fields (whose only constraint is presence).
    pub fn numeric_constraint(&self) -> Option<NumericConstraint> {
        let constraint = match self {
            Field::Age => NumericConstraint {
                integer: true,
                min: Some(1.0),
                max: None,
            },
            Field::ScreenTimeHours
            | Field::WorkScreenHours
            | Field::LeisureScreenHours
            | Field::SleepHours
            | Field::ExerciseMinutesPerWeek
            | Field::SocialHoursPerWeek => NumericConstraint {
                integer: false,
                min: Some(0.0),
                max: None,
            },
            Field::SleepQuality => NumericConstraint {
                integer: true,
                min: Some(1.0),
                max: Some(5.0),
            },
            Field::StressLevel => NumericConstraint {
                integer: true,
                min: Some(0.0),
                max: Some(10.0),
            },
            Field::Productivity => NumericConstraint {
                integer: true,
                min: Some(0.0),
                max: Some(100.0),
            },
            Field::Gender | Field::Occupation | Field::WorkMode => return None,
        };
        Some(constraint)
    }

    /// Returns the ordered option list for choice fields, or `None` for
    /// numeric fields. Order is display order, not semantically significant.
    pub fn options(&self) -> Option<&'static [&'static str]> {
        match self {
            Field::Gender => Some(&GENDER_OPTIONS),
            Field::Occupation => Some(&OCCUPATION_OPTIONS),
            Field::WorkMode => Some(&WORK_MODE_OPTIONS),
            _ => None,
        }
    }
}
