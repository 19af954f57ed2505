//! Result types and argument conversions for the CLI.

use wellness_model::{Gender, Occupation, WorkMode};
use wellness_validate::ValidationReport;

use crate::cli::{GenderArg, OccupationArg, WorkModeArg};

/// Outcome of one `predict` invocation.
#[derive(Debug)]
pub enum PredictOutcome {
    /// The endpoint answered with an index.
    Scored { index: f64 },
    /// The record failed validation; nothing was sent.
    Invalid { report: ValidationReport },
    /// The exchange failed; the generic user-facing message.
    Failed { message: String },
}

impl From<GenderArg> for Gender {
    fn from(arg: GenderArg) -> Self {
        match arg {
            GenderArg::Male => Gender::Male,
            GenderArg::Female => Gender::Female,
        }
    }
}

impl From<OccupationArg> for Occupation {
    fn from(arg: OccupationArg) -> Self {
        match arg {
            OccupationArg::Employed => Occupation::Employed,
            OccupationArg::Student => Occupation::Student,
            OccupationArg::SelfEmployed => Occupation::SelfEmployed,
            OccupationArg::Unemployed => Occupation::Unemployed,
            OccupationArg::Retired => Occupation::Retired,
        }
    }
}

impl From<WorkModeArg> for WorkMode {
    fn from(arg: WorkModeArg) -> Self {
        match arg {
            WorkModeArg::Remote => WorkMode::Remote,
            WorkModeArg::InPerson => WorkMode::InPerson,
            WorkModeArg::Hybrid => WorkMode::Hybrid,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arg_conversions_preserve_wire_strings() {
        assert_eq!(
            Occupation::from(OccupationArg::SelfEmployed).as_str(),
            "Self-employed"
        );
        assert_eq!(WorkMode::from(WorkModeArg::InPerson).as_str(), "In-person");
        assert_eq!(Gender::from(GenderArg::Female).as_str(), "Female");
    }
}
