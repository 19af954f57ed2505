//! Type-safe enumerations for the closed choice fields.
//!
//! The scoring endpoint represents these as strings; the variants here carry
//! explicit serde renames wherever the wire string is not a Rust identifier
//! (`Self-employed`, `In-person`). Variant order is display order in the
//! original form.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Gender of the user supplying the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// All options in display order.
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    /// Returns the wire string expected by the scoring endpoint.
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Gender {
    type Err = String;

    /// Parse a gender string (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "MALE" => Ok(Gender::Male),
            "FEMALE" => Ok(Gender::Female),
            _ => Err(format!("Unknown gender: {s}")),
        }
    }
}

/// Occupation category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Occupation {
    Employed,
    Student,
    #[serde(rename = "Self-employed")]
    SelfEmployed,
    Unemployed,
    Retired,
}

impl Occupation {
    /// All options in display order.
    pub const ALL: [Occupation; 5] = [
        Occupation::Employed,
        Occupation::Student,
        Occupation::SelfEmployed,
        Occupation::Unemployed,
        Occupation::Retired,
    ];

    /// Returns the wire string expected by the scoring endpoint.
    pub fn as_str(&self) -> &'static str {
        match self {
            Occupation::Employed => "Employed",
            Occupation::Student => "Student",
            Occupation::SelfEmployed => "Self-employed",
            Occupation::Unemployed => "Unemployed",
            Occupation::Retired => "Retired",
        }
    }
}

impl fmt::Display for Occupation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Occupation {
    type Err = String;

    /// Parse an occupation string. Accepts the wire form with either a
    /// hyphen or a space in "Self-employed" (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "EMPLOYED" => Ok(Occupation::Employed),
            "STUDENT" => Ok(Occupation::Student),
            "SELF-EMPLOYED" | "SELF EMPLOYED" => Ok(Occupation::SelfEmployed),
            "UNEMPLOYED" => Ok(Occupation::Unemployed),
            "RETIRED" => Ok(Occupation::Retired),
            _ => Err(format!("Unknown occupation: {s}")),
        }
    }
}

/// Working arrangement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkMode {
    Remote,
    #[serde(rename = "In-person")]
    InPerson,
    Hybrid,
}

impl WorkMode {
    /// All options in display order.
    pub const ALL: [WorkMode; 3] = [WorkMode::Remote, WorkMode::InPerson, WorkMode::Hybrid];

    /// Returns the wire string expected by the scoring endpoint.
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkMode::Remote => "Remote",
            WorkMode::InPerson => "In-person",
            WorkMode::Hybrid => "Hybrid",
        }
    }
}

impl fmt::Display for WorkMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for WorkMode {
    type Err = String;

    /// Parse a work mode string (case-insensitive, hyphen or space).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "REMOTE" => Ok(WorkMode::Remote),
            "IN-PERSON" | "IN PERSON" => Ok(WorkMode::InPerson),
            "HYBRID" => Ok(WorkMode::Hybrid),
            _ => Err(format!("Unknown work mode: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_case_insensitive() {
        assert_eq!("male".parse::<Gender>().unwrap(), Gender::Male);
        assert_eq!(
            "self-employed".parse::<Occupation>().unwrap(),
            Occupation::SelfEmployed
        );
        assert_eq!(
            "SELF EMPLOYED".parse::<Occupation>().unwrap(),
            Occupation::SelfEmployed
        );
        assert_eq!("in-person".parse::<WorkMode>().unwrap(), WorkMode::InPerson);
        assert!("freelancer".parse::<Occupation>().is_err());
    }

    #[test]
    fn test_wire_strings() {
        assert_eq!(Occupation::SelfEmployed.as_str(), "Self-employed");
        assert_eq!(WorkMode::InPerson.as_str(), "In-person");
        assert_eq!(
            serde_json::to_string(&Occupation::SelfEmployed).unwrap(),
            "\"Self-employed\""
        );
        assert_eq!(
            serde_json::to_string(&WorkMode::InPerson).unwrap(),
            "\"In-person\""
        );
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for occupation in Occupation::ALL {
            assert_eq!(
                occupation.to_string().parse::<Occupation>().unwrap(),
                occupation
            );
        }
        for mode in WorkMode::ALL {
            assert_eq!(mode.to_string().parse::<WorkMode>().unwrap(), mode);
        }
    }
}
