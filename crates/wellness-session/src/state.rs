//! Request lifecycle state for one form session.

/// Single source of truth for the submission's progress.
///
/// Each variant carries exactly the data needed for that state. Created as
/// `Idle` at session start; transitions only through the submit protocol.
/// There is no terminal state: a session can always re-submit after a
/// response.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum RequestState {
    /// Nothing submitted yet this session.
    #[default]
    Idle,
    /// A request is in flight (shows a spinner); further submits are
    /// rejected until it resolves.
    Loading,
    /// The endpoint answered with a wellness index.
    Succeeded {
        /// The mental wellness index from the response.
        index: f64,
    },
    /// The exchange failed; the user may retry.
    Failed {
        /// Generic user-facing message.
        message: String,
    },
}

impl RequestState {
    /// True while a request is in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// The index, if the last submission succeeded.
    #[must_use]
    pub fn index(&self) -> Option<f64> {
        match self {
            Self::Succeeded { index } => Some(*index),
            _ => None,
        }
    }

    /// The user-facing message, if the last submission failed.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Failed { message } => Some(message),
            _ => None,
        }
    }
}
