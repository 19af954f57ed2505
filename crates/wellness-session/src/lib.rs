//! Submission orchestration for the wellness form.
//!
//! Mediates between user intent (the submit action), the validation engine,
//! and the injected transport, and owns the [`RequestState`] lifecycle:
//! `Idle -> Loading -> Succeeded | Failed -> Loading -> ...`, with at most
//! one request in flight per session.

mod session;
mod state;

pub use session::{FormSession, SubmitGate, SubmitOutcome};
pub use state::RequestState;
