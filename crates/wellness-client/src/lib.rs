//! HTTP transport to the remote mental wellness scoring endpoint.
//!
//! Serializes a fully-validated [`wellness_model::WellnessInput`] into the
//! wire payload, performs one POST exchange, and deserializes the response
//! into a [`ScoreResult`]. A single attempt per call: no retries, no
//! cancellation. The [`ScoreTransport`] trait is the seam the submission
//! orchestrator is written (and tested) against; [`ScoringClient`] is the
//! production implementation.

pub mod client;
pub mod config;
pub mod error;
pub mod payload;

pub use client::{ScoreTransport, ScoringClient};
pub use config::{DEFAULT_ENDPOINT, REQUEST_TIMEOUT, ScoringConfig};
pub use error::{ClientError, PREDICTION_FAILED_MESSAGE, Result};
pub use payload::{ScoreRequest, ScoreResult};
