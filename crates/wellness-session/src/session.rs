//! The form session: one draft, one transport, one request lifecycle.

use tracing::{debug, info, warn};

use wellness_client::{ClientError, ScoreResult, ScoreTransport};
use wellness_model::{WellnessDraft, WellnessInput};
use wellness_validate::{ValidationReport, finalize, validate};

use crate::state::RequestState;

/// Whether a submit attempt was allowed to proceed.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitGate {
    /// The draft finalized; the caller must perform the exchange and feed
    /// the outcome back through [`FormSession::complete_submit`].
    Ready(WellnessInput),
    /// The draft fails validation; nothing changed and nothing was sent.
    /// The caller should rely on per-field validity instead.
    Invalid(ValidationReport),
    /// A request is already in flight; duplicate submits are dropped.
    InFlight,
}

/// How a composed [`FormSession::submit`] call ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The exchange ran; inspect [`FormSession::state`] for the result.
    Completed,
    /// Rejected without a state transition: the draft is not submittable.
    Invalid,
    /// Rejected without a state transition: a request was already loading.
    InFlight,
}

/// Owns the draft being edited, the request state, and the injected
/// transport for the lifetime of one form session.
///
/// Single-threaded by design: the transport call is the sole suspension
/// point, and because at most one request is in flight, the resolution that
/// arrives is always the resolution of the currently-loading request.
#[derive(Debug)]
pub struct FormSession<T> {
    draft: WellnessDraft,
    state: RequestState,
    transport: T,
}

impl<T: ScoreTransport> FormSession<T> {
    /// New session with an empty draft.
    pub fn new(transport: T) -> Self {
        Self::with_draft(transport, WellnessDraft::new())
    }

    /// New session starting from an existing draft.
    pub fn with_draft(transport: T, draft: WellnessDraft) -> Self {
        Self {
            draft,
            state: RequestState::Idle,
            transport,
        }
    }

    /// Read access to the current field values.
    pub fn draft(&self) -> &WellnessDraft {
        &self.draft
    }

    /// Write access for the presentation layer's field updates.
    pub fn draft_mut(&mut self) -> &mut WellnessDraft {
        &mut self.draft
    }

    /// The current request state.
    pub fn state(&self) -> &RequestState {
        &self.state
    }

    /// Per-field and aggregate validity of the current draft.
    ///
    /// Cheap enough to re-evaluate on every field mutation.
    pub fn validation(&self) -> ValidationReport {
        validate(&self.draft)
    }

    /// Gate a submit attempt.
    ///
    /// On `Ready` the state has moved to `Loading` (clearing any prior
    /// result or error) and the returned record must be scored exactly once,
    /// with the outcome fed back through [`Self::complete_submit`]. The
    /// other gates leave the state untouched.
    pub fn begin_submit(&mut self) -> SubmitGate {
        if self.state.is_loading() {
            debug!("submit ignored: a request is already in flight");
            return SubmitGate::InFlight;
        }
        match finalize(&self.draft) {
            Ok(input) => {
                self.state = RequestState::Loading;
                SubmitGate::Ready(input)
            }
            Err(report) => {
                debug!(
                    invalid_fields = report.issues.len(),
                    "submit ignored: draft is not submittable"
                );
                SubmitGate::Invalid(report)
            }
        }
    }

    /// Resolve the in-flight request.
    ///
    /// Success surfaces the index; any failure collapses to the generic
    /// user-facing message while the cause is retained here for diagnostics.
    pub fn complete_submit(&mut self, result: Result<ScoreResult, ClientError>) {
        match result {
            Ok(score) => {
                info!(
                    index = score.mental_wellness_index,
                    "scoring request succeeded"
                );
                self.state = RequestState::Succeeded {
                    index: score.mental_wellness_index,
                };
            }
            Err(error) => {
                if error.is_protocol_violation() {
                    warn!(%error, "scoring response violated the expected shape");
                } else {
                    warn!(%error, "scoring request failed");
                }
                self.state = RequestState::Failed {
                    message: error.user_message().to_string(),
                };
            }
        }
    }

    /// Submit the current draft: gate, score once, resolve.
    pub async fn submit(&mut self) -> SubmitOutcome {
        match self.begin_submit() {
            SubmitGate::Ready(input) => {
                let result = self.transport.score(&input).await;
                self.complete_submit(result);
                SubmitOutcome::Completed
            }
            SubmitGate::Invalid(_) => SubmitOutcome::Invalid,
            SubmitGate::InFlight => SubmitOutcome::InFlight,
        }
    }
}
