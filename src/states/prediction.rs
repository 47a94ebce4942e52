//! Prediction State
//!
//! Tracks the single request/response cycle: idle, in flight, a classified
//! result, or a failure to show instead of a score.

use crate::domain::PredictionOutcome;
use crate::error::{Error, Result};
use crate::services::run_in_tokio;
use crate::states::SpiGlobalStore;
use gpui::App;
use tracing::{debug, info};

/// Failure categories shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Non-200 response; detail is the response body
    Server,
    /// Endpoint could not be reached
    Unreachable,
    /// 200 response that is not a valid prediction
    Malformed,
    /// Any other transport failure
    Request,
}

impl FailureKind {
    /// Translation key under the `result` namespace
    pub fn i18n_key(&self) -> &'static str {
        match self {
            FailureKind::Server => "error_server",
            FailureKind::Unreachable => "error_unreachable",
            FailureKind::Malformed => "error_malformed",
            FailureKind::Request => "error_request",
        }
    }
}

/// User-facing failure of one prediction cycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredictionFailure {
    pub kind: FailureKind,
    /// Verbatim detail; for `Server` this is the exact response body
    pub detail: String,
}

impl From<&Error> for PredictionFailure {
    fn from(error: &Error) -> Self {
        match error {
            Error::Server { body, .. } => Self {
                kind: FailureKind::Server,
                detail: body.clone(),
            },
            Error::Unreachable { endpoint } => Self {
                kind: FailureKind::Unreachable,
                detail: endpoint.clone(),
            },
            Error::MalformedResponse { message } => Self {
                kind: FailureKind::Malformed,
                detail: message.clone(),
            },
            other => Self {
                kind: FailureKind::Request,
                detail: other.to_string(),
            },
        }
    }
}

/// Status of the current prediction cycle
#[derive(Debug, Clone, Default, PartialEq)]
pub enum PredictionStatus {
    /// Nothing submitted yet
    #[default]
    Idle,
    /// Request in flight
    Loading,
    /// Classified result
    Ready(PredictionOutcome),
    /// Request failed; no score is shown
    Failed(PredictionFailure),
}

/// Prediction cycle state
#[derive(Debug, Clone, Default)]
pub struct PredictionState {
    status: PredictionStatus,
    /// Number of submissions started this session
    submissions: u64,
}

impl PredictionState {
    pub fn new() -> Self {
        Self::default()
    }

    // ==================== Getters ====================

    pub fn status(&self) -> &PredictionStatus {
        &self.status
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.status, PredictionStatus::Loading)
    }

    pub fn outcome(&self) -> Option<&PredictionOutcome> {
        match &self.status {
            PredictionStatus::Ready(outcome) => Some(outcome),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&PredictionFailure> {
        match &self.status {
            PredictionStatus::Failed(failure) => Some(failure),
            _ => None,
        }
    }

    pub fn submissions(&self) -> u64 {
        self.submissions
    }

    // ==================== Transitions ====================

    /// Start a cycle; returns false while another request is in flight
    pub fn begin(&mut self) -> bool {
        if self.is_loading() {
            return false;
        }
        self.status = PredictionStatus::Loading;
        self.submissions += 1;
        true
    }

    /// Complete the in-flight cycle
    pub fn finish(&mut self, result: Result<PredictionOutcome>) {
        self.status = match result {
            Ok(outcome) => PredictionStatus::Ready(outcome),
            Err(error) => PredictionStatus::Failed(PredictionFailure::from(&error)),
        };
    }

    /// Clear the result panel; ignored while a request is in flight
    pub fn reset(&mut self) {
        if !self.is_loading() {
            self.status = PredictionStatus::Idle;
        }
    }
}

// ==================== Submission ====================

/// Snapshot the form and send it to the prediction service.
///
/// The result lands in the global `PredictionState`. A submit while a request
/// is in flight is ignored.
pub fn submit_prediction(cx: &mut App) {
    let store = cx.global::<SpiGlobalStore>().clone();
    let prediction_state = store.prediction_state();

    let submission = prediction_state.update(cx, |state, cx| {
        let started = state.begin();
        if started {
            cx.notify();
        }
        started.then(|| state.submissions())
    });
    let Some(submission) = submission else {
        debug!("Prediction already in flight, submit ignored");
        return;
    };

    let request = store.form_state().read(cx).request();
    let client = store.client().clone();
    info!(submission, ?request, endpoint = client.endpoint(), "Submitting prediction");

    cx.spawn(async move |cx| {
        let result = run_in_tokio(async move { client.predict(&request).await }).await;
        prediction_state
            .update(cx, |state, cx| {
                state.finish(result);
                cx.notify();
            })
            .ok();
    })
    .detach();
}

/// Restore default form values and clear the result panel
pub fn reset_prediction_form(cx: &mut App) {
    let store = cx.global::<SpiGlobalStore>().clone();
    store.form_state().update(cx, |form, cx| {
        form.reset();
        cx.notify();
    });
    store.prediction_state().update(cx, |state, cx| {
        state.reset();
        cx.notify();
    });
    debug!("Form reset");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{PerformanceLevel, PredictionResponse};
    use uuid::Uuid;

    fn outcome(score: f64) -> PredictionOutcome {
        PredictionOutcome::new(Uuid::nil(), PredictionResponse { prediction: score })
    }

    #[test]
    fn begin_is_rejected_while_in_flight() {
        let mut state = PredictionState::new();
        assert!(state.begin());
        assert!(!state.begin());
        assert_eq!(state.submissions(), 1);

        state.finish(Ok(outcome(55.0)));
        assert!(state.begin());
        assert_eq!(state.submissions(), 2);
    }

    #[test]
    fn success_shows_score_and_level() {
        let mut state = PredictionState::new();
        state.begin();
        state.finish(Ok(outcome(72.5)));

        let outcome = state.outcome().expect("outcome");
        assert_eq!(outcome.level, PerformanceLevel::Good);
        assert_eq!(outcome.score_text(), "72.50");
        assert!(state.failure().is_none());
    }

    #[test]
    fn server_error_keeps_body_verbatim_without_score() {
        let mut state = PredictionState::new();
        state.begin();
        state.finish(Err(Error::Server {
            status: 404,
            body: "model error".to_string(),
        }));

        let failure = state.failure().expect("failure");
        assert_eq!(failure.kind, FailureKind::Server);
        assert_eq!(failure.detail, "model error");
        assert!(state.outcome().is_none());
    }

    #[test]
    fn unreachable_and_malformed_map_to_their_kinds() {
        let unreachable = PredictionFailure::from(&Error::Unreachable {
            endpoint: "http://127.0.0.1:5000/predict_api".to_string(),
        });
        assert_eq!(unreachable.kind, FailureKind::Unreachable);

        let malformed = PredictionFailure::from(&Error::MalformedResponse {
            message: "missing field `prediction`".to_string(),
        });
        assert_eq!(malformed.kind, FailureKind::Malformed);

        let other = PredictionFailure::from(&Error::Request {
            message: "connection reset".to_string(),
        });
        assert_eq!(other.kind, FailureKind::Request);
    }

    #[test]
    fn reset_does_not_interrupt_in_flight_request() {
        let mut state = PredictionState::new();
        state.begin();
        state.reset();
        assert!(state.is_loading());

        state.finish(Ok(outcome(12.0)));
        state.reset();
        assert_eq!(state.status(), &PredictionStatus::Idle);
    }
}
