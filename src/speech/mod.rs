//! Speech request and event types
//!
//! Typed requests and completion events for the host speech services.
//! Each asynchronous platform call resolves to its own `HostEvent` variant,
//! so there is no shared numeric request-code channel to collide on;
//! recognition responses additionally carry the id of the request that
//! produced them.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use uuid::Uuid;

/// Correlation id for one recognition request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestId(Uuid);

impl RequestId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Language model the recognizer should apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageModel {
    /// Free-form dictation.
    FreeForm,
    /// Web-search style queries.
    WebSearch,
}

#[derive(Debug, Error)]
#[error("unknown language model '{0}', expected 'free_form' or 'web_search'")]
pub struct UnknownLanguageModel(String);

impl FromStr for LanguageModel {
    type Err = UnknownLanguageModel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "free_form" => Ok(Self::FreeForm),
            "web_search" => Ok(Self::WebSearch),
            other => Err(UnknownLanguageModel(other.to_string())),
        }
    }
}

/// One recognition request handed to the host recognizer.
#[derive(Debug, Clone)]
pub struct RecognitionRequest {
    pub id: RequestId,
    /// Identity of the requesting application.
    pub calling_package: String,
    /// Prompt shown to the user while the recognizer listens.
    pub prompt: String,
    pub language_model: LanguageModel,
    /// Upper bound on returned candidates.
    pub max_results: usize,
}

/// Queueing policy for a speak request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueuePolicy {
    /// Discard any queued or in-progress utterance before speaking.
    Flush,
    /// Append after whatever is already queued.
    Add,
}

/// Completion events delivered by the host platform.
///
/// Every asynchronous call the controller issues resolves to exactly one of
/// these; the controller handles each event once and ignores anything it no
/// longer expects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    /// Recognition finished with a ranked candidate list.
    RecognitionCompleted {
        request: RequestId,
        /// Platform confidence order; must be preserved as-is.
        candidates: Vec<String>,
    },
    /// Recognition ended without a usable result.
    RecognitionFailed { request: RequestId },
    /// Voice-data check came back.
    VoiceDataCheckCompleted { passed: bool },
    /// The synthesis engine finished initializing.
    EngineInitialized { ok: bool },
}

/// Lifecycle of the synthesis engine.
///
/// `Uninitialized` moves to `Ready` on a successful init callback and to
/// `Failed` on anything else; both are terminal for the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EngineState {
    #[default]
    Uninitialized,
    Ready,
    Failed,
}

impl EngineState {
    /// Whether speak requests will be served.
    pub fn is_ready(self) -> bool {
        matches!(self, EngineState::Ready)
    }

    /// Whether the init callback is still outstanding or never coming.
    pub fn is_terminal(self) -> bool {
        !matches!(self, EngineState::Uninitialized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_model_parses_known_names() {
        assert_eq!(
            "free_form".parse::<LanguageModel>().unwrap(),
            LanguageModel::FreeForm
        );
        assert_eq!(
            "web_search".parse::<LanguageModel>().unwrap(),
            LanguageModel::WebSearch
        );
    }

    #[test]
    fn language_model_rejects_unknown_names() {
        let err = "freeform".parse::<LanguageModel>().unwrap_err();
        assert!(err.to_string().contains("freeform"));
    }

    #[test]
    fn request_ids_are_unique() {
        assert_ne!(RequestId::new(), RequestId::new());
    }

    #[test]
    fn engine_state_predicates() {
        assert!(!EngineState::Uninitialized.is_terminal());
        assert!(EngineState::Ready.is_ready());
        assert!(EngineState::Failed.is_terminal());
        assert!(!EngineState::Failed.is_ready());
    }
}
