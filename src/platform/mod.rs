//! Platform speech-service boundary
//!
//! The host platform's recognizer and synthesizer are consumed through
//! opaque request/callback contracts. `SpeechHost` covers the capability
//! query and the three asynchronous requests; completions come back as
//! `HostEvent`s on the channel the host was built with. Engines are created
//! synchronously but report readiness through the same channel.

use anyhow::Result;

use crate::speech::{QueuePolicy, RecognitionRequest};

mod simulated;

pub use simulated::{ConsoleEngine, SimulatedHost};

/// Host platform speech services.
pub trait SpeechHost: Send + Sync {
    /// Does a handler exist for speech recognition?
    fn recognition_available(&self) -> bool;

    /// Start listening. Resolves later as `RecognitionCompleted` or
    /// `RecognitionFailed` carrying the request's id.
    fn start_recognition(&self, request: RecognitionRequest) -> Result<()>;

    /// Verify synthesis voice data. Resolves as `VoiceDataCheckCompleted`.
    fn check_voice_data(&self) -> Result<()>;

    /// Send the user to the voice-data installation flow. Fire-and-forget;
    /// no response is consumed.
    fn open_voice_data_installer(&self) -> Result<()>;

    /// Create a synthesis engine handle. Initialization completes later as
    /// `EngineInitialized`.
    fn create_engine(&self) -> Result<Box<dyn SynthesisEngine>>;
}

/// A constructed synthesis engine.
pub trait SynthesisEngine: Send {
    /// Set the spoken-language locale, e.g. `en-GB`.
    fn set_language(&mut self, locale: &str) -> Result<()>;

    /// Speak an utterance. Fire-and-forget; with `QueuePolicy::Flush` any
    /// pending utterance is discarded first.
    fn speak(&mut self, text: &str, policy: QueuePolicy) -> Result<()>;
}
