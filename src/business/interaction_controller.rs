//! Interaction Controller
//!
//! Sequences the two asynchronous platform calls - speech recognition and
//! speech synthesis - and owns every piece of session state: the capability
//! flag, the engine lifecycle, the candidate list, and the pending request
//! id. All host completions arrive as typed `HostEvent`s and are handled
//! exactly once; anything the controller no longer expects is ignored.

use std::sync::Arc;

use anyhow::Result;

use crate::data::AppConfig;
use crate::platform::{SpeechHost, SynthesisEngine};
use crate::speech::{
    EngineState, HostEvent, LanguageModel, QueuePolicy, RecognitionRequest, RequestId,
};
use crate::ui::ViewSurface;

/// Glue between the host speech services and the view surface.
pub struct InteractionController<V: ViewSurface> {
    host: Arc<dyn SpeechHost>,
    view: V,
    prompt: String,
    language_model: LanguageModel,
    max_results: usize,
    locale: String,
    recognition_supported: bool,
    engine: Option<Box<dyn SynthesisEngine>>,
    engine_state: EngineState,
    candidates: Vec<String>,
    pending: Option<RequestId>,
}

impl<V: ViewSurface> InteractionController<V> {
    pub fn new(host: Arc<dyn SpeechHost>, view: V, config: &AppConfig) -> Result<Self> {
        let language_model: LanguageModel = config.recognition.language_model.parse()?;
        Ok(Self {
            host,
            view,
            prompt: config.recognition.prompt.clone(),
            language_model,
            max_results: config.recognition.max_results,
            locale: config.synthesis.locale.clone(),
            recognition_supported: false,
            engine: None,
            engine_state: EngineState::Uninitialized,
            candidates: Vec::new(),
            pending: None,
        })
    }

    /// Startup contract: query the recognition capability, then either
    /// enable the trigger and kick off the voice-data check, or disable the
    /// trigger for the session with one notice.
    pub fn activate(&mut self) -> Result<()> {
        self.recognition_supported = self.host.recognition_available();
        if self.recognition_supported {
            tracing::info!("speech recognition available");
            self.view.set_trigger_enabled(true);
            self.host.check_voice_data()?;
        } else {
            tracing::warn!("speech recognition not supported on this host");
            self.view.set_trigger_enabled(false);
            self.view.notify("Oops - Speech recognition not supported!");
        }
        Ok(())
    }

    /// User pressed the speak trigger. Issues one recognition request and
    /// returns immediately; the response arrives as a `HostEvent` carrying
    /// this request's id. A newer trigger supersedes an outstanding one.
    pub fn trigger_recognition(&mut self) -> Result<()> {
        if !self.recognition_supported {
            tracing::debug!("trigger ignored, recognition unsupported");
            return Ok(());
        }
        let request = RecognitionRequest {
            id: RequestId::new(),
            calling_package: env!("CARGO_PKG_NAME").to_string(),
            prompt: self.prompt.clone(),
            language_model: self.language_model,
            max_results: self.max_results,
        };
        tracing::info!(id = %request.id, "issuing recognition request");
        self.pending = Some(request.id);
        self.host.start_recognition(request)
    }

    /// User selected a candidate. Speaks it back with a flush-queue policy
    /// and echoes the same text as a notice. Dropped silently while the
    /// engine is not ready.
    pub fn select_candidate(&mut self, index: usize) -> Result<()> {
        let Some(word) = self.candidates.get(index) else {
            tracing::debug!(index, "selection out of range");
            return Ok(());
        };
        let text = format!("You said: {word}");
        if !self.engine_state.is_ready() {
            tracing::debug!(state = ?self.engine_state, "selection dropped, engine not ready");
            return Ok(());
        }
        if let Some(engine) = self.engine.as_mut() {
            engine.speak(&text, QueuePolicy::Flush)?;
        }
        self.view.notify(&text);
        Ok(())
    }

    /// Dispatch one host completion event.
    pub fn handle_event(&mut self, event: HostEvent) -> Result<()> {
        match event {
            HostEvent::RecognitionCompleted {
                request,
                candidates,
            } => self.on_recognition_completed(request, candidates),
            HostEvent::RecognitionFailed { request } => {
                tracing::debug!(id = %request, "recognition failed, no state change");
                Ok(())
            }
            HostEvent::VoiceDataCheckCompleted { passed } => self.on_voice_data_checked(passed),
            HostEvent::EngineInitialized { ok } => self.on_engine_initialized(ok),
        }
    }

    fn on_recognition_completed(
        &mut self,
        request: RequestId,
        candidates: Vec<String>,
    ) -> Result<()> {
        if self.pending != Some(request) {
            tracing::debug!(id = %request, "stale recognition response ignored");
            return Ok(());
        }
        tracing::info!(id = %request, count = candidates.len(), "recognition completed");
        self.pending = None;
        // Wholesale replacement, platform order preserved.
        self.candidates = candidates;
        self.view.show_candidates(&self.candidates);
        Ok(())
    }

    fn on_voice_data_checked(&mut self, passed: bool) -> Result<()> {
        if passed {
            if self.engine.is_some() {
                tracing::debug!("voice data re-checked, engine already constructed");
                return Ok(());
            }
            tracing::info!("voice data present, constructing synthesis engine");
            self.engine = Some(self.host.create_engine()?);
        } else {
            tracing::warn!("voice data missing, redirecting to installer");
            self.host.open_voice_data_installer()?;
        }
        Ok(())
    }

    fn on_engine_initialized(&mut self, ok: bool) -> Result<()> {
        if self.engine_state.is_terminal() {
            tracing::debug!(state = ?self.engine_state, "init event in terminal state ignored");
            return Ok(());
        }
        let Some(engine) = self.engine.as_mut() else {
            tracing::warn!("init event without an engine handle ignored");
            return Ok(());
        };
        if ok {
            self.engine_state = EngineState::Ready;
            if let Err(e) = engine.set_language(&self.locale) {
                // The reference ignores a failed setLanguage too.
                tracing::warn!(locale = %self.locale, "failed to set engine locale: {e}");
            }
            tracing::info!(locale = %self.locale, "synthesis engine ready");
        } else {
            self.engine_state = EngineState::Failed;
            tracing::error!("synthesis engine failed to initialize");
        }
        Ok(())
    }

    pub fn recognition_supported(&self) -> bool {
        self.recognition_supported
    }

    pub fn engine_state(&self) -> EngineState {
        self.engine_state
    }

    /// Currently displayed candidates, best-first.
    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }
}
