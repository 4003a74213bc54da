//! Simulated speech host
//!
//! Stands in for a real platform recognizer and synthesizer so the demo
//! binary (and tests) can exercise the full interaction flow without a
//! microphone or a TTS backend. Candidate lists are queued by the driver
//! before each trigger; completions are delivered over the event channel
//! like any real host would deliver them.

use std::collections::VecDeque;
use std::sync::Mutex;

use anyhow::{anyhow, Result};
use tokio::sync::mpsc::UnboundedSender;

use crate::platform::{SpeechHost, SynthesisEngine};
use crate::speech::{HostEvent, QueuePolicy, RecognitionRequest};

/// Scripted host: recognition results come from a queue instead of audio.
pub struct SimulatedHost {
    events: UnboundedSender<HostEvent>,
    recognition_available: bool,
    voice_data_installed: bool,
    queued_candidates: Mutex<VecDeque<Vec<String>>>,
}

impl SimulatedHost {
    pub fn new(events: UnboundedSender<HostEvent>) -> Self {
        Self {
            events,
            recognition_available: true,
            voice_data_installed: true,
            queued_candidates: Mutex::new(VecDeque::new()),
        }
    }

    /// Report the recognition capability as missing.
    pub fn without_recognition(mut self) -> Self {
        self.recognition_available = false;
        self
    }

    /// Report the voice-data check as failing.
    pub fn without_voice_data(mut self) -> Self {
        self.voice_data_installed = false;
        self
    }

    /// Queue the candidate list the next recognition request will return,
    /// ranked best-first. Stands in for speaking into the microphone.
    pub fn queue_utterance(&self, candidates: Vec<String>) {
        self.queued_candidates
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push_back(candidates);
    }

    fn send(&self, event: HostEvent) -> Result<()> {
        self.events
            .send(event)
            .map_err(|_| anyhow!("host event channel closed"))
    }
}

impl SpeechHost for SimulatedHost {
    fn recognition_available(&self) -> bool {
        self.recognition_available
    }

    fn start_recognition(&self, request: RecognitionRequest) -> Result<()> {
        tracing::info!(
            id = %request.id,
            prompt = %request.prompt,
            "recognition started"
        );
        let next = self
            .queued_candidates
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .pop_front();
        match next {
            Some(mut candidates) => {
                candidates.truncate(request.max_results);
                self.send(HostEvent::RecognitionCompleted {
                    request: request.id,
                    candidates,
                })
            }
            None => {
                tracing::debug!(id = %request.id, "nothing queued, recognition fails");
                self.send(HostEvent::RecognitionFailed {
                    request: request.id,
                })
            }
        }
    }

    fn check_voice_data(&self) -> Result<()> {
        self.send(HostEvent::VoiceDataCheckCompleted {
            passed: self.voice_data_installed,
        })
    }

    fn open_voice_data_installer(&self) -> Result<()> {
        tracing::info!("opening voice-data installation flow");
        println!("⬇️  Voice data missing - opening the installer. Relaunch once it finishes.");
        Ok(())
    }

    fn create_engine(&self) -> Result<Box<dyn SynthesisEngine>> {
        let engine = ConsoleEngine::default();
        // Handle is handed out synchronously; readiness arrives as an event.
        self.send(HostEvent::EngineInitialized { ok: true })?;
        Ok(Box::new(engine))
    }
}

/// Synthesis engine that "speaks" to the console.
#[derive(Default)]
pub struct ConsoleEngine {
    locale: Option<String>,
}

impl SynthesisEngine for ConsoleEngine {
    fn set_language(&mut self, locale: &str) -> Result<()> {
        tracing::info!(locale, "engine locale set");
        self.locale = Some(locale.to_string());
        Ok(())
    }

    fn speak(&mut self, text: &str, policy: QueuePolicy) -> Result<()> {
        if policy == QueuePolicy::Flush {
            tracing::debug!("flushing utterance queue");
        }
        let locale = self.locale.as_deref().unwrap_or("unset");
        println!("🔊 [{locale}] {text}");
        Ok(())
    }
}
