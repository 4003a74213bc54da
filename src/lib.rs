//! Speak Repeat - speak-and-repeat voice demo
//!
//! A minimal educational app: one trigger starts speech recognition through
//! the host platform, the ranked candidate transcriptions are shown as a
//! selectable list, and selecting one speaks it back through the host
//! synthesis engine. Recognition and synthesis themselves are platform
//! services behind the `platform` traits; this crate is the event
//! sequencing in between.

pub mod business;
pub mod data;
pub mod platform;
pub mod speech;
pub mod ui;

pub use business::InteractionController;
pub use data::AppConfig;
pub use platform::{SimulatedHost, SpeechHost, SynthesisEngine};
pub use speech::{EngineState, HostEvent, QueuePolicy, RecognitionRequest, RequestId};
pub use ui::{ConsoleView, ViewSurface};
