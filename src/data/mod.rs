//! Data module for configuration management

mod config;

pub use config::{AppConfig, RecognitionConfig, SynthesisConfig};
