//! Business logic module

mod interaction_controller;

pub use interaction_controller::InteractionController;
