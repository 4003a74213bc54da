//! View surface
//!
//! The controller never talks to a widget toolkit directly; it drives this
//! trait. The demo binary renders to the console, tests record calls.

/// UI surface: one trigger control, one candidate list, one transient
/// notification area.
pub trait ViewSurface {
    /// Enable or disable the speak trigger.
    fn set_trigger_enabled(&mut self, enabled: bool);

    /// Replace the displayed candidate list wholesale.
    fn show_candidates(&mut self, candidates: &[String]);

    /// Show a transient status/echo message.
    fn notify(&mut self, message: &str);
}

/// Console rendering for the demo binary.
#[derive(Default)]
pub struct ConsoleView;

impl ViewSurface for ConsoleView {
    fn set_trigger_enabled(&mut self, enabled: bool) {
        if enabled {
            println!("🎤 Speak trigger ready");
        } else {
            println!("🚫 Speak trigger disabled");
        }
    }

    fn show_candidates(&mut self, candidates: &[String]) {
        println!("── Did you say? ──");
        for (i, word) in candidates.iter().enumerate() {
            println!("  [{}] {}", i + 1, word);
        }
        if candidates.is_empty() {
            println!("  (no candidates)");
        }
    }

    fn notify(&mut self, message: &str) {
        println!("💬 {message}");
    }
}
