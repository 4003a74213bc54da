//! Speak Repeat - Main Entry Point
//!
//! Console demo of the speak-and-repeat flow against the simulated host:
//! "say" a phrase by typing the candidate words the recognizer would return,
//! pick one from the list, and the synthesis engine speaks it back.

use anyhow::Result;
use std::io::{self, Write};
use std::sync::Arc;
use tokio::sync::mpsc::{self, UnboundedReceiver};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use speak_repeat::{
    AppConfig, ConsoleView, HostEvent, InteractionController, SimulatedHost, SpeechHost,
    ViewSurface,
};

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    info!("Starting Speak Repeat v{}", env!("CARGO_PKG_VERSION"));

    println!("╔══════════════════════════════════════════════╗");
    println!("║       Speak Repeat - console demo            ║");
    println!("╚══════════════════════════════════════════════╝");
    println!();

    // Step 1: Load configuration
    println!("[1/3] Loading configuration...");
    let config = AppConfig::load_or_default()?;
    info!("Configuration loaded");

    // Step 2: Wire up the simulated host and the controller
    println!("[2/3] Initializing host services...");
    let (events_tx, mut events_rx) = mpsc::unbounded_channel();
    let host = Arc::new(SimulatedHost::new(events_tx));
    let shared: Arc<dyn SpeechHost> = host.clone();
    let mut controller = InteractionController::new(shared, ConsoleView, &config)?;

    // Step 3: Startup contract - capability query and voice-data check
    println!("[3/3] Activating...");
    controller.activate()?;
    pump(&mut controller, &mut events_rx)?;
    println!();

    println!("══════════════════════════════════════════════");
    println!("  Commands:");
    println!("  say <word> [word...]  feed the recognizer and trigger it");
    println!("  <number>              speak the numbered candidate back");
    println!("  l                     show the current candidate list");
    println!("  q                     quit");
    println!("══════════════════════════════════════════════");
    println!();

    loop {
        print!(">>> ");
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        let line = input.trim();

        if let Some(rest) = line.strip_prefix("say ") {
            let candidates: Vec<String> = rest.split_whitespace().map(String::from).collect();
            if candidates.is_empty() {
                println!("❓ Nothing to say - usage: say cat car cap");
                continue;
            }
            host.queue_utterance(candidates);
            if let Err(e) = controller.trigger_recognition() {
                error!("Failed to start recognition: {e}");
                println!("❌ Recognition failed to start: {e}");
            }
            pump(&mut controller, &mut events_rx)?;
        } else if let Ok(n) = line.parse::<usize>() {
            if n == 0 || n > controller.candidates().len() {
                println!("❓ No candidate {n} - type 'l' to see the list");
                continue;
            }
            controller.select_candidate(n - 1)?;
            pump(&mut controller, &mut events_rx)?;
        } else {
            match line {
                "l" | "list" => {
                    let mut view = ConsoleView;
                    view.show_candidates(controller.candidates());
                }
                "q" | "quit" | "exit" => {
                    info!("User requested exit");
                    println!("👋 Bye");
                    break;
                }
                "" => {}
                other => {
                    println!("❓ Unknown command: {other}");
                    println!("   Try: say <words...>, a number, l, or q");
                }
            }
        }
    }

    Ok(())
}

/// Drain queued host completions into the controller.
fn pump(
    controller: &mut InteractionController<ConsoleView>,
    events: &mut UnboundedReceiver<HostEvent>,
) -> Result<()> {
    while let Ok(event) = events.try_recv() {
        controller.handle_event(event)?;
    }
    Ok(())
}

fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "speak_repeat=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
