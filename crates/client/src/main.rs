//! Roulette client binary.
//!
//! Assembles the runtime, the terminal presenter, the keyboard reader and the
//! event journal, then runs frames until the player quits.
//!
//! ```bash
//! WHEEL_SEED=7 WHEEL_ASSET_DIR=./assets cargo run -p roulette-client
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::Result;
use serde::Serialize;
use tokio::sync::oneshot;

use roulette_client::{
    CliConfig, InputHandler, JournalStats, TerminalPresenter, input, journal, logging, terminal,
};
use wheel_core::WheelLayout;
use wheel_runtime::{FileCueSource, Runtime, RuntimeConfig};

#[derive(Debug, Serialize)]
struct SessionSummary {
    session_id: String,
    seed: u64,
    exit: String,
    frames: u64,
    spins_played: u64,
    credits: u32,
    journal: JournalStats,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    // 1. Load configuration from environment
    let runtime_config = RuntimeConfig::from_env();
    let cli_config = CliConfig::from_env();
    let session_id = cli_config.session_id();

    // 2. Setup logging
    let session_dir = logging::setup_logging(&session_id)?;
    tracing::info!("Starting roulette client");
    tracing::info!("Asset dir: {}", cli_config.asset_dir.display());

    // 3. Terminal and presenter
    let layout = WheelLayout::from_config(&runtime_config.game);
    let segment_count = runtime_config.game.segment_count;
    let tui = terminal::init()?;
    let _guard = terminal::TerminalGuard;
    let presenter = TerminalPresenter::new(tui, layout, cli_config.bell);

    // 4. Runtime with background cue loading
    let runtime = Runtime::builder(presenter)
        .config(runtime_config)
        .cue_source(Arc::new(FileCueSource::new(&cli_config.asset_dir)))
        .build()?;
    let seed = runtime.seed();
    let handle = runtime.handle();

    // 5. Observers and input
    let (stop_journal, journal_stop) = oneshot::channel();
    let journal = journal::spawn(
        handle.event_bus(),
        session_dir.join(journal::JOURNAL_FILE),
        journal_stop,
    );

    let stop_input = Arc::new(AtomicBool::new(false));
    let reader = input::spawn_reader(
        handle,
        InputHandler::new(segment_count),
        Arc::clone(&stop_input),
    );

    // 6. Run until the player quits
    let finished = runtime.run().await?;
    stop_input.store(true, Ordering::Relaxed);
    let _ = stop_journal.send(());

    reader.await??;
    let journal_stats = journal.await??;

    let session = finished.game.session();
    let summary = SessionSummary {
        session_id,
        seed,
        exit: finished.summary.exit.to_string(),
        frames: finished.summary.frames,
        spins_played: session.spins_played(),
        credits: session.credits(),
        journal: journal_stats,
    };
    tracing::info!("Session summary: {}", serde_json::to_string(&summary)?);

    Ok(())
}
