//! Dungeon client binary.
//!
//! Composition root: reads configuration from the environment, installs
//! logging, builds a [`runtime::Session`] and hands stdin/stdout to the
//! interactive loop.
//!
//! ```bash
//! DUNGEON_SEED=42 DUNGEON_PLAYERS=2 cargo run -p dungeon-client
//! ```
mod app;
mod input;
mod logging;
mod render;

use anyhow::Result;
use runtime::{RuntimeConfig, Session};

use crate::app::App;
use crate::render::ViewOptions;

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = RuntimeConfig::from_env();
    let _guard = logging::setup_logging()?;

    tracing::info!("Starting Dungeon client");
    tracing::info!("Content directory: {}", config.data_dir.display());

    let session = Session::builder().runtime_config(&config).build()?;
    tracing::info!(
        "Session ready: seed={} players={}",
        session.seed(),
        config.players
    );

    let app = App::new(session, config.players, ViewOptions::from_env());
    app.run(std::io::stdin().lock(), std::io::stdout().lock())
}
