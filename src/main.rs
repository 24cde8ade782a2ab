//! Prevention Sort - HIV combination prevention sorting game
//!
//! A terminal game built on a pure state machine: pick up an intervention,
//! place it in a prevention category, then check the answers.

mod config;
mod content;
mod runtime;
mod state_machine;
mod tui;

use config::{GameConfig, DEFAULT_LOG_FILTER, SEED_ENV};
use content::Content;
use runtime::GameSession;
use std::fs::File;
use std::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = GameConfig::from_env();

    // The terminal belongs to the UI, so logs only go to a file when one is configured
    let file_layer = match &config.log_path {
        Some(path) => Some(
            tracing_subscriber::fmt::layer()
                .json()
                .with_current_span(false)
                .with_span_list(false)
                .with_writer(Mutex::new(File::create(path)?)),
        ),
        None => None,
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(file_layer)
        .init();

    if let Some(raw) = &config.invalid_seed {
        tracing::warn!(value = %raw, var = SEED_ENV, "Ignoring unparsable seed");
    }

    let content = match &config.content_path {
        Some(path) => {
            tracing::info!(path = %path.display(), "Loading content");
            Content::from_file(path)?
        }
        None => content::builtin(),
    };

    let session = GameSession::with_seed(content, config.seed);
    let mut app = tui::App::new(session);
    tui::run(&mut app)?;

    tracing::info!("Game closed");
    Ok(())
}
