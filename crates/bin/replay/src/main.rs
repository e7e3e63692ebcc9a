//! # tunerdash-replay
//!
//! Composition root that replays recorded telemetry through the dashboard
//! core and prints what the page would show.
//!
//! ## Responsibilities
//! - Load configuration (config file, env vars)
//! - Install the `tracing` subscriber
//! - Build the in-memory page described by the configuration
//! - Wire the view synchronizer onto it
//! - Feed every recorded frame (NDJSON, file or stdin) through the synchronizer
//! - Print the final node states
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no dashboard logic belongs here.

mod config;
mod render;
mod replay;

use anyhow::Context;
use tokio::io::BufReader;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::ParseError;

use tunerdash_adapter_memory::InMemoryPage;
use tunerdash_app::services::view_synchronizer::ViewSynchronizer;
use tunerdash_domain::catalog::NodeKey;

use config::{Config, PageConfig};

fn build_page(config: &PageConfig) -> InMemoryPage {
    let mut page = InMemoryPage::full();
    for _ in 1..config.status_indicators {
        page = page.with_node(NodeKey::StatusIndicator);
    }
    if config.status_indicators == 0 {
        page = page.without(NodeKey::StatusIndicator);
    }
    for key in &config.missing {
        page = page.without(*key);
    }
    if let Some(number) = &config.device_number {
        page = page.with_value(NodeKey::DeviceNumber, number);
    }
    page
}

const FALLBACK_FILTER: &str = "info";

/// Parse the configured filter, falling back to `info` when it is invalid.
fn log_filter(raw: &str) -> (EnvFilter, Option<ParseError>) {
    match EnvFilter::try_new(raw) {
        Ok(filter) => (filter, None),
        Err(err) => (EnvFilter::new(FALLBACK_FILTER), Some(err)),
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("loading configuration")?;

    let (filter, filter_error) = log_filter(&config.logging.filter);
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    if let Some(err) = filter_error {
        warn!(
            filter = %config.logging.filter,
            error = %err,
            fallback = FALLBACK_FILTER,
            "invalid log filter"
        );
    }

    let synchronizer = ViewSynchronizer::new(build_page(&config.page));

    let summary = if config.replay.input == "-" {
        replay::replay(BufReader::new(tokio::io::stdin()), &synchronizer).await?
    } else {
        let file = tokio::fs::File::open(&config.replay.input)
            .await
            .with_context(|| format!("opening {}", config.replay.input))?;
        replay::replay(BufReader::new(file), &synchronizer).await?
    };

    info!(
        dashboard_updates = summary.dashboard_updates,
        state_updates = summary.state_updates,
        ignored = summary.ignored,
        rejected = summary.rejected,
        "replay finished"
    );

    println!(
        "{}",
        render::render(synchronizer.target(), config.replay.output)?
    );

    Ok(())
}
