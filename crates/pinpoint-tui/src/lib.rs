//! pinpoint TUI — ratatui application shell.
//!
//! The shell owns the single event loop: keyboard events go in, sequenced
//! fetch outcomes come back from background tasks, and all layer/surface
//! mutation happens here on the UI thread.

pub mod app;
pub mod controller;
pub mod event;
pub mod layers;
pub mod surface;
pub mod theme;
pub mod widgets;

pub use app::App;

use pinpoint_core::config::Config;
use pinpoint_source::{FeatureStore, HttpSource};
use std::sync::Arc;

/// Build the store against `url`, do the initial fetch, and run the TUI.
///
/// A failed initial fetch is not fatal: the app starts with an empty
/// collection and the failure lands in the status line.
pub async fn run(config: Config, url: String) -> anyhow::Result<()> {
    let source = HttpSource::new(&url)?;
    let store = Arc::new(FeatureStore::new(Box::new(source)));

    let initial = store.refresh().await;
    let theme = theme::Theme::load_default();
    App::new(config, theme, store, initial).run().await
}
