//! Test doubles — a scripted feature source and a recording map surface.

use pinpoint_core::layer::{LayerId, LayerSpec};
use pinpoint_core::{Feature, LonLat};
use pinpoint_source::{FeatureSource, FetchFuture, SourceError};
use pinpoint_tui::surface::MapSurface;
use std::collections::{HashSet, VecDeque};
use std::sync::Mutex;
use std::time::Duration;

// ---------------------------------------------------------------------------
// FakeSource
// ---------------------------------------------------------------------------

/// One scripted `fetch()` call: sleep for `delay`, then yield `result`.
///
/// Delays use `tokio::time::sleep`, so harnesses driven with
/// `start_paused = true` control completion order deterministically.
pub struct ScriptedFetch {
    pub delay: Duration,
    pub result: Result<Vec<Feature>, SourceError>,
}

/// A fetch that succeeds after `delay_ms`.
pub fn fetch_ok(delay_ms: u64, features: Vec<Feature>) -> ScriptedFetch {
    ScriptedFetch {
        delay: Duration::from_millis(delay_ms),
        result: Ok(features),
    }
}

/// A fetch that fails after `delay_ms` with a 502.
pub fn fetch_err(delay_ms: u64) -> ScriptedFetch {
    ScriptedFetch {
        delay: Duration::from_millis(delay_ms),
        result: Err(SourceError::Status(hyper::StatusCode::BAD_GATEWAY)),
    }
}

/// Source that replays a script of fetches in order. Panics when the script
/// runs dry — a harness issuing more fetches than scripted is a test bug.
pub struct FakeSource {
    script: Mutex<VecDeque<ScriptedFetch>>,
}

impl FakeSource {
    pub fn new(script: Vec<ScriptedFetch>) -> Self {
        Self {
            script: Mutex::new(script.into()),
        }
    }
}

impl FeatureSource for FakeSource {
    fn fetch(&self) -> FetchFuture<'_> {
        let step = self
            .script
            .lock()
            .unwrap()
            .pop_front()
            .expect("FakeSource script exhausted");
        Box::pin(async move {
            tokio::time::sleep(step.delay).await;
            step.result
        })
    }
}

// ---------------------------------------------------------------------------
// RecordingSurface
// ---------------------------------------------------------------------------

/// Every command the state machine issued, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceCall {
    /// Layer id + feature count of the added spec.
    Add(LayerId, usize),
    Remove(LayerId),
    GoTo(LonLat, f64),
}

/// Map surface double: records calls and tracks the live layer set.
///
/// With `reject_commands` set, every command returns an error *and* leaves
/// the layer set untouched, modelling a renderer that went away.
#[derive(Default)]
pub struct RecordingSurface {
    pub calls: Vec<SurfaceCall>,
    layers: HashSet<LayerId>,
    pub reject_commands: bool,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has(&self, id: LayerId) -> bool {
        self.layers.contains(&id)
    }

    /// The live layer set as a sorted, readable list.
    pub fn live_layers(&self) -> Vec<LayerId> {
        let mut ids: Vec<LayerId> = self.layers.iter().copied().collect();
        ids.sort_by_key(|id| format!("{id}"));
        ids
    }
}

impl MapSurface for RecordingSurface {
    fn add_layer(&mut self, spec: LayerSpec) -> anyhow::Result<()> {
        self.calls.push(SurfaceCall::Add(spec.id, spec.features.len()));
        if self.reject_commands {
            anyhow::bail!("surface offline");
        }
        self.layers.insert(spec.id);
        Ok(())
    }

    fn remove_layer(&mut self, id: LayerId) -> anyhow::Result<()> {
        self.calls.push(SurfaceCall::Remove(id));
        if self.reject_commands {
            anyhow::bail!("surface offline");
        }
        self.layers.remove(&id);
        Ok(())
    }

    fn contains(&self, id: LayerId) -> bool {
        self.layers.contains(&id)
    }

    fn go_to(&mut self, center: LonLat, zoom: f64) -> anyhow::Result<()> {
        self.calls.push(SurfaceCall::GoTo(center, zoom));
        if self.reject_commands {
            anyhow::bail!("surface offline");
        }
        Ok(())
    }
}
