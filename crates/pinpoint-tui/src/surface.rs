//! The map surface — the rendering collaborator consumed by the layer state
//! machine.
//!
//! [`MapSurface`] is the add/remove/navigate contract; [`CanvasMap`] is the
//! in-process implementation backing the TUI's map pane: a registry of
//! [`LayerSpec`]s keyed by [`LayerId`] plus a viewport (center + zoom). Test
//! harnesses substitute a recording double.

use pinpoint_core::layer::{LayerId, LayerSpec};
use pinpoint_core::LonLat;
use std::collections::HashMap;

use crate::event::Direction;

/// Rendering contract: named layers in, viewport navigation out.
///
/// Calls are fire-and-forget from the state machine's point of view — a
/// failing surface never rolls back a state transition.
pub trait MapSurface {
    fn add_layer(&mut self, spec: LayerSpec) -> anyhow::Result<()>;
    fn remove_layer(&mut self, id: LayerId) -> anyhow::Result<()>;
    fn contains(&self, id: LayerId) -> bool;
    fn go_to(&mut self, center: LonLat, zoom: f64) -> anyhow::Result<()>;
}

const MIN_ZOOM: f64 = 1.0;
const MAX_ZOOM: f64 = 20.0;

/// Layer registry + viewport rendered by the map pane widget.
pub struct CanvasMap {
    layers: HashMap<LayerId, LayerSpec>,
    pub center: LonLat,
    pub zoom: f64,
}

impl CanvasMap {
    pub fn new(center: LonLat, zoom: f64) -> Self {
        Self {
            layers: HashMap::new(),
            center,
            zoom,
        }
    }

    pub fn layer(&self, id: LayerId) -> Option<&LayerSpec> {
        self.layers.get(&id)
    }

    /// Layers bottom-to-top: base under nearby under highlight.
    pub fn draw_order(&self) -> impl Iterator<Item = &LayerSpec> {
        [LayerId::Base, LayerId::Nearby, LayerId::Highlight]
            .into_iter()
            .filter_map(|id| self.layers.get(&id))
    }

    /// Longitude span of the viewport in degrees, tile-pyramid style:
    /// zoom 0 shows the whole 360°, each level halves it.
    pub fn lon_span(&self) -> f64 {
        360.0 / 2f64.powf(self.zoom)
    }

    /// Pan the viewport one step in the given direction.
    pub fn pan(&mut self, direction: Direction) {
        let step = self.lon_span() / 10.0;
        match direction {
            Direction::Up => self.center.lat += step,
            Direction::Down => self.center.lat -= step,
            Direction::Left => self.center.lon -= step,
            Direction::Right => self.center.lon += step,
        }
    }

    pub fn zoom_in(&mut self) {
        self.zoom = (self.zoom + 1.0).min(MAX_ZOOM);
    }

    pub fn zoom_out(&mut self) {
        self.zoom = (self.zoom - 1.0).max(MIN_ZOOM);
    }
}

impl MapSurface for CanvasMap {
    fn add_layer(&mut self, spec: LayerSpec) -> anyhow::Result<()> {
        tracing::debug!(layer = %spec.id, features = spec.features.len(), "surface: add layer");
        self.layers.insert(spec.id, spec);
        Ok(())
    }

    fn remove_layer(&mut self, id: LayerId) -> anyhow::Result<()> {
        tracing::debug!(layer = %id, "surface: remove layer");
        self.layers.remove(&id);
        Ok(())
    }

    fn contains(&self, id: LayerId) -> bool {
        self.layers.contains_key(&id)
    }

    fn go_to(&mut self, center: LonLat, zoom: f64) -> anyhow::Result<()> {
        tracing::debug!(%center, zoom, "surface: go to");
        self.center = center;
        self.zoom = zoom;
        Ok(())
    }
}
