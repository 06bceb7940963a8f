//! The visual-layer state machine.
//!
//! Owns the current [`LayerState`] and issues add/remove/navigate commands
//! to a [`MapSurface`]. Invariant: the base layer and the selection layers
//! (highlight, nearby) are never present at the same time, and the nearby
//! layer exists only while a selection does.
//!
//! Surface commands are fire-and-forget: a rejected add/remove is logged at
//! WARN and the state transition proceeds without rollback or retry.

use crate::surface::MapSurface;
use pinpoint_core::layer::{LayerId, LayerSpec};
use pinpoint_core::Feature;

/// Which visual layers are active.
#[derive(Debug, Clone, PartialEq)]
pub enum LayerState {
    /// All features shown, nothing selected.
    Base,
    /// Exactly one highlighted feature; base hidden.
    Selected(Feature),
    /// Highlighted feature plus its non-empty nearby set; base hidden.
    SelectedWithNearby(Feature, Vec<Feature>),
}

pub struct LayerStateMachine {
    state: LayerState,
    select_zoom: f64,
}

impl LayerStateMachine {
    /// Starts in [`LayerState::Base`]; call [`clear_to_base`] once at
    /// startup to place the base layer on the surface.
    ///
    /// [`clear_to_base`]: LayerStateMachine::clear_to_base
    pub fn new(select_zoom: f64) -> Self {
        Self {
            state: LayerState::Base,
            select_zoom,
        }
    }

    pub fn state(&self) -> &LayerState {
        &self.state
    }

    pub fn selected(&self) -> Option<&Feature> {
        match &self.state {
            LayerState::Base => None,
            LayerState::Selected(f) | LayerState::SelectedWithNearby(f, _) => Some(f),
        }
    }

    /// Transition to `Base`: drop selection layers, ensure the base layer is
    /// present with the given full collection. Idempotent.
    pub fn clear_to_base(&mut self, surface: &mut dyn MapSurface, collection: &[Feature]) {
        tracing::debug!(from = ?state_name(&self.state), "layers: clear to base");

        self.remove_selection_layers(surface);
        if !surface.contains(LayerId::Base) {
            command(surface.add_layer(LayerSpec::base(collection.to_vec())), "add base");
        }
        self.state = LayerState::Base;
    }

    /// Transition to `Selected` / `SelectedWithNearby`: replace any previous
    /// selection layers, hide the base layer, highlight `feature`, navigate
    /// to it, and show the nearby layer iff `nearby` is non-empty — all one
    /// transition step.
    ///
    /// A feature without a coordinate is still highlighted but not navigated
    /// to (there is nowhere to go).
    pub fn select(&mut self, surface: &mut dyn MapSurface, feature: Feature, nearby: Vec<Feature>) {
        tracing::debug!(
            feature = %feature.label(),
            nearby = nearby.len(),
            "layers: select"
        );

        self.remove_selection_layers(surface);
        if surface.contains(LayerId::Base) {
            command(surface.remove_layer(LayerId::Base), "remove base");
        }

        command(
            surface.add_layer(LayerSpec::highlight(feature.clone())),
            "add highlight",
        );
        if let Some(coord) = feature.coord {
            command(surface.go_to(coord, self.select_zoom), "navigate");
        }

        if nearby.is_empty() {
            self.state = LayerState::Selected(feature);
        } else {
            command(
                surface.add_layer(LayerSpec::nearby(nearby.clone())),
                "add nearby",
            );
            self.state = LayerState::SelectedWithNearby(feature, nearby);
        }
    }

    fn remove_selection_layers(&mut self, surface: &mut dyn MapSurface) {
        for id in [LayerId::Highlight, LayerId::Nearby] {
            if surface.contains(id) {
                command(surface.remove_layer(id), "remove selection layer");
            }
        }
    }
}

/// Fire-and-forget command boundary: log rejections, never roll back.
fn command(result: anyhow::Result<()>, op: &str) {
    if let Err(err) = result {
        tracing::warn!(%err, op, "surface rejected command");
    }
}

fn state_name(state: &LayerState) -> &'static str {
    match state {
        LayerState::Base => "Base",
        LayerState::Selected(_) => "Selected",
        LayerState::SelectedWithNearby(..) => "SelectedWithNearby",
    }
}
