//! Layer specifications — what the map surface is asked to draw.
//!
//! A [`LayerSpec`] bundles a feature subset with a marker style and a popup
//! template. Layers are identified by the small [`LayerId`] enum and held by
//! the surface in a registry keyed on it, so there are no free-floating
//! layer handles to leak or double-remove.
//!
//! Marker styles and popup wording are the fixed renderer constants of the
//! original product: red base markers, a larger blue highlight, green nearby
//! markers.

use crate::codec;
use crate::types::Feature;

/// Registry key for a display layer. At most one layer per id exists on a
/// surface at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayerId {
    /// All features, shown when nothing is selected.
    Base,
    /// The single selected feature.
    Highlight,
    /// Features within the proximity radius of the selection.
    Nearby,
}

impl std::fmt::Display for LayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LayerId::Base => write!(f, "base"),
            LayerId::Highlight => write!(f, "highlight"),
            LayerId::Nearby => write!(f, "nearby"),
        }
    }
}

/// Simple-marker style: colour name, marker size, outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerStyle {
    pub color: &'static str,
    pub size: u16,
    pub outline_color: &'static str,
    pub outline_width: u16,
}

impl MarkerStyle {
    pub const BASE: MarkerStyle = MarkerStyle {
        color: "red",
        size: 8,
        outline_color: "white",
        outline_width: 1,
    };
    pub const HIGHLIGHT: MarkerStyle = MarkerStyle {
        color: "blue",
        size: 12,
        outline_color: "white",
        outline_width: 2,
    };
    pub const NEARBY: MarkerStyle = MarkerStyle {
        color: "green",
        size: 10,
        outline_color: "white",
        outline_width: 1,
    };
}

/// Popup template with `{attribute}` placeholders resolved per feature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopupTemplate {
    pub title: String,
    pub body: String,
}

impl PopupTemplate {
    /// Standard popup: feature name as title, category and type below.
    pub fn standard() -> Self {
        Self {
            title: "{name}".to_string(),
            body: "Category: {category}\nType: {type}".to_string(),
        }
    }

    /// Variant for the nearby layer, prefixed to mark the relationship.
    pub fn nearby() -> Self {
        Self {
            title: "{name}".to_string(),
            body: "Nearby place\nCategory: {category}\nType: {type}".to_string(),
        }
    }

    pub fn render_title(&self, feature: &Feature) -> String {
        substitute(&self.title, feature)
    }

    pub fn render_body(&self, feature: &Feature) -> String {
        substitute(&self.body, feature)
    }
}

/// Replace `{key}` placeholders with feature attributes; a missing attribute
/// renders as an empty string.
fn substitute(template: &str, feature: &Feature) -> String {
    let mut out = template.to_string();
    for key in ["name", "type", "category"] {
        let placeholder = format!("{{{key}}}");
        if out.contains(&placeholder) {
            out = out.replace(&placeholder, feature.attribute(key).unwrap_or(""));
        }
    }
    out
}

/// A named, stylable display group handed to the map surface.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerSpec {
    pub id: LayerId,
    pub features: Vec<Feature>,
    pub style: MarkerStyle,
    pub popup: PopupTemplate,
}

impl LayerSpec {
    pub fn base(features: Vec<Feature>) -> Self {
        Self {
            id: LayerId::Base,
            features,
            style: MarkerStyle::BASE,
            popup: PopupTemplate::standard(),
        }
    }

    pub fn highlight(feature: Feature) -> Self {
        Self {
            id: LayerId::Highlight,
            features: vec![feature],
            style: MarkerStyle::HIGHLIGHT,
            popup: PopupTemplate::standard(),
        }
    }

    pub fn nearby(features: Vec<Feature>) -> Self {
        Self {
            id: LayerId::Nearby,
            features,
            style: MarkerStyle::NEARBY,
            popup: PopupTemplate::nearby(),
        }
    }

    /// The layer's feature subset re-encoded as a standalone
    /// `FeatureCollection` document, for surfaces that consume GeoJSON as
    /// their data source.
    pub fn data_document(&self) -> String {
        codec::encode(&self.features)
    }
}
