//! Core types — the point-of-interest [`Feature`] record and its coordinate.
//!
//! Every text attribute is optional: real-world amenity exports routinely
//! omit `name`, `type`, or `category`, and a missing attribute must never
//! make matching or display fail. A feature may even lack a coordinate, in
//! which case it is excluded from proximity search and never navigated to.

use serde::{Deserialize, Serialize};

/// A raw-degree longitude/latitude pair.
///
/// Plain planar coordinates as they appear in the GeoJSON document — no
/// geodesic semantics are attached here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LonLat {
    pub lon: f64,
    pub lat: f64,
}

impl LonLat {
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    /// Planar Euclidean distance to `other` in raw degrees.
    ///
    /// Deliberately not geodesic; the proximity radius this is compared
    /// against is a raw-degree threshold whose accuracy varies with latitude.
    pub fn planar_distance(self, other: LonLat) -> f64 {
        let dx = self.lon - other.lon;
        let dy = self.lat - other.lat;
        (dx * dx + dy * dy).sqrt()
    }
}

impl std::fmt::Display for LonLat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.4},{:.4}", self.lon, self.lat)
    }
}

/// One point-of-interest record.
///
/// `kind` carries the GeoJSON `type` property (renamed to avoid the Rust
/// keyword; the codec maps it back on encode).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Feature {
    pub name: Option<String>,
    pub kind: Option<String>,
    pub category: Option<String>,
    pub coord: Option<LonLat>,
}

impl Feature {
    /// Result-list display label: `"Cafe B (cafe)"`.
    ///
    /// Missing attributes degrade to placeholders rather than erroring.
    pub fn label(&self) -> String {
        let name = self.name.as_deref().unwrap_or("(unnamed)");
        match self.kind.as_deref() {
            Some(kind) => format!("{name} ({kind})"),
            None => name.to_string(),
        }
    }

    /// Look up a text attribute by its document property name.
    ///
    /// Used by popup templates, which reference attributes as `{name}`,
    /// `{type}`, and `{category}`.
    pub fn attribute(&self, key: &str) -> Option<&str> {
        match key {
            "name" => self.name.as_deref(),
            "type" => self.kind.as_deref(),
            "category" => self.category.as_deref(),
            _ => None,
        }
    }
}
