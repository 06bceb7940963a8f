//! Test builders — ergonomic constructors for `Feature` fixtures.
//!
//! These builders are designed for readability in test assertions, not for
//! production use.

use pinpoint_core::{Feature, LonLat};

/// Fluent builder for [`Feature`] test fixtures.
///
/// # Example
///
/// ```rust
/// let cafe = FeatureBuilder::new("Cafe B")
///     .kind("cafe")
///     .category("food")
///     .coord(54.371, 24.471)
///     .build();
/// ```
pub struct FeatureBuilder {
    feature: Feature,
}

impl FeatureBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            feature: Feature {
                name: Some(name.into()),
                ..Default::default()
            },
        }
    }

    /// A feature with no attributes at all.
    pub fn anonymous() -> Self {
        Self {
            feature: Feature::default(),
        }
    }

    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.feature.kind = Some(kind.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.feature.category = Some(category.into());
        self
    }

    pub fn coord(mut self, lon: f64, lat: f64) -> Self {
        self.feature.coord = Some(LonLat::new(lon, lat));
        self
    }

    pub fn build(self) -> Feature {
        self.feature
    }
}

/// One-line full-attribute constructor.
pub fn poi(name: &str, kind: &str, category: &str, lon: f64, lat: f64) -> Feature {
    FeatureBuilder::new(name)
        .kind(kind)
        .category(category)
        .coord(lon, lat)
        .build()
}

/// The worked example from the product brief: a park and a cafe ~0.0014°
/// apart, and a mall ~1° away from both.
pub fn example_trio() -> Vec<Feature> {
    vec![
        poi("Park A", "park", "leisure", 54.370, 24.470),
        poi("Cafe B", "cafe", "food", 54.371, 24.471),
        poi("Mall C", "mall", "shopping", 55.0, 25.0),
    ]
}

/// Collect the display names of a feature slice for compact assertions.
pub fn names(features: &[Feature]) -> Vec<&str> {
    features.iter().filter_map(|f| f.name.as_deref()).collect()
}
