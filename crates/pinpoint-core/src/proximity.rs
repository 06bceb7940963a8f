//! Planar radius search around a selected feature.
//!
//! Distance is straight-line Euclidean over raw coordinate degrees, compared
//! against a raw-degree threshold (default [`DEFAULT_RADIUS_DEG`], roughly
//! 1 km near the equator). This is an approximation whose accuracy depends
//! on latitude, kept as the product-specified behaviour.
//!
//! Self-exclusion is by display `name` equality: two distinct features that
//! share a name exclude each other. Known weakness of the data model, which
//! carries no stable feature id.

use crate::types::Feature;

/// Default radius threshold in raw coordinate degrees.
pub const DEFAULT_RADIUS_DEG: f64 = 0.01;

/// All features strictly within `radius` of `origin`, excluding the origin
/// itself (by name) and any feature without a coordinate.
///
/// Input order is preserved; there is no distance ordering guarantee. An
/// origin without a coordinate yields an empty set.
pub fn nearby(origin: &Feature, features: &[Feature], radius: f64) -> Vec<Feature> {
    let Some(origin_coord) = origin.coord else {
        return Vec::new();
    };

    features
        .iter()
        .filter(|f| {
            let Some(coord) = f.coord else {
                return false;
            };
            origin_coord.planar_distance(coord) < radius && f.name != origin.name
        })
        .cloned()
        .collect()
}
