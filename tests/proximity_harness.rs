//! Proximity search integration harness.
//!
//! # What this covers
//!
//! - **Radius bound**: no result ever sits at `dist >= radius` (exercised
//!   with proptest over random feature clouds).
//! - **Self-exclusion**: the origin never appears in its own nearby set —
//!   including the name-equality quirk where a *different* feature
//!   with the same display name is also excluded.
//! - **Missing coordinates**: features without a coordinate are skipped, and
//!   an origin without one yields an empty set.
//! - **The worked example**: selecting "Cafe B" over the trio returns
//!   exactly ["Park A"] (distance ≈ 0.0014 < 0.01); "Mall C" (≈ 1.0) is out.
//!
//! # Running
//!
//! ```sh
//! cargo test --test proximity_harness
//! ```

mod common;
use common::*;
use pinpoint_core::proximity::{nearby, DEFAULT_RADIUS_DEG};
use pinpoint_core::{Feature, LonLat};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Worked example
// ---------------------------------------------------------------------------

#[test]
fn example_selecting_the_cafe_finds_the_park_but_not_the_mall() {
    let trio = example_trio();
    let cafe = trio[1].clone();
    let hits = nearby(&cafe, &trio, DEFAULT_RADIUS_DEG);
    assert_eq!(names(&hits), vec!["Park A"]);
}

// ---------------------------------------------------------------------------
// Self-exclusion
// ---------------------------------------------------------------------------

#[test]
fn origin_is_excluded_from_its_own_results() {
    let trio = example_trio();
    let cafe = trio[1].clone();
    let hits = nearby(&cafe, &trio, 10.0); // radius covers everything
    assert!(!names(&hits).contains(&"Cafe B"));
    assert_eq!(hits.len(), 2);
}

/// The exclusion key is the display name, so a distinct nearby feature that
/// happens to share the origin's name is also dropped.
#[test]
fn same_named_neighbour_is_also_excluded() {
    let origin = poi("Kiosk", "kiosk", "retail", 0.0, 0.0);
    let twin = poi("Kiosk", "kiosk", "retail", 0.001, 0.0);
    let other = poi("Stand", "kiosk", "retail", 0.001, 0.0);
    let hits = nearby(&origin, &[twin, other], DEFAULT_RADIUS_DEG);
    assert_eq!(names(&hits), vec!["Stand"]);
}

// ---------------------------------------------------------------------------
// Missing coordinates
// ---------------------------------------------------------------------------

#[test]
fn coordinate_less_features_are_excluded_without_error() {
    let origin = poi("Origin", "x", "y", 0.0, 0.0);
    let ghost = FeatureBuilder::new("Ghost").build(); // no coord
    let near = poi("Near", "x", "y", 0.001, 0.0);
    let hits = nearby(&origin, &[ghost, near], DEFAULT_RADIUS_DEG);
    assert_eq!(names(&hits), vec!["Near"]);
}

#[test]
fn origin_without_coordinate_has_no_neighbourhood() {
    let origin = FeatureBuilder::new("Nowhere").build();
    let near = poi("Near", "x", "y", 0.0, 0.0);
    assert!(nearby(&origin, &[near], 100.0).is_empty());
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    /// Every returned feature is strictly inside the radius and is not the
    /// origin; every omitted in-radius feature was omitted only for a
    /// legitimate reason (origin name or missing coordinate).
    #[test]
    fn results_are_exactly_the_strict_in_radius_non_origin_features(
        cloud in prop::collection::vec((-0.05f64..0.05, -0.05f64..0.05), 0..40),
        radius in 0.001f64..0.1,
    ) {
        let origin = poi("Origin", "o", "o", 0.0, 0.0);
        let features: Vec<Feature> = cloud
            .iter()
            .enumerate()
            .map(|(i, (lon, lat))| poi(&format!("f{i}"), "t", "c", *lon, *lat))
            .collect();

        let hits = nearby(&origin, &features, radius);
        let origin_coord = origin.coord.unwrap();

        for hit in &hits {
            let dist = origin_coord.planar_distance(hit.coord.unwrap());
            prop_assert!(dist < radius, "hit at dist {dist} >= radius {radius}");
            prop_assert_ne!(hit.name.as_deref(), Some("Origin"));
        }

        let expected: Vec<&Feature> = features
            .iter()
            .filter(|f| origin_coord.planar_distance(f.coord.unwrap()) < radius)
            .collect();
        prop_assert_eq!(hits.len(), expected.len());
    }

    /// Input order is preserved.
    #[test]
    fn result_order_follows_input_order(
        cloud in prop::collection::vec((-0.02f64..0.02, -0.02f64..0.02), 0..20),
    ) {
        let origin = poi("Origin", "o", "o", 0.0, 0.0);
        let features: Vec<Feature> = cloud
            .iter()
            .enumerate()
            .map(|(i, (lon, lat))| poi(&format!("f{i}"), "t", "c", *lon, *lat))
            .collect();

        let hits = nearby(&origin, &features, DEFAULT_RADIUS_DEG);
        let positions: Vec<usize> = hits
            .iter()
            .map(|h| features.iter().position(|f| f == h).unwrap())
            .collect();
        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}

// ---------------------------------------------------------------------------
// Boundary
// ---------------------------------------------------------------------------

#[test]
fn exact_radius_distance_is_not_nearby() {
    let origin = poi("Origin", "o", "o", 0.0, 0.0);
    let edge = poi("Edge", "e", "e", DEFAULT_RADIUS_DEG, 0.0);
    assert!(nearby(&origin, &[edge.clone()], DEFAULT_RADIUS_DEG).is_empty());

    let lon = LonLat::new(DEFAULT_RADIUS_DEG - 1e-9, 0.0);
    let just_inside = Feature { coord: Some(lon), ..edge };
    assert_eq!(nearby(&origin, &[just_inside], DEFAULT_RADIUS_DEG).len(), 1);
}
