//! pinpoint-core — domain types and pure search logic for pinpoint.
//!
//! This crate holds everything that needs no I/O: the point-of-interest
//! [`Feature`] record, the GeoJSON codec, free-text matching, planar
//! proximity search, layer specifications, and configuration.
//!
//! # Architecture
//!
//! ```text
//! HTTP source ──► FeatureStore ──► Matcher / Proximity ──► Controller ──► Map surface
//!  (pinpoint-source)                 (this crate)            (pinpoint-tui)
//! ```
//!
//! The UI drives the main thread; fetching runs on background tasks. This
//! crate stays runtime-agnostic so both sides can test against it directly.

pub mod codec;
pub mod config;
pub mod layer;
pub mod matcher;
pub mod proximity;
pub mod types;

pub use matcher::Query;
pub use types::{Feature, LonLat};
