//! Configuration types for pinpoint.
//!
//! [`Config::load`] reads `~/.config/pinpoint/config.toml`, creating it with
//! hardcoded defaults if it does not yet exist. [`Config::defaults`] returns
//! the same defaults without touching the filesystem (useful in tests).

use serde::Deserialize;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[source]
local_url  = "http://localhost:3000/amenities"
remote_url = "https://amenities-api.onrender.com/amenities"

[map]
center_lon  = 54.37
center_lat  = 24.47
zoom        = 10.0
select_zoom = 15.0

[search]
radius_deg = 0.01
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration, loaded from
/// `~/.config/pinpoint/config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub map: MapConfig,
    #[serde(default)]
    pub search: SearchConfig,
}

/// `[source]` section — the amenity endpoint for each environment.
#[derive(Debug, Clone, Deserialize)]
pub struct SourceConfig {
    #[serde(default = "default_local_url")]
    pub local_url: String,
    #[serde(default = "default_remote_url")]
    pub remote_url: String,
}

fn default_local_url() -> String { "http://localhost:3000/amenities".to_string() }
fn default_remote_url() -> String { "https://amenities-api.onrender.com/amenities".to_string() }

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            local_url: default_local_url(),
            remote_url: default_remote_url(),
        }
    }
}

/// `[map]` section — initial viewport and selection zoom.
#[derive(Debug, Clone, Deserialize)]
pub struct MapConfig {
    #[serde(default = "default_center_lon")]
    pub center_lon: f64,
    #[serde(default = "default_center_lat")]
    pub center_lat: f64,
    #[serde(default = "default_zoom")]
    pub zoom: f64,
    #[serde(default = "default_select_zoom")]
    pub select_zoom: f64,
}

fn default_center_lon() -> f64 { 54.37 }
fn default_center_lat() -> f64 { 24.47 }
fn default_zoom() -> f64 { 10.0 }
fn default_select_zoom() -> f64 { 15.0 }

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            center_lon: default_center_lon(),
            center_lat: default_center_lat(),
            zoom: default_zoom(),
            select_zoom: default_select_zoom(),
        }
    }
}

/// `[search]` section — proximity tuning.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchConfig {
    #[serde(default = "default_radius_deg")]
    pub radius_deg: f64,
}

fn default_radius_deg() -> f64 { crate::proximity::DEFAULT_RADIUS_DEG }

impl Default for SearchConfig {
    fn default() -> Self {
        Self { radius_deg: default_radius_deg() }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/pinpoint/config.toml`, layered on top of the
    /// built-in defaults. Creates the file with defaults if it does not exist.
    pub fn load() -> anyhow::Result<Self> {
        let path = config_path();

        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, DEFAULT_CONFIG.trim_start())?;
        }

        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path.as_path()).required(false))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }

    /// The endpoint for the chosen environment. The original product
    /// auto-detected this from the page hostname; the CLI takes a `--local`
    /// flag (or `PINPOINT_LOCAL=1`) instead.
    pub fn source_url(&self, local: bool) -> &str {
        if local {
            &self.source.local_url
        } else {
            &self.source.remote_url
        }
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("pinpoint")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
