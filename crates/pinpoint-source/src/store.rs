//! Store — the last-fetched feature collection, shared between the UI loop
//! and background fetch tasks.
//!
//! The store is the single source of truth for "the data we last saw". A
//! failed refresh never clears it: the cached collection and its timestamp
//! survive so search results and layers can stay at their last valid value
//! while the failure is logged upstream.

use crate::{FeatureSource, SourceError};
use chrono::{DateTime, Utc};
use pinpoint_core::Feature;
use tokio::sync::RwLock;

#[derive(Default)]
struct Cached {
    features: Vec<Feature>,
    fetched_at: Option<DateTime<Utc>>,
}

pub struct FeatureStore {
    source: Box<dyn FeatureSource>,
    cached: RwLock<Cached>,
}

impl FeatureStore {
    pub fn new(source: Box<dyn FeatureSource>) -> Self {
        Self {
            source,
            cached: RwLock::new(Cached::default()),
        }
    }

    /// Fetch the full collection from the source and replace the cache.
    ///
    /// On error the cache is left untouched and the error propagates so the
    /// caller can log it.
    pub async fn refresh(&self) -> Result<Vec<Feature>, SourceError> {
        let features = self.source.fetch().await?;
        let mut cached = self.cached.write().await;
        cached.features = features.clone();
        cached.fetched_at = Some(Utc::now());
        Ok(features)
    }

    /// The last successfully fetched collection (empty before the first
    /// successful refresh).
    pub async fn latest(&self) -> Vec<Feature> {
        self.cached.read().await.features.clone()
    }

    /// When the cached collection was fetched, if ever.
    pub async fn fetched_at(&self) -> Option<DateTime<Utc>> {
        self.cached.read().await.fetched_at
    }
}
