//! pinpoint-source — feature source adapters and the shared store.
//!
//! A [`FeatureSource`] fetches the full point-of-interest collection from
//! somewhere (in production, an HTTP GeoJSON endpoint); the [`FeatureStore`]
//! wraps a source and keeps the last successfully fetched collection so the
//! UI always has a valid value to fall back on when a refresh fails.

pub mod http;
pub mod store;

pub use http::HttpSource;
pub use store::FeatureStore;

use pinpoint_core::codec::CodecError;
use pinpoint_core::Feature;
use std::future::Future;
use std::pin::Pin;
use thiserror::Error;

/// Errors surfaced by a feature source.
///
/// All of these are recoverable: the store retains its cached collection and
/// the UI keeps its last valid state. None are fatal to the event loop.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("invalid source url: {0}")]
    Url(#[from] hyper::http::uri::InvalidUri),
    #[error("request failed: {0}")]
    Http(#[from] hyper_util::client::legacy::Error),
    #[error("endpoint returned status {0}")]
    Status(hyper::StatusCode),
    #[error("failed to read response body: {0}")]
    Body(#[from] hyper::Error),
    #[error("response body is not UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
    #[error(transparent)]
    Decode(#[from] CodecError),
}

/// Boxed future alias so [`FeatureSource`] stays object-safe.
pub type FetchFuture<'a> = Pin<Box<dyn Future<Output = Result<Vec<Feature>, SourceError>> + Send + 'a>>;

/// A source of the full feature collection.
///
/// `fetch` always returns the *complete* current collection; filtering and
/// proximity reduction happen downstream.
pub trait FeatureSource: Send + Sync {
    fn fetch(&self) -> FetchFuture<'_>;
}
