//! HTTP feature source — GET the configured endpoint, decode the GeoJSON
//! `FeatureCollection` body.
//!
//! The endpoint is a plain document service; there is no pagination or
//! authentication. Non-2xx statuses and undecodable bodies surface as
//! [`SourceError`] values for the store/controller to log.

use crate::{FeatureSource, FetchFuture, SourceError};
use http_body_util::{BodyExt, Empty};
use hyper::body::Bytes;
use hyper::Uri;
use hyper_tls::HttpsConnector;
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::client::legacy::Client;
use hyper_util::rt::TokioExecutor;
use pinpoint_core::codec;

pub struct HttpSource {
    client: Client<HttpsConnector<HttpConnector>, Empty<Bytes>>,
    url: Uri,
}

impl HttpSource {
    pub fn new(url: &str) -> Result<Self, SourceError> {
        let url: Uri = url.parse()?;
        let client = Client::builder(TokioExecutor::new()).build(HttpsConnector::new());
        Ok(Self { client, url })
    }

    pub fn url(&self) -> &Uri {
        &self.url
    }
}

impl FeatureSource for HttpSource {
    fn fetch(&self) -> FetchFuture<'_> {
        Box::pin(async move {
            tracing::debug!(url = %self.url, "fetching feature collection");

            let response = self.client.get(self.url.clone()).await?;
            let status = response.status();
            if !status.is_success() {
                return Err(SourceError::Status(status));
            }

            let body = response.into_body().collect().await?.to_bytes();
            let document = String::from_utf8(body.to_vec())?;
            let features = codec::decode(&document)?;

            tracing::debug!(count = features.len(), "feature collection decoded");
            Ok(features)
        })
    }
}
