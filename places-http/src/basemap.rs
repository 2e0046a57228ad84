use async_trait::async_trait;
use places_core::connector::BasemapProvider;
use places_core::{BasemapDocument, Credential, Endpoints, FetchOutcome, Stage, decode_basemap};
use url::Url;

use crate::client::map_reqwest_err;

/// Client for a basemap style endpoint, authenticated with a bearer token.
pub struct BasemapClient {
    http: reqwest::Client,
    endpoint: Url,
    credential: Credential,
}

impl BasemapClient {
    /// Build a client against `endpoints.basemap` using the given HTTP client.
    #[must_use]
    pub fn new(http: reqwest::Client, endpoints: &Endpoints, credential: Credential) -> Self {
        Self {
            http,
            endpoint: endpoints.basemap.clone(),
            credential,
        }
    }

    /// Endpoint fetched by this client.
    #[must_use]
    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl BasemapProvider for BasemapClient {
    fn name(&self) -> &'static str {
        "places-http/basemap"
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "places_http::basemap::fetch",
            skip(self),
            fields(endpoint = %self.endpoint.path()),
        )
    )]
    async fn fetch_basemap(&self) -> FetchOutcome<BasemapDocument> {
        let resp = self
            .http
            .get(self.endpoint.clone())
            .bearer_auth(self.credential.expose())
            .send()
            .await
            .map_err(|e| map_reqwest_err(Stage::Basemap, e))?;
        let status = resp.status().as_u16();
        let body = resp
            .text()
            .await
            .map_err(|e| map_reqwest_err(Stage::Basemap, e))?;
        #[cfg(feature = "tracing")]
        tracing::debug!(status, bytes = body.len(), "basemap response received");
        decode_basemap(status, &body)
    }
}
