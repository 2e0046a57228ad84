use async_trait::async_trait;
use places_core::connector::PlaceSearchProvider;
use places_core::{
    Credential, Endpoints, FetchOutcome, PlaceResult, PlaceSearchRequest, Stage, decode_places,
};
use serde::Serialize;
use url::Url;

use crate::client::map_reqwest_err;

// Numbers are pre-formatted with `Display` so `1000.0` goes out as `1000`.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct NearPointQuery<'a> {
    search_text: &'a str,
    x: String,
    y: String,
    radius: String,
    f: &'a str,
    token: &'a str,
}

/// Client for the places-near-point endpoint.
pub struct PlaceSearchClient {
    http: reqwest::Client,
    endpoint: Url,
    format: String,
    credential: Credential,
}

impl PlaceSearchClient {
    /// Build a client against `endpoints.places` using the given HTTP client.
    #[must_use]
    pub fn new(http: reqwest::Client, endpoints: &Endpoints, credential: Credential) -> Self {
        Self {
            http,
            endpoint: endpoints.places.clone(),
            format: endpoints.format.clone(),
            credential,
        }
    }

    /// Endpoint queried by this client.
    #[must_use]
    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl PlaceSearchProvider for PlaceSearchClient {
    fn name(&self) -> &'static str {
        "places-http/near-point"
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "places_http::places::search",
            skip(self, req),
            fields(search_text = %req.search_text(), radius_m = req.radius_m()),
        )
    )]
    async fn search(&self, req: &PlaceSearchRequest) -> FetchOutcome<PlaceResult> {
        req.validate()?;
        let center = req.center();
        let query = NearPointQuery {
            search_text: req.search_text(),
            x: center.x.to_string(),
            y: center.y.to_string(),
            radius: req.radius_m().to_string(),
            f: &self.format,
            token: self.credential.expose(),
        };
        let resp = self
            .http
            .get(self.endpoint.clone())
            .query(&query)
            .send()
            .await
            .map_err(|e| map_reqwest_err(Stage::Places, e))?;
        let status = resp.status().as_u16();
        let body = resp
            .text()
            .await
            .map_err(|e| map_reqwest_err(Stage::Places, e))?;
        let out = decode_places(status, &body);
        #[cfg(feature = "tracing")]
        match &out {
            Ok(r) => tracing::debug!(status, results = r.results.len(), "places search decoded"),
            Err(e) => tracing::debug!(status, error = %e, "places search failed"),
        }
        out
    }
}
