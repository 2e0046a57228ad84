//! places-http
//!
//! `reqwest`-backed connectors that implement the `places-core` provider traits:
//! the places-near-point search, the basemap style fetch and a web style
//! library for point symbols.
//!
//! All three share one `reqwest::Client` and one `Credential`. The credential
//! is sent as the `token` query parameter to the places endpoint and as a
//! bearer token to the basemap endpoint; it is never logged.
#![warn(missing_docs)]

mod basemap;
/// Shared HTTP client construction and error mapping.
pub mod client;
mod places;
mod style;

use std::sync::Arc;

pub use basemap::BasemapClient;
pub use places::PlaceSearchClient;
pub use style::WebStyleLibrary;

use places_core::{Credential, Endpoints, PlacesError};

/// The three connectors built over one HTTP client.
pub struct HttpConnectors {
    /// Places-near-point search.
    pub places: Arc<PlaceSearchClient>,
    /// Basemap style fetch.
    pub basemap: Arc<BasemapClient>,
    /// Point symbol style library.
    pub style: Arc<WebStyleLibrary>,
}

impl HttpConnectors {
    /// Build all connectors against `endpoints` with a default HTTP client.
    ///
    /// # Errors
    /// Returns `HttpClient` if the HTTP client cannot be constructed.
    pub fn new(endpoints: &Endpoints, credential: Credential) -> Result<Self, PlacesError> {
        Ok(Self::with_client(
            client::default_client()?,
            endpoints,
            credential,
        ))
    }

    /// Build all connectors over a caller-provided `reqwest::Client`.
    #[must_use]
    pub fn with_client(http: reqwest::Client, endpoints: &Endpoints, credential: Credential) -> Self {
        Self {
            places: Arc::new(PlaceSearchClient::new(
                http.clone(),
                endpoints,
                credential.clone(),
            )),
            basemap: Arc::new(BasemapClient::new(
                http.clone(),
                endpoints,
                credential.clone(),
            )),
            style: Arc::new(WebStyleLibrary::new(http, endpoints, Some(credential))),
        }
    }
}
