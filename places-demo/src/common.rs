use std::sync::Arc;

use places::{BasemapProvider, Credential, Endpoints, PlaceSearchProvider, PlacesError, StyleLibrary};
use places_mock::{MockBasemap, MockPlaceSearch, MockStyleLibrary, fixtures};

/// Providers for one demo run.
pub struct Providers {
    pub places: Arc<dyn PlaceSearchProvider>,
    pub basemap: Arc<dyn BasemapProvider>,
    pub style: Arc<dyn StyleLibrary>,
}

/// Live connectors, or scripted ones when `PLACES_DEMO_USE_MOCK` is set.
///
/// Live mode reads the key from `PLACES_API_KEY` and an optional style
/// library data URL from `PLACES_STYLE_URL`. Without one the library is
/// looked up by name on the portal.
///
/// # Errors
/// Returns `InvalidArg` if the key is missing or blank, or the style URL is
/// not a valid URL, and `HttpClient` if the HTTP client cannot be built.
pub fn providers() -> Result<Providers, PlacesError> {
    if std::env::var("PLACES_DEMO_USE_MOCK").is_ok() {
        tracing::info!("using scripted providers");
        return Ok(Providers {
            places: MockPlaceSearch::builder()
                .returns(Ok(fixtures::gardens()))
                .build(),
            basemap: MockBasemap::builder()
                .returns(Ok(fixtures::outdoor_basemap()))
                .build(),
            style: MockStyleLibrary::builder()
                .with_symbol(fixtures::park_symbol())
                .build(),
        });
    }

    let key = std::env::var("PLACES_API_KEY").unwrap_or_default();
    let credential = Credential::new(key)?;
    let mut endpoints = Endpoints::default();
    if let Ok(raw) = std::env::var("PLACES_STYLE_URL") {
        let url = url::Url::parse(&raw)
            .map_err(|e| PlacesError::InvalidArg(format!("PLACES_STYLE_URL: {e}")))?;
        endpoints.style_library = Some(url);
    }
    let http = places_http::HttpConnectors::new(&endpoints, credential)?;
    Ok(Providers {
        places: http.places,
        basemap: http.basemap,
        style: http.style,
    })
}
