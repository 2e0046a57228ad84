use async_trait::async_trait;

use crate::types::{
    BasemapDocument, Coordinate, FetchOutcome, LabelAttributes, LabelDefinition,
    PlaceResult, PlaceSearchRequest, PlacesError, SymbolHandle,
};

/// Issues "places near point" queries.
#[async_trait]
pub trait PlaceSearchProvider: Send + Sync {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    /// Run one search and decode the response.
    ///
    /// Service `error` payloads, transport failures and malformed bodies are all
    /// reported as distinct `PlacesError` variants tagged with `Stage::Places`.
    async fn search(&self, req: &PlaceSearchRequest) -> FetchOutcome<PlaceResult>;
}

/// Fetches a basemap style document.
#[async_trait]
pub trait BasemapProvider: Send + Sync {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    /// Fetch the configured basemap style.
    async fn fetch_basemap(&self) -> FetchOutcome<BasemapDocument>;
}

/// A named library of point symbols that must be loaded before lookup.
#[async_trait]
pub trait StyleLibrary: Send + Sync {
    /// Library identifier, e.g. `"Esri2DPointSymbolsStyle"`.
    fn name(&self) -> &str;

    /// Load the library. Implementations should make repeated calls cheap.
    async fn load(&self) -> Result<(), PlacesError>;

    /// Look up the first symbol matching any of `keys`.
    ///
    /// `Ok(None)` means the library is loaded but holds no such symbol.
    async fn symbol(&self, keys: &[String]) -> Result<Option<SymbolHandle>, PlacesError>;
}

/// The drawing layer. Consumes pipeline decisions; never calls back into the pipeline.
pub trait Renderer: Send + Sync {
    /// Replace the current map with the given basemap style.
    fn apply_basemap(&self, document: &BasemapDocument);

    /// Enable labels on the places overlay using `definition`.
    fn enable_labels(&self, definition: &LabelDefinition);

    /// Use `symbol` as the shared style of every graphic on the places overlay.
    fn set_shared_symbol(&self, symbol: &SymbolHandle);

    /// Add one point graphic with the given attributes.
    fn add_graphic(&self, point: Coordinate, attributes: &LabelAttributes);

    /// Move the view to `center` at `scale`.
    fn recenter(&self, center: Coordinate, scale: f64);

    /// Surface a one-line error to the user.
    fn show_error(&self, message: &str);

    /// Surface a one-line informational message to the user.
    fn show_info(&self, message: &str);
}
