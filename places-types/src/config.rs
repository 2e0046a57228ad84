//! Configuration types shared by the connectors and the pipeline.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::geo::PlaceSearchRequest;
use crate::render::LabelDefinition;

const PLACES_NEAR_POINT: &str =
    "https://places-api.arcgis.com/arcgis/rest/services/places-service/v1/places/near-point";
const OUTDOOR_BASEMAP: &str =
    "https://basemapstyles-api.arcgis.com/arcgis/rest/services/styles/v2/webmaps/arcgis/outdoor";
const ARCGIS_PORTAL: &str = "https://www.arcgis.com/sharing/rest/";

fn static_url(s: &'static str) -> Url {
    Url::parse(s).expect("static endpoint URL must parse")
}

/// Network endpoints used by the HTTP connectors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoints {
    /// Places-near-point search endpoint.
    pub places: Url,
    /// Basemap style document endpoint.
    pub basemap: Url,
    /// Data document of the point symbol style library. When unset the library
    /// is looked up by `style_name` on `portal`.
    pub style_library: Option<Url>,
    /// Portal sharing API root used to find a style library by name. Must end with `/`.
    pub portal: Url,
    /// Identifier of the point symbol style library.
    pub style_name: String,
    /// Value sent as the `f` (response format) query parameter.
    pub format: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            places: static_url(PLACES_NEAR_POINT),
            basemap: static_url(OUTDOOR_BASEMAP),
            style_library: None,
            portal: static_url(ARCGIS_PORTAL),
            style_name: "Esri2DPointSymbolsStyle".to_string(),
            format: "json".to_string(),
        }
    }
}

/// Configuration for one pipeline run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// The places query to issue.
    pub search: PlaceSearchRequest,
    /// Symbol to resolve from the style library and apply to place graphics.
    pub symbol_name: String,
    /// Map scale used when re-centering on the query center.
    pub recenter_scale: f64,
    /// Upper bound on each track; a track that exceeds it fails with `Timeout`.
    pub track_timeout: Duration,
    /// Label styling handed to the renderer at start.
    pub labels: LabelDefinition,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            search: PlaceSearchRequest::default(),
            symbol_name: "park".to_string(),
            recenter_scale: 30_000.0,
            track_timeout: Duration::from_secs(30),
            labels: LabelDefinition::default(),
        }
    }
}
