//! Places-pipeline data transfer objects, error taxonomy and configuration primitives.
#![warn(missing_docs)]

mod config;
mod credential;
mod error;
mod geo;
mod place;
mod render;

pub use config::{Endpoints, PipelineConfig};
pub use credential::Credential;
pub use error::{ApiErrorCode, ApiErrorInfo, FetchOutcome, PlacesError, Stage};
pub use geo::{Coordinate, PlaceSearchRequest};
pub use place::{Category, Pagination, Place, PlaceLocation, PlaceResult};
pub use render::{
    BasemapDocument, HorizontalAlignment, LabelAttributes, LabelDefinition, NAME_ATTRIBUTE,
    SymbolHandle, VerticalAlignment,
};
