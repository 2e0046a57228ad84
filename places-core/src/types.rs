//! Re-exports of the shared data model so connectors depend on one crate.

pub use places_types::{
    ApiErrorCode, ApiErrorInfo, BasemapDocument, Category, Coordinate, Credential, Endpoints,
    FetchOutcome, HorizontalAlignment, LabelAttributes, LabelDefinition, NAME_ATTRIBUTE,
    Pagination, PipelineConfig, Place, PlaceLocation, PlaceResult, PlaceSearchRequest,
    PlacesError, Stage, SymbolHandle, VerticalAlignment,
};
