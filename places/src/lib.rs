//! Places runs a one-shot map pipeline over three concurrent tracks.
//!
//! Overview
//! - Track A fetches a basemap document and applies it as soon as it resolves.
//! - Track B searches for places near a point.
//! - Track C resolves a named symbol from an asynchronously loaded style library.
//! - Tracks B and C are joined exactly once: on success every place becomes one
//!   labelled graphic sharing the symbol and the view is recentered on the query
//!   center; otherwise each failure is surfaced on its own.
//!
//! Providers implement the `places_core` traits; `places-http` has the
//! `reqwest`-backed ones and `places-mock` has scripted ones for tests.
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use places::Pipeline;
//! use places_http::HttpConnectors;
//!
//! let connectors = HttpConnectors::new(&Endpoints::default(), credential)?;
//! let pipeline = Pipeline::builder()
//!     .with_place_search(connectors.places.clone())
//!     .with_basemap(connectors.basemap.clone())
//!     .with_style_library(connectors.style.clone())
//!     .build()?;
//! let report = pipeline.run(Arc::new(MyRenderer)).await;
//! ```
#![warn(missing_docs)]

mod aggregator;
pub(crate) mod core;

pub use aggregator::{JoinOutcome, NO_RESULTS, ResultAggregator};
pub use core::{Pipeline, PipelineBuilder, RunReport, TrackStatus};

pub use places_core::{
    ApiErrorCode, ApiErrorInfo, BasemapDocument, BasemapProvider, Coordinate, Credential,
    Endpoints, FetchOutcome, LabelAttributes, LabelDefinition, NAME_ATTRIBUTE, Place,
    PlaceResult, PlaceSearchProvider, PlaceSearchRequest, PlacesError, PipelineConfig, Renderer,
    Stage, StyleLibrary, SymbolHandle,
};
