//! places-core
//!
//! Core traits and utilities shared across the places pipeline crates.
//!
//! - `connector`: the provider traits for the three tracks and the `Renderer` boundary.
//! - `decode`: classification of raw service bodies into typed outcomes.
//! - `symbol`: the `SymbolResolver` over an asynchronously loaded style library.
//! - `join`: the synchronization-free join state for the places and symbol tracks.
//!
//! Provider traits are `async_trait` based and runtime agnostic; the orchestrator
//! in the `places` crate drives them on Tokio.
#![warn(missing_docs)]

/// Provider traits for each track and the renderer collaborator.
pub mod connector;
/// Response body classification for the location services.
pub mod decode;
/// Exactly-once join bookkeeping for the places and symbol tracks.
pub mod join;
/// Symbol resolution from a style library.
pub mod symbol;
/// Shared data model re-exported from `places-types`.
pub mod types;

pub use connector::{BasemapProvider, PlaceSearchProvider, Renderer, StyleLibrary};
pub use decode::{decode_basemap, decode_places};
pub use join::{JoinInput, JoinState};
pub use symbol::SymbolResolver;
pub use types::*;
