//! Scripted providers and a recording renderer for exercising the places pipeline.
//!
//! Every provider resolves with a canned outcome, optionally after a delay, or
//! never resolves at all (`hang`). The renderer records calls in order and lets
//! tests await a specific call.
#![warn(missing_docs)]

pub mod fixtures;
mod providers;
mod renderer;
mod scripted;

pub use providers::{
    MockBasemap, MockPlaceSearch, MockStyleLibrary, MockStyleLibraryBuilder, ScriptBuilder,
};
pub use renderer::{RecordingRenderer, RenderEvent};
