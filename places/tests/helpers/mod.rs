// Shared builders so tests can `mod helpers; use helpers::*;`
#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use places::{Pipeline, PipelineBuilder};
use places_mock::{MockBasemap, MockPlaceSearch, MockStyleLibrary, fixtures};

pub use places_mock::{RecordingRenderer, RenderEvent};

/// Providers for one run, exposed so tests can inspect call counts.
pub struct Mocks {
    pub places: Arc<MockPlaceSearch>,
    pub basemap: Arc<MockBasemap>,
    pub style: Arc<MockStyleLibrary>,
}

impl Mocks {
    /// Garden Cafe, an outdoor basemap and a library holding "park".
    pub fn happy() -> Self {
        Self {
            places: MockPlaceSearch::builder()
                .returns(Ok(fixtures::garden_cafe()))
                .build(),
            basemap: MockBasemap::builder()
                .returns(Ok(fixtures::outdoor_basemap()))
                .build(),
            style: park_library(),
        }
    }

    pub fn builder(&self) -> PipelineBuilder {
        Pipeline::builder()
            .with_place_search(self.places.clone())
            .with_basemap(self.basemap.clone())
            .with_style_library(self.style.clone())
    }

    pub fn pipeline(&self) -> Pipeline {
        self.builder().build().expect("valid pipeline")
    }

    pub fn pipeline_with_timeout(&self, timeout: Duration) -> Pipeline {
        self.builder()
            .track_timeout(timeout)
            .build()
            .expect("valid pipeline")
    }
}

pub fn park_library() -> Arc<MockStyleLibrary> {
    MockStyleLibrary::builder()
        .name("Esri2DPointSymbolsStyle")
        .with_symbol(fixtures::park_symbol())
        .build()
}

pub fn position(events: &[RenderEvent], pred: impl Fn(&RenderEvent) -> bool) -> Option<usize> {
    events.iter().position(pred)
}
