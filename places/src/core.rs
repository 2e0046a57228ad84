use std::sync::Arc;
use std::time::Duration;

use places_core::connector::{BasemapProvider, PlaceSearchProvider, Renderer, StyleLibrary};
use places_core::{
    FetchOutcome, LabelDefinition, PipelineConfig, PlaceSearchRequest, PlacesError, Stage,
    SymbolHandle, SymbolResolver,
};

use crate::aggregator::{JoinOutcome, ResultAggregator};

/// Terminal state of one track.
#[derive(Debug, Clone, PartialEq)]
pub enum TrackStatus {
    /// The track produced its value (for the basemap: it was applied).
    Ready,
    /// The track failed; the error was surfaced through the renderer.
    Failed(PlacesError),
}

impl TrackStatus {
    fn of<T>(outcome: &FetchOutcome<T>) -> Self {
        match outcome {
            Ok(_) => Self::Ready,
            Err(e) => Self::Failed(e.clone()),
        }
    }

    /// True for [`TrackStatus::Ready`].
    #[must_use]
    pub const fn is_ready(&self) -> bool {
        matches!(self, Self::Ready)
    }
}

/// Summary of one pipeline run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    /// Track A.
    pub basemap: TrackStatus,
    /// Track B.
    pub places: TrackStatus,
    /// Track C.
    pub symbol: TrackStatus,
    /// The places/symbol join. Always present after `run` returns.
    pub join: Option<JoinOutcome>,
}

/// One-shot pipeline: basemap, nearby places and a shared symbol, fetched
/// concurrently and handed to a renderer.
pub struct Pipeline {
    cfg: PipelineConfig,
    places: Arc<dyn PlaceSearchProvider>,
    basemap: Arc<dyn BasemapProvider>,
    symbols: SymbolResolver,
}

/// Builder for [`Pipeline`].
pub struct PipelineBuilder {
    cfg: PipelineConfig,
    places: Option<Arc<dyn PlaceSearchProvider>>,
    basemap: Option<Arc<dyn BasemapProvider>>,
    style: Option<Arc<dyn StyleLibrary>>,
}

impl Default for PipelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PipelineBuilder {
    /// Builder with the default configuration and no providers.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cfg: PipelineConfig::default(),
            places: None,
            basemap: None,
            style: None,
        }
    }

    /// Replace the whole configuration.
    #[must_use]
    pub fn config(mut self, cfg: PipelineConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Search text, center and radius for Track B.
    #[must_use]
    pub fn search(mut self, search: PlaceSearchRequest) -> Self {
        self.cfg.search = search;
        self
    }

    /// Symbol to resolve from the style library for Track C.
    #[must_use]
    pub fn symbol_name(mut self, name: impl Into<String>) -> Self {
        self.cfg.symbol_name = name.into();
        self
    }

    /// Upper bound for each track. An expired track fails with `Timeout`,
    /// except a style library still loading, which fails with `StyleLoad`.
    #[must_use]
    pub const fn track_timeout(mut self, timeout: Duration) -> Self {
        self.cfg.track_timeout = timeout;
        self
    }

    /// View scale used when recentering after a non-empty render.
    #[must_use]
    pub const fn recenter_scale(mut self, scale: f64) -> Self {
        self.cfg.recenter_scale = scale;
        self
    }

    /// Label definition handed to the renderer when a run starts.
    #[must_use]
    pub fn labels(mut self, labels: LabelDefinition) -> Self {
        self.cfg.labels = labels;
        self
    }

    /// Provider for Track B.
    #[must_use]
    pub fn with_place_search(mut self, provider: Arc<dyn PlaceSearchProvider>) -> Self {
        self.places = Some(provider);
        self
    }

    /// Provider for Track A.
    #[must_use]
    pub fn with_basemap(mut self, provider: Arc<dyn BasemapProvider>) -> Self {
        self.basemap = Some(provider);
        self
    }

    /// Style library for Track C.
    #[must_use]
    pub fn with_style_library(mut self, library: Arc<dyn StyleLibrary>) -> Self {
        self.style = Some(library);
        self
    }

    /// Build the pipeline.
    ///
    /// # Errors
    /// Returns `InvalidArg` if a provider is missing, the search request is
    /// invalid, the symbol name is blank, the scale is not a positive finite
    /// number or the track timeout is zero.
    pub fn build(self) -> Result<Pipeline, PlacesError> {
        let missing = |what: &str| {
            PlacesError::InvalidArg(format!("no {what} registered; add one with with_{what}(...)"))
        };
        let places = self.places.ok_or_else(|| missing("place_search"))?;
        let basemap = self.basemap.ok_or_else(|| missing("basemap"))?;
        let style = self.style.ok_or_else(|| missing("style_library"))?;

        self.cfg.search.validate()?;
        if self.cfg.symbol_name.trim().is_empty() {
            return Err(PlacesError::InvalidArg(
                "symbol name must not be blank".to_string(),
            ));
        }
        if !(self.cfg.recenter_scale.is_finite() && self.cfg.recenter_scale > 0.0) {
            return Err(PlacesError::InvalidArg(format!(
                "recenter scale must be positive, got {}",
                self.cfg.recenter_scale
            )));
        }
        if self.cfg.track_timeout.is_zero() {
            return Err(PlacesError::InvalidArg(
                "track timeout must be non-zero".to_string(),
            ));
        }

        Ok(Pipeline {
            cfg: self.cfg,
            places,
            basemap,
            symbols: SymbolResolver::new(style),
        })
    }
}

impl Pipeline {
    /// Start building a pipeline.
    ///
    /// ```rust,ignore
    /// let pipeline = places::Pipeline::builder()
    ///     .with_place_search(connectors.places.clone())
    ///     .with_basemap(connectors.basemap.clone())
    ///     .with_style_library(connectors.style.clone())
    ///     .symbol_name("park")
    ///     .build()?;
    /// let report = pipeline.run(renderer).await;
    /// ```
    #[must_use]
    pub fn builder() -> PipelineBuilder {
        PipelineBuilder::new()
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &PipelineConfig {
        &self.cfg
    }

    /// Bound a track future by `timeout`, mapping expiry to `Timeout { stage }`.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "places::core::track",
            skip(fut),
            fields(
                stage = %stage,
                timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
            ),
        )
    )]
    pub(crate) async fn track_with_timeout<T, Fut>(
        stage: Stage,
        timeout: Duration,
        fut: Fut,
    ) -> FetchOutcome<T>
    where
        Fut: core::future::Future<Output = FetchOutcome<T>>,
    {
        (tokio::time::timeout(timeout, fut).await)
            .unwrap_or_else(|_| Err(PlacesError::Timeout { stage }))
    }

    /// Track C under one deadline. Expiry while the style library is still
    /// loading is a `StyleLoad` failure; expiry during lookup is a `Timeout`.
    async fn resolve_symbol(&self, timeout: Duration) -> FetchOutcome<SymbolHandle> {
        let deadline = tokio::time::Instant::now() + timeout;
        match tokio::time::timeout_at(deadline, self.symbols.load()).await {
            Ok(loaded) => loaded?,
            Err(_) => {
                return Err(PlacesError::style_load(
                    self.symbols.library_name(),
                    "timed out",
                ));
            }
        }
        tokio::time::timeout_at(deadline, self.symbols.lookup(&self.cfg.symbol_name))
            .await
            .unwrap_or_else(|_| {
                Err(PlacesError::Timeout {
                    stage: Stage::Symbol,
                })
            })
    }

    /// Run the three tracks once against `renderer`.
    ///
    /// Labels are enabled first. The basemap is rendered as soon as Track A
    /// resolves, independently of the other tracks. The places and symbol
    /// outcomes are joined exactly once. No track is retried.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "places::core::run",
            skip(self, renderer),
            fields(
                search_text = %self.cfg.search.search_text(),
                radius_m = self.cfg.search.radius_m(),
                symbol = %self.cfg.symbol_name,
            ),
        )
    )]
    pub async fn run(&self, renderer: Arc<dyn Renderer>) -> RunReport {
        renderer.enable_labels(&self.cfg.labels);
        let agg = ResultAggregator::new(
            renderer,
            self.cfg.search.center(),
            self.cfg.recenter_scale,
        );
        let timeout = self.cfg.track_timeout;

        let basemap = async {
            let out =
                Self::track_with_timeout(Stage::Basemap, timeout, self.basemap.fetch_basemap())
                    .await;
            let status = TrackStatus::of(&out);
            agg.complete_basemap(out);
            status
        };
        let places = async {
            let out = Self::track_with_timeout(
                Stage::Places,
                timeout,
                self.places.search(&self.cfg.search),
            )
            .await;
            let status = TrackStatus::of(&out);
            agg.complete_places(out);
            status
        };
        let symbol = async {
            let out = self.resolve_symbol(timeout).await;
            let status = TrackStatus::of(&out);
            agg.complete_symbol(out);
            status
        };

        let (basemap, places, symbol) = tokio::join!(basemap, places, symbol);

        #[cfg(feature = "tracing")]
        tracing::info!(
            basemap = basemap.is_ready(),
            places = places.is_ready(),
            symbol = symbol.is_ready(),
            "pipeline run finished"
        );

        RunReport {
            basemap,
            places,
            symbol,
            join: agg.outcome(),
        }
    }
}
