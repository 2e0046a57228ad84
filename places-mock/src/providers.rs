use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use places_core::connector::{BasemapProvider, PlaceSearchProvider, StyleLibrary};
use places_core::{
    BasemapDocument, FetchOutcome, PlaceResult, PlaceSearchRequest, PlacesError, SymbolHandle,
};

use crate::scripted::Scripted;

/// Builder for a scripted provider. `build()` is available for each provider kind.
pub struct ScriptBuilder<T> {
    outcome: FetchOutcome<T>,
    delay: Option<Duration>,
    hang: bool,
}

impl<T> ScriptBuilder<T> {
    fn starting_with(outcome: FetchOutcome<T>) -> Self {
        Self {
            outcome,
            delay: None,
            hang: false,
        }
    }

    /// Resolve with `outcome`.
    #[must_use]
    pub fn returns(mut self, outcome: FetchOutcome<T>) -> Self {
        self.outcome = outcome;
        self
    }

    /// Sleep for `delay` before resolving.
    #[must_use]
    pub const fn delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Never resolve.
    #[must_use]
    pub const fn hang(mut self) -> Self {
        self.hang = true;
        self
    }
}

/// Scripted places search.
pub struct MockPlaceSearch {
    script: Scripted<PlaceResult>,
}

impl MockPlaceSearch {
    /// Start a builder that returns an empty result by default.
    #[must_use]
    pub fn builder() -> ScriptBuilder<PlaceResult> {
        ScriptBuilder::starting_with(Ok(PlaceResult {
            results: Vec::new(),
            pagination: None,
        }))
    }

    /// Number of searches issued against this mock.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.script.calls()
    }
}

impl ScriptBuilder<PlaceResult> {
    /// Finish building the places mock.
    #[must_use]
    pub fn build(self) -> Arc<MockPlaceSearch> {
        Arc::new(MockPlaceSearch {
            script: Scripted::new(self.outcome, self.delay, self.hang),
        })
    }
}

#[async_trait]
impl PlaceSearchProvider for MockPlaceSearch {
    fn name(&self) -> &'static str {
        "places-mock/near-point"
    }

    async fn search(&self, req: &PlaceSearchRequest) -> FetchOutcome<PlaceResult> {
        req.validate()?;
        self.script.run().await
    }
}

/// Scripted basemap fetch.
pub struct MockBasemap {
    script: Scripted<BasemapDocument>,
}

impl MockBasemap {
    /// Start a builder that returns an empty style document by default.
    #[must_use]
    pub fn builder() -> ScriptBuilder<BasemapDocument> {
        ScriptBuilder::starting_with(Ok(BasemapDocument(serde_json::json!({}))))
    }

    /// Number of fetches issued against this mock.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.script.calls()
    }
}

impl ScriptBuilder<BasemapDocument> {
    /// Finish building the basemap mock.
    #[must_use]
    pub fn build(self) -> Arc<MockBasemap> {
        Arc::new(MockBasemap {
            script: Scripted::new(self.outcome, self.delay, self.hang),
        })
    }
}

#[async_trait]
impl BasemapProvider for MockBasemap {
    fn name(&self) -> &'static str {
        "places-mock/basemap"
    }

    async fn fetch_basemap(&self) -> FetchOutcome<BasemapDocument> {
        self.script.run().await
    }
}

/// Style library with scripted load behavior and an in-memory symbol table.
pub struct MockStyleLibrary {
    name: String,
    load: Scripted<()>,
    symbols: Vec<SymbolHandle>,
}

/// Builder for [`MockStyleLibrary`].
pub struct MockStyleLibraryBuilder {
    name: String,
    load: ScriptBuilder<()>,
    symbols: Vec<SymbolHandle>,
}

impl MockStyleLibrary {
    /// Start a builder for a library that loads immediately and holds no symbols.
    #[must_use]
    pub fn builder() -> MockStyleLibraryBuilder {
        MockStyleLibraryBuilder {
            name: "MockPointStyle".to_string(),
            load: ScriptBuilder::starting_with(Ok(())),
            symbols: Vec::new(),
        }
    }

    /// Number of load attempts.
    #[must_use]
    pub fn loads(&self) -> usize {
        self.load.calls()
    }
}

impl MockStyleLibraryBuilder {
    /// Library identifier.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Add a symbol to the library.
    #[must_use]
    pub fn with_symbol(mut self, symbol: SymbolHandle) -> Self {
        self.symbols.push(symbol);
        self
    }

    /// Make loading fail with `error`.
    #[must_use]
    pub fn load_fails(mut self, error: PlacesError) -> Self {
        self.load = self.load.returns(Err(error));
        self
    }

    /// Delay the load by `delay`.
    #[must_use]
    pub fn delay(mut self, delay: Duration) -> Self {
        self.load = self.load.delay(delay);
        self
    }

    /// Never finish loading.
    #[must_use]
    pub fn hang(mut self) -> Self {
        self.load = self.load.hang();
        self
    }

    /// Finish building the library.
    #[must_use]
    pub fn build(self) -> Arc<MockStyleLibrary> {
        Arc::new(MockStyleLibrary {
            name: self.name,
            load: Scripted::new(self.load.outcome, self.load.delay, self.load.hang),
            symbols: self.symbols,
        })
    }
}

#[async_trait]
impl StyleLibrary for MockStyleLibrary {
    fn name(&self) -> &str {
        &self.name
    }

    async fn load(&self) -> Result<(), PlacesError> {
        self.load.run().await
    }

    async fn symbol(&self, keys: &[String]) -> Result<Option<SymbolHandle>, PlacesError> {
        Ok(self
            .symbols
            .iter()
            .find(|s| keys.iter().any(|k| s.name == *k))
            .cloned())
    }
}
