use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError};

use places_core::connector::Renderer;
use places_core::{
    BasemapDocument, Coordinate, FetchOutcome, JoinInput, JoinState, LabelAttributes,
    NAME_ATTRIBUTE, PlaceResult, PlacesError, SymbolHandle,
};

/// Informational message shown when a successful search matched nothing.
pub const NO_RESULTS: &str = "no results";

/// Result of the single places/symbol join of a run.
#[derive(Debug, Clone, PartialEq)]
pub enum JoinOutcome {
    /// Both tracks succeeded and at least one graphic was added.
    Rendered {
        /// Number of graphics handed to the renderer.
        graphics: usize,
    },
    /// Both tracks succeeded but the search matched no places.
    NoResults,
    /// At least one track failed. Errors are in places-then-symbol order.
    Failed(Vec<PlacesError>),
}

/// Consumes the three track outcomes and drives the renderer.
///
/// The basemap outcome is rendered the moment it arrives. The places and
/// symbol outcomes are cached in a [`JoinState`] behind one lock; whichever
/// arrives second evaluates the join, outside the lock, exactly once.
/// Handlers may be called from any task in any order.
pub struct ResultAggregator {
    state: Mutex<JoinState>,
    joined: OnceLock<JoinOutcome>,
    renderer: Arc<dyn Renderer>,
    center: Coordinate,
    scale: f64,
}

impl ResultAggregator {
    /// Aggregator that recenters on `center` at `scale` after a non-empty render.
    #[must_use]
    pub fn new(renderer: Arc<dyn Renderer>, center: Coordinate, scale: f64) -> Self {
        Self {
            state: Mutex::new(JoinState::new()),
            joined: OnceLock::new(),
            renderer,
            center,
            scale,
        }
    }

    fn lock(&self) -> MutexGuard<'_, JoinState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Apply the basemap or surface its failure. Never waits on the other tracks.
    pub fn complete_basemap(&self, outcome: FetchOutcome<BasemapDocument>) {
        match outcome {
            Ok(doc) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(target: "places::aggregator", "basemap applied");
                self.renderer.apply_basemap(&doc);
            }
            Err(e) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(target: "places::aggregator", error = %e, "basemap track failed");
                self.renderer.show_error(&e.to_string());
            }
        }
    }

    /// Cache the places outcome. Returns the join outcome if this call triggered the join.
    pub fn complete_places(&self, outcome: FetchOutcome<PlaceResult>) -> Option<JoinOutcome> {
        let input = self.lock().record_places(outcome)?;
        Some(self.finish(input))
    }

    /// Cache the symbol outcome. Returns the join outcome if this call triggered the join.
    pub fn complete_symbol(&self, outcome: FetchOutcome<SymbolHandle>) -> Option<JoinOutcome> {
        let input = self.lock().record_symbol(outcome)?;
        Some(self.finish(input))
    }

    /// The join outcome, once the join has been evaluated.
    #[must_use]
    pub fn outcome(&self) -> Option<JoinOutcome> {
        self.joined.get().cloned()
    }

    fn finish(&self, input: JoinInput) -> JoinOutcome {
        let outcome = self.render_join(input);
        #[cfg(feature = "tracing")]
        tracing::debug!(target: "places::aggregator", outcome = ?outcome, "join evaluated");
        // JoinState hands out the join input once, so this is the only set.
        let stored = self.joined.set(outcome.clone());
        debug_assert!(stored.is_ok(), "join outcome recorded twice");
        outcome
    }

    fn render_join(&self, input: JoinInput) -> JoinOutcome {
        match (input.places, input.symbol) {
            (Ok(places), Ok(symbol)) => {
                self.renderer.set_shared_symbol(&symbol);
                let mut graphics = 0;
                for place in &places.results {
                    let mut attributes = LabelAttributes::new();
                    attributes.insert(NAME_ATTRIBUTE.to_string(), place.name.clone());
                    self.renderer.add_graphic(place.location.into(), &attributes);
                    graphics += 1;
                }
                if graphics == 0 {
                    self.renderer.show_info(NO_RESULTS);
                    return JoinOutcome::NoResults;
                }
                self.renderer.recenter(self.center, self.scale);
                JoinOutcome::Rendered { graphics }
            }
            (places, symbol) => {
                let empty = matches!(&places, Ok(r) if r.is_empty());
                let errors: Vec<PlacesError> =
                    [places.err(), symbol.err()].into_iter().flatten().collect();
                for e in &errors {
                    self.renderer.show_error(&e.to_string());
                }
                if empty {
                    self.renderer.show_info(NO_RESULTS);
                }
                JoinOutcome::Failed(errors)
            }
        }
    }
}
