//! Join state for the places and symbol tracks.
//!
//! `JoinState` holds no synchronization of its own; callers guard it with one
//! lock (or own it from a single task). Whichever track records second
//! receives the `JoinInput`; the join is handed out at most once.

use crate::types::{FetchOutcome, PlaceResult, SymbolHandle};

enum Slot<T> {
    Pending,
    Ready(T),
    Consumed,
}

impl<T> Slot<T> {
    const fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    const fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    fn take(&mut self) -> Option<T> {
        match std::mem::replace(self, Self::Consumed) {
            Self::Ready(v) => Some(v),
            other => {
                *self = other;
                None
            }
        }
    }
}

/// Both terminal outcomes, handed to exactly one caller.
#[derive(Debug)]
pub struct JoinInput {
    /// Terminal outcome of the places track.
    pub places: FetchOutcome<PlaceResult>,
    /// Terminal outcome of the symbol track.
    pub symbol: FetchOutcome<SymbolHandle>,
}

/// Cached terminal outcomes of the places and symbol tracks plus the joined flag.
pub struct JoinState {
    places: Slot<FetchOutcome<PlaceResult>>,
    symbol: Slot<FetchOutcome<SymbolHandle>>,
    joined: bool,
}

impl Default for JoinState {
    fn default() -> Self {
        Self::new()
    }
}

impl JoinState {
    /// Fresh state with both tracks pending.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            places: Slot::Pending,
            symbol: Slot::Pending,
            joined: false,
        }
    }

    /// Record the places outcome. Returns the join input if the symbol track
    /// already finished. A second outcome for the same track is ignored.
    pub fn record_places(&mut self, outcome: FetchOutcome<PlaceResult>) -> Option<JoinInput> {
        if !self.places.is_pending() {
            #[cfg(feature = "tracing")]
            tracing::warn!("duplicate places outcome ignored");
            return None;
        }
        self.places = Slot::Ready(outcome);
        self.try_join()
    }

    /// Record the symbol outcome. Returns the join input if the places track
    /// already finished. A second outcome for the same track is ignored.
    pub fn record_symbol(&mut self, outcome: FetchOutcome<SymbolHandle>) -> Option<JoinInput> {
        if !self.symbol.is_pending() {
            #[cfg(feature = "tracing")]
            tracing::warn!("duplicate symbol outcome ignored");
            return None;
        }
        self.symbol = Slot::Ready(outcome);
        self.try_join()
    }

    /// True once the join input has been handed out.
    #[must_use]
    pub const fn is_joined(&self) -> bool {
        self.joined
    }

    fn try_join(&mut self) -> Option<JoinInput> {
        if self.joined || !self.places.is_ready() || !self.symbol.is_ready() {
            return None;
        }
        let places = self.places.take()?;
        let symbol = self.symbol.take()?;
        self.joined = true;
        Some(JoinInput { places, symbol })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PlacesError, Stage};

    fn sym() -> SymbolHandle {
        SymbolHandle {
            name: "park".into(),
            definition: serde_json::Value::Null,
        }
    }

    #[test]
    fn first_arrival_caches_second_joins() {
        let mut s = JoinState::new();
        assert!(s.record_places(Ok(PlaceResult::default())).is_none());
        assert!(!s.is_joined());
        let j = s.record_symbol(Ok(sym())).expect("join on second arrival");
        assert!(j.places.is_ok());
        assert!(s.is_joined());
    }

    #[test]
    fn symbol_first_then_places() {
        let mut s = JoinState::new();
        assert!(s.record_symbol(Err(PlacesError::symbol_not_found("lib", "park"))).is_none());
        let j = s
            .record_places(Err(PlacesError::Timeout {
                stage: Stage::Places,
            }))
            .expect("join");
        assert!(j.places.is_err() && j.symbol.is_err());
    }

    #[test]
    fn duplicates_never_join_twice() {
        let mut s = JoinState::new();
        assert!(s.record_places(Ok(PlaceResult::default())).is_none());
        assert!(s.record_places(Ok(PlaceResult::default())).is_none());
        assert!(s.record_symbol(Ok(sym())).is_some());
        assert!(s.record_symbol(Ok(sym())).is_none());
        assert!(s.record_places(Ok(PlaceResult::default())).is_none());
    }
}
