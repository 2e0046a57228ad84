use loom::sync::atomic::{AtomicUsize, Ordering};
use loom::sync::{Arc, Mutex};
use loom::thread;

use places_core::{JoinState, PlaceResult, PlacesError, Stage, SymbolHandle};

fn symbol() -> SymbolHandle {
    SymbolHandle {
        name: "park".into(),
        definition: serde_json::Value::Null,
    }
}

#[test]
fn join_fires_exactly_once_under_any_interleaving() {
    loom::model(|| {
        let state = Arc::new(Mutex::new(JoinState::new()));
        let fired = Arc::new(AtomicUsize::new(0));

        let s1 = state.clone();
        let f1 = fired.clone();
        let places = thread::spawn(move || {
            let joined = s1.lock().unwrap().record_places(Ok(PlaceResult::default()));
            if joined.is_some() {
                f1.fetch_add(1, Ordering::SeqCst);
            }
        });

        let s2 = state.clone();
        let f2 = fired.clone();
        let symbol = thread::spawn(move || {
            let joined = s2.lock().unwrap().record_symbol(Ok(symbol()));
            if joined.is_some() {
                f2.fetch_add(1, Ordering::SeqCst);
            }
        });

        places.join().unwrap();
        symbol.join().unwrap();

        assert_eq!(fired.load(Ordering::SeqCst), 1);
        assert!(state.lock().unwrap().is_joined());
    });
}

#[test]
fn failed_tracks_still_join_once() {
    loom::model(|| {
        let state = Arc::new(Mutex::new(JoinState::new()));
        let fired = Arc::new(AtomicUsize::new(0));

        let s1 = state.clone();
        let f1 = fired.clone();
        let places = thread::spawn(move || {
            let joined = s1.lock().unwrap().record_places(Err(PlacesError::Timeout {
                stage: Stage::Places,
            }));
            if joined.is_some() {
                f1.fetch_add(1, Ordering::SeqCst);
            }
        });

        let joined = state
            .lock()
            .unwrap()
            .record_symbol(Err(PlacesError::symbol_not_found("lib", "park")));
        if joined.is_some() {
            fired.fetch_add(1, Ordering::SeqCst);
        }

        places.join().unwrap();
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    });
}
