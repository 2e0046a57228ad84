mod helpers;

use std::sync::Arc;
use std::time::Duration;

use helpers::*;
use places::{JoinOutcome, PlacesError, ResultAggregator};
use places_mock::{MockBasemap, MockPlaceSearch, MockStyleLibrary, fixtures};
use rand::Rng;

const RUNS: usize = 100;

fn shared_symbol_batches(renderer: &RecordingRenderer) -> usize {
    renderer
        .events()
        .iter()
        .filter(|e| matches!(e, RenderEvent::SharedSymbol(_)))
        .count()
}

// Places and symbol completions race on real threads; the join must fire once.
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn join_fires_exactly_once_across_random_interleavings() {
    for i in 0..RUNS {
        let (places_spins, symbol_spins, places_ok, symbol_ok) = {
            let mut rng = rand::rng();
            (
                rng.random_range(0..8u32),
                rng.random_range(0..8u32),
                rng.random_bool(0.7),
                rng.random_bool(0.7),
            )
        };

        let renderer = RecordingRenderer::new();
        let agg = Arc::new(ResultAggregator::new(
            renderer.clone(),
            fixtures::CENTER,
            30_000.0,
        ));

        let a = agg.clone();
        let places = tokio::spawn(async move {
            for _ in 0..places_spins {
                tokio::task::yield_now().await;
            }
            let outcome = if places_ok {
                Ok(fixtures::gardens())
            } else {
                Err(PlacesError::transport(places::Stage::Places, "reset"))
            };
            a.complete_places(outcome)
        });
        let a = agg.clone();
        let symbol = tokio::spawn(async move {
            for _ in 0..symbol_spins {
                tokio::task::yield_now().await;
            }
            let outcome = if symbol_ok {
                Ok(fixtures::park_symbol())
            } else {
                Err(PlacesError::symbol_not_found("lib", "park"))
            };
            a.complete_symbol(outcome)
        });

        let (p, s) = (places.await.unwrap(), symbol.await.unwrap());
        let fired = usize::from(p.is_some()) + usize::from(s.is_some());
        assert_eq!(fired, 1, "run {i}: join fired {fired} times");

        let outcome = p.or(s).unwrap();
        assert_eq!(agg.outcome(), Some(outcome.clone()));
        if places_ok && symbol_ok {
            assert_eq!(outcome, JoinOutcome::Rendered { graphics: 3 });
            assert_eq!(shared_symbol_batches(&renderer), 1);
            assert_eq!(renderer.graphics(), 3);
        } else {
            let expected = usize::from(!places_ok) + usize::from(!symbol_ok);
            assert_eq!(renderer.errors().len(), expected, "run {i}");
            assert_eq!(shared_symbol_batches(&renderer), 0);
            assert_eq!(renderer.graphics(), 0);
        }
    }
}

// Same property through the whole pipeline, with randomized latencies on a paused clock.
#[tokio::test(start_paused = true)]
async fn pipeline_renders_once_for_any_completion_order() {
    for _ in 0..RUNS {
        let (places_ms, symbol_ms, basemap_ms) = {
            let mut rng = rand::rng();
            (
                rng.random_range(0..50u64),
                rng.random_range(0..50u64),
                rng.random_range(0..50u64),
            )
        };
        let mocks = Mocks {
            places: MockPlaceSearch::builder()
                .returns(Ok(fixtures::garden_cafe()))
                .delay(Duration::from_millis(places_ms))
                .build(),
            basemap: MockBasemap::builder()
                .returns(Ok(fixtures::outdoor_basemap()))
                .delay(Duration::from_millis(basemap_ms))
                .build(),
            style: MockStyleLibrary::builder()
                .with_symbol(fixtures::park_symbol())
                .delay(Duration::from_millis(symbol_ms))
                .build(),
        };
        let renderer = RecordingRenderer::new();
        let report = mocks.pipeline().run(renderer.clone()).await;

        assert_eq!(report.join, Some(JoinOutcome::Rendered { graphics: 1 }));
        assert_eq!(shared_symbol_batches(&renderer), 1);
        assert_eq!(renderer.graphics(), 1);
        assert_eq!(
            renderer
                .events()
                .iter()
                .filter(|e| matches!(e, RenderEvent::Basemap(_)))
                .count(),
            1
        );
    }
}
