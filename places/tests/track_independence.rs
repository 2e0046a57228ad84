mod helpers;

use std::time::Duration;

use helpers::*;
use places::PlacesError;
use places_mock::{MockPlaceSearch, MockStyleLibrary};

// B and C never resolve; A must still reach the renderer on its own.
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn basemap_applies_while_places_and_symbol_hang() {
    let mut mocks = Mocks::happy();
    mocks.places = MockPlaceSearch::builder().hang().build();
    mocks.style = MockStyleLibrary::builder().hang().build();
    let pipeline = mocks.pipeline_with_timeout(Duration::from_secs(3600));
    let renderer = RecordingRenderer::new();

    let r = renderer.clone();
    let run = tokio::spawn(async move { pipeline.run(r).await });

    let applied = tokio::time::timeout(
        Duration::from_secs(5),
        renderer.wait_for(|e| matches!(e, RenderEvent::Basemap(_))),
    )
    .await;
    assert!(applied.is_ok(), "basemap was blocked by the other tracks");
    assert_eq!(renderer.graphics(), 0);
    run.abort();
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn basemap_error_surfaces_while_places_and_symbol_hang() {
    let mut mocks = Mocks::happy();
    mocks.basemap = places_mock::MockBasemap::builder()
        .returns(Err(PlacesError::transport(
            places::Stage::Basemap,
            "dns error",
        )))
        .build();
    mocks.places = MockPlaceSearch::builder().hang().build();
    mocks.style = MockStyleLibrary::builder().hang().build();
    let pipeline = mocks.pipeline_with_timeout(Duration::from_secs(3600));
    let renderer = RecordingRenderer::new();

    let r = renderer.clone();
    let run = tokio::spawn(async move { pipeline.run(r).await });

    let shown = tokio::time::timeout(
        Duration::from_secs(5),
        renderer.wait_for(|e| matches!(e, RenderEvent::Error(_))),
    )
    .await
    .expect("basemap error was blocked");
    assert_eq!(
        shown,
        RenderEvent::Error("basemap: transport error: dns error".into())
    );
    run.abort();
}

#[tokio::test(start_paused = true)]
async fn slow_places_do_not_delay_basemap() {
    let mut mocks = Mocks::happy();
    mocks.places = MockPlaceSearch::builder()
        .returns(Ok(places_mock::fixtures::garden_cafe()))
        .delay(Duration::from_secs(20))
        .build();
    let renderer = RecordingRenderer::new();
    mocks.pipeline().run(renderer.clone()).await;

    let events = renderer.events();
    let basemap = position(&events, |e| matches!(e, RenderEvent::Basemap(_))).unwrap();
    let graphic = position(&events, |e| matches!(e, RenderEvent::Graphic { .. })).unwrap();
    assert!(basemap < graphic);
}
