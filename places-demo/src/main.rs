use std::sync::Arc;

use places::{JoinOutcome, Pipeline};
use tracing_subscriber::fmt::format::FmtSpan;

mod common;
mod renderer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Suggested: RUST_LOG=info,places=debug,places_http=debug
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .with_span_events(FmtSpan::CLOSE)
        .try_init();

    let providers = common::providers()?;
    let pipeline = Pipeline::builder()
        .with_place_search(providers.places)
        .with_basemap(providers.basemap)
        .with_style_library(providers.style)
        .build()?;

    let report = pipeline.run(Arc::new(renderer::LogRenderer)).await;
    match report.join {
        Some(JoinOutcome::Rendered { graphics }) => tracing::info!(graphics, "done"),
        Some(JoinOutcome::NoResults) => tracing::info!("done, nothing matched"),
        Some(JoinOutcome::Failed(errors)) => tracing::warn!(failures = errors.len(), "done"),
        None => {}
    }
    Ok(())
}
