use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use places_core::FetchOutcome;

/// A canned outcome with optional latency, or a call that never resolves.
pub(crate) struct Scripted<T> {
    outcome: FetchOutcome<T>,
    delay: Option<Duration>,
    hang: bool,
    calls: AtomicUsize,
}

impl<T: Clone + Send + Sync> Scripted<T> {
    pub(crate) fn new(outcome: FetchOutcome<T>, delay: Option<Duration>, hang: bool) -> Self {
        Self {
            outcome,
            delay,
            hang,
            calls: AtomicUsize::new(0),
        }
    }

    pub(crate) async fn run(&self) -> FetchOutcome<T> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.hang {
            futures::future::pending::<()>().await;
        }
        if let Some(d) = self.delay {
            tokio::time::sleep(d).await;
        }
        self.outcome.clone()
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}
