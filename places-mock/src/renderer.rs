use std::sync::{Arc, Mutex, MutexGuard};

use places_core::connector::Renderer;
use places_core::{BasemapDocument, Coordinate, LabelAttributes, LabelDefinition, SymbolHandle};
use tokio::sync::Notify;

/// One call received by a [`RecordingRenderer`].
#[derive(Debug, Clone, PartialEq)]
pub enum RenderEvent {
    /// `apply_basemap`
    Basemap(BasemapDocument),
    /// `enable_labels`
    Labels(LabelDefinition),
    /// `set_shared_symbol`
    SharedSymbol(SymbolHandle),
    /// `add_graphic`
    Graphic {
        /// Graphic geometry.
        point: Coordinate,
        /// Graphic attributes.
        attributes: LabelAttributes,
    },
    /// `recenter`
    Recenter {
        /// New view center.
        center: Coordinate,
        /// New view scale.
        scale: f64,
    },
    /// `show_error`
    Error(String),
    /// `show_info`
    Info(String),
}

/// Renderer that records every call in order and wakes waiters on each one.
#[derive(Default)]
pub struct RecordingRenderer {
    events: Mutex<Vec<RenderEvent>>,
    notify: Notify,
}

impl RecordingRenderer {
    /// Shared, empty recorder.
    #[must_use]
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    fn lock(&self) -> MutexGuard<'_, Vec<RenderEvent>> {
        self.events
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    fn push(&self, event: RenderEvent) {
        self.lock().push(event);
        self.notify.notify_waiters();
    }

    /// Snapshot of all events so far.
    #[must_use]
    pub fn events(&self) -> Vec<RenderEvent> {
        self.lock().clone()
    }

    /// Number of `add_graphic` calls so far.
    #[must_use]
    pub fn graphics(&self) -> usize {
        self.lock()
            .iter()
            .filter(|e| matches!(e, RenderEvent::Graphic { .. }))
            .count()
    }

    /// Messages passed to `show_error`, in order.
    #[must_use]
    pub fn errors(&self) -> Vec<String> {
        self.lock()
            .iter()
            .filter_map(|e| match e {
                RenderEvent::Error(m) => Some(m.clone()),
                _ => None,
            })
            .collect()
    }

    /// Messages passed to `show_info`, in order.
    #[must_use]
    pub fn infos(&self) -> Vec<String> {
        self.lock()
            .iter()
            .filter_map(|e| match e {
                RenderEvent::Info(m) => Some(m.clone()),
                _ => None,
            })
            .collect()
    }

    /// Wait until an event matching `pred` has been recorded and return it.
    pub async fn wait_for<F>(&self, pred: F) -> RenderEvent
    where
        F: Fn(&RenderEvent) -> bool,
    {
        loop {
            // Registered before the check so a push in between is not missed.
            let notified = self.notify.notified();
            let found = self.lock().iter().find(|e| pred(e)).cloned();
            if let Some(e) = found {
                return e;
            }
            notified.await;
        }
    }
}

impl Renderer for RecordingRenderer {
    fn apply_basemap(&self, document: &BasemapDocument) {
        self.push(RenderEvent::Basemap(document.clone()));
    }

    fn enable_labels(&self, definition: &LabelDefinition) {
        self.push(RenderEvent::Labels(definition.clone()));
    }

    fn set_shared_symbol(&self, symbol: &SymbolHandle) {
        self.push(RenderEvent::SharedSymbol(symbol.clone()));
    }

    fn add_graphic(&self, point: Coordinate, attributes: &LabelAttributes) {
        self.push(RenderEvent::Graphic {
            point,
            attributes: attributes.clone(),
        });
    }

    fn recenter(&self, center: Coordinate, scale: f64) {
        self.push(RenderEvent::Recenter { center, scale });
    }

    fn show_error(&self, message: &str) {
        self.push(RenderEvent::Error(message.to_string()));
    }

    fn show_info(&self, message: &str) {
        self.push(RenderEvent::Info(message.to_string()));
    }
}
