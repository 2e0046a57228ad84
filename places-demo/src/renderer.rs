use places::{
    BasemapDocument, Coordinate, LabelAttributes, LabelDefinition, Renderer, SymbolHandle,
};

/// Renderer that reports every call as a log line.
pub struct LogRenderer;

impl Renderer for LogRenderer {
    fn apply_basemap(&self, document: &BasemapDocument) {
        let keys = document
            .as_json()
            .as_object()
            .map(|o| o.keys().cloned().collect::<Vec<_>>().join(","))
            .unwrap_or_default();
        tracing::info!(keys = %keys, "basemap applied");
    }

    fn enable_labels(&self, definition: &LabelDefinition) {
        tracing::info!(
            attribute = %definition.attribute,
            color = %definition.color,
            font_size = definition.font_size,
            "labels enabled"
        );
    }

    fn set_shared_symbol(&self, symbol: &SymbolHandle) {
        tracing::info!(symbol = %symbol.name, "shared symbol set");
    }

    fn add_graphic(&self, point: Coordinate, attributes: &LabelAttributes) {
        let name = attributes.get(places::NAME_ATTRIBUTE).map_or("", String::as_str);
        tracing::info!(x = point.x, y = point.y, name, "graphic added");
    }

    fn recenter(&self, center: Coordinate, scale: f64) {
        tracing::info!(x = center.x, y = center.y, scale, "view recentered");
    }

    fn show_error(&self, message: &str) {
        tracing::error!("{message}");
    }

    fn show_info(&self, message: &str) {
        tracing::info!("{message}");
    }
}
