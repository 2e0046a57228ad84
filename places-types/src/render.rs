//! Values handed across the renderer boundary.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Attribute key under which a place's name is attached to its graphic.
pub const NAME_ATTRIBUTE: &str = "Name";

/// Attributes attached to a graphic; the label definition reads from these.
pub type LabelAttributes = BTreeMap<String, String>;

/// A basemap style document. Opaque to the pipeline, consumed by the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BasemapDocument(pub serde_json::Value);

impl BasemapDocument {
    /// Borrow the raw JSON document.
    #[must_use]
    pub const fn as_json(&self) -> &serde_json::Value {
        &self.0
    }
}

/// A renderable symbol resolved from a style library.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymbolHandle {
    /// Name the symbol was resolved under (e.g. `"park"`).
    pub name: String,
    /// Style-library definition of the symbol, passed through untouched.
    pub definition: serde_json::Value,
}

/// Horizontal anchoring of a label relative to its point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[non_exhaustive]
pub enum HorizontalAlignment {
    /// Label starts at the point.
    #[default]
    Left,
    /// Label is centered on the point.
    Center,
    /// Label ends at the point.
    Right,
}

/// Vertical anchoring of a label relative to its point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[non_exhaustive]
pub enum VerticalAlignment {
    /// Label hangs below the point.
    #[default]
    Top,
    /// Label is centered on the point.
    Middle,
    /// Label sits above the point.
    Bottom,
}

/// How place graphics are labelled on the overlay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelDefinition {
    /// Graphic attribute rendered as the label text.
    pub attribute: String,
    /// Font size in points.
    pub font_size: f32,
    /// CSS color name or hex string.
    pub color: String,
    /// Horizontal alignment.
    pub horizontal: HorizontalAlignment,
    /// Vertical alignment.
    pub vertical: VerticalAlignment,
}

impl Default for LabelDefinition {
    fn default() -> Self {
        Self {
            attribute: NAME_ATTRIBUTE.to_string(),
            font_size: 10.0,
            color: "darkgreen".to_string(),
            horizontal: HorizontalAlignment::Left,
            vertical: VerticalAlignment::Top,
        }
    }
}
