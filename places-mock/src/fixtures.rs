//! Deterministic fixtures modeled on a "garden" search in central Edinburgh.

use places_core::{
    BasemapDocument, Category, Coordinate, Place, PlaceLocation, PlaceResult,
    PlaceSearchRequest, SymbolHandle,
};

/// Query center used by the fixtures.
pub const CENTER: Coordinate = Coordinate::new(-3.19551, 55.94417);

/// `"garden"` within 1000 m of [`CENTER`].
#[must_use]
pub fn garden_request() -> PlaceSearchRequest {
    PlaceSearchRequest::default()
}

/// Build one place.
#[must_use]
pub fn place(id: &str, name: &str, x: f64, y: f64) -> Place {
    Place {
        place_id: id.to_string(),
        location: PlaceLocation { x, y },
        categories: Vec::new(),
        name: name.to_string(),
    }
}

/// A single-result page: "Garden Cafe" at (-3.195, 55.944).
#[must_use]
pub fn garden_cafe() -> PlaceResult {
    PlaceResult {
        results: vec![place("p1", "Garden Cafe", -3.195, 55.944)],
        pagination: None,
    }
}

/// Three gardens around the center, with categories.
#[must_use]
pub fn gardens() -> PlaceResult {
    let park = Category {
        category_id: 16032,
        label: "Park".to_string(),
    };
    let mut botanic = place("p2", "Royal Botanic Garden", -3.2089, 55.9653);
    botanic.categories.push(park.clone());
    let mut princes = place("p3", "Princes Street Gardens", -3.2010, 55.9509);
    princes.categories.push(park);
    PlaceResult {
        results: vec![
            place("p1", "Garden Cafe", -3.195, 55.944),
            botanic,
            princes,
        ],
        pagination: None,
    }
}

/// An empty result page.
#[must_use]
pub fn no_places() -> PlaceResult {
    PlaceResult::default()
}

/// The `"park"` point symbol.
#[must_use]
pub fn park_symbol() -> SymbolHandle {
    SymbolHandle {
        name: "park".to_string(),
        definition: serde_json::json!({
            "type": "CIMPointSymbol",
            "cimRef": "Park",
        }),
    }
}

/// A minimal outdoor basemap web map document.
#[must_use]
pub fn outdoor_basemap() -> BasemapDocument {
    BasemapDocument(serde_json::json!({
        "baseMap": {"title": "Outdoor", "baseMapLayers": []},
        "version": "2.27",
    }))
}
