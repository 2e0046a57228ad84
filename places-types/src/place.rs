//! Typed records decoded from a places-near-point response.

use serde::{Deserialize, Deserializer, Serialize};
use url::Url;

use crate::geo::Coordinate;

/// Successful payload of a places search.
///
/// `results` may be empty; an empty sequence is a reportable condition, not an error.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PlaceResult {
    /// Places in service order. A missing or `null` field decodes as empty.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub results: Vec<Place>,
    /// Links to adjacent result pages, when the service paginates.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
}

impl PlaceResult {
    /// True when the search matched nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

/// One matched place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    /// Service identifier of the place.
    pub place_id: String,
    /// Geographic position.
    pub location: PlaceLocation,
    /// Categories in service order.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub categories: Vec<Category>,
    /// Display name.
    pub name: String,
}

/// Position of a place in WGS84 degrees. No altitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlaceLocation {
    /// Longitude.
    pub x: f64,
    /// Latitude.
    pub y: f64,
}

impl From<PlaceLocation> for Coordinate {
    fn from(loc: PlaceLocation) -> Self {
        Self::new(loc.x, loc.y)
    }
}

/// A place category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Numeric category id. The live service sends it as a string.
    #[serde(deserialize_with = "int_or_numeric_string")]
    pub category_id: u64,
    /// Human-readable label.
    pub label: String,
}

/// Paging links returned alongside a result page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    /// Link to the previous page. A link that is not an absolute URL decodes as `None`.
    #[serde(default, deserialize_with = "lenient_url")]
    pub previous_url: Option<Url>,
    /// Link to the next page. A link that is not an absolute URL decodes as `None`.
    #[serde(default, deserialize_with = "lenient_url")]
    pub next_url: Option<Url>,
}

fn null_as_empty<'de, D, T>(de: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(de)?.unwrap_or_default())
}

fn lenient_url<'de, D>(de: D) -> Result<Option<Url>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(de)?;
    Ok(raw
        .as_ref()
        .and_then(serde_json::Value::as_str)
        .and_then(|s| Url::parse(s.trim()).ok()))
}

fn int_or_numeric_string<'de, D>(de: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Int(u64),
        Text(String),
    }

    match Repr::deserialize(de)? {
        Repr::Int(v) => Ok(v),
        Repr::Text(s) => s
            .trim()
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("non-numeric category id: {s}"))),
    }
}
