//! Geographic primitives and the places search request.

use serde::{Deserialize, Serialize};

use crate::error::PlacesError;

/// A WGS84 point: `x` is longitude, `y` is latitude, both in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Longitude in degrees.
    pub x: f64,
    /// Latitude in degrees.
    pub y: f64,
}

impl Coordinate {
    /// Construct a coordinate without validation.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Construct a validated (longitude, latitude) pair.
    ///
    /// # Errors
    /// Returns `InvalidArg` for non-finite values or values outside
    /// `[-180, 180]` x `[-90, 90]`.
    pub fn try_new(x: f64, y: f64) -> Result<Self, PlacesError> {
        let c = Self { x, y };
        c.validate()?;
        Ok(c)
    }

    /// Check that this is a valid (longitude, latitude) pair.
    ///
    /// # Errors
    /// Returns `InvalidArg` describing the offending component.
    pub fn validate(&self) -> Result<(), PlacesError> {
        if !self.x.is_finite() || !(-180.0..=180.0).contains(&self.x) {
            return Err(PlacesError::InvalidArg(format!(
                "longitude out of range: {}",
                self.x
            )));
        }
        if !self.y.is_finite() || !(-90.0..=90.0).contains(&self.y) {
            return Err(PlacesError::InvalidArg(format!(
                "latitude out of range: {}",
                self.y
            )));
        }
        Ok(())
    }
}

/// Parameters of one "places near point" query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceSearchRequest {
    search_text: String,
    center: Coordinate,
    radius_m: f64,
}

impl PlaceSearchRequest {
    /// Build a validated search request.
    ///
    /// # Errors
    /// Returns `InvalidArg` if `search_text` is blank, `center` is not a valid
    /// (longitude, latitude) pair, or `radius_m` is not a positive finite number.
    pub fn new(
        search_text: impl Into<String>,
        center: Coordinate,
        radius_m: f64,
    ) -> Result<Self, PlacesError> {
        let req = Self {
            search_text: search_text.into(),
            center,
            radius_m,
        };
        req.validate()?;
        Ok(req)
    }

    /// Re-check the invariants enforced by [`PlaceSearchRequest::new`].
    ///
    /// Requests decoded from configuration files bypass `new`, so consumers
    /// validate again before issuing the query.
    ///
    /// # Errors
    /// Same conditions as [`PlaceSearchRequest::new`].
    pub fn validate(&self) -> Result<(), PlacesError> {
        if self.search_text.trim().is_empty() {
            return Err(PlacesError::InvalidArg("search text is empty".into()));
        }
        self.center.validate()?;
        if !self.radius_m.is_finite() || self.radius_m <= 0.0 {
            return Err(PlacesError::InvalidArg(format!(
                "radius must be positive, got {}",
                self.radius_m
            )));
        }
        Ok(())
    }

    /// Free-text search term.
    #[must_use]
    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    /// Center of the search circle.
    #[must_use]
    pub const fn center(&self) -> Coordinate {
        self.center
    }

    /// Search radius in meters.
    #[must_use]
    pub const fn radius_m(&self) -> f64 {
        self.radius_m
    }
}

impl Default for PlaceSearchRequest {
    fn default() -> Self {
        Self {
            search_text: "garden".to_string(),
            center: Coordinate::new(-3.19551, 55.94417),
            radius_m: 1000.0,
        }
    }
}
