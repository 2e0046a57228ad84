//! Classification of raw service responses into typed outcomes.
//!
//! Both location services answer either with a JSON document or with a JSON
//! object holding a top-level `error` field. The `error` field always wins: a
//! body carrying it is a service failure even if it also carries `results`.

use serde_json::Value;

use crate::types::{
    ApiErrorInfo, BasemapDocument, FetchOutcome, PlaceResult, PlacesError, Stage,
};

fn parse_json(stage: Stage, body: &str) -> Result<Value, PlacesError> {
    serde_json::from_str(body).map_err(|e| PlacesError::decode(stage, e.to_string()))
}

/// Extract a service error from a top-level `error` field, if present.
///
/// A `null` error field counts as absent. An `error` field that is present but
/// not a decodable error object is reported as a decode failure.
fn service_error(stage: Stage, value: &Value, status: u16) -> Option<PlacesError> {
    let err = value.get("error").filter(|e| !e.is_null())?;
    let out = match ApiErrorInfo::from_error_value(err, Some(status)) {
        Ok(info) => PlacesError::api(stage, info),
        Err(e) => PlacesError::decode(stage, format!("malformed error payload: {e}")),
    };
    #[cfg(feature = "tracing")]
    tracing::debug!(stage = %stage, status, error = %out, "service returned an error payload");
    Some(out)
}

/// Decode a places-near-point response.
///
/// Rules, in order:
/// - body is not JSON → `Decode`
/// - body has a top-level `error` → `Api`
/// - status is not 2xx → `Status`
/// - body is not an object or does not match the place schema → `Decode`
/// - otherwise the decoded `PlaceResult` (a missing `results` field is empty)
///
/// # Errors
/// Returns the `PlacesError` selected by the rules above.
pub fn decode_places(status: u16, body: &str) -> FetchOutcome<PlaceResult> {
    let stage = Stage::Places;
    let value = match parse_json(stage, body) {
        Ok(v) => v,
        Err(e) if (200..300).contains(&status) => return Err(e),
        Err(_) => return Err(PlacesError::Status { stage, status }),
    };
    if let Some(err) = service_error(stage, &value, status) {
        return Err(err);
    }
    if !(200..300).contains(&status) {
        return Err(PlacesError::Status { stage, status });
    }
    if !value.is_object() {
        return Err(PlacesError::decode(stage, "expected a JSON object"));
    }
    serde_json::from_value(value).map_err(|e| PlacesError::decode(stage, e.to_string()))
}

/// Decode a basemap style response.
///
/// Success requires status 200 and a JSON object without a top-level `error`.
/// Any other status maps to `Api` when the body carries an `error` object and
/// to `Status` otherwise.
///
/// # Errors
/// Returns `Api`, `Status` or `Decode` as described above.
pub fn decode_basemap(status: u16, body: &str) -> FetchOutcome<BasemapDocument> {
    let stage = Stage::Basemap;
    if status != 200 {
        let err = serde_json::from_str::<Value>(body)
            .ok()
            .and_then(|v| service_error(stage, &v, status))
            .unwrap_or(PlacesError::Status { stage, status });
        return Err(err);
    }
    let value = parse_json(stage, body)?;
    if let Some(err) = service_error(stage, &value, status) {
        return Err(err);
    }
    if !value.is_object() {
        return Err(PlacesError::decode(stage, "expected a JSON object"));
    }
    Ok(BasemapDocument(value))
}
