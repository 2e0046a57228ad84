use places_core::{ApiErrorCode, PlacesError, Stage, decode_basemap, decode_places};
use proptest::prelude::*;
use serde_json::json;

fn arb_place() -> impl Strategy<Value = (String, f64, f64, String)> {
    (
        "[a-z0-9]{1,12}",
        -180.0f64..=180.0,
        -90.0f64..=90.0,
        "[A-Za-z ]{0,24}",
    )
}

fn body_for(places: &[(String, f64, f64, String)]) -> serde_json::Value {
    let results: Vec<_> = places
        .iter()
        .map(|(id, x, y, name)| {
            json!({
                "placeId": id,
                "location": {"x": x, "y": y},
                "categories": [{"categoryId": "16000", "label": "Park"}],
                "name": name,
            })
        })
        .collect();
    json!({ "results": results })
}

proptest! {
    #[test]
    fn decoding_preserves_length_and_exact_coordinates(
        places in proptest::collection::vec(arb_place(), 1..40)
    ) {
        let body = body_for(&places).to_string();
        let decoded = decode_places(200, &body).unwrap();
        prop_assert_eq!(decoded.results.len(), places.len());
        for (got, (id, x, y, name)) in decoded.results.iter().zip(&places) {
            prop_assert_eq!(&got.place_id, id);
            prop_assert_eq!(&got.name, name);
            prop_assert_eq!(got.location.x.to_bits(), x.to_bits());
            prop_assert_eq!(got.location.y.to_bits(), y.to_bits());
        }
    }

    #[test]
    fn error_payload_always_wins(
        places in proptest::collection::vec(arb_place(), 0..10),
        code in 400i64..600,
        details in "[ a-z]{0,20}",
    ) {
        let mut body = body_for(&places);
        body["error"] = json!({"code": code, "details": details});
        let err = decode_places(200, &body.to_string()).unwrap_err();
        match err {
            PlacesError::Api { stage, info } => {
                prop_assert_eq!(stage, Stage::Places);
                prop_assert_eq!(info.details, details.trim());
            }
            other => prop_assert!(false, "expected api error, got {other:?}"),
        }
    }
}

#[test]
fn error_with_structured_details_is_still_api_error() {
    let body = json!({
        "results": [],
        "error": {
            "code": 400,
            "message": "Invalid parameters",
            "details": [{"field": "radius"}, " radius too large "]
        }
    });
    let err = decode_places(200, &body.to_string()).unwrap_err();
    let info = err.api_info().expect("api error");
    assert_eq!(info.code, ApiErrorCode::Int(400));
    assert_eq!(info.details, r#"{"field":"radius"}; radius too large"#);
}

#[test]
fn error_with_float_code_is_still_api_error() {
    let body = r#"{"error":{"code":401.0,"details":" invalid token "}}"#;
    let err = decode_basemap(401, body).unwrap_err();
    assert!(matches!(err, PlacesError::Api { stage: Stage::Basemap, .. }));
    assert_eq!(err.to_string(), "basemap: service error 401: invalid token");
}

#[test]
fn error_with_unusable_code_falls_back_to_status() {
    let body = r#"{"error":{"code":{"nested":true},"details":"denied"}}"#;
    let err = decode_places(403, body).unwrap_err();
    assert_eq!(err.api_info().map(|i| i.code.clone()), Some(ApiErrorCode::Int(403)));
}

#[test]
fn non_object_error_is_decode_error() {
    let err = decode_places(200, r#"{"error":"boom"}"#).unwrap_err();
    assert!(matches!(err, PlacesError::Decode { stage: Stage::Places, .. }));
}
