use places_types::{ApiErrorCode, ApiErrorInfo, PlacesError, Stage};
use serde_json::json;

#[test]
fn details_are_trimmed() {
    let v = json!({"code": 401, "details": " invalid token "});
    let info = ApiErrorInfo::from_error_value(&v, None).unwrap();
    assert_eq!(info.code, ApiErrorCode::Int(401));
    assert_eq!(info.details, "invalid token");
}

#[test]
fn details_array_is_joined() {
    let v = json!({
        "code": 400,
        "message": "Invalid parameters",
        "details": ["radius must be <= 10000 ", "  ", " x is required"]
    });
    let info = ApiErrorInfo::from_error_value(&v, None).unwrap();
    assert_eq!(info.details, "radius must be <= 10000; x is required");
    assert_eq!(info.message.as_deref(), Some("Invalid parameters"));
}

#[test]
fn missing_code_falls_back_to_http_status() {
    let v = json!({"details": "nope"});
    let info = ApiErrorInfo::from_error_value(&v, Some(403)).unwrap();
    assert_eq!(info.code, ApiErrorCode::Int(403));
}

#[test]
fn string_code_is_preserved() {
    let v = json!({"code": "INVALID_TOKEN", "details": "expired"});
    let info = ApiErrorInfo::from_error_value(&v, Some(401)).unwrap();
    assert_eq!(info.code, ApiErrorCode::Text("INVALID_TOKEN".into()));
}

#[test]
fn non_object_error_value_is_rejected() {
    assert!(ApiErrorInfo::from_error_value(&json!("boom"), None).is_err());
}

#[test]
fn api_error_message_names_stage_code_and_details() {
    let info = ApiErrorInfo::new(ApiErrorCode::Int(401), " invalid token ");
    let msg = PlacesError::api(Stage::Basemap, info).to_string();
    assert_eq!(msg, "basemap: service error 401: invalid token");
}

#[test]
fn message_used_when_details_empty() {
    let v = json!({"code": 500, "message": " Internal error "});
    let info = ApiErrorInfo::from_error_value(&v, None).unwrap();
    assert_eq!(info.to_string(), "500: Internal error");
}

#[test]
fn stage_classification() {
    assert_eq!(
        PlacesError::style_load("lib", "offline").stage(),
        Some(Stage::Symbol)
    );
    assert!(PlacesError::symbol_not_found("lib", "park").is_resource_load());
    assert!(!PlacesError::transport(Stage::Places, "reset").is_resource_load());
    assert_eq!(PlacesError::InvalidArg("x".into()).stage(), None);
}

#[test]
fn http_client_failure_belongs_to_no_track() {
    let e = PlacesError::HttpClient("tls backend unavailable".into());
    assert_eq!(e.stage(), None);
    assert!(!e.is_resource_load());
    assert_eq!(
        e.to_string(),
        "http client could not be built: tls backend unavailable"
    );
}

#[test]
fn loosely_typed_error_fields_are_kept() {
    let v = json!({"code": 401.0, "details": [{"field": "token"}, 7, " expired "]});
    let info = ApiErrorInfo::from_error_value(&v, None).unwrap();
    assert_eq!(info.code, ApiErrorCode::Int(401));
    assert_eq!(info.details, r#"{"field":"token"}; 7; expired"#);
}

#[test]
fn errors_serialize_with_lowercase_stage() {
    let e = PlacesError::Timeout {
        stage: Stage::Places,
    };
    let s = serde_json::to_string(&e).unwrap();
    assert!(s.contains("\"places\""));
    let back: PlacesError = serde_json::from_str(&s).unwrap();
    assert_eq!(back, e);
}
