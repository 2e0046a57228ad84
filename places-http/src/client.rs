use std::error::Error as _;

use places_core::{PlacesError, Stage};

/// User agent sent by every connector in this crate.
pub const USER_AGENT: &str = concat!("places-http/", env!("CARGO_PKG_VERSION"));

/// Build the shared HTTP client used when callers do not bring their own.
///
/// # Errors
/// Returns `HttpClient` if the TLS backend cannot be initialized.
pub fn default_client() -> Result<reqwest::Client, PlacesError> {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| PlacesError::HttpClient(describe(e)))
}

/// Map a `reqwest` failure onto the error taxonomy.
pub fn map_reqwest_err(stage: Stage, e: reqwest::Error) -> PlacesError {
    if e.is_timeout() {
        return PlacesError::Timeout { stage };
    }
    if e.is_decode() {
        return PlacesError::decode(stage, describe(e));
    }
    PlacesError::transport(stage, describe(e))
}

// The URL is stripped: places queries carry the credential as a query parameter.
pub(crate) fn describe(e: reqwest::Error) -> String {
    let e = e.without_url();
    let mut msg = e.to_string();
    let mut source = e.source();
    while let Some(inner) = source {
        msg.push_str(": ");
        msg.push_str(&inner.to_string());
        source = inner.source();
    }
    msg
}
