use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The pipeline track an error originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    /// Basemap style document fetch.
    Basemap,
    /// Places-near-point search.
    Places,
    /// Symbol resolution from a style library.
    Symbol,
}

impl Stage {
    /// Lowercase label used in one-line status messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Basemap => "basemap",
            Self::Places => "places",
            Self::Symbol => "symbol",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status code carried by a service error payload.
///
/// The service normally sends an integer, but some gateways send the code as a string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ApiErrorCode {
    /// Numeric code, usually mirroring the HTTP status.
    Int(i64),
    /// Free-form textual code.
    Text(String),
}

impl fmt::Display for ApiErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(c) => write!(f, "{c}"),
            Self::Text(c) => f.write_str(c),
        }
    }
}

/// A well-formed `error` object returned by a location service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorInfo {
    /// Service status code.
    pub code: ApiErrorCode,
    /// Human-readable details, whitespace-trimmed.
    pub details: String,
    /// Optional short message that accompanies `details`.
    pub message: Option<String>,
}

impl ApiErrorInfo {
    /// Build an error info from explicit parts, trimming `details`.
    pub fn new(code: ApiErrorCode, details: impl AsRef<str>) -> Self {
        Self {
            code,
            details: details.as_ref().trim().to_string(),
            message: None,
        }
    }

    /// Decode the value of a top-level `error` field.
    ///
    /// Any object is accepted. `code` may be an integer, a float (truncated) or
    /// a string; otherwise `fallback_status` is used. `details` may be a string
    /// or an array (joined with `"; "`); non-string entries are kept as JSON text.
    ///
    /// # Errors
    /// Returns a `serde_json` error if `value` is not a JSON object.
    pub fn from_error_value(
        value: &serde_json::Value,
        fallback_status: Option<u16>,
    ) -> Result<Self, serde_json::Error> {
        let Some(obj) = value.as_object() else {
            return Err(serde::de::Error::custom(format!(
                "expected an error object, got {value}"
            )));
        };
        let code = obj
            .get("code")
            .and_then(code_from_value)
            .unwrap_or_else(|| match fallback_status {
                Some(status) => ApiErrorCode::Int(i64::from(status)),
                None => ApiErrorCode::Text("unknown".to_string()),
            });
        let details = match obj.get("details") {
            None | Some(serde_json::Value::Null) => String::new(),
            Some(serde_json::Value::Array(list)) => list
                .iter()
                .map(text_of)
                .filter(|s| !s.is_empty())
                .collect::<Vec<_>>()
                .join("; "),
            Some(other) => text_of(other),
        };
        let message = obj
            .get("message")
            .map(text_of)
            .filter(|m| !m.is_empty());
        Ok(Self {
            code,
            details,
            message,
        })
    }
}

fn code_from_value(v: &serde_json::Value) -> Option<ApiErrorCode> {
    match v {
        serde_json::Value::Number(n) => n.as_i64().map(ApiErrorCode::Int).or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite())
                .map(|f| ApiErrorCode::Int(f as i64))
        }),
        serde_json::Value::String(s) if !s.trim().is_empty() => {
            Some(ApiErrorCode::Text(s.trim().to_string()))
        }
        _ => None,
    }
}

fn text_of(v: &serde_json::Value) -> String {
    match v {
        serde_json::Value::Null => String::new(),
        serde_json::Value::String(s) => s.trim().to_string(),
        other => other.to_string(),
    }
}

impl fmt::Display for ApiErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.details.is_empty(), &self.message) {
            (false, _) => write!(f, "{}: {}", self.code, self.details),
            (true, Some(msg)) => write!(f, "{}: {msg}", self.code),
            (true, None) => write!(f, "{}", self.code),
        }
    }
}

/// Unified error type for the places pipeline.
///
/// Every variant that originates in a track names its [`Stage`] so the rendered
/// one-line status always says which part of the pipeline failed.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PlacesError {
    /// Connection, DNS or other transport-level failure.
    #[error("{stage}: transport error: {msg}")]
    Transport {
        /// Track that failed.
        stage: Stage,
        /// Transport error description.
        msg: String,
    },

    /// The track did not resolve within the configured timeout.
    #[error("{stage}: timed out")]
    Timeout {
        /// Track that timed out.
        stage: Stage,
    },

    /// Malformed JSON or an unexpected schema on a purportedly successful body.
    #[error("{stage}: could not decode response: {msg}")]
    Decode {
        /// Track that failed.
        stage: Stage,
        /// Decoder error description.
        msg: String,
    },

    /// The service answered with a well-formed `error` payload.
    #[error("{stage}: service error {info}")]
    Api {
        /// Track that failed.
        stage: Stage,
        /// Code and details reported by the service.
        info: ApiErrorInfo,
    },

    /// Non-success HTTP status without an `error` payload.
    #[error("{stage}: unexpected http status {status}")]
    Status {
        /// Track that failed.
        stage: Stage,
        /// HTTP status code.
        status: u16,
    },

    /// The style library itself could not be loaded.
    #[error("symbol: style library {library} failed to load: {msg}")]
    StyleLoad {
        /// Style library identifier.
        library: String,
        /// Load error description.
        msg: String,
    },

    /// The style library loaded but holds no symbol for the requested name.
    #[error("symbol: symbol {symbol} not found in style library {library}")]
    SymbolNotFound {
        /// Style library identifier.
        library: String,
        /// Requested symbol name.
        symbol: String,
    },

    /// The shared HTTP client could not be constructed.
    #[error("http client could not be built: {0}")]
    HttpClient(String),

    /// Invalid input argument.
    #[error("invalid argument: {0}")]
    InvalidArg(String),
}

impl PlacesError {
    /// Helper: build a `Transport` error.
    pub fn transport(stage: Stage, msg: impl Into<String>) -> Self {
        Self::Transport {
            stage,
            msg: msg.into(),
        }
    }

    /// Helper: build a `Decode` error.
    pub fn decode(stage: Stage, msg: impl Into<String>) -> Self {
        Self::Decode {
            stage,
            msg: msg.into(),
        }
    }

    /// Helper: build an `Api` error.
    #[must_use]
    pub fn api(stage: Stage, info: ApiErrorInfo) -> Self {
        Self::Api { stage, info }
    }

    /// Helper: build a `StyleLoad` error.
    pub fn style_load(library: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::StyleLoad {
            library: library.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build a `SymbolNotFound` error.
    pub fn symbol_not_found(library: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self::SymbolNotFound {
            library: library.into(),
            symbol: symbol.into(),
        }
    }

    /// The track this error belongs to, if any.
    #[must_use]
    pub const fn stage(&self) -> Option<Stage> {
        match self {
            Self::Transport { stage, .. }
            | Self::Timeout { stage }
            | Self::Decode { stage, .. }
            | Self::Api { stage, .. }
            | Self::Status { stage, .. } => Some(*stage),
            Self::StyleLoad { .. } | Self::SymbolNotFound { .. } => Some(Stage::Symbol),
            Self::HttpClient(_) | Self::InvalidArg(_) => None,
        }
    }

    /// Returns true for style library and symbol resolution failures.
    #[must_use]
    pub const fn is_resource_load(&self) -> bool {
        matches!(self, Self::StyleLoad { .. } | Self::SymbolNotFound { .. })
    }

    /// Service-provided error info, when the failure came from an `error` payload.
    #[must_use]
    pub const fn api_info(&self) -> Option<&ApiErrorInfo> {
        match self {
            Self::Api { info, .. } => Some(info),
            _ => None,
        }
    }
}

/// Tagged result of one network or resource-resolution operation.
pub type FetchOutcome<T> = Result<T, PlacesError>;
