use std::fmt;

use crate::error::PlacesError;

/// Opaque API key shared by every location service call.
///
/// `Debug` and `Display` are redacted so the key never ends up in a log line.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Wrap a non-empty API key.
    ///
    /// # Errors
    /// Returns `InvalidArg` if the key is empty or whitespace only.
    pub fn new(key: impl Into<String>) -> Result<Self, PlacesError> {
        let key = key.into();
        if key.trim().is_empty() {
            return Err(PlacesError::InvalidArg("credential is empty".into()));
        }
        Ok(Self(key))
    }

    /// The raw key, for placing on the wire only.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

impl fmt::Display for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("***")
    }
}
