use std::sync::Arc;

use crate::connector::StyleLibrary;
use crate::types::{FetchOutcome, PlacesError, SymbolHandle};

/// Resolves a named symbol from a style library that loads asynchronously.
///
/// A library that fails to load is reported as `StyleLoad`; a loaded library
/// that has no matching symbol is reported as `SymbolNotFound`. The two are
/// never conflated, and an absent symbol is never treated as success.
#[derive(Clone)]
pub struct SymbolResolver {
    library: Arc<dyn StyleLibrary>,
}

impl SymbolResolver {
    /// Wrap a style library.
    #[must_use]
    pub fn new(library: Arc<dyn StyleLibrary>) -> Self {
        Self { library }
    }

    /// Identifier of the wrapped library.
    #[must_use]
    pub fn library_name(&self) -> &str {
        self.library.name()
    }

    /// Load the library if needed and resolve `name`.
    ///
    /// # Errors
    /// Returns `StyleLoad` if the library cannot be loaded or a lookup fails,
    /// and `SymbolNotFound` if the loaded library has no symbol for `name`.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "places::symbol::resolve",
            skip(self),
            fields(library = %self.library.name()),
        )
    )]
    pub async fn resolve(&self, name: &str) -> FetchOutcome<SymbolHandle> {
        self.load().await?;
        self.lookup(name).await
    }

    /// Load the library. Every failure is reported as `StyleLoad`.
    ///
    /// # Errors
    /// Returns `StyleLoad` naming this library.
    pub async fn load(&self) -> Result<(), PlacesError> {
        self.library.load().await.map_err(|e| {
            #[cfg(feature = "tracing")]
            tracing::warn!(error = %e, "style library failed to load");
            match e {
                e @ PlacesError::StyleLoad { .. } => e,
                other => PlacesError::style_load(self.library.name(), other.to_string()),
            }
        })
    }

    /// Look up `name` in the already loaded library.
    ///
    /// # Errors
    /// Returns `SymbolNotFound` when the library has no such symbol and
    /// `StyleLoad` when the lookup itself fails.
    pub async fn lookup(&self, name: &str) -> FetchOutcome<SymbolHandle> {
        let library = self.library.name();
        match self.library.symbol(&[name.to_string()]).await {
            Ok(Some(symbol)) => Ok(symbol),
            Ok(None) => Err(PlacesError::symbol_not_found(library, name)),
            Err(e @ (PlacesError::StyleLoad { .. } | PlacesError::SymbolNotFound { .. })) => {
                Err(e)
            }
            Err(other) => Err(PlacesError::style_load(library, other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct Fixed {
        load_ok: bool,
        symbol: Option<SymbolHandle>,
    }

    #[async_trait]
    impl StyleLibrary for Fixed {
        fn name(&self) -> &str {
            "TestStyle"
        }
        async fn load(&self) -> Result<(), PlacesError> {
            if self.load_ok {
                Ok(())
            } else {
                Err(PlacesError::transport(
                    crate::types::Stage::Symbol,
                    "connection refused",
                ))
            }
        }
        async fn symbol(&self, _keys: &[String]) -> Result<Option<SymbolHandle>, PlacesError> {
            Ok(self.symbol.clone())
        }
    }

    fn park() -> SymbolHandle {
        SymbolHandle {
            name: "park".into(),
            definition: serde_json::json!({"type": "CIMPointSymbol"}),
        }
    }

    #[tokio::test]
    async fn load_failure_is_style_load() {
        let r = SymbolResolver::new(Arc::new(Fixed {
            load_ok: false,
            symbol: Some(park()),
        }));
        let e = r.resolve("park").await.unwrap_err();
        match e {
            PlacesError::StyleLoad { library, msg } => {
                assert_eq!(library, "TestStyle");
                assert!(msg.contains("connection refused"));
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[tokio::test]
    async fn missing_symbol_is_not_found() {
        let r = SymbolResolver::new(Arc::new(Fixed {
            load_ok: true,
            symbol: None,
        }));
        let e = r.resolve("park").await.unwrap_err();
        assert!(matches!(e, PlacesError::SymbolNotFound { ref symbol, .. } if symbol == "park"));
    }

    #[tokio::test]
    async fn resolves_symbol() {
        let r = SymbolResolver::new(Arc::new(Fixed {
            load_ok: true,
            symbol: Some(park()),
        }));
        assert_eq!(r.resolve("park").await.unwrap(), park());
    }
}
