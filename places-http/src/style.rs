use async_trait::async_trait;
use places_core::connector::StyleLibrary;
use places_core::{Credential, Endpoints, PlacesError, SymbolHandle};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tokio::sync::OnceCell;
use url::Url;

use crate::client::describe;

#[derive(Debug, Deserialize)]
struct StyleData {
    #[serde(default)]
    items: Vec<StyleItem>,
}

#[derive(Debug, Deserialize)]
struct StyleItem {
    name: String,
    #[serde(flatten)]
    rest: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct PortalSearch {
    #[serde(default)]
    results: Vec<PortalItem>,
}

#[derive(Debug, Deserialize)]
struct PortalItem {
    id: String,
}

/// A web style library whose item catalogue is fetched once over HTTP.
///
/// The catalogue is a JSON document of the form `{"items": [{"name": ..., ...}]}`.
/// It is read from the configured data URL or, when none is set, from the data
/// of the portal `Style` item whose type keywords carry the library name.
/// Lookups match item names case-insensitively and hand back the remaining item
/// fields as the symbol definition.
pub struct WebStyleLibrary {
    http: reqwest::Client,
    name: String,
    data_url: Option<Url>,
    portal: Url,
    credential: Option<Credential>,
    items: OnceCell<Vec<StyleItem>>,
}

impl WebStyleLibrary {
    /// Build a library from `endpoints.style_name`, `endpoints.style_library`
    /// and `endpoints.portal`.
    #[must_use]
    pub fn new(http: reqwest::Client, endpoints: &Endpoints, credential: Option<Credential>) -> Self {
        Self {
            http,
            name: endpoints.style_name.clone(),
            data_url: endpoints.style_library.clone(),
            portal: endpoints.portal.clone(),
            credential,
            items: OnceCell::new(),
        }
    }

    fn load_err(&self, msg: impl Into<String>) -> PlacesError {
        PlacesError::style_load(&self.name, msg)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        req: reqwest::RequestBuilder,
    ) -> Result<T, PlacesError> {
        let req = match &self.credential {
            Some(cred) => req.bearer_auth(cred.expose()),
            None => req,
        };
        let resp = req.send().await.map_err(|e| self.load_err(describe(e)))?;
        let status = resp.status();
        if !status.is_success() {
            return Err(self.load_err(format!("http status {}", status.as_u16())));
        }
        let body = resp.text().await.map_err(|e| self.load_err(describe(e)))?;
        serde_json::from_str(&body).map_err(|e| self.load_err(format!("invalid response: {e}")))
    }

    async fn resolve_data_url(&self) -> Result<Url, PlacesError> {
        if let Some(url) = &self.data_url {
            return Ok(url.clone());
        }
        let search = self
            .portal
            .join("search")
            .map_err(|e| self.load_err(format!("invalid portal URL: {e}")))?;
        let q = format!("typekeywords:\"{}\" AND type:\"Style\"", self.name);
        let found: PortalSearch = self
            .get_json(
                self.http
                    .get(search)
                    .query(&[("q", q.as_str()), ("f", "json"), ("num", "1")]),
            )
            .await?;
        let item = found
            .results
            .into_iter()
            .next()
            .ok_or_else(|| self.load_err("no style item with this name on the portal"))?;
        #[cfg(feature = "tracing")]
        tracing::debug!(library = %self.name, item = %item.id, "style item found on portal");
        self.portal
            .join(&format!("content/items/{}/data", item.id))
            .map_err(|e| self.load_err(format!("invalid style item id: {e}")))
    }

    async fn fetch_items(&self) -> Result<Vec<StyleItem>, PlacesError> {
        let url = self.resolve_data_url().await?;
        let data: StyleData = self.get_json(self.http.get(url)).await?;
        #[cfg(feature = "tracing")]
        tracing::debug!(library = %self.name, items = data.items.len(), "style library loaded");
        Ok(data.items)
    }
}

#[async_trait]
impl StyleLibrary for WebStyleLibrary {
    fn name(&self) -> &str {
        &self.name
    }

    async fn load(&self) -> Result<(), PlacesError> {
        self.items
            .get_or_try_init(|| self.fetch_items())
            .await
            .map(|_| ())
    }

    async fn symbol(&self, keys: &[String]) -> Result<Option<SymbolHandle>, PlacesError> {
        let items = self
            .items
            .get()
            .ok_or_else(|| self.load_err("library not loaded"))?;
        let found = items
            .iter()
            .find(|item| keys.iter().any(|k| item.name.eq_ignore_ascii_case(k)));
        Ok(found.map(|item| SymbolHandle {
            name: item.name.clone(),
            definition: serde_json::Value::Object(item.rest.clone()),
        }))
    }
}
