//! HTTP client for the PokeAPI REST API.

use std::time::Duration;

use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    query::{ListingQuery, Query},
    types::{ListingPage, Pokemon},
    Error,
};

/// Request timeout for every call.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Production API root.
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Collection browsed by default.
pub const DEFAULT_COLLECTION: &str = "pokemon";

/// HTTP client for PokeAPI.
///
/// Holds one `reqwest::Client` so that the concurrent detail requests of a
/// gallery page share a connection pool.
#[derive(Clone)]
pub struct Client {
    http: reqwest::Client,
    /// Base URL for the API. Defaults to `https://pokeapi.co/api/v2`.
    base_api_url: String,
    /// Collection path segment, e.g. `pokemon`.
    collection: String,
}

impl Client {
    /// Creates a new client pointing at the production PokeAPI.
    pub fn new() -> Result<Self, Error> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("pokedex/", env!("CARGO_PKG_VERSION")))
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::RequestFailed(e.to_string())
            })?;
        Ok(Self {
            http,
            base_api_url: base_url.trim_end_matches('/').to_string(),
            collection: DEFAULT_COLLECTION.to_string(),
        })
    }

    fn get_url(&self, segments: &[&str], query: Option<&impl Query>) -> Result<Url, Error> {
        let mut url = Url::parse(&self.base_api_url).map_err(|e| {
            tracing::error!("Invalid base URL {}: {}", self.base_api_url, e);
            Error::RequestFailed(format!("Invalid URL: {}", e))
        })?;
        url.path_segments_mut()
            .map_err(|_| {
                tracing::error!("Base URL cannot take a path: {}", self.base_api_url);
                Error::RequestFailed(format!("Invalid URL: {}", self.base_api_url))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(match query {
            Some(query) => query.add_to_url(&url),
            None => url,
        })
    }

    async fn get<T>(&self, url: Url) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        tracing::debug!("GET {}", url);
        let resp = self
            .http
            .get(url)
            .header("accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to get resource: {}", e);
                Error::RequestFailed(e.to_string())
            })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::RequestFailed(e.to_string())
        })?;

        if !status.is_success() {
            let snippet = truncate_body(&body);
            tracing::error!("Request failed with status {}: {}", status, snippet);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }

        let parsed = serde_json::from_str::<T>(&body).map_err(|e| {
            let snippet = truncate_body(&body);
            tracing::error!("Failed to parse resource: {} | body: {}", e, snippet);
            Error::RequestFailed(format!("Failed to parse response: {}", e))
        })?;

        Ok(parsed)
    }

    /// Fetches one page of references from the listing endpoint.
    pub async fn get_listing(&self, query: &ListingQuery) -> Result<ListingPage, Error> {
        let url = self.get_url(&[self.collection.as_str()], Some(query))?;
        self.get::<ListingPage>(url).await
    }

    /// Resolves a locator returned by the listing endpoint.
    pub async fn get_pokemon_by_url(&self, locator: &str) -> Result<Pokemon, Error> {
        let url = Url::parse(locator).map_err(|e| {
            tracing::error!("Invalid locator {}: {}", locator, e);
            Error::RequestFailed(format!("Invalid URL: {}", e))
        })?;
        self.get::<Pokemon>(url).await
    }

    /// Fetches a single Pokémon by name or national dex number.
    pub async fn get_pokemon(&self, name_or_id: &str) -> Result<Pokemon, Error> {
        let url = self.get_url(&[self.collection.as_str(), name_or_id], None::<&ListingQuery>)?;
        self.get::<Pokemon>(url).await
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}
