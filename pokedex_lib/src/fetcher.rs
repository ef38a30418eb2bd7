//! Paginated collection fetcher.
//!
//! Fetches one listing page, then resolves every reference on it with
//! concurrent detail requests. Results come back in listing order no matter
//! which request finishes first, and a single failed detail request fails
//! the whole page.

use std::future::Future;
use std::sync::Arc;

use pokeapi::types::{NamedResource, Pokemon};
use pokeapi::{Client, ListingQuery};
use serde::Serialize;
use tokio::task::JoinSet;

use crate::error::CatalogError;
use crate::validation;

/// One fully materialized gallery page.
#[derive(Clone, Debug, Serialize)]
pub struct FetchedPage {
    /// 1-indexed page number that was requested.
    pub page: u32,
    pub page_size: u32,
    /// Total number of items in the remote collection.
    pub total_count: u32,
    /// `ceil(total_count / page_size)`.
    pub total_pages: u32,
    /// Details in listing order.
    pub items: Vec<Pokemon>,
}

/// Fetches listing pages and their details from the API.
///
/// Cheap to clone; the underlying client is shared.
#[derive(Clone)]
pub struct CollectionFetcher {
    client: Arc<Client>,
}

impl CollectionFetcher {
    pub fn new(client: Client) -> Self {
        Self {
            client: Arc::new(client),
        }
    }

    /// Fetches page `page` of `page_size` references and resolves each one.
    ///
    /// Fails with [`CatalogError::ListingFetch`] when the listing call fails,
    /// and with [`CatalogError::DetailFetch`] when any detail call fails. No
    /// partial page is ever returned.
    pub async fn fetch_page(&self, page: u32, page_size: u32) -> Result<FetchedPage, CatalogError> {
        let page = validation::validate_page(page)?;
        let page_size = validation::validate_page_size(page_size)?;

        let query = ListingQuery::for_page(page, page_size);
        tracing::info!(
            "Fetching page {} (offset {}, limit {})",
            page,
            query.offset,
            query.page_size()
        );

        let listing = self
            .client
            .get_listing(&query)
            .await
            .map_err(CatalogError::ListingFetch)?;
        let total_pages = listing.total_pages(page_size);

        let items = self.fetch_details(listing.results).await?;
        tracing::info!(
            "Page {}/{} ready: {} items ({} total)",
            page,
            total_pages,
            items.len(),
            listing.count
        );

        Ok(FetchedPage {
            page,
            page_size,
            total_count: listing.count,
            total_pages,
            items,
        })
    }

    /// Resolves every reference concurrently, preserving reference order.
    pub async fn fetch_details(
        &self,
        references: Vec<NamedResource>,
    ) -> Result<Vec<Pokemon>, CatalogError> {
        let jobs = references
            .into_iter()
            .map(|r| (r.name, r.url))
            .collect();
        fetch_ordered(&self.client, jobs, |client, locator| async move {
            client.get_pokemon_by_url(&locator).await
        })
        .await
    }

    /// Fetches a fixed set of entries by name, concurrently, in the given order.
    pub async fn fetch_named(&self, names: &[&str]) -> Result<Vec<Pokemon>, CatalogError> {
        let jobs = names
            .iter()
            .map(|name| {
                validation::validate_search(name).map(|normalized| (name.to_string(), normalized))
            })
            .collect::<Result<Vec<_>, _>>()?;
        fetch_ordered(&self.client, jobs, |client, name| async move {
            client.get_pokemon(&name).await
        })
        .await
    }
}

/// Runs one task per `(label, key)` job and reassembles the results by job
/// index. The first failure aborts the remaining tasks and is reported under
/// its label.
async fn fetch_ordered<F, Fut>(
    client: &Arc<Client>,
    jobs: Vec<(String, String)>,
    fetch: F,
) -> Result<Vec<Pokemon>, CatalogError>
where
    F: Fn(Arc<Client>, String) -> Fut,
    Fut: Future<Output = Result<Pokemon, pokeapi::Error>> + Send + 'static,
{
    let total = jobs.len();
    let mut join_set = JoinSet::new();

    for (idx, (label, key)) in jobs.into_iter().enumerate() {
        let request = fetch(Arc::clone(client), key);
        join_set.spawn(async move { (idx, label, request.await) });
    }

    let mut slots: Vec<Option<Pokemon>> = vec![None; total];

    while let Some(joined) = join_set.join_next().await {
        let (idx, label, result) = joined.map_err(|e| {
            tracing::error!("Detail task failed: {}", e);
            CatalogError::TaskFailed(e.to_string())
        })?;
        match result {
            Ok(pokemon) => {
                tracing::debug!("Resolved {} ({}/{})", label, idx + 1, total);
                slots[idx] = Some(pokemon);
            }
            Err(source) => {
                tracing::error!("Failed to fetch {}: {}", label, source);
                join_set.abort_all();
                return Err(CatalogError::DetailFetch {
                    name: label,
                    source,
                });
            }
        }
    }

    slots
        .into_iter()
        .map(|slot| slot.ok_or_else(|| CatalogError::TaskFailed("missing result".to_string())))
        .collect()
}
