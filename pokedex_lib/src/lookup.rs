//! Single-entry lookups: by name, by dex number, at random, and the fixed
//! showcase set.

use pokeapi::types::Pokemon;
use pokeapi::Client;
use rand::Rng;

use crate::error::CatalogError;
use crate::fetcher::CollectionFetcher;
use crate::validation;

/// Entries shown on the landing view.
pub const SHOWCASE: &[&str] = &["blastoise"];

/// Looks up one Pokémon by the name the user typed.
///
/// The name is trimmed and lowercased before the request. A 404 becomes
/// [`CatalogError::NotFound`] quoting the original input.
pub async fn lookup_by_name(client: &Client, input: &str) -> Result<Pokemon, CatalogError> {
    let name = validation::validate_search(input)?;
    tracing::info!("Looking up {}", name);
    match client.get_pokemon(&name).await {
        Ok(pokemon) => Ok(pokemon),
        Err(e) if e.status() == Some(404) => Err(CatalogError::NotFound(input.to_string())),
        Err(e) => Err(CatalogError::Api(e)),
    }
}

/// Looks up one Pokémon by national dex number.
pub async fn lookup_by_id(client: &Client, id: u32) -> Result<Pokemon, CatalogError> {
    let id = validation::validate_dex_number(id)?;
    tracing::info!("Looking up #{}", id);
    Ok(client.get_pokemon(&id.to_string()).await?)
}

/// Draws a dex number uniformly from `1..=MAX_DEX_NUMBER`.
pub fn random_dex_number<R: Rng>(rng: &mut R) -> u32 {
    rng.gen_range(1..=validation::MAX_DEX_NUMBER)
}

/// Looks up a random Pokémon.
pub async fn lookup_random(client: &Client) -> Result<Pokemon, CatalogError> {
    let id = random_dex_number(&mut rand::thread_rng());
    lookup_by_id(client, id).await
}

/// Fetches the showcase entries concurrently, in showcase order.
pub async fn showcase(fetcher: &CollectionFetcher) -> Result<Vec<Pokemon>, CatalogError> {
    fetcher.fetch_named(SHOWCASE).await
}
