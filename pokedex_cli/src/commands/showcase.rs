use anyhow::Result;
use pokedex_lib::{lookup, Client, CollectionFetcher};

use crate::commands::with_spinner;
use crate::output::{print_cards, OutputFormat};

pub async fn run(client: Client, format: &OutputFormat) -> Result<()> {
    let fetcher = CollectionFetcher::new(client);
    let pokemon = with_spinner("Loading Pokemon...", lookup::showcase(&fetcher)).await?;
    print_cards(&pokemon, format)
}
