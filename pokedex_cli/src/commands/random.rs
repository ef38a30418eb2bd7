use anyhow::Result;
use pokedex_lib::lookup;
use pokedex_lib::Client;

use crate::commands::with_spinner;
use crate::output::{print_cards, OutputFormat};

pub async fn run(client: &Client, format: &OutputFormat) -> Result<()> {
    let pokemon = with_spinner("Searching...", lookup::lookup_random(client)).await?;
    print_cards(&[pokemon], format)
}
