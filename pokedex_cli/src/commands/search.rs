use anyhow::Result;
use clap::Args;
use pokedex_lib::lookup;
use pokedex_lib::Client;

use crate::commands::with_spinner;
use crate::output::{print_cards, OutputFormat};

#[derive(Args)]
pub struct SearchArgs {
    /// Pokémon name (case-insensitive)
    pub name: String,
}

pub async fn run(args: &SearchArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let pokemon = with_spinner("Searching...", lookup::lookup_by_name(client, &args.name)).await?;
    print_cards(&[pokemon], format)
}
