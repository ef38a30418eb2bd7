mod commands;
mod output;
mod xml_output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use pokedex_lib::{Client, DEFAULT_BASE_URL};
use tracing_subscriber::EnvFilter;

use crate::output::OutputFormat;

/// Applied when `RUST_LOG` is unset or unparseable.
const DEFAULT_LOG_FILTER: &str = "pokedex=warn";

fn log_filter(rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

#[derive(Parser)]
#[command(name = "pokedex")]
#[command(about = "Browse Pokémon data from PokeAPI")]
struct Cli {
    /// Output format: table, json, csv, markdown, or xml
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// API base URL
    #[arg(long, env = "POKEAPI_BASE_URL", default_value = DEFAULT_BASE_URL, global = true)]
    base_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the featured entries
    Showcase,
    /// Browse the paginated gallery
    Gallery(commands::gallery::GalleryArgs),
    /// Look up one Pokémon by name
    Search(commands::search::SearchArgs),
    /// Show a random Pokémon
    Random,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(log_filter(std::env::var("RUST_LOG").ok().as_deref()))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let format = OutputFormat::parse(&cli.output);
    let client = Client::with_base_url(&cli.base_url)?;

    match &cli.command {
        Commands::Showcase => commands::showcase::run(client, &format).await?,
        Commands::Gallery(args) => commands::gallery::run(args, client, &format).await?,
        Commands::Search(args) => commands::search::run(args, &client, &format).await?,
        Commands::Random => commands::random::run(&client, &format).await?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_filter_defaults_to_warn() {
        assert_eq!(log_filter(None).to_string(), "pokedex=warn");
        assert_eq!(log_filter(Some("  ")).to_string(), "pokedex=warn");
    }

    #[test]
    fn test_log_filter_honours_rust_log() {
        assert_eq!(log_filter(Some("pokedex=info")).to_string(), "pokedex=info");
        assert_eq!(log_filter(Some("pokedex=debug")).to_string(), "pokedex=debug");
    }
}
