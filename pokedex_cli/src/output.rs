use anyhow::Result;
use pokedex_lib::types::Pokemon;
use pokedex_lib::GalleryState;
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::xml_output;

/// Width of a stat bar in characters; a full bar is a base stat of 255.
const STAT_BAR_WIDTH: usize = 20;
const MAX_BASE_STAT: f64 = 255.0;

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
    Markdown,
    Xml,
}

impl OutputFormat {
    pub fn parse(value: &str) -> Self {
        match value {
            "json" => OutputFormat::Json,
            "csv" => OutputFormat::Csv,
            "markdown" | "md" => OutputFormat::Markdown,
            "xml" => OutputFormat::Xml,
            _ => OutputFormat::Table,
        }
    }
}

#[derive(Tabled, Serialize)]
struct CardRow {
    #[tabled(rename = "#")]
    #[serde(rename = "#")]
    id: u32,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Types")]
    #[serde(rename = "Types")]
    types: String,
    #[tabled(rename = "Height")]
    #[serde(rename = "Height")]
    height: String,
    #[tabled(rename = "Weight")]
    #[serde(rename = "Weight")]
    weight: String,
    #[tabled(rename = "Image")]
    #[serde(rename = "Image")]
    image: String,
}

#[derive(Tabled, Serialize)]
struct GalleryRow {
    #[tabled(rename = "")]
    #[serde(rename = "Selected")]
    selected: String,
    #[tabled(rename = "#")]
    #[serde(rename = "#")]
    id: u32,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Types")]
    #[serde(rename = "Types")]
    types: String,
    #[tabled(rename = "Image")]
    #[serde(rename = "Image")]
    image: String,
}

#[derive(Tabled, Serialize)]
struct StatRow {
    #[tabled(rename = "Stat")]
    #[serde(rename = "Stat")]
    stat: String,
    #[tabled(rename = "Base")]
    #[serde(rename = "Base")]
    value: u32,
    #[tabled(rename = "")]
    #[serde(skip)]
    bar: String,
}

// -- Row builders --

fn build_card_rows(pokemon: &[Pokemon]) -> Vec<CardRow> {
    pokemon
        .iter()
        .map(|p| CardRow {
            id: p.id,
            name: capitalize(&p.name),
            types: format_types(p),
            height: format_height(p),
            weight: format_weight(p),
            image: p.primary_image().unwrap_or_default().to_string(),
        })
        .collect()
}

fn build_gallery_rows(state: &GalleryState) -> Vec<GalleryRow> {
    state
        .items()
        .iter()
        .map(|p| GalleryRow {
            selected: if state.is_selected(&p.name) {
                "*".to_string()
            } else {
                String::new()
            },
            id: p.id,
            name: capitalize(&p.name),
            types: format_types(p),
            image: state.image_for(p).unwrap_or_default().to_string(),
        })
        .collect()
}

fn build_stat_rows(pokemon: &Pokemon) -> Vec<StatRow> {
    pokemon
        .stats
        .iter()
        .map(|s| StatRow {
            stat: stat_label(&s.stat.name),
            value: s.base_stat,
            bar: stat_bar(s.base_stat),
        })
        .collect()
}

// -- Header / footer --

pub fn print_header() {
    println!("=== Pokémon ===");
}

pub fn print_footer() {
    println!("Data provided by PokeAPI (https://pokeapi.co).");
}

// -- Cards --

/// Prints full cards: summary rows followed by each entry's base stats.
pub fn print_cards(pokemon: &[Pokemon], format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => {
            print_header();
            println!("{}", Table::new(build_card_rows(pokemon)));
            for p in pokemon {
                println!("{} base stats", capitalize(&p.name));
                println!("{}", Table::new(build_stat_rows(p)));
            }
            print_footer();
        }
        OutputFormat::Markdown => {
            let mut table = Table::new(build_card_rows(pokemon));
            table.with(Style::markdown());
            println!("{}", table);
            for p in pokemon {
                let mut stats = Table::new(build_stat_rows(p));
                stats.with(Style::markdown());
                println!("\n### {}\n\n{}", capitalize(&p.name), stats);
            }
        }
        OutputFormat::Csv => write_csv(build_card_rows(pokemon))?,
        OutputFormat::Json => print_json(&pokemon),
        OutputFormat::Xml => println!("{}", xml_output::pokemon_to_xml(pokemon)),
    }
    Ok(())
}

// -- Gallery --

pub fn print_gallery(state: &GalleryState, format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => {
            print_header();
            println!("{}", Table::new(build_gallery_rows(state)));
            println!("{}", page_indicator(state));
            print_footer();
        }
        OutputFormat::Markdown => {
            let mut table = Table::new(build_gallery_rows(state));
            table.with(Style::markdown());
            println!("{}", table);
        }
        OutputFormat::Csv => write_csv(build_gallery_rows(state))?,
        OutputFormat::Json => print_json(state),
        OutputFormat::Xml => println!("{}", xml_output::gallery_to_xml(state)),
    }
    Ok(())
}

/// `Page 2 of 109`, with the available navigation hints.
pub fn page_indicator(state: &GalleryState) -> String {
    let mut line = format!(
        "Page {} of {}",
        state.current_page(),
        state.total_pages()
    );
    if state.has_previous() {
        line.push_str("  [p] previous");
    }
    if state.has_next() {
        line.push_str("  [n] next");
    }
    line
}

// -- JSON / CSV --

pub fn print_json<T: Serialize + ?Sized>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

fn write_csv<T: Serialize>(rows: Vec<T>) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

// -- Formatting --

fn format_height(p: &Pokemon) -> String {
    format!("{:.1}m", p.height_m())
}

fn format_weight(p: &Pokemon) -> String {
    format!("{:.1}kg", p.weight_kg())
}

fn format_types(p: &Pokemon) -> String {
    p.type_names()
        .iter()
        .map(|t| capitalize(t))
        .collect::<Vec<_>>()
        .join(", ")
}

/// `special-attack` becomes `Special attack`: only the first hyphen is
/// replaced.
fn stat_label(name: &str) -> String {
    capitalize(&name.replacen('-', " ", 1))
}

fn stat_bar(base_stat: u32) -> String {
    let ratio = (f64::from(base_stat) / MAX_BASE_STAT).min(1.0);
    let filled = (ratio * STAT_BAR_WIDTH as f64).round() as usize;
    format!(
        "{}{}",
        "█".repeat(filled),
        "░".repeat(STAT_BAR_WIDTH - filled)
    )
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
