//! `pokedex gallery`: one page at a time, or an interactive browser.

use anyhow::{bail, Result};
use clap::Args;
use pokedex_lib::validation::{self, DEFAULT_PAGE_SIZE};
use pokedex_lib::{Client, CollectionFetcher, Gallery, Phase};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::commands::with_spinner;
use crate::output::{page_indicator, print_gallery, OutputFormat};

#[derive(Args)]
pub struct GalleryArgs {
    /// Page number (1-indexed)
    #[arg(long, default_value = "1")]
    pub page: u32,

    /// Entries per page (1-100)
    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
    pub page_size: u32,

    /// Mark an entry as selected (shows its alternate sprite)
    #[arg(long)]
    pub select: Option<String>,

    /// Browse pages interactively from stdin
    #[arg(short, long)]
    pub interactive: bool,
}

/// One line of interactive input.
#[derive(Debug, PartialEq, Eq)]
pub enum GalleryCommand {
    Next,
    Previous,
    Goto(u32),
    Select(String),
    Reload,
    Help,
    Quit,
}

/// Parses one interactive line. Returns `None` for blank or unknown input.
pub fn parse_command(line: &str) -> Option<GalleryCommand> {
    let line = line.trim();
    let (head, rest) = match line.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (line, ""),
    };
    match (head.to_lowercase().as_str(), rest) {
        ("n" | "next", "") => Some(GalleryCommand::Next),
        ("p" | "prev" | "previous", "") => Some(GalleryCommand::Previous),
        ("r" | "reload", "") => Some(GalleryCommand::Reload),
        ("h" | "help" | "?", "") => Some(GalleryCommand::Help),
        ("q" | "quit" | "exit", "") => Some(GalleryCommand::Quit),
        ("g" | "goto", page) => page.parse().ok().map(GalleryCommand::Goto),
        ("s" | "select", name) if !name.is_empty() => {
            Some(GalleryCommand::Select(name.to_lowercase()))
        }
        _ => None,
    }
}

const HELP: &str = "Commands: n (next), p (previous), g <page>, s <name> (toggle selection), r (reload), q (quit)";

/// Rejects a starting page or page size that could never be fetched.
fn check_args(args: &GalleryArgs) -> Result<()> {
    validation::validate_page(args.page)?;
    validation::validate_page_size(args.page_size)?;
    Ok(())
}

pub async fn run(args: &GalleryArgs, client: Client, format: &OutputFormat) -> Result<()> {
    check_args(args)?;
    let mut gallery = Gallery::new(CollectionFetcher::new(client), args.page_size);
    if let Some(name) = &args.select {
        gallery.select(&name.to_lowercase());
    }

    with_spinner("Loading Pokemon...", gallery.go_to(args.page)).await;

    if args.interactive {
        return interactive(&mut gallery, format).await;
    }

    if gallery.state().phase() == Phase::Errored {
        bail!(
            "{}",
            gallery.state().error_message().unwrap_or("Failed to load page")
        );
    }
    print_gallery(gallery.state(), format)?;
    if !matches!(format, OutputFormat::Table) {
        eprintln!(
            "Page {}/{}",
            gallery.state().current_page(),
            gallery.state().total_pages()
        );
    }
    Ok(())
}

async fn interactive(gallery: &mut Gallery, format: &OutputFormat) -> Result<()> {
    render(gallery, format)?;
    eprintln!("{}", HELP);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let Some(command) = parse_command(&line) else {
            if !line.trim().is_empty() {
                eprintln!("Unknown command: {}", line.trim());
            }
            continue;
        };

        let fetched = match command {
            GalleryCommand::Quit => break,
            GalleryCommand::Help => {
                eprintln!("{}", HELP);
                continue;
            }
            GalleryCommand::Select(name) => {
                gallery.select(&name);
                true
            }
            GalleryCommand::Next => with_spinner("Loading Pokemon...", gallery.next_page()).await,
            GalleryCommand::Previous => {
                with_spinner("Loading Pokemon...", gallery.previous_page()).await
            }
            GalleryCommand::Goto(page) => {
                with_spinner("Loading Pokemon...", gallery.go_to(page)).await
            }
            GalleryCommand::Reload => with_spinner("Loading Pokemon...", gallery.reload()).await,
        };

        if fetched {
            render(gallery, format)?;
        } else {
            eprintln!("{}", page_indicator(gallery.state()));
        }
    }
    Ok(())
}

fn render(gallery: &Gallery, format: &OutputFormat) -> Result<()> {
    match gallery.state().error_message() {
        Some(message) => eprintln!("Error: {}", message),
        None => print_gallery(gallery.state(), format)?,
    }
    Ok(())
}
