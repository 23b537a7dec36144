//! Autopage CLI
//!
//! Reads content from a file or stdin, runs it through the host pipeline and
//! writes the paginated result to stdout.

use autopage::policy::coerce_count;
use autopage::{AutoPager, Item, Outcome, PagingType, Settings};
use clap::Parser;
use eyre::{Context, Result};
use log::info;
use std::io::{Read, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "autopage")]
#[command(author, version, about = "Insert page-break markers into long-form content", long_about = None)]
struct Cli {
    /// Path to settings file (JSON)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Split by total page count or by approximate words per page
    #[arg(short, long, value_name = "pages|words", value_parser = str::parse::<PagingType>)]
    by: Option<PagingType>,

    /// Total number of pages
    #[arg(short, long)]
    pages: Option<String>,

    /// Approximate words per page
    #[arg(short, long)]
    words: Option<String>,

    /// Page-break marker to insert
    #[arg(short, long)]
    marker: Option<String>,

    /// Item kind reported to the pipeline
    #[arg(short, long, default_value = "post")]
    kind: String,

    /// Treat the item as opted out of automatic paging
    #[arg(long)]
    disabled: bool,

    /// Input file; stdin when omitted
    file: Option<PathBuf>,
}

impl Cli {
    /// Layer command-line values over the loaded settings
    fn apply(&self, mut settings: Settings) -> Settings {
        if let Some(by) = self.by {
            settings.paging_type = by;
        }
        if let Some(pages) = &self.pages {
            settings.num_pages = coerce_count(pages);
        }
        if let Some(words) = &self.words {
            settings.num_words = coerce_count(words);
            if self.by.is_none() {
                settings.paging_type = PagingType::Words;
            }
        }
        if let Some(marker) = &self.marker {
            settings.marker = marker.clone();
        }
        if !settings.post_types.contains(&self.kind) {
            settings.post_types.push(self.kind.clone());
        }
        settings
    }
}

fn setup_logging() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();
    Ok(())
}

fn read_input(file: Option<&PathBuf>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut content = String::new();
            std::io::stdin()
                .read_to_string(&mut content)
                .context("Failed to read stdin")?;
            Ok(content)
        }
    }
}

fn main() -> Result<()> {
    setup_logging().context("Failed to setup logging")?;

    let cli = Cli::parse();
    let settings = Settings::load(cli.config.as_deref()).context("Failed to load settings")?;
    let settings = cli.apply(settings);

    let content = read_input(cli.file.as_ref())?;
    let mut item = Item {
        id: 0,
        kind: cli.kind.clone(),
        content,
        autopaging_disabled: cli.disabled,
    };

    let pager = AutoPager::new(settings);
    match pager.process(&mut item) {
        Outcome::Paginated { pages } => info!("split into {} pages", pages),
        Outcome::Skipped(reason) => info!("left unchanged: {}", reason),
    }

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(item.content.as_bytes())
        .context("Failed to write output")?;
    stdout.flush()?;
    Ok(())
}
