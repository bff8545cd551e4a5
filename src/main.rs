use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use achievement_catalog::achievements::catalog;
use achievement_catalog::cards::load_cards;
use achievement_catalog::{build_catalog, build_info, CatalogConfig, Family};

#[derive(Parser, Debug)]
#[command(
    name = "achievement_catalog",
    version,
    long_version = build_info::version_line(),
    about = "Generate the achievement catalog from a card database"
)]
struct Args {
    /// Card database (JSON array of card records)
    #[arg(long)]
    cards: PathBuf,

    /// JSON config with the families to build and their expected record counts
    #[arg(long)]
    config: Option<PathBuf>,

    /// Build only this family (repeatable, overrides the config)
    #[arg(long = "family", value_enum)]
    families: Vec<Family>,

    /// Write the catalog here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Indent the JSON output
    #[arg(long)]
    pretty: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level)),
        )
        .with_writer(io::stderr)
        .init();

    info!(version = %build_info::version_line(), "achievement_catalog");

    let mut config = match args.config.as_deref() {
        Some(path) => CatalogConfig::from_json_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => CatalogConfig::default(),
    };
    if !args.families.is_empty() {
        config.families = args.families;
    }

    let cards = load_cards(&args.cards)
        .with_context(|| format!("loading card database {}", args.cards.display()))?;
    info!(cards = cards.len(), "card database loaded");

    // Nothing is written unless the whole catalog assembled.
    let achievements = build_catalog(&cards, &config).context("assembling catalog")?;
    let fingerprint = catalog::fingerprint(&achievements)?;
    info!(records = achievements.len(), %fingerprint, "catalog assembled");

    match args.output.as_deref() {
        Some(path) => {
            let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            catalog::write_json(&mut writer, &achievements, args.pretty)?;
            writer.flush()?;
            info!(path = %path.display(), "wrote catalog");
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            catalog::write_json(&mut writer, &achievements, args.pretty)?;
            writeln!(writer)?;
        }
    }

    Ok(())
}
