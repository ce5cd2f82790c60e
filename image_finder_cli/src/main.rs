mod commands;
mod output;
mod terminal;

use std::path::Path;

use anyhow::Result;
use clap::{Parser, Subcommand};
use image_finder_lib::config::ENV_API_KEY;
use image_finder_lib::FinderConfig;

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "imagefinder")]
#[command(about = "Search Pixabay photos from the terminal")]
struct Cli {
    /// Output format: table, json, csv, or markdown
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// Pixabay API key (defaults to PIXABAY_API_KEY)
    #[arg(long, global = true)]
    api_key: Option<String>,

    /// Results per page, 3-200 (defaults to PIXABAY_PER_PAGE or 40)
    #[arg(long, global = true)]
    per_page: Option<u32>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch one page of results, or all of them
    Search(commands::search::SearchArgs),
    /// Render every page of results into an HTML gallery file
    Gallery(commands::gallery::GalleryArgs),
    /// Interactive search with infinite scroll
    Browse,
}

#[tokio::main]
async fn main() -> Result<()> {
    load_dotenv(None);
    tracing_subscriber::fmt()
        .with_env_filter(env_filter()?)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let format = match cli.output.as_str() {
        "json" => OutputFormat::Json,
        "csv" => OutputFormat::Csv,
        "markdown" | "md" => OutputFormat::Markdown,
        _ => OutputFormat::Table,
    };

    let config = load_config(cli.api_key.as_deref(), cli.per_page)?;
    tracing::debug!("Using {:?}", config);

    match &cli.command {
        Commands::Search(args) => commands::search::run(args, &config, &format).await?,
        Commands::Gallery(args) => commands::gallery::run(args, &config).await?,
        Commands::Browse => commands::browse::run(&config, &format).await?,
    }

    Ok(())
}

fn load_config(api_key: Option<&str>, per_page: Option<u32>) -> Result<FinderConfig> {
    let config = FinderConfig::from_lookup(|name| match api_key {
        Some(key) if name == ENV_API_KEY => Some(key.to_string()),
        _ => std::env::var(name).ok(),
    })?;
    Ok(match per_page {
        Some(n) => config.with_page_size(n)?,
        None => config,
    })
}

/// Loads `.env` (or `path`) into the process environment. Runs before the
/// subscriber is built so `RUST_LOG` from the file takes effect.
fn load_dotenv(path: Option<&Path>) {
    let loaded = match path {
        Some(path) => dotenvy::from_path(path).map(|_| ()),
        None => dotenvy::dotenv().map(|_| ()),
    };
    if let Err(e) = loaded {
        if !e.not_found() {
            eprintln!("Ignoring .env: {}", e);
        }
    }
}

fn env_filter() -> Result<tracing_subscriber::EnvFilter> {
    Ok(tracing_subscriber::EnvFilter::from_default_env()
        .add_directive("image_finder=info".parse()?))
}
