//! The `gallery` subcommand: drives a search session the way a browser
//! would, scrolling to the bottom after every page, then saves the rendered
//! gallery as an HTML file.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use image_finder_lib::{Advance, FinderConfig, SearchSession, SessionState};
use tokio::time::Instant;

use crate::terminal::TerminalHost;

#[derive(Args)]
pub struct GalleryArgs {
    /// Search terms (1-100 characters)
    pub query: String,

    /// Output file
    #[arg(long, default_value = "gallery.html")]
    pub out: PathBuf,

    /// Stop after this many pages
    #[arg(long)]
    pub max_pages: Option<u32>,

    /// Hide the loading spinner
    #[arg(long)]
    pub quiet: bool,
}

pub async fn run(args: &GalleryArgs, config: &FinderConfig) -> Result<()> {
    let host = if args.quiet {
        TerminalHost::quiet()
    } else {
        TerminalHost::new()
    };
    let mut session = SearchSession::new(config, host);
    session.submit(&args.query).await?;

    let mut pages = 1;
    while session.state() == SessionState::DisplayingResults
        && args.max_pages.map_or(true, |max| pages < max)
    {
        let geometry = session.host().scrolled_to_bottom();
        session.on_scroll(geometry, Instant::now());
        match session.settle_scroll().await? {
            Advance::Loaded(_) => pages += 1,
            Advance::Skipped(reason) => {
                tracing::debug!("Scroll did not advance: {:?}", reason);
                break;
            }
        }
    }

    let title = session
        .search_state()
        .map(|s| s.query.clone())
        .unwrap_or_default();
    let document = session
        .gallery()
        .render_page(&title, session.host().gallery_html())?;
    std::fs::write(&args.out, document)
        .with_context(|| format!("failed to write {}", args.out.display()))?;

    eprintln!(
        "Wrote {} images from {} page{} to {}",
        session.host().card_count(),
        pages,
        if pages == 1 { "" } else { "s" },
        args.out.display()
    );
    Ok(())
}
