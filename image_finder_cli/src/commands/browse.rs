//! The `browse` subcommand: an interactive session on stdin.
//!
//! A line of text edits the query and submits it; an empty line scrolls to
//! the bottom of the gallery (through the debounced scroll monitor); `more`
//! presses the load-more button; `open N` shows card N's full-size image.

use anyhow::Result;
use image_finder_lib::{Advance, FinderConfig, SearchSession, SkipReason};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::Instant;

use crate::output::{print_cards, OutputFormat};
use crate::terminal::TerminalHost;

const HELP: &str = "\
Type a query and press Enter to search.
  <Enter>   scroll to the bottom (loads the next page)
  more      load the next page
  open N    print the full-size URL of card N
  help      show this help
  quit      exit";

pub async fn run(config: &FinderConfig, format: &OutputFormat) -> Result<()> {
    let mut session = SearchSession::new(config, TerminalHost::new());
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut shown = 0usize;

    eprintln!("{}", HELP);
    while let Some(line) = lines.next_line().await? {
        let result = match BrowseCommand::parse(&line) {
            BrowseCommand::Quit => break,
            BrowseCommand::Help => {
                eprintln!("{}", HELP);
                continue;
            }
            BrowseCommand::More => session.load_more().await,
            BrowseCommand::Scroll => {
                let geometry = session.host().scrolled_to_bottom();
                session.on_scroll(geometry, Instant::now());
                session.settle_scroll().await
            }
            BrowseCommand::Open(Some(n)) => {
                open_card(&session, n);
                continue;
            }
            BrowseCommand::Open(None) => {
                eprintln!("Usage: open N");
                continue;
            }
            BrowseCommand::Search(text) => {
                session.input_edited();
                session.submit(text).await
            }
        };

        if session.gallery().len() < shown {
            shown = 0;
        }
        match result {
            Ok(Advance::Loaded(report)) => {
                if report.page == 1 {
                    shown = 0;
                }
                let cards = &session.gallery().cards()[shown..];
                print_cards(cards, shown, format)?;
                shown = session.gallery().len();
                tracing::debug!("Page {} appended", report.page);
            }
            Ok(Advance::Skipped(SkipReason::EndOfResults)) => {
                eprintln!("No more pages for this query.");
            }
            Ok(Advance::Skipped(SkipReason::NoActiveQuery)) => {
                eprintln!("Type a query first.");
            }
            Ok(Advance::Skipped(reason)) => {
                tracing::debug!("Nothing loaded: {:?}", reason);
            }
            // Already reported through the notifier.
            Err(e) => tracing::debug!("Search attempt ended: {}", e),
        }
    }
    Ok(())
}

/// One line of user input.
#[derive(Debug, PartialEq, Eq)]
enum BrowseCommand<'a> {
    Quit,
    Help,
    More,
    Scroll,
    /// `open` with a card number, or `None` when the number is missing or
    /// not a number.
    Open(Option<usize>),
    Search(&'a str),
}

impl<'a> BrowseCommand<'a> {
    fn parse(line: &'a str) -> Self {
        let input = line.trim();
        match input {
            "quit" | "exit" | "q" => BrowseCommand::Quit,
            "help" | "?" => BrowseCommand::Help,
            "more" => BrowseCommand::More,
            "" => BrowseCommand::Scroll,
            "open" => BrowseCommand::Open(None),
            cmd if cmd.starts_with("open ") => {
                BrowseCommand::Open(cmd["open ".len()..].trim().parse().ok())
            }
            text => BrowseCommand::Search(text),
        }
    }
}

fn open_card(session: &SearchSession<TerminalHost>, n: usize) {
    match session.lightbox().and_then(|lightbox| lightbox.open(n)) {
        Some(url) => println!("{}", url),
        None => eprintln!(
            "No card #{} ({} available)",
            n,
            session.lightbox().map_or(0, |lightbox| lightbox.len())
        ),
    }
}
