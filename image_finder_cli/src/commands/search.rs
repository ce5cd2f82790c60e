//! The `search` subcommand: one-shot API queries printed as a table or data.

use anyhow::{bail, Result};
use clap::Args;
use image_finder_lib::pixabay_api::{ImageQuery, ImageType, Orientation, Query};
use image_finder_lib::validation;
use image_finder_lib::FinderConfig;

use crate::output::{print_images, OutputFormat};

#[derive(Args)]
pub struct SearchArgs {
    /// Search terms (1-100 characters)
    pub query: String,

    /// Page number
    #[arg(long, default_value = "1")]
    pub page: u32,

    /// Keep fetching pages until the end of results
    #[arg(long)]
    pub all: bool,

    /// Orientation: all, horizontal (h), vertical (v)
    #[arg(long, default_value = "horizontal")]
    pub orientation: String,

    /// Image type: all, photo, illustration, vector
    #[arg(long, default_value = "photo")]
    pub image_type: String,
}

pub async fn run(args: &SearchArgs, config: &FinderConfig, format: &OutputFormat) -> Result<()> {
    let search = validation::sanitize_query(&args.query)?;
    if args.page == 0 {
        bail!("--page starts at 1");
    }
    let Ok(orientation) = args.orientation.parse::<Orientation>() else {
        bail!(
            "unknown orientation '{}'. Valid: all, horizontal, vertical",
            args.orientation
        );
    };
    let Ok(image_type) = args.image_type.parse::<ImageType>() else {
        bail!(
            "unknown image type '{}'. Valid: all, photo, illustration, vector",
            args.image_type
        );
    };

    let client = config.client();
    let mut images = Vec::new();
    let mut page = args.page;
    let total_hits = loop {
        let query = ImageQuery::new(&search, &config.api_key)
            .with_orientation(orientation)
            .with_image_type(image_type)
            .with_per_page(config.page_size)
            .with_page(page);
        let resp = client.search_images(&query).await?;
        let fetched = resp.hits.len();
        images.extend(resp.hits);

        let last_page = u64::from(page) * u64::from(config.page_size) >= resp.total_hits;
        if !args.all || fetched == 0 || last_page {
            break resp.total_hits;
        }
        page += 1;
    };

    if images.is_empty() {
        eprintln!("No images found for '{}'.", search);
        return Ok(());
    }
    eprintln!(
        "{} images shown, {} reachable, last page fetched: {}",
        images.len(),
        total_hits,
        page
    );
    print_images(&images, format)
}
