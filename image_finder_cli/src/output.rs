use anyhow::Result;
use image_finder_lib::types::ImageResult;
use image_finder_lib::RenderedCard;
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
    Markdown,
}

#[derive(Tabled, Serialize)]
struct ImageRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: u64,
    #[tabled(rename = "Tags")]
    #[serde(rename = "Tags")]
    tags: String,
    #[tabled(rename = "Likes")]
    #[serde(rename = "Likes")]
    likes: String,
    #[tabled(rename = "Views")]
    #[serde(rename = "Views")]
    views: String,
    #[tabled(rename = "Comments")]
    #[serde(rename = "Comments")]
    comments: String,
    #[tabled(rename = "Downloads")]
    #[serde(rename = "Downloads")]
    downloads: String,
    #[tabled(rename = "Full size")]
    #[serde(rename = "Full size")]
    url: String,
}

#[derive(Tabled, Serialize)]
struct CardRow {
    #[tabled(rename = "#")]
    #[serde(rename = "#")]
    number: usize,
    #[tabled(rename = "Tags")]
    #[serde(rename = "Tags")]
    tags: String,
    #[tabled(rename = "Thumbnail")]
    #[serde(rename = "Thumbnail")]
    thumbnail: String,
}

fn build_image_rows(images: &[ImageResult]) -> Vec<ImageRow> {
    images
        .iter()
        .map(|image| ImageRow {
            id: image.id,
            tags: image.tags.clone(),
            likes: format_count(image.likes),
            views: format_count(image.views),
            comments: format_count(image.comments),
            downloads: format_count(image.downloads),
            url: image.large_image_url.clone(),
        })
        .collect()
}

/// Rows for cards that start at gallery position `offset` (0-indexed);
/// numbers are 1-indexed so they can be passed to `open`.
fn build_card_rows(cards: &[RenderedCard], offset: usize) -> Vec<CardRow> {
    cards
        .iter()
        .enumerate()
        .map(|(i, card)| CardRow {
            number: offset + i + 1,
            tags: card.tags.clone(),
            thumbnail: card.thumbnail_url.clone(),
        })
        .collect()
}

pub fn print_images(images: &[ImageResult], format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => println!("{}", Table::new(build_image_rows(images))),
        OutputFormat::Markdown => {
            let mut table = Table::new(build_image_rows(images));
            table.with(Style::markdown());
            println!("{}", table);
        }
        OutputFormat::Csv => print_csv(build_image_rows(images))?,
        OutputFormat::Json => print_json(&images),
    }
    Ok(())
}

pub fn print_cards(cards: &[RenderedCard], offset: usize, format: &OutputFormat) -> Result<()> {
    let rows = build_card_rows(cards, offset);
    match format {
        OutputFormat::Table => println!("{}", Table::new(rows)),
        OutputFormat::Markdown => {
            let mut table = Table::new(rows);
            table.with(Style::markdown());
            println!("{}", table);
        }
        OutputFormat::Csv => print_csv(rows)?,
        OutputFormat::Json => print_json(&rows),
    }
    Ok(())
}

fn print_csv<T: Serialize>(rows: Vec<T>) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

fn format_count(value: u64) -> String {
    if value >= 1_000_000 {
        format!("{:.1}M", value as f64 / 1_000_000.0)
    } else if value >= 1_000 {
        format!("{:.1}K", value as f64 / 1_000.0)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_finder_lib::types::SearchResponse;

    fn load_images_fixture() -> Vec<ImageResult> {
        let json_str = include_str!("../../pixabay_api/tests/fixtures/search_cats.json");
        let resp: SearchResponse = serde_json::from_str(json_str).unwrap();
        resp.hits
    }

    // -- format_count tests --

    #[test]
    fn test_format_count_millions() {
        assert_eq!(format_count(15_000_000), "15.0M");
    }

    #[test]
    fn test_format_count_thousands() {
        assert_eq!(format_count(7_671), "7.7K");
    }

    #[test]
    fn test_format_count_small() {
        assert_eq!(format_count(5), "5");
    }

    // -- Row builder tests --

    #[test]
    fn test_build_image_rows_mapping() {
        let images = load_images_fixture();
        let rows = build_image_rows(&images);
        assert_eq!(rows.len(), 2);

        let row = &rows[0];
        assert_eq!(row.id, 195893);
        assert_eq!(row.tags, "blossom, bloom, flower");
        assert_eq!(row.likes, "5");
        assert_eq!(row.views, "7.7K");
        assert_eq!(row.comments, "2");
        assert_eq!(row.downloads, "6.4K");
        assert_eq!(row.url, "https://pixabay.com/get/ed6a99fd0a76647_1280.jpg");
    }

    #[test]
    fn test_build_card_rows_numbering() {
        let cards: Vec<RenderedCard> = (0..2)
            .map(|i| RenderedCard {
                id: i,
                full_size_url: format!("https://cdn.example.com/{}_1280.jpg", i),
                thumbnail_url: format!("https://cdn.example.com/{}_640.jpg", i),
                tags: format!("tag{}", i),
                markup: String::new(),
            })
            .collect();
        let rows = build_card_rows(&cards, 40);
        assert_eq!(rows[0].number, 41);
        assert_eq!(rows[1].number, 42);
        assert_eq!(rows[1].thumbnail, "https://cdn.example.com/1_640.jpg");
    }

    #[test]
    fn test_image_rows_serialize_with_display_headers() {
        let images = load_images_fixture();
        let rows = build_image_rows(&images[..1]);
        let value = serde_json::to_value(&rows).unwrap();
        assert_eq!(value[0]["Tags"], "blossom, bloom, flower");
        assert_eq!(value[0]["Full size"], "https://pixabay.com/get/ed6a99fd0a76647_1280.jpg");
    }
}
