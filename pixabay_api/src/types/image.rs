use serde::{Deserialize, Serialize};

pub type ImageID = u64;

/// A single hit from the search endpoint.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ImageResult {
    #[serde(default)]
    pub id: ImageID,

    #[serde(rename = "pageURL", default)]
    pub page_url: Option<String>,

    #[serde(rename = "type", default)]
    pub image_type: Option<String>,

    pub tags: String,

    #[serde(rename = "previewURL", default)]
    pub preview_url: Option<String>,

    /// Medium sized image (640px), used as the gallery thumbnail.
    #[serde(rename = "webformatURL")]
    pub webformat_url: String,

    #[serde(rename = "webformatWidth", default)]
    pub webformat_width: Option<u32>,

    #[serde(rename = "webformatHeight", default)]
    pub webformat_height: Option<u32>,

    /// Scaled image with a maximum of 1280px, opened by the lightbox.
    #[serde(rename = "largeImageURL")]
    pub large_image_url: String,

    #[serde(rename = "imageWidth", default)]
    pub image_width: Option<u32>,

    #[serde(rename = "imageHeight", default)]
    pub image_height: Option<u32>,

    pub likes: u64,

    pub views: u64,

    pub comments: u64,

    pub downloads: u64,

    #[serde(default)]
    pub user: Option<String>,
}
