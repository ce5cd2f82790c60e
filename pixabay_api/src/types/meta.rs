use serde::{Deserialize, Serialize};

use super::ImageResult;

/// Body of a `/api/` search response.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    /// Total number of matches on Pixabay.
    #[serde(default)]
    pub total: u64,
    /// Number of matches reachable through paging (capped by the API at 500).
    pub total_hits: u64,
    pub hits: Vec<ImageResult>,
}
