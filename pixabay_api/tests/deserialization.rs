use pixabay_api::types::{ImageResult, SearchResponse};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

#[test]
fn deserialize_search_full() {
    let json = load_fixture("search_cats.json");
    let resp: SearchResponse = serde_json::from_str(&json).unwrap();
    assert_eq!(resp.total, 4692);
    assert_eq!(resp.total_hits, 500);
    assert_eq!(resp.hits.len(), 2);

    let hit = &resp.hits[0];
    assert_eq!(hit.id, 195893);
    assert_eq!(hit.tags, "blossom, bloom, flower");
    assert_eq!(
        hit.webformat_url,
        "https://pixabay.com/get/35bbf209e13e39d2_640.jpg"
    );
    assert_eq!(
        hit.large_image_url,
        "https://pixabay.com/get/ed6a99fd0a76647_1280.jpg"
    );
    assert_eq!(hit.likes, 5);
    assert_eq!(hit.views, 7671);
    assert_eq!(hit.comments, 2);
    assert_eq!(hit.downloads, 6439);
    assert_eq!(hit.webformat_width, Some(640));
    assert_eq!(hit.user.as_deref(), Some("Josch13"));
    assert_eq!(hit.image_type.as_deref(), Some("photo"));
}

#[test]
fn deserialize_search_sparse_hit() {
    let json = load_fixture("search_cats.json");
    let resp: SearchResponse = serde_json::from_str(&json).unwrap();

    let hit = &resp.hits[1];
    assert_eq!(hit.tags, "cat, kitten, <pet>");
    assert_eq!(hit.preview_url, None);
    assert_eq!(hit.image_width, None);
    assert_eq!(hit.user, None);
}

#[test]
fn deserialize_search_empty() {
    let json = load_fixture("search_empty.json");
    let resp: SearchResponse = serde_json::from_str(&json).unwrap();
    assert!(resp.hits.is_empty());
    assert_eq!(resp.total_hits, 0);
}

#[test]
fn deserialize_missing_total_defaults_to_zero() {
    let json = r#"{"totalHits": 3, "hits": []}"#;
    let resp: SearchResponse = serde_json::from_str(json).unwrap();
    assert_eq!(resp.total, 0);
    assert_eq!(resp.total_hits, 3);
}

#[test]
fn deserialize_hit_missing_required_field_fails() {
    let json = r#"{"tags": "x", "webformatURL": "a", "likes": 1, "views": 1, "comments": 1, "downloads": 1}"#;
    assert!(serde_json::from_str::<ImageResult>(json).is_err());
}
