use pixabay_api::{ImageQuery, ImageType, Orientation, Query};
use url::Url;

fn base_url() -> Url {
    Url::parse("https://example.com/api/").unwrap()
}

#[test]
fn image_query_defaults() {
    let url = ImageQuery::new("cats", "k").add_to_url(&base_url());
    let query = url.query().unwrap();
    assert!(query.contains("q=cats"));
    assert!(query.contains("orientation=horizontal"));
    assert!(query.contains("image_type=photo"));
    assert!(query.contains("safesearch=true"));
    assert!(query.contains("key=k"));
    assert!(query.contains("page=1"));
    assert!(!query.contains("per_page"));
}

#[test]
fn image_query_with_page_and_size() {
    let url = ImageQuery::new("cats", "k")
        .with_page(3)
        .with_per_page(40)
        .add_to_url(&base_url());
    let query = url.query().unwrap();
    assert!(query.contains("page=3"));
    assert!(query.contains("per_page=40"));
}

#[test]
fn image_query_encodes_search_text() {
    let url = ImageQuery::new("cats&key=stolen", "k").add_to_url(&base_url());
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    assert!(pairs.contains(&("q".to_string(), "cats&key=stolen".to_string())));
    assert_eq!(pairs.iter().filter(|(k, _)| k == "key").count(), 1);
}

#[test]
fn image_query_filter_overrides() {
    let url = ImageQuery::new("cats", "k")
        .with_orientation(Orientation::All)
        .with_image_type(ImageType::Illustration)
        .add_to_url(&base_url());
    let query = url.query().unwrap();
    assert!(query.contains("orientation=all"));
    assert!(query.contains("image_type=illustration"));
}
