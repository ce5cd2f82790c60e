//! Gallery renderer: turns hits into card markup and appends it to the
//! surface in arrival order.

use minijinja::{context, AutoEscape, Environment, UndefinedBehavior};
use serde::Serialize;

use pixabay_api::types::{ImageID, ImageResult};

use crate::error::FinderError;
use crate::host::Surface;

const CARD_TEMPLATE: &str = r#"
      <a class="gallery__link" href="{{ image.large_image_url | attr }}">
        <div class="gallery__photo-card">
          <div class="gallery__image-container">
            <img class="gallery__image" src="{{ image.webformat_url | attr }}" alt="{{ image.tags | attr }}" loading="lazy" />
          </div>
          <div class="gallery__info">
            <p class="gallery__info-item">
              <b>Likes<br>{{ image.likes }}</b>
            </p>
            <p class="gallery__info-item">
              <b>Views<br>{{ image.views }}</b>
            </p>
            <p class="gallery__info-item">
              <b>Comments<br>{{ image.comments }}</b>
            </p>
            <p class="gallery__info-item">
              <b>Downloads<br>{{ image.downloads }}</b>
            </p>
          </div>
        </div>
      </a>"#;

const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="UTF-8" />
    <title>{{ title | attr }}</title>
  </head>
  <body>
    <div class="gallery">{{ gallery }}
    </div>
  </body>
</html>
"#;

/// Template context for one card. Field names are what the template sees,
/// independent of the API's serde renames.
#[derive(Debug, Clone, Serialize)]
struct TemplateCard<'a> {
    large_image_url: &'a str,
    webformat_url: &'a str,
    tags: &'a str,
    likes: u64,
    views: u64,
    comments: u64,
    downloads: u64,
}

impl<'a> From<&'a ImageResult> for TemplateCard<'a> {
    fn from(image: &'a ImageResult) -> Self {
        Self {
            large_image_url: &image.large_image_url,
            webformat_url: &image.webformat_url,
            tags: &image.tags,
            likes: image.likes,
            views: image.views,
            comments: image.comments,
            downloads: image.downloads,
        }
    }
}

/// One card as it was appended to the surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedCard {
    pub id: ImageID,
    pub full_size_url: String,
    pub thumbnail_url: String,
    pub tags: String,
    pub markup: String,
}

/// Append-only view of the current query's results.
///
/// Cards are never removed individually; [`Gallery::clear`] drops all of
/// them at once.
pub struct Gallery {
    env: Environment<'static>,
    cards: Vec<RenderedCard>,
    total_hits: u64,
}

impl Default for Gallery {
    fn default() -> Self {
        Self::new()
    }
}

impl Gallery {
    pub fn new() -> Self {
        let mut env = Environment::new();
        // The built-in `escape` filter turns `/` into `&#x2f;`, so attribute
        // values go through `attr` instead.
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.add_filter("attr", escape_attr);
        Self {
            env,
            cards: Vec::new(),
            total_hits: 0,
        }
    }

    /// Renders the markup fragment for a single hit.
    pub fn render_card(&self, image: &ImageResult) -> Result<String, FinderError> {
        let markup = self
            .env
            .render_str(CARD_TEMPLATE, context! { image => TemplateCard::from(image) })?;
        Ok(markup)
    }

    /// Wraps already rendered gallery markup in a standalone HTML document.
    pub fn render_page(&self, title: &str, gallery_markup: &str) -> Result<String, FinderError> {
        let page = self.env.render_str(
            PAGE_TEMPLATE,
            context! { title => title, gallery => gallery_markup },
        )?;
        Ok(page)
    }

    /// Renders every hit and appends the joined markup to the surface.
    ///
    /// Nothing is appended if any card fails to render. Returns whether the
    /// cumulative count is still below `total_hits`.
    pub fn append<S: Surface>(
        &mut self,
        surface: &mut S,
        hits: &[ImageResult],
        total_hits: u64,
    ) -> Result<bool, FinderError> {
        let mut rendered = Vec::with_capacity(hits.len());
        for image in hits {
            rendered.push(RenderedCard {
                id: image.id,
                full_size_url: image.large_image_url.clone(),
                thumbnail_url: image.webformat_url.clone(),
                tags: image.tags.clone(),
                markup: self.render_card(image)?,
            });
        }

        if !rendered.is_empty() {
            let markup: String = rendered.iter().map(|c| c.markup.as_str()).collect();
            surface.append_markup(&markup);
        }
        self.cards.extend(rendered);
        self.total_hits = total_hits;
        Ok(self.has_more())
    }

    /// Empties the gallery and the surface.
    pub fn clear<S: Surface>(&mut self, surface: &mut S) {
        self.cards.clear();
        self.total_hits = 0;
        surface.clear_gallery();
    }

    /// Whether fewer items than `total_hits` have been fetched so far.
    pub fn has_more(&self) -> bool {
        (self.cards.len() as u64) < self.total_hits
    }

    pub fn cards(&self) -> &[RenderedCard] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn total_hits(&self) -> u64 {
        self.total_hits
    }

    /// Full-size URLs of every card, in display order.
    pub fn links(&self) -> Vec<String> {
        self.cards.iter().map(|c| c.full_size_url.clone()).collect()
    }
}

fn escape_attr(value: String) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Buffer {
        html: String,
        appends: usize,
        clears: usize,
    }

    impl Surface for Buffer {
        fn append_markup(&mut self, markup: &str) {
            self.html.push_str(markup);
            self.appends += 1;
        }
        fn clear_gallery(&mut self) {
            self.html.clear();
            self.clears += 1;
        }
        fn set_submit_enabled(&mut self, _enabled: bool) {}
        fn set_loading(&mut self, _visible: bool) {}
        fn focus_query_input(&mut self) {}
    }

    fn image(id: u64, tags: &str) -> ImageResult {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "tags": tags,
            "webformatURL": format!("https://cdn.example.com/{}_640.jpg", id),
            "largeImageURL": format!("https://cdn.example.com/{}_1280.jpg", id),
            "likes": 10,
            "views": 2000,
            "comments": 3,
            "downloads": 400
        }))
        .unwrap()
    }

    #[test]
    fn card_contains_links_and_stats() {
        let gallery = Gallery::new();
        let markup = gallery.render_card(&image(7, "cat, kitten")).unwrap();
        assert!(markup.contains(r#"<a class="gallery__link" href="https://cdn.example.com/7_1280.jpg">"#));
        assert!(markup.contains(r#"src="https://cdn.example.com/7_640.jpg""#));
        assert!(markup.contains(r#"alt="cat, kitten""#));
        assert!(markup.contains(r#"loading="lazy""#));
        assert!(markup.contains("<b>Likes<br>10</b>"));
        assert!(markup.contains("<b>Views<br>2000</b>"));
        assert!(markup.contains("<b>Comments<br>3</b>"));
        assert!(markup.contains("<b>Downloads<br>400</b>"));
    }

    #[test]
    fn missing_template_field_is_a_render_error() {
        let gallery = Gallery::new();
        let err = gallery
            .env
            .render_str(CARD_TEMPLATE, context! { image => context! { tags => "x" } })
            .map_err(FinderError::from)
            .unwrap_err();
        assert!(matches!(err, FinderError::Render(_)));
    }

    #[test]
    fn card_escapes_attribute_values() {
        let gallery = Gallery::new();
        let markup = gallery
            .render_card(&image(1, r#"cat" onerror="alert(1)"#))
            .unwrap();
        assert!(markup.contains(r#"alt="cat&quot; onerror=&quot;alert(1)""#));
        assert!(!markup.contains(r#"onerror="alert"#));
    }

    #[test]
    fn append_keeps_arrival_order_in_one_write() {
        let mut gallery = Gallery::new();
        let mut surface = Buffer::default();

        let more = gallery
            .append(&mut surface, &[image(1, "a"), image(2, "b")], 3)
            .unwrap();
        assert!(more);
        assert_eq!(surface.appends, 1);

        let more = gallery.append(&mut surface, &[image(3, "c")], 3).unwrap();
        assert!(!more);
        assert_eq!(surface.appends, 2);

        let ids: Vec<u64> = gallery.cards().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(
            gallery.links(),
            vec![
                "https://cdn.example.com/1_1280.jpg".to_string(),
                "https://cdn.example.com/2_1280.jpg".to_string(),
                "https://cdn.example.com/3_1280.jpg".to_string(),
            ]
        );
        let first = surface.html.find("1_1280").unwrap();
        let third = surface.html.find("3_1280").unwrap();
        assert!(first < third);
    }

    #[test]
    fn page_wraps_markup_and_escapes_title() {
        let gallery = Gallery::new();
        let card = gallery.render_card(&image(5, "sea")).unwrap();
        let page = gallery.render_page("cats & <dogs>", &card).unwrap();
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("<title>cats &amp; &lt;dogs&gt;</title>"));
        assert!(page.contains(r#"<div class="gallery">"#));
        assert!(page.contains(&card));
    }

    #[test]
    fn empty_page_writes_nothing() {
        let mut gallery = Gallery::new();
        let mut surface = Buffer::default();
        let more = gallery.append(&mut surface, &[], 0).unwrap();
        assert!(!more);
        assert_eq!(surface.appends, 0);
    }

    #[test]
    fn clear_empties_gallery_and_surface() {
        let mut gallery = Gallery::new();
        let mut surface = Buffer::default();
        gallery.append(&mut surface, &[image(1, "a")], 10).unwrap();

        gallery.clear(&mut surface);
        assert!(gallery.is_empty());
        assert_eq!(gallery.total_hits(), 0);
        assert!(!gallery.has_more());
        assert!(surface.html.is_empty());
        assert_eq!(surface.clears, 1);
    }
}
