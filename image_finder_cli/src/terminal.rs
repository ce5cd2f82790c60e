//! Terminal host for a [`SearchSession`](image_finder_lib::SearchSession):
//! the gallery is kept as an HTML buffer, toasts go to stderr, and the
//! loading indicator is an `indicatif` spinner.

use std::time::Duration;

use image_finder_lib::{
    ItemBox, Lightbox, LightboxFactory, Notifier, ScrollGeometry, Surface,
};
use indicatif::{ProgressBar, ProgressStyle};

/// Simulated layout used to turn "scrolled to the bottom" into geometry.
const VIEWPORT_HEIGHT: f64 = 900.0;
const CARD_HEIGHT: f64 = 260.0;

pub struct TerminalHost {
    gallery_html: String,
    cards: usize,
    spinner: Option<ProgressBar>,
    show_spinner: bool,
}

impl Default for TerminalHost {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalHost {
    pub fn new() -> Self {
        Self {
            gallery_html: String::new(),
            cards: 0,
            spinner: None,
            show_spinner: true,
        }
    }

    /// Host without a spinner, for non-interactive output.
    pub fn quiet() -> Self {
        Self {
            show_spinner: false,
            ..Self::new()
        }
    }

    pub fn gallery_html(&self) -> &str {
        &self.gallery_html
    }

    pub fn card_count(&self) -> usize {
        self.cards
    }

    /// Geometry of a viewport resting at the very bottom of the gallery.
    pub fn scrolled_to_bottom(&self) -> ScrollGeometry {
        let last_item = (self.cards > 0).then_some(ItemBox {
            top: VIEWPORT_HEIGHT - CARD_HEIGHT,
            bottom: VIEWPORT_HEIGHT,
            height: CARD_HEIGHT,
        });
        ScrollGeometry {
            last_item,
            viewport_height: VIEWPORT_HEIGHT,
        }
    }
}

impl Surface for TerminalHost {
    fn append_markup(&mut self, markup: &str) {
        self.cards += markup.matches(r#"class="gallery__link""#).count();
        self.gallery_html.push_str(markup);
    }

    fn clear_gallery(&mut self) {
        self.gallery_html.clear();
        self.cards = 0;
    }

    fn set_submit_enabled(&mut self, enabled: bool) {
        tracing::debug!("Submit {}", if enabled { "enabled" } else { "disabled" });
    }

    fn set_loading(&mut self, visible: bool) {
        if visible && self.show_spinner {
            let spinner = ProgressBar::new_spinner();
            if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
                spinner.set_style(style);
            }
            spinner.set_message("Loading...");
            spinner.enable_steady_tick(Duration::from_millis(100));
            self.spinner = Some(spinner);
        } else if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }
    }

    fn focus_query_input(&mut self) {}
}

impl Notifier for TerminalHost {
    fn success(&mut self, message: &str) {
        eprintln!("[ok] {}", message);
    }

    fn failure(&mut self, message: &str) {
        eprintln!("[error] {}", message);
    }

    fn info(&mut self, message: &str) {
        eprintln!("[info] {}", message);
    }
}

impl LightboxFactory for TerminalHost {
    type Overlay = TerminalLightbox;

    fn create(&mut self, selector: &str, links: &[String]) -> TerminalLightbox {
        tracing::debug!("Lightbox bound to {} ({} links)", selector, links.len());
        TerminalLightbox {
            links: links.to_vec(),
        }
    }
}

/// Resolves card numbers to full-size image URLs.
#[derive(Debug, Default)]
pub struct TerminalLightbox {
    links: Vec<String>,
}

impl TerminalLightbox {
    /// Full-size URL of card `n` (1-indexed).
    pub fn open(&self, n: usize) -> Option<&str> {
        n.checked_sub(1)
            .and_then(|i| self.links.get(i))
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }
}

impl Lightbox for TerminalLightbox {
    fn refresh(&mut self, links: &[String]) {
        self.links = links.to_vec();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CARD: &str = r#"<a class="gallery__link" href="https://cdn.example.com/1.jpg"></a>"#;

    #[test]
    fn counts_appended_cards_and_clears() {
        let mut host = TerminalHost::quiet();
        host.append_markup(&CARD.repeat(3));
        host.append_markup(CARD);
        assert_eq!(host.card_count(), 4);

        host.clear_gallery();
        assert_eq!(host.card_count(), 0);
        assert!(host.gallery_html().is_empty());
    }

    #[test]
    fn bottom_geometry_triggers_only_with_cards() {
        let mut host = TerminalHost::quiet();
        assert!(!host.scrolled_to_bottom().near_last_item());

        host.append_markup(CARD);
        assert!(host.scrolled_to_bottom().near_last_item());
    }

    #[test]
    fn lightbox_opens_by_card_number() {
        let mut host = TerminalHost::quiet();
        let mut lightbox = host.create(".gallery a.gallery__link", &["a".to_string()]);
        assert_eq!(lightbox.open(1), Some("a"));
        assert_eq!(lightbox.open(0), None);
        assert_eq!(lightbox.open(2), None);

        lightbox.refresh(&["a".to_string(), "b".to_string()]);
        assert_eq!(lightbox.len(), 2);
        assert_eq!(lightbox.open(2), Some("b"));
    }
}
