//! Collaborator contracts the session drives. A browser host maps these onto
//! the DOM and its toast/lightbox libraries; the CLI maps them onto a
//! terminal.

/// Selector the lightbox binds to.
pub const LINK_SELECTOR: &str = ".gallery a.gallery__link";

/// The display surface: gallery container, submit control, loading
/// indicator and query input.
pub trait Surface {
    /// Appends markup at the end of the gallery container.
    fn append_markup(&mut self, markup: &str);
    /// Removes everything from the gallery container.
    fn clear_gallery(&mut self);
    fn set_submit_enabled(&mut self, enabled: bool);
    fn set_loading(&mut self, visible: bool);
    fn focus_query_input(&mut self);
}

/// Toast notifications.
pub trait Notifier {
    fn success(&mut self, message: &str);
    fn failure(&mut self, message: &str);
    fn info(&mut self, message: &str);
}

/// An overlay opened from the gallery links.
pub trait Lightbox {
    /// Rebinds after new links were appended. `links` holds every full-size
    /// URL currently in the gallery, in display order.
    fn refresh(&mut self, links: &[String]);
}

/// Builds one [`Lightbox`] per query.
pub trait LightboxFactory {
    type Overlay: Lightbox;

    fn create(&mut self, selector: &str, links: &[String]) -> Self::Overlay;
}

/// Everything a [`crate::SearchSession`] needs from its host.
pub trait Host: Surface + Notifier + LightboxFactory {}

impl<T: Surface + Notifier + LightboxFactory> Host for T {}
