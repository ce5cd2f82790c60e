//! Library layer for the image finder: search session state machine,
//! gallery rendering, scroll monitoring, and configuration.
//!
//! Wraps the `pixabay_api` crate and drives host collaborators (gallery
//! surface, toast notifier, lightbox) through the traits in [`host`].

pub mod config;
pub mod error;
pub mod gallery;
pub mod host;
pub mod notices;
pub mod scroll;
pub mod session;
pub mod validation;

pub use pixabay_api;
pub use pixabay_api::types;

pub use config::FinderConfig;
pub use error::FinderError;
pub use gallery::{Gallery, RenderedCard};
pub use host::{Host, Lightbox, LightboxFactory, Notifier, Surface, LINK_SELECTOR};
pub use scroll::{ItemBox, ScrollGeometry, ScrollMonitor, DEBOUNCE_DELAY};
pub use session::{Advance, PageReport, SearchSession, SearchState, SessionState, SkipReason};
