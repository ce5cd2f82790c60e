//! Error types for the library layer.

use thiserror::Error;

/// Errors produced by a search attempt. Every variant is terminal for the
/// attempt and returns the session to idle; nothing is retried.
#[derive(Error, Debug)]
pub enum FinderError {
    /// The query was empty or too long. No request was issued.
    #[error("Invalid query: {0}")]
    InvalidQuery(String),
    /// The API matched nothing.
    #[error("No images match the query")]
    EmptyResultSet,
    /// Transport failure, non-success status, or an unparseable body.
    #[error("Network error: {0}")]
    Network(#[from] pixabay_api::Error),
    /// Missing or malformed configuration.
    #[error("Configuration error: {0}")]
    Config(String),
    /// A gallery card could not be rendered.
    #[error("Render error: {0}")]
    Render(String),
}

impl From<minijinja::Error> for FinderError {
    fn from(e: minijinja::Error) -> Self {
        Self::Render(e.to_string())
    }
}
