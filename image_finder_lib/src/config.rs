//! Runtime configuration. The access key is never compiled in; it comes from
//! the environment (or a `.env` file loaded by the binary).

use std::fmt;

use crate::error::FinderError;

pub const DEFAULT_BASE_URL: &str = "https://pixabay.com";
pub const DEFAULT_PAGE_SIZE: u32 = 40;
/// Page sizes accepted by the API.
pub const PAGE_SIZE_RANGE: std::ops::RangeInclusive<u32> = 3..=200;

pub const ENV_API_KEY: &str = "PIXABAY_API_KEY";
pub const ENV_BASE_URL: &str = "PIXABAY_BASE_URL";
pub const ENV_PER_PAGE: &str = "PIXABAY_PER_PAGE";

#[derive(Clone, PartialEq, Eq)]
pub struct FinderConfig {
    pub api_key: String,
    pub base_url: String,
    pub page_size: u32,
}

impl fmt::Debug for FinderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FinderConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("page_size", &self.page_size)
            .finish()
    }
}

impl FinderConfig {
    /// Production endpoint with the default page size.
    pub fn new(api_key: &str) -> Self {
        Self {
            api_key: api_key.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.to_string();
        self
    }

    pub fn with_page_size(mut self, page_size: u32) -> Result<Self, FinderError> {
        if !PAGE_SIZE_RANGE.contains(&page_size) {
            return Err(FinderError::Config(format!(
                "page size {} is outside {}..={}",
                page_size,
                PAGE_SIZE_RANGE.start(),
                PAGE_SIZE_RANGE.end()
            )));
        }
        self.page_size = page_size;
        Ok(self)
    }

    /// Reads `PIXABAY_API_KEY` (required), `PIXABAY_BASE_URL` and `PIXABAY_PER_PAGE`.
    pub fn from_env() -> Result<Self, FinderError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`FinderConfig::from_env`] with a caller-supplied variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, FinderError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(ENV_API_KEY)
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .ok_or_else(|| FinderError::Config(format!("{} is not set", ENV_API_KEY)))?;

        let mut config = Self::new(&api_key);
        if let Some(base_url) = lookup(ENV_BASE_URL).filter(|u| !u.trim().is_empty()) {
            config = config.with_base_url(base_url.trim());
        }
        if let Some(raw) = lookup(ENV_PER_PAGE) {
            let page_size = raw.trim().parse::<u32>().map_err(|_| {
                FinderError::Config(format!("{} must be a number, got '{}'", ENV_PER_PAGE, raw))
            })?;
            config = config.with_page_size(page_size)?;
        }
        Ok(config)
    }

    /// API client for the configured endpoint.
    pub fn client(&self) -> pixabay_api::Client {
        pixabay_api::Client::with_base_url(&self.base_url)
    }
}
