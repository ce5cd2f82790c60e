//! The query controller: owns one query session at a time and drives the
//! API client, gallery, scroll monitor and host collaborators.
//!
//! States: `Idle -> Searching -> DisplayingResults -> (EndOfResults | Idle)`.
//! Every method takes `&mut self`, so a session never has two requests in
//! flight; advance requests that arrive while `Searching` are dropped.

use pixabay_api::{Client, ImageQuery, Query};
use tokio::time::Instant;

use crate::config::FinderConfig;
use crate::error::FinderError;
use crate::gallery::Gallery;
use crate::host::{Host, Lightbox, LightboxFactory, Notifier, Surface, LINK_SELECTOR};
use crate::notices;
use crate::scroll::{ScrollGeometry, ScrollMonitor};
use crate::validation::sanitize_query;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    /// No active query.
    Idle,
    /// A page request is outstanding.
    Searching,
    /// Results are shown and more pages remain.
    DisplayingResults,
    /// Every reachable hit has been fetched.
    EndOfResults,
}

/// Paging state of the active query.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchState {
    pub query: String,
    /// Next page to fetch (1-indexed).
    pub page: u32,
    pub page_size: u32,
    /// Reported by the last successful response.
    pub total_hits: u64,
}

/// Summary of one successfully appended page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageReport {
    pub page: u32,
    pub items: usize,
    pub total_hits: u64,
    pub end_of_results: bool,
}

/// Why an event did not lead to a request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkipReason {
    SubmitDisabled,
    InFlight,
    NoActiveQuery,
    EndOfResults,
    NotTriggered,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Advance {
    Loaded(PageReport),
    Skipped(SkipReason),
}

pub struct SearchSession<H: Host> {
    client: Client,
    api_key: String,
    page_size: u32,
    host: H,
    state: SessionState,
    search: Option<SearchState>,
    gallery: Gallery,
    scroll: ScrollMonitor,
    lightbox: Option<H::Overlay>,
    submit_enabled: bool,
}

impl<H: Host> SearchSession<H> {
    pub fn new(config: &FinderConfig, mut host: H) -> Self {
        host.set_submit_enabled(true);
        host.set_loading(false);
        Self {
            client: config.client(),
            api_key: config.api_key.clone(),
            page_size: config.page_size,
            host,
            state: SessionState::Idle,
            search: None,
            gallery: Gallery::new(),
            scroll: ScrollMonitor::new(),
            lightbox: None,
            submit_enabled: true,
        }
    }

    /// Replaces the scroll monitor, e.g. to use a different debounce delay.
    pub fn with_scroll_monitor(mut self, monitor: ScrollMonitor) -> Self {
        self.scroll = monitor;
        self
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn search_state(&self) -> Option<&SearchState> {
        self.search.as_ref()
    }

    pub fn gallery(&self) -> &Gallery {
        &self.gallery
    }

    pub fn scroll_monitor(&self) -> &ScrollMonitor {
        &self.scroll
    }

    pub fn lightbox(&self) -> Option<&H::Overlay> {
        self.lightbox.as_ref()
    }

    pub fn submit_enabled(&self) -> bool {
        self.submit_enabled
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn into_host(self) -> H {
        self.host
    }

    /// Form submission: starts a new query session and fetches page 1.
    ///
    /// Ignored while the submit control is disabled. The control stays
    /// disabled afterwards until the input is edited.
    pub async fn submit(&mut self, raw_query: &str) -> Result<Advance, FinderError> {
        if !self.submit_enabled || self.state == SessionState::Searching {
            tracing::debug!("Submit ignored, control is disabled");
            return Ok(Advance::Skipped(SkipReason::SubmitDisabled));
        }
        self.set_submit_enabled(false);
        self.reset();

        let query = match sanitize_query(raw_query) {
            Ok(query) => query,
            Err(e) => {
                tracing::debug!("Rejected query: {}", e);
                self.host.failure(notices::INVALID_QUERY);
                return Err(e);
            }
        };

        tracing::info!("Searching for '{}'", query);
        self.search = Some(SearchState {
            query,
            page: 1,
            page_size: self.page_size,
            total_hits: 0,
        });
        self.fetch_next().await
    }

    /// The query input changed without being submitted.
    pub fn input_edited(&mut self) {
        self.set_submit_enabled(true);
        self.reset();
    }

    /// Explicit request for the next page (the "load more" button, or a
    /// settled scroll trigger).
    pub async fn load_more(&mut self) -> Result<Advance, FinderError> {
        self.scroll.disarm();
        match self.state {
            SessionState::Searching => {
                tracing::debug!("Page advance dropped, a request is in flight");
                Ok(Advance::Skipped(SkipReason::InFlight))
            }
            SessionState::Idle => Ok(Advance::Skipped(SkipReason::NoActiveQuery)),
            SessionState::EndOfResults => Ok(Advance::Skipped(SkipReason::EndOfResults)),
            SessionState::DisplayingResults => self.fetch_next().await,
        }
    }

    /// Records a scroll event. Only counts while more pages are pending.
    pub fn on_scroll(&mut self, geometry: ScrollGeometry, now: Instant) {
        self.scroll.scrolled(geometry, now);
    }

    /// Evaluates the debounced scroll state at `now` and loads the next page
    /// when the last item is close to the viewport.
    pub async fn on_scroll_tick(&mut self, now: Instant) -> Result<Advance, FinderError> {
        if self.scroll.poll(now) {
            self.load_more().await
        } else {
            Ok(Advance::Skipped(SkipReason::NotTriggered))
        }
    }

    /// Waits for the pending scroll event to settle, then evaluates it.
    pub async fn settle_scroll(&mut self) -> Result<Advance, FinderError> {
        match self.scroll.deadline() {
            Some(deadline) => {
                tokio::time::sleep_until(deadline).await;
                self.on_scroll_tick(Instant::now()).await
            }
            None => Ok(Advance::Skipped(SkipReason::NotTriggered)),
        }
    }

    fn set_submit_enabled(&mut self, enabled: bool) {
        self.submit_enabled = enabled;
        self.host.set_submit_enabled(enabled);
    }

    /// Ends the current query session: empties the gallery, disarms the
    /// scroll monitor and drops the lightbox.
    fn reset(&mut self) {
        self.gallery.clear(&mut self.host);
        self.host.focus_query_input();
        self.scroll.disarm();
        self.lightbox = None;
        self.search = None;
        self.state = SessionState::Idle;
    }

    async fn fetch_next(&mut self) -> Result<Advance, FinderError> {
        let Some(search) = self.search.as_ref() else {
            return Ok(Advance::Skipped(SkipReason::NoActiveQuery));
        };
        let page = search.page;
        let query = ImageQuery::new(&search.query, &self.api_key)
            .with_per_page(search.page_size)
            .with_page(page);

        self.state = SessionState::Searching;
        self.host.set_loading(true);
        let result = self.client.search_images(&query).await;
        self.host.set_loading(false);

        let resp = match result {
            Ok(resp) => resp,
            Err(e) => {
                tracing::error!("Search for page {} failed: {}", page, e);
                self.reset();
                self.host.failure(notices::SEARCH_FAILED);
                return Err(FinderError::Network(e));
            }
        };

        if resp.total_hits == 0 {
            tracing::info!("No images matched");
            self.scroll.disarm();
            self.search = None;
            self.state = SessionState::Idle;
            self.host.failure(notices::NO_MATCHES);
            return Err(FinderError::EmptyResultSet);
        }

        let has_more = match self
            .gallery
            .append(&mut self.host, &resp.hits, resp.total_hits)
        {
            Ok(has_more) => has_more,
            Err(e) => {
                tracing::error!("Failed to render page {}: {}", page, e);
                self.reset();
                self.host.failure(notices::SEARCH_FAILED);
                return Err(e);
            }
        };

        let end_of_results = !has_more
            || resp.hits.is_empty()
            || u64::from(page) * u64::from(self.page_size) >= resp.total_hits;
        if end_of_results {
            self.host.info(notices::END_OF_RESULTS);
            self.scroll.disarm();
            self.state = SessionState::EndOfResults;
        } else {
            self.scroll.arm();
            self.state = SessionState::DisplayingResults;
        }

        let links = self.gallery.links();
        let refreshed = match self.lightbox.as_mut() {
            Some(lightbox) if page > 1 => {
                lightbox.refresh(&links);
                true
            }
            _ => false,
        };
        if !refreshed {
            self.lightbox = Some(self.host.create(LINK_SELECTOR, &links));
            self.host.success(&notices::found(resp.total_hits));
        }

        if let Some(search) = self.search.as_mut() {
            search.page += 1;
            search.total_hits = resp.total_hits;
        }

        tracing::info!(
            "Loaded page {} ({} images, {} of {} shown)",
            page,
            resp.hits.len(),
            self.gallery.len(),
            resp.total_hits
        );

        Ok(Advance::Loaded(PageReport {
            page,
            items: resp.hits.len(),
            total_hits: resp.total_hits,
            end_of_results,
        }))
    }
}
