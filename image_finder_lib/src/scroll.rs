//! Debounced infinite-scroll trigger.
//!
//! The monitor holds an explicit `armed` flag meaning "more pages are
//! pending". Scroll events only record the latest geometry and push the
//! deadline out; the trigger is evaluated once the events have been quiet
//! for [`DEBOUNCE_DELAY`].

use std::time::Duration;

use tokio::time::Instant;

pub const DEBOUNCE_DELAY: Duration = Duration::from_millis(350);

/// Bounding box of a rendered item, relative to the top of the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ItemBox {
    pub top: f64,
    pub bottom: f64,
    pub height: f64,
}

/// Snapshot taken when a scroll event fires.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollGeometry {
    /// The last rendered gallery item, if any.
    pub last_item: Option<ItemBox>,
    pub viewport_height: f64,
}

impl ScrollGeometry {
    /// True when the last item lies within one item height of the visible
    /// viewport, from either direction.
    pub fn near_last_item(&self) -> bool {
        match self.last_item {
            Some(item) => {
                item.top >= -item.height && item.bottom <= self.viewport_height + item.height
            }
            None => false,
        }
    }
}

#[derive(Debug)]
pub struct ScrollMonitor {
    armed: bool,
    delay: Duration,
    pending: Option<(Instant, ScrollGeometry)>,
}

impl Default for ScrollMonitor {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollMonitor {
    pub fn new() -> Self {
        Self::with_delay(DEBOUNCE_DELAY)
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self {
            armed: false,
            delay,
            pending: None,
        }
    }

    pub fn arm(&mut self) {
        self.armed = true;
    }

    /// Stops reacting to scroll events and forgets any pending one.
    pub fn disarm(&mut self) {
        self.armed = false;
        self.pending = None;
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Records a scroll event. Ignored while disarmed.
    pub fn scrolled(&mut self, geometry: ScrollGeometry, now: Instant) {
        if !self.armed {
            return;
        }
        self.pending = Some((now + self.delay, geometry));
    }

    /// When the pending event settles, if there is one.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.map(|(deadline, _)| deadline)
    }

    /// Consumes a settled event and reports whether it should load the next
    /// page. An event that has not settled yet stays pending.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.pending {
            Some((deadline, geometry)) if now >= deadline => {
                self.pending = None;
                self.armed && geometry.near_last_item()
            }
            _ => false,
        }
    }
}
