// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Live current-page tracking from scroll offsets.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

/// Notification that the page nearest the scroll offset changed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct PageChange {
    /// Page reported before this update.
    pub previous: usize,
    /// Page reported now.
    pub current: usize,
}

/// Tracks which page the scroll offset is closest to.
///
/// This follows the live offset, not settled snap targets, so it can report
/// intermediate pages while a scroll is in flight.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct PageTracker {
    page: usize,
}

impl PageTracker {
    /// Creates a tracker starting at page 0.
    #[must_use]
    pub const fn new() -> Self {
        Self { page: 0 }
    }

    /// The last reported page.
    #[must_use]
    pub const fn page(&self) -> usize {
        self.page
    }

    /// Resets the tracker to page 0 without reporting a change.
    pub fn reset(&mut self) {
        self.page = 0;
    }

    /// Feeds a new scroll-axis offset.
    ///
    /// Returns the change when the nearest page differs from the stored one.
    /// Offsets before the first page (for example a leading inset or an
    /// overscroll bounce) count as page 0. A zero, negative, or non-finite
    /// `page_extent` leaves the stored page untouched.
    pub fn update(&mut self, offset: f64, page_extent: f64) -> Option<PageChange> {
        if !page_extent.is_finite() || page_extent <= 0.0 || !offset.is_finite() {
            return None;
        }
        let rounded = (offset / page_extent).round();
        #[allow(
            clippy::cast_possible_truncation,
            reason = "Negative pages are clamped to zero and page counts fit in usize"
        )]
        let page = if rounded <= 0.0 { 0 } else { rounded as usize };
        if page == self.page {
            return None;
        }
        let change = PageChange {
            previous: self.page,
            current: page,
        };
        self.page = page;
        tracing::trace!(previous = change.previous, current = change.current, "page changed");
        Some(change)
    }
}
