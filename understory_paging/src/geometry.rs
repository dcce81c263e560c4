// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pure page geometry: card size, page extent, item frames, and content size.

use kurbo::{Point, Rect, Size};

use crate::{Axis, CrossAxisSpacing, PagingConfig, Spacing, Viewport};

/// Everything a layout pass needs to place pages, captured by value.
///
/// All methods are pure functions of these fields. The item count is the
/// count of the reference section; frames for other sections reuse the same
/// page positions.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PageGeometry {
    /// Scroll direction.
    pub axis: Axis,
    /// Page spacing.
    pub spacing: Spacing,
    /// Cross-axis spacing divisor.
    pub cross_axis_spacing: CrossAxisSpacing,
    /// Host viewport.
    pub viewport: Viewport,
    /// Number of items in the reference section.
    pub item_count: usize,
}

impl PageGeometry {
    /// Captures the geometry inputs of `config` for `viewport` and `item_count`.
    #[must_use]
    pub const fn new(config: &PagingConfig, viewport: Viewport, item_count: usize) -> Self {
        Self {
            axis: config.axis,
            spacing: config.spacing,
            cross_axis_spacing: config.cross_axis_spacing,
            viewport,
            item_count,
        }
    }

    /// Size shared by every card.
    ///
    /// Each dimension gives up its spacing term plus its leading inset on both
    /// sides. Along the scroll axis the spacing term is half the spacing; across
    /// it, it depends on [`CrossAxisSpacing`]. A negative result signals a
    /// misconfigured viewport and is passed through unchanged.
    #[must_use]
    pub fn card_size(&self) -> Size {
        let inset = self.viewport.content_inset;
        let h = self.spacing_term(Axis::Horizontal);
        let v = self.spacing_term(Axis::Vertical);
        Size::new(
            self.viewport.size.width - (h + inset.x0) * 2.0,
            self.viewport.size.height - (v + inset.y0) * 2.0,
        )
    }

    /// Distance between the leading edges of two neighbouring pages.
    #[must_use]
    pub fn page_extent(&self) -> f64 {
        self.axis.of_size(self.card_size()) + self.half_spacing()
    }

    /// Half of the spacing along the scroll axis.
    #[must_use]
    pub fn half_spacing(&self) -> f64 {
        self.spacing.along(self.axis) / 2.0
    }

    /// Inset before the first page along the scroll axis.
    #[must_use]
    pub const fn leading_inset(&self) -> f64 {
        self.viewport.leading_inset(self.axis)
    }

    /// Returns `true` if the page extent is usable as a divisor.
    #[must_use]
    pub fn has_pages(&self) -> bool {
        let extent = self.page_extent();
        extent.is_finite() && extent > 0.0
    }

    /// Frame of the page at position `item` within its section.
    ///
    /// A lone page has no neighbour to share spacing with, so it is pushed in
    /// by the full spacing instead of half of it.
    #[must_use]
    pub fn frame_for(&self, item: usize) -> Rect {
        let spacing = self.spacing.along(self.axis);
        let lead = if self.item_count == 1 {
            spacing
        } else {
            spacing / 2.0
        };
        let along = lead + self.page_extent() * item as f64;
        let across = self
            .cross_axis_spacing
            .apply(self.spacing.along(self.axis.cross()));
        let origin = match self.axis {
            Axis::Horizontal => Point::new(along, across),
            Axis::Vertical => Point::new(across, along),
        };
        let card = self.card_size();
        Rect::new(
            origin.x,
            origin.y,
            origin.x + card.width,
            origin.y + card.height,
        )
    }

    /// Total scrollable size.
    ///
    /// Along the scroll axis this is every page plus half a spacing plus the
    /// leading inset; across it, the viewport extent.
    #[must_use]
    pub fn content_size(&self) -> Size {
        let extent = self.content_extent();
        match self.axis {
            Axis::Horizontal => Size::new(extent, self.viewport.size.height),
            Axis::Vertical => Size::new(self.viewport.size.width, extent),
        }
    }

    /// Content size along the scroll axis.
    #[must_use]
    pub fn content_extent(&self) -> f64 {
        let pages = self.page_extent() * self.item_count as f64;
        pages + self.half_spacing() + self.leading_inset()
    }

    /// Distance from the trailing edge of the last frame to the end of content.
    #[must_use]
    pub fn trailing_term(&self) -> f64 {
        if self.item_count == 1 {
            self.leading_inset()
        } else {
            self.half_spacing() + self.leading_inset()
        }
    }

    /// Viewport size along the scroll axis.
    #[must_use]
    pub const fn viewport_extent(&self) -> f64 {
        self.axis.of_size(self.viewport.size)
    }

    /// Smallest offset a snap target may take: the first page resting after the leading inset.
    #[must_use]
    pub fn min_scroll_offset(&self) -> f64 {
        -self.leading_inset()
    }

    /// Largest offset that keeps the viewport inside the content.
    #[must_use]
    pub fn max_scroll_offset(&self) -> f64 {
        (self.content_extent() - self.viewport_extent()).max(0.0)
    }

    fn spacing_term(&self, axis: Axis) -> f64 {
        let spacing = self.spacing.along(axis);
        if axis == self.axis {
            spacing / 2.0
        } else {
            self.cross_axis_spacing.apply(spacing)
        }
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Insets, Rect, Size};

    use super::PageGeometry;
    use crate::{Axis, CrossAxisSpacing, PagingConfig, Spacing, Viewport};

    fn horizontal(count: usize) -> PageGeometry {
        let config = PagingConfig::plain().with_spacing(Spacing::uniform(10.0));
        let viewport = Viewport::new(Size::new(320.0, 480.0))
            .with_content_inset(Insets::new(10.0, 0.0, 0.0, 0.0));
        PageGeometry::new(&config, viewport, count)
    }

    #[test]
    fn card_and_page_extent() {
        let g = horizontal(5);
        // 320 - (5 + 10) * 2 by 480 - (10 + 0) * 2.
        assert_eq!(g.card_size(), Size::new(290.0, 460.0));
        assert_eq!(g.page_extent(), 295.0);
        assert_eq!(g.half_spacing(), 5.0);
        assert!(g.has_pages());
    }

    #[test]
    fn frames_advance_by_page_extent() {
        let g = horizontal(5);
        assert_eq!(g.frame_for(0), Rect::new(5.0, 10.0, 295.0, 470.0));
        assert_eq!(g.frame_for(2), Rect::new(595.0, 10.0, 885.0, 470.0));
    }

    #[test]
    fn single_item_uses_full_spacing() {
        let g = horizontal(1);
        assert_eq!(g.frame_for(0).x0, 10.0);
        assert_eq!(g.trailing_term(), 10.0);
        assert_eq!(g.content_extent(), g.frame_for(0).x1 + g.trailing_term());
    }

    #[test]
    fn content_size_covers_pages_spacing_and_inset() {
        let g = horizontal(5);
        assert_eq!(g.content_size(), Size::new(295.0 * 5.0 + 5.0 + 10.0, 480.0));
        assert_eq!(g.content_extent(), g.frame_for(4).x1 + g.trailing_term());
        assert_eq!(g.max_scroll_offset(), 295.0 * 4.0 - 10.0);
        assert_eq!(g.min_scroll_offset(), -10.0);
    }

    #[test]
    fn vertical_swaps_roles() {
        let config = PagingConfig::plain()
            .with_axis(Axis::Vertical)
            .with_spacing(Spacing::new(8.0, 12.0));
        let viewport = Viewport::new(Size::new(300.0, 600.0));
        let g = PageGeometry::new(&config, viewport, 3);
        // Width keeps full cross spacing, height half spacing along the axis.
        assert_eq!(g.card_size(), Size::new(284.0, 588.0));
        assert_eq!(g.page_extent(), 594.0);
        assert_eq!(g.frame_for(1), Rect::new(8.0, 600.0, 292.0, 1188.0));
        assert_eq!(g.content_size(), Size::new(300.0, 594.0 * 3.0 + 6.0));
    }

    #[test]
    fn half_cross_axis_spacing() {
        let config = PagingConfig::simple().with_spacing(Spacing::uniform(10.0));
        let g = PageGeometry::new(&config, Viewport::new(Size::new(320.0, 480.0)), 4);
        assert_eq!(g.card_size(), Size::new(310.0, 470.0));
        assert_eq!(g.frame_for(0).y0, 5.0);
        assert_eq!(g.cross_axis_spacing, CrossAxisSpacing::Half);
    }

    #[test]
    fn degenerate_viewport_has_no_pages() {
        let config = PagingConfig::plain().with_spacing(Spacing::uniform(10.0));
        let g = PageGeometry::new(&config, Viewport::new(Size::new(4.0, 4.0)), 3);
        assert!(!g.has_pages());
        let g = PageGeometry::new(&config, Viewport::default(), 3);
        assert!(!g.has_pages());
    }
}
