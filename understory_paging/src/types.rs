// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public value types: scroll axis, page spacing, item identifiers, and the host viewport.

use kurbo::{Insets, Point, Size, Vec2};

/// The single direction along which pages are laid out and scrolled.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Pages advance left to right.
    #[default]
    Horizontal,
    /// Pages advance top to bottom.
    Vertical,
}

impl Axis {
    /// Returns the component of `point` that lies along this axis.
    #[must_use]
    pub const fn of_point(self, point: Point) -> f64 {
        match self {
            Self::Horizontal => point.x,
            Self::Vertical => point.y,
        }
    }

    /// Returns the component of `vec` that lies along this axis.
    #[must_use]
    pub const fn of_vec(self, vec: Vec2) -> f64 {
        match self {
            Self::Horizontal => vec.x,
            Self::Vertical => vec.y,
        }
    }

    /// Returns the extent of `size` along this axis.
    #[must_use]
    pub const fn of_size(self, size: Size) -> f64 {
        match self {
            Self::Horizontal => size.width,
            Self::Vertical => size.height,
        }
    }

    /// Returns `point` with its component along this axis replaced by `value`.
    #[must_use]
    pub const fn with_point(self, point: Point, value: f64) -> Point {
        match self {
            Self::Horizontal => Point::new(value, point.y),
            Self::Vertical => Point::new(point.x, value),
        }
    }

    /// The other axis.
    #[must_use]
    pub const fn cross(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }
}

/// Gap between neighbouring pages and around the page cards, per axis.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Spacing {
    /// Spacing along x.
    pub horizontal: f64,
    /// Spacing along y.
    pub vertical: f64,
}

impl Spacing {
    /// No spacing at all.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Creates a new spacing pair.
    #[must_use]
    pub const fn new(horizontal: f64, vertical: f64) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    /// Creates a spacing pair with the same value on both axes.
    #[must_use]
    pub const fn uniform(value: f64) -> Self {
        Self::new(value, value)
    }

    /// Spacing along `axis`.
    #[must_use]
    pub const fn along(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.horizontal,
            Axis::Vertical => self.vertical,
        }
    }
}

/// Identifies one page: an item within a section.
///
/// Ordering is by section first, then item.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ItemIndex {
    /// Section the item belongs to.
    pub section: usize,
    /// Position of the item within its section.
    pub item: usize,
}

impl ItemIndex {
    /// Creates a new index.
    #[must_use]
    pub const fn new(section: usize, item: usize) -> Self {
        Self { section, item }
    }
}

/// The host's visible scrolling surface.
///
/// Only the leading edge of `content_inset` on the scroll axis takes part in
/// paging (`x0` when horizontal, `y0` when vertical). Card sizing always
/// consumes `x0` for the width and `y0` for the height.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Viewport {
    /// Size of the visible surface.
    pub size: Size,
    /// Insets reserved around the scrollable content.
    pub content_inset: Insets,
}

impl Viewport {
    /// Creates a viewport of `size` without any insets.
    #[must_use]
    pub const fn new(size: Size) -> Self {
        Self {
            size,
            content_inset: Insets::ZERO,
        }
    }

    /// Returns this viewport with `content_inset` replaced.
    #[must_use]
    pub const fn with_content_inset(mut self, content_inset: Insets) -> Self {
        self.content_inset = content_inset;
        self
    }

    /// Inset before the first page along `axis`.
    #[must_use]
    pub const fn leading_inset(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.content_inset.x0,
            Axis::Vertical => self.content_inset.y0,
        }
    }
}
