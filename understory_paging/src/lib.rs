// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_paging --heading-base-level=0

//! Understory Paging: a headless cover-flow paging layout.
//!
//! Pages are laid edge to edge along one scroll axis, each sized to nearly fill
//! the viewport, and release gestures snap to page boundaries. A firm flick
//! advances exactly one page; a slow drag completes to the next page only when
//! released past the midpoint.
//!
//! The core concepts are:
//!
//! - [`PagingConfig`]: axis, [`Spacing`], flick threshold, reference section,
//!   and the [`CrossAxisSpacing`]/inset-correction switches that distinguish
//!   the [`plain`](PagingConfig::plain) and [`simple`](PagingConfig::simple)
//!   paging styles.
//! - [`PageGeometry`]: pure functions from configuration, [`Viewport`], and item
//!   count to card size, page extent, item frames, and content size.
//! - [`snap_offset`]: the fling-aware snap-target computation along the scroll axis.
//! - [`PageTracker`]: the current page, derived from live scroll offsets and
//!   reported as [`PageChange`]s.
//! - [`PagingLayout`]: a controller owning all of the above plus a per-pass
//!   cache of frames keyed by [`ItemIndex`].
//!
//! This crate deliberately does **not** know about widgets, cells, or any
//! particular UI framework. Host frameworks are responsible for:
//!
//! - Providing the viewport (size and content insets) and per-section item counts.
//! - Pushing live scroll offsets through [`PagingLayout::set_scroll_offset`] and
//!   forwarding the returned [`PageChange`] to whoever cares.
//! - Asking [`PagingLayout::target_content_offset`] where to come to rest when a
//!   drag ends, and animating there with little or no deceleration of their own.
//! - Creating and positioning views for the indices returned by
//!   [`PagingLayout::items_in_rect`].
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Insets, Point, Size, Vec2};
//! use understory_paging::{Axis, ItemIndex, PagingLayout, Spacing, Viewport};
//!
//! let mut layout = PagingLayout::with_spacing(Spacing::uniform(10.0), Axis::Horizontal);
//! layout.set_viewport(Some(
//!     Viewport::new(Size::new(320.0, 480.0))
//!         .with_content_inset(Insets::new(10.0, 0.0, 0.0, 0.0)),
//! ));
//! layout.set_section_counts(&[5]);
//!
//! // Each page is 295 wide: a 290 card plus half of the spacing.
//! assert_eq!(layout.page_extent(), 295.0);
//! let frame = layout.item_frame(ItemIndex::new(0, 1)).unwrap();
//! assert_eq!(frame.x0, 300.0);
//!
//! // The user dragged a little past page 1 and flicked forward.
//! layout.set_scroll_offset(Point::new(320.0, 0.0));
//! let target = layout.target_content_offset(Point::new(700.0, 0.0), Vec2::new(2.0, 0.0));
//! // Page 2 comes to rest just after the leading inset.
//! assert_eq!(target.x, 2.0 * 295.0 - 10.0);
//! ```
//!
//! ## Sections
//!
//! Frames are produced for every section, but all sections share the same page
//! positions and only [`PagingConfig::reference_section`] contributes to the
//! content extent and snap bounds. Populate one section at a time, or switch
//! the reference section when the visible one changes.
//!
//! ## Features
//!
//! - `std` *(default)*: uses the standard library's float functions via `kurbo/std`.
//! - `libm`: uses `libm` for float functions in `no_std` builds.
//!
//! Diagnostics are emitted through [`tracing`] at `debug` (layout passes and snap
//! decisions) and `trace` (page changes) levels.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod geometry;
mod layout;
mod snap;
mod tracker;
mod types;

pub use config::{CrossAxisSpacing, PLAIN_FLICK_VELOCITY, PagingConfig, SIMPLE_FLICK_VELOCITY};
pub use geometry::PageGeometry;
pub use layout::PagingLayout;
pub use snap::{SnapParams, snap_offset};
pub use tracker::{PageChange, PageTracker};
pub use types::{Axis, ItemIndex, Spacing, Viewport};
