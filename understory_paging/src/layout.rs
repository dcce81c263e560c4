// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A small controller that owns paging configuration, host inputs, and cached frames.

use alloc::vec::Vec;

use hashbrown::HashMap;
use kurbo::{Point, Rect, Size, Vec2};

use crate::{
    Axis, CrossAxisSpacing, ItemIndex, PageChange, PageGeometry, PageTracker, PagingConfig,
    SnapParams, Spacing, Viewport, snap_offset,
};

/// Frames produced by one layout pass.
///
/// A pass always builds a fresh set and swaps it in whole.
#[derive(Debug, Default)]
struct FrameSet {
    /// Frames in index order, for range queries.
    ordered: Vec<(ItemIndex, Rect)>,
    /// Position of each index in `ordered`.
    by_index: HashMap<ItemIndex, usize>,
}

impl FrameSet {
    fn build(geometry: &PageGeometry, section_counts: &[usize]) -> Self {
        let total = section_counts.iter().sum();
        let mut ordered = Vec::with_capacity(total);
        let mut by_index = HashMap::with_capacity(total);
        for (section, &count) in section_counts.iter().enumerate() {
            for item in 0..count {
                let index = ItemIndex::new(section, item);
                by_index.insert(index, ordered.len());
                ordered.push((index, geometry.frame_for(item)));
            }
        }
        Self { ordered, by_index }
    }

    fn get(&self, index: ItemIndex) -> Option<Rect> {
        self.by_index.get(&index).map(|&i| self.ordered[i].1)
    }
}

/// Edge-touching rectangles do not overlap.
fn overlaps_with_area(a: Rect, b: Rect) -> bool {
    a.x0 < b.x1 && b.x0 < a.x1 && a.y0 < b.y1 && b.y0 < a.y1
}

/// Paging layout engine for a cover-flow style scroller.
///
/// This type:
/// - stores the [`PagingConfig`], the host [`Viewport`], and per-section item counts,
/// - caches the frames of the last layout pass for O(1) lookup by [`ItemIndex`],
/// - turns release gestures into page-aligned snap targets,
/// - tracks the current page from live scroll offsets.
///
/// It does *not* render, recycle views, or recognise gestures; the host pushes
/// inputs through the setters and reads geometry back. Until a viewport is set
/// the engine is detached and every query yields a zero-valued result.
#[derive(Debug)]
pub struct PagingLayout {
    config: PagingConfig,
    viewport: Option<Viewport>,
    section_counts: Vec<usize>,
    scroll_offset: Point,
    tracker: PageTracker,

    dirty: bool,
    frames: FrameSet,
}

impl Default for PagingLayout {
    fn default() -> Self {
        Self::new(PagingConfig::default())
    }
}

impl PagingLayout {
    /// Creates a detached layout with the given configuration.
    #[must_use]
    pub fn new(config: PagingConfig) -> Self {
        Self {
            config,
            viewport: None,
            section_counts: Vec::new(),
            scroll_offset: Point::ZERO,
            tracker: PageTracker::new(),
            dirty: true,
            frames: FrameSet::default(),
        }
    }

    /// Creates a detached layout with the default configuration, `spacing`, and `axis`.
    #[must_use]
    pub fn with_spacing(spacing: Spacing, axis: Axis) -> Self {
        Self::new(
            PagingConfig::default()
                .with_spacing(spacing)
                .with_axis(axis),
        )
    }

    /// Returns the current configuration.
    #[must_use]
    pub const fn config(&self) -> &PagingConfig {
        &self.config
    }

    /// Replaces the whole configuration.
    ///
    /// Cached frames are invalidated only if a geometry field changed.
    pub fn set_config(&mut self, config: PagingConfig) {
        if self.config.invalidates_geometry(&config) {
            self.dirty = true;
        }
        self.config = config;
    }

    /// Sets the scroll axis.
    pub fn set_axis(&mut self, axis: Axis) {
        self.set_config(self.config.with_axis(axis));
    }

    /// Sets the page spacing.
    pub fn set_spacing(&mut self, spacing: Spacing) {
        self.set_config(self.config.with_spacing(spacing));
    }

    /// Sets the flick threshold. Does not invalidate frames.
    pub fn set_flick_velocity_threshold(&mut self, threshold: f64) {
        debug_assert!(
            threshold.is_finite(),
            "flick velocity threshold must be finite; got {threshold:?}"
        );
        self.config.flick_velocity_threshold = threshold;
    }

    /// Sets the section whose item count drives content extent and snapping.
    pub fn set_reference_section(&mut self, section: usize) {
        self.set_config(self.config.with_reference_section(section));
    }

    /// Sets the cross-axis spacing divisor.
    pub fn set_cross_axis_spacing(&mut self, cross: CrossAxisSpacing) {
        self.set_config(self.config.with_cross_axis_spacing(cross));
    }

    /// Enables or disables the leading-inset correction. Does not invalidate frames.
    pub fn set_inset_correction(&mut self, enabled: bool) {
        self.config.inset_correction = enabled;
    }

    /// Returns the attached viewport, if any.
    #[must_use]
    pub const fn viewport(&self) -> Option<&Viewport> {
        self.viewport.as_ref()
    }

    /// Attaches, updates, or (with `None`) detaches the host viewport.
    pub fn set_viewport(&mut self, viewport: Option<Viewport>) {
        if viewport != self.viewport {
            self.viewport = viewport;
            self.dirty = true;
        }
    }

    /// Returns the item count of every section.
    #[must_use]
    pub fn section_counts(&self) -> &[usize] {
        &self.section_counts
    }

    /// Replaces the item counts of all sections.
    pub fn set_section_counts(&mut self, counts: &[usize]) {
        if counts != self.section_counts.as_slice() {
            self.section_counts.clear();
            self.section_counts.extend_from_slice(counts);
            self.dirty = true;
        }
    }

    /// Sets the item count of one section, adding empty sections before it as needed.
    pub fn set_item_count(&mut self, section: usize, count: usize) {
        if self.section_counts.len() <= section {
            self.section_counts.resize(section + 1, 0);
            self.dirty = true;
        }
        if self.section_counts[section] != count {
            self.section_counts[section] = count;
            self.dirty = true;
        }
    }

    /// Item count of `section`, or 0 when it does not exist.
    #[must_use]
    pub fn item_count(&self, section: usize) -> usize {
        self.section_counts.get(section).copied().unwrap_or(0)
    }

    /// Geometry snapshot for the reference section, or `None` while detached.
    #[must_use]
    pub fn geometry(&self) -> Option<PageGeometry> {
        let viewport = self.viewport?;
        let count = self.item_count(self.config.reference_section);
        Some(PageGeometry::new(&self.config, viewport, count))
    }

    /// Runs a layout pass if anything changed since the last one.
    ///
    /// The previous frame set is discarded wholesale.
    pub fn prepare(&mut self) {
        if !self.dirty {
            return;
        }
        self.frames = match self.geometry() {
            Some(geometry) => FrameSet::build(&geometry, &self.section_counts),
            None => FrameSet::default(),
        };
        self.dirty = false;
        tracing::debug!(
            frames = self.frames.ordered.len(),
            sections = self.section_counts.len(),
            "paging layout pass"
        );
    }

    /// Frame of `index` from the current layout pass.
    ///
    /// Returns `None` for indices outside the current item counts and while detached.
    #[must_use]
    pub fn item_frame(&mut self, index: ItemIndex) -> Option<Rect> {
        self.prepare();
        self.frames.get(index)
    }

    /// Indices whose frames overlap `rect` with positive area, in index order.
    #[must_use]
    pub fn items_in_rect(&mut self, rect: Rect) -> Vec<ItemIndex> {
        self.prepare();
        self.frames
            .ordered
            .iter()
            .filter(|(_, frame)| overlaps_with_area(*frame, rect))
            .map(|&(index, _)| index)
            .collect()
    }

    /// All frames of the current layout pass, in index order.
    pub fn frames(&mut self) -> impl Iterator<Item = (ItemIndex, Rect)> + '_ {
        self.prepare();
        self.frames.ordered.iter().copied()
    }

    /// Total scrollable size, or [`Size::ZERO`] while detached.
    #[must_use]
    pub fn content_size(&self) -> Size {
        self.geometry()
            .map_or(Size::ZERO, |geometry| geometry.content_size())
    }

    /// Size shared by every card, or [`Size::ZERO`] while detached.
    #[must_use]
    pub fn card_size(&self) -> Size {
        self.geometry()
            .map_or(Size::ZERO, |geometry| geometry.card_size())
    }

    /// Distance between page boundaries, or `0.0` while detached.
    #[must_use]
    pub fn page_extent(&self) -> f64 {
        self.geometry()
            .map_or(0.0, |geometry| geometry.page_extent())
    }

    /// Last scroll offset reported by the host.
    #[must_use]
    pub const fn scroll_offset(&self) -> Point {
        self.scroll_offset
    }

    /// Page nearest to the last reported scroll offset.
    #[must_use]
    pub const fn current_page(&self) -> usize {
        self.tracker.page()
    }

    /// Records a live scroll offset from the host.
    ///
    /// Returns a [`PageChange`] when the nearest page moved. While detached or
    /// with a degenerate page extent, the offset is stored but no page change
    /// is reported.
    pub fn set_scroll_offset(&mut self, offset: Point) -> Option<PageChange> {
        self.scroll_offset = offset;
        let geometry = self.geometry()?;
        self.tracker
            .update(self.config.axis.of_point(offset), geometry.page_extent())
    }

    /// Where the scroller should come to rest after a release.
    ///
    /// `proposed` is the host's own resting estimate and `velocity` the
    /// release velocity. The snap decision uses the last offset passed to
    /// [`set_scroll_offset`](Self::set_scroll_offset). Only the scroll-axis
    /// component of `proposed` is replaced; it is clamped to the scrollable
    /// range, which starts at `-leading_inset` when inset correction is
    /// enabled and at `0` otherwise.
    ///
    /// While detached or with a degenerate page extent, `proposed` is returned
    /// unchanged.
    #[must_use]
    pub fn target_content_offset(&self, proposed: Point, velocity: Vec2) -> Point {
        let Some(geometry) = self.geometry() else {
            return proposed;
        };
        let axis = self.config.axis;
        let params = SnapParams::new(&geometry, &self.config);
        let Some(target) = snap_offset(
            &params,
            axis.of_point(self.scroll_offset),
            axis.of_vec(velocity),
        ) else {
            return proposed;
        };
        let min = if self.config.inset_correction {
            geometry.min_scroll_offset()
        } else {
            0.0
        };
        let max = geometry.max_scroll_offset().max(min);
        axis.with_point(proposed, target.max(min).min(max))
    }
}
