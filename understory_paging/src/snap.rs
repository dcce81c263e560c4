// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Release-gesture snapping: where a page scroller should come to rest.
//!
//! Paging with fling-through works like this:
//!
//! - a firm flick advances exactly one page in the direction of motion, even
//!   when released mid-page,
//! - a slow drag released past the midpoint of a page completes to that page,
//! - a slow drag released before the midpoint springs back.
//!
//! All targets land on page boundaries.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

use crate::{PageGeometry, PagingConfig};

/// Inputs to [`snap_offset`], all measured along the scroll axis.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SnapParams {
    /// Distance between neighbouring page boundaries.
    pub page_extent: f64,
    /// Half of the spacing along the scroll axis.
    pub half_spacing: f64,
    /// Inset before the first page.
    pub leading_inset: f64,
    /// Number of pages in the reference section.
    pub item_count: usize,
    /// Release speed above which a release counts as a flick.
    pub flick_velocity_threshold: f64,
    /// Align targets with `leading_inset`.
    pub inset_correction: bool,
}

impl SnapParams {
    /// Collects the snap inputs from a geometry snapshot and its configuration.
    #[must_use]
    pub fn new(geometry: &PageGeometry, config: &PagingConfig) -> Self {
        Self {
            page_extent: geometry.page_extent(),
            half_spacing: geometry.half_spacing(),
            leading_inset: geometry.leading_inset(),
            item_count: geometry.item_count,
            flick_velocity_threshold: config.flick_velocity_threshold,
            inset_correction: config.inset_correction,
        }
    }
}

/// Computes the resting offset for a release at `offset` moving at `velocity`.
///
/// Both values are along the scroll axis; positive velocity moves toward later
/// pages. Returns `None` when the page extent is zero, negative, or not
/// finite, in which case callers should leave the offset alone.
///
/// The result is a pure function of its inputs. It is not clamped to the
/// scrollable range; [`PagingLayout::target_content_offset`] does that.
///
/// [`PagingLayout::target_content_offset`]: crate::PagingLayout::target_content_offset
#[must_use]
pub fn snap_offset(params: &SnapParams, offset: f64, velocity: f64) -> Option<f64> {
    let page = params.page_extent;
    if !page.is_finite() || page <= 0.0 {
        return None;
    }
    let raw = offset / page;
    let forward = velocity > 0.0;
    let behind = if forward { raw.floor() } else { raw.ceil() };
    let ahead = if forward { raw.ceil() } else { raw.floor() };

    let before_midpoint = (1.0 + behind - raw).abs() > 0.5;
    let flicked = velocity.abs() > params.flick_velocity_threshold;

    let mut target = if before_midpoint && flicked {
        let target = ahead * page;
        // Past the last page there is no spacing to tuck under.
        if ahead < params.item_count as f64 {
            (target - params.half_spacing).max(0.0)
        } else {
            target
        }
    } else {
        (raw.round() * page - params.half_spacing).max(0.0)
    };

    if params.inset_correction {
        if target == 0.0 {
            target -= params.leading_inset;
        } else {
            target -= params.leading_inset - params.half_spacing;
        }
    }
    tracing::debug!(offset, velocity, raw, flicked, target, "snap target");
    Some(target)
}

#[cfg(test)]
mod tests {
    use super::{SnapParams, snap_offset};

    fn params(inset_correction: bool) -> SnapParams {
        SnapParams {
            page_extent: 305.0,
            half_spacing: 5.0,
            leading_inset: 10.0,
            item_count: 5,
            flick_velocity_threshold: 0.8,
            inset_correction,
        }
    }

    #[test]
    fn flick_forward_advances_one_page() {
        let p = params(false);
        // raw = 300 / 305, just short of page 1.
        assert_eq!(snap_offset(&p, 300.0, 2.0), Some(300.0));
        // Early in page 1, a flick still only reaches page 2.
        assert_eq!(snap_offset(&p, 320.0, 2.0), Some(605.0));
    }

    #[test]
    fn flick_backward_returns_one_page() {
        let p = params(false);
        assert_eq!(snap_offset(&p, 600.0, -2.0), Some(300.0));
        assert_eq!(snap_offset(&p, 100.0, -2.0), Some(0.0));
    }

    #[test]
    fn slow_release_snaps_to_nearest_page() {
        let p = params(false);
        // Before the midpoint: spring back.
        assert_eq!(snap_offset(&p, 50.0, 0.1), Some(0.0));
        assert_eq!(snap_offset(&p, 140.0, 0.5), Some(0.0));
        // Past the midpoint: complete to the next page.
        assert_eq!(snap_offset(&p, 160.0, 0.5), Some(300.0));
        // Direction does not matter without a flick.
        assert_eq!(snap_offset(&p, 160.0, -0.5), Some(300.0));
    }

    #[test]
    fn flick_past_the_last_page_keeps_the_raw_boundary() {
        let p = params(false);
        // raw lies between pages 4 and 5; page 5 does not exist.
        assert_eq!(snap_offset(&p, 1230.0, 2.0), Some(1525.0));
    }

    #[test]
    fn inset_correction_aligns_every_page_with_the_inset() {
        let p = params(true);
        assert_eq!(snap_offset(&p, 50.0, 0.1), Some(-10.0));
        assert_eq!(snap_offset(&p, 300.0, 2.0), Some(295.0));
        assert_eq!(snap_offset(&p, 320.0, 2.0), Some(600.0));
    }

    #[test]
    fn degenerate_extent_yields_none() {
        let mut p = params(true);
        p.page_extent = 0.0;
        assert_eq!(snap_offset(&p, 10.0, 1.0), None);
        p.page_extent = -3.0;
        assert_eq!(snap_offset(&p, 10.0, 1.0), None);
        p.page_extent = f64::NAN;
        assert_eq!(snap_offset(&p, 10.0, 1.0), None);
    }

    #[test]
    fn repeated_calls_agree() {
        let p = params(true);
        let a = snap_offset(&p, 777.0, -1.3);
        let b = snap_offset(&p, 777.0, -1.3);
        assert_eq!(a, b);
    }
}
