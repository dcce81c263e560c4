// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Caller-settable paging parameters.

use crate::{Axis, Spacing};

/// Flick threshold used by [`PagingConfig::plain`].
pub const PLAIN_FLICK_VELOCITY: f64 = 0.8;

/// Flick threshold used by [`PagingConfig::simple`].
pub const SIMPLE_FLICK_VELOCITY: f64 = 3.0;

/// How much spacing the cards keep on the axis perpendicular to scrolling.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum CrossAxisSpacing {
    /// Cards sit `spacing` away from the cross-axis edges.
    #[default]
    Full,
    /// Cards sit `spacing / 2` away from the cross-axis edges.
    Half,
}

impl CrossAxisSpacing {
    /// The cross-axis offset for a given `spacing`.
    #[must_use]
    pub const fn apply(self, spacing: f64) -> f64 {
        match self {
            Self::Full => spacing,
            Self::Half => spacing / 2.0,
        }
    }
}

/// Parameters controlling page geometry and snapping.
///
/// Changing `axis`, `spacing`, `reference_section` or `cross_axis_spacing`
/// invalidates cached frames. `flick_velocity_threshold` and
/// `inset_correction` only affect snap targets.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PagingConfig {
    /// Scroll direction.
    pub axis: Axis,
    /// Gap between pages and around cards.
    pub spacing: Spacing,
    /// Release speed (in host velocity units) above which a release counts as a flick.
    pub flick_velocity_threshold: f64,
    /// Section whose item count drives content extent and snap bounds.
    ///
    /// Frames are produced for every section, but all sections share the same
    /// page positions; only one section is meant to be populated at a time.
    pub reference_section: usize,
    /// Cross-axis spacing divisor.
    pub cross_axis_spacing: CrossAxisSpacing,
    /// Align snap targets with the viewport's leading inset.
    ///
    /// When enabled, the first page comes to rest at `-leading_inset` and
    /// every later page at `page * page_extent - leading_inset`.
    pub inset_correction: bool,
}

impl Default for PagingConfig {
    fn default() -> Self {
        Self::plain()
    }
}

impl PagingConfig {
    /// Horizontal paging with a configurable first-item inset.
    ///
    /// Flicks above [`PLAIN_FLICK_VELOCITY`] advance a page, cards keep the
    /// full spacing on the cross axis and snap targets honour the leading inset.
    #[must_use]
    pub const fn plain() -> Self {
        Self {
            axis: Axis::Horizontal,
            spacing: Spacing::ZERO,
            flick_velocity_threshold: PLAIN_FLICK_VELOCITY,
            reference_section: 0,
            cross_axis_spacing: CrossAxisSpacing::Full,
            inset_correction: true,
        }
    }

    /// Horizontal paging without inset handling.
    ///
    /// Flicks above [`SIMPLE_FLICK_VELOCITY`] advance a page, cards keep half
    /// the spacing on the cross axis and snap targets are pure page math.
    #[must_use]
    pub const fn simple() -> Self {
        Self {
            axis: Axis::Horizontal,
            spacing: Spacing::ZERO,
            flick_velocity_threshold: SIMPLE_FLICK_VELOCITY,
            reference_section: 0,
            cross_axis_spacing: CrossAxisSpacing::Half,
            inset_correction: false,
        }
    }

    /// Sets the scroll axis.
    #[must_use]
    pub const fn with_axis(mut self, axis: Axis) -> Self {
        self.axis = axis;
        self
    }

    /// Sets the spacing.
    #[must_use]
    pub const fn with_spacing(mut self, spacing: Spacing) -> Self {
        self.spacing = spacing;
        self
    }

    /// Sets the flick threshold.
    #[must_use]
    pub const fn with_flick_velocity_threshold(mut self, threshold: f64) -> Self {
        self.flick_velocity_threshold = threshold;
        self
    }

    /// Sets the reference section.
    #[must_use]
    pub const fn with_reference_section(mut self, section: usize) -> Self {
        self.reference_section = section;
        self
    }

    /// Sets the cross-axis spacing divisor.
    #[must_use]
    pub const fn with_cross_axis_spacing(mut self, cross: CrossAxisSpacing) -> Self {
        self.cross_axis_spacing = cross;
        self
    }

    /// Enables or disables the leading-inset correction of snap targets.
    #[must_use]
    pub const fn with_inset_correction(mut self, enabled: bool) -> Self {
        self.inset_correction = enabled;
        self
    }

    /// Returns `true` if switching from `self` to `other` changes page geometry.
    #[must_use]
    pub fn invalidates_geometry(&self, other: &Self) -> bool {
        self.axis != other.axis
            || self.spacing != other.spacing
            || self.reference_section != other.reference_section
            || self.cross_axis_spacing != other.cross_axis_spacing
    }
}

#[cfg(test)]
mod tests {
    use super::{CrossAxisSpacing, PLAIN_FLICK_VELOCITY, PagingConfig, SIMPLE_FLICK_VELOCITY};
    use crate::{Axis, Spacing};

    #[test]
    fn presets_differ_only_in_variant_fields() {
        let plain = PagingConfig::plain();
        let simple = PagingConfig::simple();
        assert_eq!(plain, PagingConfig::default());
        assert_eq!(plain.flick_velocity_threshold, PLAIN_FLICK_VELOCITY);
        assert_eq!(simple.flick_velocity_threshold, SIMPLE_FLICK_VELOCITY);
        assert!(plain.inset_correction);
        assert!(!simple.inset_correction);
        assert_eq!(simple.cross_axis_spacing, CrossAxisSpacing::Half);
        assert_eq!(plain.axis, simple.axis);
    }

    #[test]
    fn tunables_do_not_invalidate_geometry() {
        let base = PagingConfig::plain().with_spacing(Spacing::uniform(10.0));
        assert!(!base.invalidates_geometry(&base.with_flick_velocity_threshold(5.0)));
        assert!(!base.invalidates_geometry(&base.with_inset_correction(false)));
        assert!(base.invalidates_geometry(&base.with_axis(Axis::Vertical)));
        assert!(base.invalidates_geometry(&base.with_reference_section(1)));
        assert!(base.invalidates_geometry(&base.with_cross_axis_spacing(CrossAxisSpacing::Half)));
        assert!(base.invalidates_geometry(&base.with_spacing(Spacing::uniform(4.0))));
    }

    #[test]
    fn cross_axis_spacing_divisor() {
        assert_eq!(CrossAxisSpacing::Full.apply(10.0), 10.0);
        assert_eq!(CrossAxisSpacing::Half.apply(10.0), 5.0);
    }
}
