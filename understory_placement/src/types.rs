// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for placement: sides, alignments, axes, placements, and search results.
//!
//! ## Overview
//!
//! A [`Placement`] names where a panel sits relative to its anchor: the [`Side`] it is
//! attached to and the [`Alignment`] along that side.
//! Searches in [`search`](crate::search) return an [`Availability`] describing whether
//! the chosen placement hosts the panel at full size or only at a reduced one.

use core::fmt;
use core::str::FromStr;

use kurbo::Size;

/// Side of the anchor the panel is attached to.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Side {
    /// Above the anchor.
    Top,
    /// Below the anchor.
    Bottom,
    /// Left of the anchor.
    Left,
    /// Right of the anchor.
    Right,
}

impl Side {
    /// The side across the anchor from this one.
    pub const fn opposite(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Bottom => Self::Top,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Axis along which space is measured for this side.
    pub const fn axis(self) -> Axis {
        match self {
            Self::Top | Self::Bottom => Axis::Vertical,
            Self::Left | Self::Right => Axis::Horizontal,
        }
    }

    /// The two centered placements perpendicular to this side, in fallback order.
    pub const fn perpendicular(self) -> [Placement; 2] {
        match self {
            Self::Top | Self::Bottom => [Placement::Left, Placement::Right],
            Self::Left | Self::Right => [Placement::Top, Placement::Bottom],
        }
    }
}

/// Alignment of the panel along the anchor edge it is attached to.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Alignment {
    /// Flush with the anchor's leading edge (left or top).
    Start,
    /// Centered on the anchor.
    Center,
    /// Flush with the anchor's trailing edge (right or bottom).
    End,
}

/// Axis along which available space is measured.
///
/// Top/bottom placements stack the panel vertically, so their space (and any
/// max-size override) is a height; left/right placements use widths.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Axis {
    /// Space is a height.
    Vertical,
    /// Space is a width.
    Horizontal,
}

impl Axis {
    /// Extract the component of `size` that lies along this axis.
    pub const fn of(self, size: Size) -> f64 {
        match self {
            Self::Vertical => size.height,
            Self::Horizontal => size.width,
        }
    }

    /// Grow `size` by `amount` along this axis.
    pub fn grow(self, size: Size, amount: f64) -> Size {
        match self {
            Self::Vertical => Size::new(size.width, size.height + amount),
            Self::Horizontal => Size::new(size.width + amount, size.height),
        }
    }
}

/// One of the twelve compass placements of a panel around its anchor.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Placement {
    /// Above, aligned to the anchor's left edge.
    TopStart,
    /// Above, centered.
    Top,
    /// Above, aligned to the anchor's right edge.
    TopEnd,
    /// Below, aligned to the anchor's left edge.
    BottomStart,
    /// Below, centered.
    Bottom,
    /// Below, aligned to the anchor's right edge.
    BottomEnd,
    /// Left, aligned to the anchor's top edge.
    LeftStart,
    /// Left, centered.
    Left,
    /// Left, aligned to the anchor's bottom edge.
    LeftEnd,
    /// Right, aligned to the anchor's top edge.
    RightStart,
    /// Right, centered.
    Right,
    /// Right, aligned to the anchor's bottom edge.
    RightEnd,
}

impl Placement {
    /// Every placement, grouped by side.
    pub const ALL: [Self; 12] = [
        Self::TopStart,
        Self::Top,
        Self::TopEnd,
        Self::BottomStart,
        Self::Bottom,
        Self::BottomEnd,
        Self::LeftStart,
        Self::Left,
        Self::LeftEnd,
        Self::RightStart,
        Self::Right,
        Self::RightEnd,
    ];

    /// Build a placement from its side and alignment.
    pub const fn new(side: Side, alignment: Alignment) -> Self {
        match (side, alignment) {
            (Side::Top, Alignment::Start) => Self::TopStart,
            (Side::Top, Alignment::Center) => Self::Top,
            (Side::Top, Alignment::End) => Self::TopEnd,
            (Side::Bottom, Alignment::Start) => Self::BottomStart,
            (Side::Bottom, Alignment::Center) => Self::Bottom,
            (Side::Bottom, Alignment::End) => Self::BottomEnd,
            (Side::Left, Alignment::Start) => Self::LeftStart,
            (Side::Left, Alignment::Center) => Self::Left,
            (Side::Left, Alignment::End) => Self::LeftEnd,
            (Side::Right, Alignment::Start) => Self::RightStart,
            (Side::Right, Alignment::Center) => Self::Right,
            (Side::Right, Alignment::End) => Self::RightEnd,
        }
    }

    /// Side of the anchor this placement attaches to.
    pub const fn side(self) -> Side {
        match self {
            Self::TopStart | Self::Top | Self::TopEnd => Side::Top,
            Self::BottomStart | Self::Bottom | Self::BottomEnd => Side::Bottom,
            Self::LeftStart | Self::Left | Self::LeftEnd => Side::Left,
            Self::RightStart | Self::Right | Self::RightEnd => Side::Right,
        }
    }

    /// Alignment along the attached edge.
    pub const fn alignment(self) -> Alignment {
        match self {
            Self::TopStart | Self::BottomStart | Self::LeftStart | Self::RightStart => {
                Alignment::Start
            }
            Self::Top | Self::Bottom | Self::Left | Self::Right => Alignment::Center,
            Self::TopEnd | Self::BottomEnd | Self::LeftEnd | Self::RightEnd => Alignment::End,
        }
    }

    /// Axis along which this placement's available space is measured.
    pub const fn axis(self) -> Axis {
        self.side().axis()
    }

    /// Canonical kebab-case name, e.g. `"bottom-start"`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TopStart => "top-start",
            Self::Top => "top",
            Self::TopEnd => "top-end",
            Self::BottomStart => "bottom-start",
            Self::Bottom => "bottom",
            Self::BottomEnd => "bottom-end",
            Self::LeftStart => "left-start",
            Self::Left => "left",
            Self::LeftEnd => "left-end",
            Self::RightStart => "right-start",
            Self::Right => "right",
            Self::RightEnd => "right-end",
        }
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown placement name.
#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("unknown placement name")]
pub struct ParsePlacementError;

impl FromStr for Placement {
    type Err = ParsePlacementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or(ParsePlacementError)
    }
}

/// Outcome of a placement search.
///
/// Either the panel fits entirely at `placement`, or it only fits when limited
/// to `available_size` along the placement's [`Axis`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Availability {
    /// The panel fits inside the bounding container at this placement.
    FullyAvailable {
        /// Chosen placement.
        placement: Placement,
    },
    /// The panel only fits when capped to `available_size`.
    PartiallyAvailable {
        /// Chosen placement.
        placement: Placement,
        /// Room along the placement's axis, never negative.
        available_size: f64,
    },
}

impl Availability {
    /// The chosen placement, regardless of fit.
    pub const fn placement(&self) -> Placement {
        match *self {
            Self::FullyAvailable { placement } | Self::PartiallyAvailable { placement, .. } => {
                placement
            }
        }
    }

    /// True when the panel fits at full size.
    pub const fn is_full(&self) -> bool {
        matches!(self, Self::FullyAvailable { .. })
    }

    /// The reduced size for a partial fit, `None` for a full one.
    pub const fn available_size(&self) -> Option<f64> {
        match *self {
            Self::FullyAvailable { .. } => None,
            Self::PartiallyAvailable { available_size, .. } => Some(available_size),
        }
    }
}

/// Optional size limits of the panel, consulted by the keep-current strategy.
///
/// Minimums decide whether the current placement is still usable; maximums cap
/// the size the panel would want on an axis.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct SizeBounds {
    /// Smallest acceptable height for top/bottom placements.
    pub min_height: Option<f64>,
    /// Largest height the panel should occupy.
    pub max_height: Option<f64>,
    /// Smallest acceptable width for left/right placements.
    pub min_width: Option<f64>,
    /// Largest width the panel should occupy.
    pub max_width: Option<f64>,
}

impl SizeBounds {
    /// Minimum along `axis`, if configured.
    pub const fn min_on(&self, axis: Axis) -> Option<f64> {
        match axis {
            Axis::Vertical => self.min_height,
            Axis::Horizontal => self.min_width,
        }
    }

    /// Maximum along `axis`, if configured.
    pub const fn max_on(&self, axis: Axis) -> Option<f64> {
        match axis {
            Axis::Vertical => self.max_height,
            Axis::Horizontal => self.max_width,
        }
    }

    /// Clamp `size` to the maximum along `axis`.
    pub fn cap(&self, axis: Axis, size: f64) -> f64 {
        match self.max_on(axis) {
            Some(max) => size.min(max),
            None => size,
        }
    }
}

/// Which search decides the placement on each positioning pass.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlacementStrategy {
    /// Re-run the ordered search from scratch every pass.
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "default"))]
    Default,
    /// Stay on the current placement while it satisfies the given bounds.
    #[cfg_attr(feature = "serde", serde(rename = "considerKeepingCurrentPlacement"))]
    KeepCurrent(SizeBounds),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn side_alignment_roundtrip_covers_all() {
        for p in Placement::ALL {
            assert_eq!(Placement::new(p.side(), p.alignment()), p);
        }
    }

    #[test]
    fn axis_follows_side() {
        assert_eq!(Placement::BottomEnd.axis(), Axis::Vertical);
        assert_eq!(Placement::Top.axis(), Axis::Vertical);
        assert_eq!(Placement::LeftStart.axis(), Axis::Horizontal);
        assert_eq!(Placement::Right.axis(), Axis::Horizontal);
    }

    #[test]
    fn names_parse_back() {
        assert_eq!("top-start".parse(), Ok(Placement::TopStart));
        assert_eq!("right".parse(), Ok(Placement::Right));
        assert_eq!("middle".parse::<Placement>(), Err(ParsePlacementError));
        for p in Placement::ALL {
            assert_eq!(p.as_str().parse(), Ok(p));
        }
    }

    #[test]
    fn availability_accessors() {
        let full = Availability::FullyAvailable {
            placement: Placement::Top,
        };
        let partial = Availability::PartiallyAvailable {
            placement: Placement::Left,
            available_size: 42.0,
        };
        assert!(full.is_full());
        assert_eq!(full.available_size(), None);
        assert_eq!(partial.placement(), Placement::Left);
        assert_eq!(partial.available_size(), Some(42.0));
    }

    #[test]
    fn bounds_cap_only_when_configured() {
        let bounds = SizeBounds {
            max_height: Some(100.0),
            ..Default::default()
        };
        assert_eq!(bounds.cap(Axis::Vertical, 180.0), 100.0);
        assert_eq!(bounds.cap(Axis::Vertical, 60.0), 60.0);
        assert_eq!(bounds.cap(Axis::Horizontal, 180.0), 180.0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_names_match_display() {
        let json = serde_json::to_string(&Placement::BottomStart).unwrap();
        assert_eq!(json, "\"bottom-start\"");
        let strategy: PlacementStrategy =
            serde_json::from_str(r#"{"considerKeepingCurrentPlacement":{"minHeight":50}}"#)
                .unwrap();
        assert_eq!(
            strategy,
            PlacementStrategy::KeepCurrent(SizeBounds {
                min_height: Some(50.0),
                ..Default::default()
            })
        );
        let default: PlacementStrategy = serde_json::from_str("\"default\"").unwrap();
        assert_eq!(default, PlacementStrategy::Default);
    }
}
