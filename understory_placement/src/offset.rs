// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Offset calculators: the top-left corner of a panel for each placement.
//!
//! ## Overview
//!
//! Each calculator attaches a panel of size `panel` to one side of `anchor`, aligns
//! it along that side, and clamps the cross-axis coordinate with
//! [`clamp_axis`](crate::geometry::clamp_axis) against the document `extent`.
//! The main-axis coordinate is left as is, unrounded: the search already decided
//! there is room on that side. Only the clamped cross-axis coordinate is rounded.
//!
//! The calculators are pure; [`position_for`] dispatches on a [`Placement`].
//!
//! ```
//! use kurbo::{Point, Rect, Size};
//! use understory_placement::offset::bottom;
//!
//! let anchor = Rect::from_origin_size((100.0, 100.0), (50.0, 20.0));
//! let panel = Size::new(200.0, 80.0);
//! let extent = Size::new(400.0, 300.0);
//! assert_eq!(bottom(anchor, panel, extent), Point::new(25.0, 120.0));
//! ```

use kurbo::{Point, Rect, Size};

use crate::geometry::clamp_axis;
use crate::types::{Alignment, Placement, Side};

/// Left coordinate of a panel of `width` aligned against `anchor`'s horizontal span.
fn aligned_x(anchor: Rect, width: f64, alignment: Alignment, extent: Size) -> f64 {
    let x = match alignment {
        Alignment::Start => anchor.x0,
        Alignment::Center => anchor.x0 + anchor.width() / 2.0 - width / 2.0,
        Alignment::End => anchor.x1 - width,
    };
    clamp_axis(x, width, extent.width)
}

/// Top coordinate of a panel of `height` aligned against `anchor`'s vertical span.
fn aligned_y(anchor: Rect, height: f64, alignment: Alignment, extent: Size) -> f64 {
    let y = match alignment {
        Alignment::Start => anchor.y0,
        Alignment::Center => anchor.y0 + anchor.height() / 2.0 - height / 2.0,
        Alignment::End => anchor.y1 - height,
    };
    clamp_axis(y, height, extent.height)
}

fn attach(side: Side, alignment: Alignment, anchor: Rect, panel: Size, extent: Size) -> Point {
    match side {
        Side::Top => Point::new(
            aligned_x(anchor, panel.width, alignment, extent),
            anchor.y0 - panel.height,
        ),
        Side::Bottom => Point::new(
            aligned_x(anchor, panel.width, alignment, extent),
            anchor.y1,
        ),
        Side::Left => Point::new(
            anchor.x0 - panel.width,
            aligned_y(anchor, panel.height, alignment, extent),
        ),
        Side::Right => Point::new(
            anchor.x1,
            aligned_y(anchor, panel.height, alignment, extent),
        ),
    }
}

/// Above the anchor, flush with its left edge.
pub fn top_start(anchor: Rect, panel: Size, extent: Size) -> Point {
    attach(Side::Top, Alignment::Start, anchor, panel, extent)
}

/// Above the anchor, centered.
pub fn top(anchor: Rect, panel: Size, extent: Size) -> Point {
    attach(Side::Top, Alignment::Center, anchor, panel, extent)
}

/// Above the anchor, flush with its right edge.
pub fn top_end(anchor: Rect, panel: Size, extent: Size) -> Point {
    attach(Side::Top, Alignment::End, anchor, panel, extent)
}

/// Below the anchor, flush with its left edge.
pub fn bottom_start(anchor: Rect, panel: Size, extent: Size) -> Point {
    attach(Side::Bottom, Alignment::Start, anchor, panel, extent)
}

/// Below the anchor, centered.
pub fn bottom(anchor: Rect, panel: Size, extent: Size) -> Point {
    attach(Side::Bottom, Alignment::Center, anchor, panel, extent)
}

/// Below the anchor, flush with its right edge.
pub fn bottom_end(anchor: Rect, panel: Size, extent: Size) -> Point {
    attach(Side::Bottom, Alignment::End, anchor, panel, extent)
}

/// Left of the anchor, flush with its top edge.
pub fn left_start(anchor: Rect, panel: Size, extent: Size) -> Point {
    attach(Side::Left, Alignment::Start, anchor, panel, extent)
}

/// Left of the anchor, centered.
pub fn left(anchor: Rect, panel: Size, extent: Size) -> Point {
    attach(Side::Left, Alignment::Center, anchor, panel, extent)
}

/// Left of the anchor, flush with its bottom edge.
pub fn left_end(anchor: Rect, panel: Size, extent: Size) -> Point {
    attach(Side::Left, Alignment::End, anchor, panel, extent)
}

/// Right of the anchor, flush with its top edge.
pub fn right_start(anchor: Rect, panel: Size, extent: Size) -> Point {
    attach(Side::Right, Alignment::Start, anchor, panel, extent)
}

/// Right of the anchor, centered.
pub fn right(anchor: Rect, panel: Size, extent: Size) -> Point {
    attach(Side::Right, Alignment::Center, anchor, panel, extent)
}

/// Right of the anchor, flush with its bottom edge.
pub fn right_end(anchor: Rect, panel: Size, extent: Size) -> Point {
    attach(Side::Right, Alignment::End, anchor, panel, extent)
}

/// Top-left corner of `panel` at `placement` around `anchor`.
pub fn position_for(placement: Placement, anchor: Rect, panel: Size, extent: Size) -> Point {
    let calculator: fn(Rect, Size, Size) -> Point = match placement {
        Placement::TopStart => top_start,
        Placement::Top => top,
        Placement::TopEnd => top_end,
        Placement::BottomStart => bottom_start,
        Placement::Bottom => bottom,
        Placement::BottomEnd => bottom_end,
        Placement::LeftStart => left_start,
        Placement::Left => left,
        Placement::LeftEnd => left_end,
        Placement::RightStart => right_start,
        Placement::Right => right,
        Placement::RightEnd => right_end,
    };
    calculator(anchor, panel, extent)
}
