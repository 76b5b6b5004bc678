// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Placement searches.
//!
//! ## Default search
//!
//! [`resolve_default`] walks a [`PlacementOrder`] and returns the first candidate
//! whose available space holds the panel ([`Availability::FullyAvailable`]).
//! Preference order beats maximizing space. If none fits, the candidate with the
//! most room wins as [`Availability::PartiallyAvailable`]; ties keep the earlier
//! candidate. Available space is floored at zero, so when no candidate has any
//! room at all the preferred placement is returned with a size of `0`.
//!
//! ## Keep-current search
//!
//! [`resolve_sticky`] stays on the current placement while its space satisfies the
//! configured [`SizeBounds`], so a panel does not jump between sides while its
//! anchor scrolls along a container edge. Once the current placement becomes
//! unusable it defers to [`resolve_default`] over the whole order.
//!
//! ## Example
//!
//! ```
//! use kurbo::{Rect, Size};
//! use understory_placement::{AnchorSpace, Availability, Placement, PlacementOrder, resolve_default};
//!
//! // Anchor near the bottom of a 400×300 viewport.
//! let space = AnchorSpace::new(
//!     Rect::from_origin_size((100.0, 250.0), (50.0, 20.0)),
//!     Rect::new(0.0, 0.0, 400.0, 300.0),
//!     5.0,
//! );
//! let order = PlacementOrder::fallback_for(Placement::Bottom);
//! let result = resolve_default(&order, Size::new(120.0, 60.0), &space);
//! assert_eq!(result, Availability::FullyAvailable { placement: Placement::Top });
//! ```

use kurbo::{Rect, Size};

use crate::geometry::visible_bounds;
use crate::order::PlacementOrder;
use crate::types::{Availability, Placement, PlacementStrategy, Side, SizeBounds};

/// An anchor inside the container a panel must stay within, plus the gap to keep
/// between the two.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AnchorSpace {
    anchor: Rect,
    bounds: Rect,
    offset: f64,
}

impl AnchorSpace {
    /// Describe `anchor` inside `bounds`, reserving `offset` between anchor and panel.
    ///
    /// The anchor is reduced to its [visible bounds](crate::geometry::visible_bounds)
    /// first, so a partially scrolled-out anchor measures space from its visible part.
    pub fn new(anchor: Rect, bounds: Rect, offset: f64) -> Self {
        Self {
            anchor: visible_bounds(anchor, bounds),
            bounds: bounds.abs(),
            offset,
        }
    }

    /// The visible anchor rectangle.
    pub fn anchor(&self) -> Rect {
        self.anchor
    }

    /// The bounding container.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// The reserved gap.
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Room for a panel at `placement`, along the placement's axis, after the gap.
    ///
    /// Never negative.
    pub fn available_size(&self, placement: Placement) -> f64 {
        let raw = match placement.side() {
            Side::Top => self.anchor.y0 - self.bounds.y0,
            Side::Bottom => self.bounds.y1 - self.anchor.y1,
            Side::Left => self.anchor.x0 - self.bounds.x0,
            Side::Right => self.bounds.x1 - self.anchor.x1,
        };
        (raw - self.offset).max(0.0)
    }
}

/// Ordered first-fit search with a largest-partial fallback.
pub fn resolve_default(order: &PlacementOrder, dialog: Size, space: &AnchorSpace) -> Availability {
    // Sizes are floored at zero, so the preferred placement holds ties at zero.
    let mut best = (order.preferred(), 0.0);
    for placement in order.iter() {
        let available = space.available_size(placement);
        if available >= placement.axis().of(dialog) {
            return Availability::FullyAvailable { placement };
        }
        if available > best.1 {
            best = (placement, available);
        }
    }
    Availability::PartiallyAvailable {
        placement: best.0,
        available_size: best.1,
    }
}

/// Keep `current` while its room satisfies `bounds`; otherwise run [`resolve_default`].
///
/// The current placement is kept when its available size reaches the panel's size
/// capped by the maximum, or the minimum on its axis when that is smaller.
/// A kept placement is reported as fully available when the capped panel size
/// fits, and as partially available with its actual room otherwise.
/// Maximums only cap the wanted size; they never cause a relocation on their own.
pub fn resolve_sticky(
    order: &PlacementOrder,
    dialog: Size,
    space: &AnchorSpace,
    current: Option<Placement>,
    bounds: &SizeBounds,
) -> Availability {
    let Some(placement) = current else {
        return resolve_default(order, dialog, space);
    };
    let axis = placement.axis();
    let wanted = bounds.cap(axis, axis.of(dialog));
    let required = bounds.min_on(axis).map_or(wanted, |min| min.min(wanted));
    let available = space.available_size(placement);
    if available < required {
        return resolve_default(order, dialog, space);
    }
    if available >= wanted {
        Availability::FullyAvailable { placement }
    } else {
        Availability::PartiallyAvailable {
            placement,
            available_size: available,
        }
    }
}

/// Run the search selected by `strategy`.
///
/// `current` is only consulted by [`PlacementStrategy::KeepCurrent`].
pub fn resolve(
    strategy: &PlacementStrategy,
    order: &PlacementOrder,
    dialog: Size,
    space: &AnchorSpace,
    current: Option<Placement>,
) -> Availability {
    match strategy {
        PlacementStrategy::Default => resolve_default(order, dialog, space),
        PlacementStrategy::KeepCurrent(bounds) => {
            resolve_sticky(order, dialog, space, current, bounds)
        }
    }
}
