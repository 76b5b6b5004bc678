// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_placement --heading-base-level=0

//! Understory Placement: decide where an anchored floating panel goes.
//!
//! Given an anchor rectangle, a panel size, and the container the panel must stay
//! inside, this crate picks one of twelve compass [`Placement`]s and computes the
//! panel's top-left corner for it. It is the geometry half of tooltips, popovers,
//! and dropdown menus; timing and lifecycle live in `understory_popover`.
//!
//! ## Not a constraint solver
//!
//! Placement is resolved from a short, caller-supplied [`PlacementOrder`].
//! The first candidate with enough room wins; otherwise the one with the most room
//! is returned together with that room so the caller can cap the panel's size.
//! The only obstacle considered is the edge of a single bounding container.
//!
//! ## API overview
//!
//! - [`geometry`]: [`visible_bounds`](geometry::visible_bounds),
//!   [`bounding_rect`](geometry::bounding_rect), and
//!   [`clamp_axis`](geometry::clamp_axis).
//! - [`offset`]: one calculator per placement plus
//!   [`position_for`](offset::position_for).
//! - [`search`]: [`resolve_default`] (ordered first fit), [`resolve_sticky`]
//!   (keep the current placement while it is usable), and [`resolve`] which
//!   dispatches on a [`PlacementStrategy`].
//! - [`PlacementOrder`]: non-empty candidate list with
//!   [`fallback_for`](PlacementOrder::fallback_for) defaults.
//!
//! ## Example
//!
//! ```
//! use kurbo::{Point, Rect, Size};
//! use understory_placement::{
//!     AnchorSpace, Placement, PlacementOrder, geometry, offset, resolve_default,
//! };
//!
//! let extent = Size::new(400.0, 300.0);
//! let anchor = Rect::from_origin_size((100.0, 100.0), (50.0, 20.0));
//! let panel = Size::new(200.0, 80.0);
//!
//! let space = AnchorSpace::new(anchor, geometry::bounding_rect(extent, None), 5.0);
//! let order = PlacementOrder::fallback_for(Placement::Bottom);
//! let chosen = resolve_default(&order, panel, &space);
//! assert_eq!(chosen.placement(), Placement::Bottom);
//!
//! let origin = offset::position_for(chosen.placement(), anchor, panel, extent);
//! assert_eq!(origin, Point::new(25.0, 120.0));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod geometry;
pub mod offset;
pub mod order;
pub mod search;
pub mod types;

pub use order::{EmptyOrderError, PlacementOrder};
pub use search::{AnchorSpace, resolve, resolve_default, resolve_sticky};
pub use types::{
    Alignment, Availability, Axis, ParsePlacementError, Placement, PlacementStrategy, Side,
    SizeBounds,
};
