// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometry helpers: visible bounds inside a scroll container, the bounding
//! container of a search, and single-axis clamping.
//!
//! All rectangles live in viewport coordinates, with the viewport spanning
//! `(0, 0)..extent`.

use kurbo::{Point, Rect, Size};

/// The portion of `element` that is not clipped by `container`.
///
/// An element scrolled fully out of view yields a zero-size rectangle on the
/// container edge nearest to it, never an error.
pub fn visible_bounds(element: Rect, container: Rect) -> Rect {
    let element = element.abs();
    let container = container.abs();
    // Pin the degenerate case onto the container so distances stay meaningful.
    // NaN bounds pass through without panicking.
    let x0 = element.x0.max(container.x0).min(container.x1);
    let y0 = element.y0.max(container.y0).min(container.y1);
    let x1 = element.x1.max(x0).min(container.x1.max(x0));
    let y1 = element.y1.max(y0).min(container.y1.max(y0));
    Rect::new(x0, y0, x1, y1)
}

/// The viewport rectangle for a document extent.
pub fn viewport_rect(extent: Size) -> Rect {
    Rect::from_origin_size(Point::ORIGIN, extent)
}

/// The container a panel must stay inside.
///
/// This is the scroll container clipped to the viewport, or the viewport itself
/// when no container is configured.
pub fn bounding_rect(extent: Size, container: Option<Rect>) -> Rect {
    let viewport = viewport_rect(extent);
    match container {
        Some(container) => visible_bounds(container, viewport),
        None => viewport,
    }
}

/// Shift `position` so that `position..position + size` stays inside `0..bound_extent`.
///
/// Overflow past the far edge is pulled back, but never past `0`; a panel larger
/// than the extent therefore starts at `0` and still overflows. The result is
/// rounded to a whole pixel.
pub fn clamp_axis(position: f64, size: f64, bound_extent: f64) -> f64 {
    let overflow = position + size - bound_extent;
    let adjusted = if overflow > 0.0 {
        (position - overflow).max(0.0)
    } else {
        position.max(0.0)
    };
    round_px(adjusted)
}

/// Round to the nearest whole pixel, half away from zero.
///
/// Goes through kurbo so the `std`/`libm` choice stays in one place.
pub(crate) fn round_px(value: f64) -> f64 {
    Point::new(value, 0.0).round().x
}
