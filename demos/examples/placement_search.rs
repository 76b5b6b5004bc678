// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Placement search for a few anchors in a small viewport.
//!
//! Prints what the default search picks for anchors near each edge, then shows
//! the keep-current search holding on to a placement the default search would
//! abandon.
//!
//! Run:
//! - `cargo run -p understory_demos --example placement_search`

use kurbo::{Rect, Size};
use understory_placement::{
    AnchorSpace, Availability, Placement, PlacementOrder, SizeBounds, geometry, offset,
    resolve_default, resolve_sticky,
};

fn describe(result: Availability) -> String {
    match result {
        Availability::FullyAvailable { placement } => format!("{placement} (fits)"),
        Availability::PartiallyAvailable {
            placement,
            available_size,
        } => format!("{placement} (capped to {available_size}px)"),
    }
}

fn main() {
    let extent = Size::new(400.0, 300.0);
    let bounds = geometry::bounding_rect(extent, None);
    let panel = Size::new(200.0, 80.0);
    let gap = 5.0;
    let order = PlacementOrder::fallback_for(Placement::Bottom);

    println!("default search, preferred {}:", order.preferred());
    for (label, origin) in [
        ("middle", (175.0, 140.0)),
        ("bottom edge", (175.0, 270.0)),
        ("top-left corner", (0.0, 0.0)),
        ("right edge", (350.0, 140.0)),
    ] {
        let anchor = Rect::from_origin_size(origin, (50.0, 20.0));
        let space = AnchorSpace::new(anchor, bounds, gap);
        let result = resolve_default(&order, panel, &space);
        let frame = result.placement().axis().grow(panel, gap);
        let origin = offset::position_for(result.placement(), anchor, frame, extent);
        println!(
            "  {label:>16}: {} at ({}, {})",
            describe(result),
            origin.x,
            origin.y
        );
    }

    // A tall panel near the bottom: only 80px below, but 50px is acceptable.
    let anchor = Rect::from_origin_size((175.0, 200.0), (50.0, 20.0));
    let space = AnchorSpace::new(anchor, bounds, 0.0);
    let tall = Size::new(200.0, 120.0);
    let sticky = SizeBounds {
        min_height: Some(50.0),
        ..Default::default()
    };
    let order = PlacementOrder::fallback_for(Placement::Top);
    println!("tall panel, currently below its anchor:");
    println!(
        "  {:>16}: {}",
        "default",
        describe(resolve_default(&order, tall, &space))
    );
    println!(
        "  {:>16}: {}",
        "keep current",
        describe(resolve_sticky(
            &order,
            tall,
            &space,
            Some(Placement::Bottom),
            &sticky
        ))
    );
}
