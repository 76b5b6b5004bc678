// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Position application loop.
//!
//! ## Overview
//!
//! One positioning pass runs in stages separated by render ticks, because every
//! style change must reach layout before the next measurement can be trusted:
//!
//! 1. Clear the max-size overrides, then wait a tick.
//! 2. Measure and run the configured search. On a partial fit, cap the panel to the
//!    available size along the placement's axis and wait a tick.
//! 3. Set the placement marker, then wait a tick.
//! 4. Measure the finalized panel and write its position.
//! 5. With an arrow configured, wait a tick, then record the visible anchor and
//!    the placed panel rectangles for drawing the arrow.
//!
//! A pass is skipped, with no change to the placement, when the anchor, dialog,
//! or an element scroll container cannot be measured. Non-finite measurements
//! count as unmeasurable.
//! Starting a pass while one is in flight supersedes it: the old pass's pending
//! tick becomes stale and is ignored.

use kurbo::{Rect, Size};
use tracing::trace;
use understory_placement::{AnchorSpace, Availability, Axis, geometry, offset, resolve};

use crate::config::{ScrollContainer, ValidConfig};
use crate::host::{ArrowGeometry, Host, PanelStyle, Part, TickId};

/// Result of starting or advancing a pass.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum Advance {
    /// The tick belongs to no pass in flight.
    Stale,
    /// Waiting for the requested tick.
    Waiting,
    /// The pass wrote a position.
    Finished,
    /// A part could not be measured; the pass ended without a position.
    Skipped,
}

#[derive(Copy, Clone, Debug, PartialEq)]
enum Stage {
    Cleared,
    Constrained(Availability),
    Placed(Availability),
    Positioned,
}

#[derive(Copy, Clone, Debug, PartialEq)]
struct Pass {
    stage: Stage,
    tick: TickId,
}

/// Geometry sampled at one stage of a pass.
#[derive(Copy, Clone, Debug)]
struct Measured {
    anchor: Rect,
    dialog: Rect,
    viewport: Size,
    bounds: Rect,
}

fn measure_part<H: Host + ?Sized>(host: &H, part: Part) -> Option<Rect> {
    host.measure(part).filter(|r| r.is_finite())
}

fn measure<H: Host + ?Sized>(config: &ValidConfig, host: &H) -> Option<Measured> {
    let anchor = measure_part(host, Part::Anchor)?;
    let dialog = measure_part(host, Part::Dialog)?;
    let viewport = Some(host.viewport()).filter(|v| v.is_finite())?;
    let container = match config.scroll_container() {
        ScrollContainer::Document => None,
        ScrollContainer::Element => Some(measure_part(host, Part::ScrollContainer)?),
    };
    Some(Measured {
        anchor,
        dialog,
        viewport,
        bounds: geometry::bounding_rect(viewport, container),
    })
}

/// Drives positioning passes for one popover and hands out its tick tokens.
#[derive(Clone, Debug, Default)]
pub(crate) struct PositionLoop {
    pass: Option<Pass>,
    next_tick: u64,
}

impl PositionLoop {
    #[cfg(test)]
    pub(crate) fn is_running(&self) -> bool {
        self.pass.is_some()
    }

    /// Drop the pass in flight, if any.
    pub(crate) fn cancel(&mut self) {
        self.pass = None;
    }

    /// Allocate a fresh tick token and ask the host for it.
    pub(crate) fn request_tick<H: Host + ?Sized>(&mut self, host: &mut H) -> TickId {
        self.next_tick += 1;
        let id = TickId(self.next_tick);
        host.request_tick(id);
        id
    }

    /// Begin a pass, superseding any pass in flight.
    pub(crate) fn start<H: Host + ?Sized>(
        &mut self,
        config: &ValidConfig,
        style: &mut PanelStyle,
        host: &mut H,
    ) -> Advance {
        if let Some(old) = self.pass.take() {
            trace!(tick = ?old.tick, "positioning pass superseded");
        }
        if host.measure(Part::Anchor).is_none() || host.measure(Part::Dialog).is_none() {
            trace!("positioning skipped: anchor or dialog not mounted");
            return Advance::Skipped;
        }
        style.max_height = None;
        style.max_width = None;
        host.apply_style(style);
        self.wait(Stage::Cleared, host)
    }

    /// Deliver a tick; only the tick of the pass in flight advances it.
    pub(crate) fn advance<H: Host + ?Sized>(
        &mut self,
        tick: TickId,
        config: &ValidConfig,
        style: &mut PanelStyle,
        host: &mut H,
    ) -> Advance {
        let Some(pass) = self.pass else {
            return Advance::Stale;
        };
        if pass.tick != tick {
            return Advance::Stale;
        }
        self.pass = None;
        match pass.stage {
            Stage::Cleared => {
                let Some(m) = measure(config, host) else {
                    trace!("positioning skipped: measurement unavailable");
                    return Advance::Skipped;
                };
                let space = AnchorSpace::new(m.anchor, m.bounds, config.dialog_offset());
                let availability = resolve(
                    config.strategy(),
                    config.order(),
                    m.dialog.size(),
                    &space,
                    style.placement,
                );
                trace!(?availability, "placement resolved");
                match availability {
                    Availability::PartiallyAvailable {
                        placement,
                        available_size,
                    } => {
                        // The search already subtracted the gap from the room.
                        match placement.axis() {
                            Axis::Vertical => style.max_height = Some(available_size),
                            Axis::Horizontal => style.max_width = Some(available_size),
                        }
                        host.apply_style(style);
                        self.wait(Stage::Constrained(availability), host)
                    }
                    Availability::FullyAvailable { .. } => self.place(availability, style, host),
                }
            }
            Stage::Constrained(availability) => self.place(availability, style, host),
            Stage::Placed(availability) => {
                let Some(m) = measure(config, host) else {
                    trace!("positioning skipped: measurement unavailable");
                    return Advance::Skipped;
                };
                let placement = availability.placement();
                let frame = placement.axis().grow(m.dialog.size(), config.dialog_offset());
                let origin = offset::position_for(placement, m.anchor, frame, m.viewport);
                style.position = Some(origin);
                host.apply_style(style);
                if config.arrow() {
                    self.wait(Stage::Positioned, host)
                } else {
                    Advance::Finished
                }
            }
            Stage::Positioned => {
                // The position is already written; a missing part only loses the arrow.
                if let Some(m) = measure(config, host) {
                    style.arrow = Some(ArrowGeometry {
                        anchor: geometry::visible_bounds(m.anchor, m.bounds),
                        dialog: m.dialog,
                    });
                    host.apply_style(style);
                } else {
                    trace!("arrow geometry skipped: measurement unavailable");
                }
                Advance::Finished
            }
        }
    }

    fn place<H: Host + ?Sized>(
        &mut self,
        availability: Availability,
        style: &mut PanelStyle,
        host: &mut H,
    ) -> Advance {
        style.placement = Some(availability.placement());
        host.apply_style(style);
        self.wait(Stage::Placed(availability), host)
    }

    fn wait<H: Host + ?Sized>(&mut self, stage: Stage, host: &mut H) -> Advance {
        let tick = self.request_tick(host);
        self.pass = Some(Pass { stage, tick });
        Advance::Waiting
    }
}
