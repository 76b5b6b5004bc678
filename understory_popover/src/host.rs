// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The host interface: what a popover needs from the toolkit that renders it.
//!
//! ## Overview
//!
//! A [`Popover`](crate::Popover) never touches a real element, timer, or event
//! source. It asks its [`Host`] to measure parts, show or hide the overlay, render
//! a [`PanelStyle`], schedule timers, wait for render ticks, and subscribe to
//! scroll and window-click events. The host reports back by calling
//! [`Popover::handle_timer`](crate::Popover::handle_timer),
//! [`Popover::handle_tick`](crate::Popover::handle_tick), and
//! [`Popover::handle_scroll`](crate::Popover::handle_scroll).
//!
//! ## Ticks
//!
//! A tick is one render/layout settling step. After
//! [`Host::request_tick`] the host must call back with the same [`TickId`] once
//! the last [`Host::apply_style`] is reflected in measurable layout. Callbacks with
//! ids the popover no longer waits for are ignored, so a host does not need to
//! cancel ticks.

use core::time::Duration;

use kurbo::{Point, Rect, Size};
use understory_placement::Placement;

use crate::config::ScrollContainer;

/// Parts of a popover the host can measure.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Part {
    /// The trigger element the panel is attached to.
    Anchor,
    /// The panel content, without the gap reserved between it and the anchor.
    Dialog,
    /// The configured scroll container, when it is an element.
    ScrollContainer,
}

/// Handle of a timer scheduled through [`Host::schedule_timer`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct TimerId(pub u64);

/// Token of a render tick requested through [`Host::request_tick`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct TickId(pub u64);

/// Animation class of the panel.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum AnimationState {
    /// Never opened.
    #[default]
    Initial,
    /// Opened, or opening.
    Show,
    /// Closing, or an opening was cancelled.
    Hide,
}

/// Rectangles an arrow between anchor and panel is drawn from.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ArrowGeometry {
    /// The anchor's visible part inside the bounding container.
    pub anchor: Rect,
    /// The placed panel content.
    pub dialog: Rect,
}

/// Everything the host renders on the panel element.
///
/// Owned by one popover and pushed whole through [`Host::apply_style`] after
/// every change.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct PanelStyle {
    /// Placement marker driving placement-dependent styling; `None` while closed.
    pub placement: Option<Placement>,
    /// Height cap on the panel content for a partially available top/bottom placement.
    pub max_height: Option<f64>,
    /// Width cap on the panel for a partially available left/right placement.
    pub max_width: Option<f64>,
    /// Viewport position of the panel frame's top-left corner.
    ///
    /// The frame is the content plus the reserved gap on the side facing the anchor.
    pub position: Option<Point>,
    /// Whether the panel is visible; kept false while it is being measured.
    pub visible: bool,
    /// Animation class.
    pub animation: AnimationState,
    /// Arrow geometry, filled after positioning when an arrow is configured.
    pub arrow: Option<ArrowGeometry>,
}

/// Services a popover consumes from its toolkit.
pub trait Host {
    /// Bounding rectangle of `part` in viewport coordinates, or `None` if it is not mounted.
    fn measure(&self, part: Part) -> Option<Rect>;

    /// Size of the top-level viewport.
    fn viewport(&self) -> Size;

    /// Show the overlay element. Must be idempotent.
    fn show_overlay(&mut self);

    /// Hide the overlay element. Must be idempotent.
    fn hide_overlay(&mut self);

    /// Render `style` on the panel.
    fn apply_style(&mut self, style: &PanelStyle);

    /// Schedule a single-shot timer; the host later calls
    /// [`Popover::handle_timer`](crate::Popover::handle_timer) with the returned id.
    fn schedule_timer(&mut self, delay: Duration) -> TimerId;

    /// Cancel a timer. Unknown or already fired ids are ignored.
    fn cancel_timer(&mut self, id: TimerId);

    /// Call [`Popover::handle_tick`](crate::Popover::handle_tick) with `id` after the
    /// next layout settles.
    fn request_tick(&mut self, id: TickId);

    /// Start delivering scroll events of `container` to
    /// [`Popover::handle_scroll`](crate::Popover::handle_scroll).
    fn listen_scroll(&mut self, container: ScrollContainer);

    /// Stop delivering scroll events of `container`.
    fn unlisten_scroll(&mut self, container: ScrollContainer);

    /// Start delivering window clicks to
    /// [`Popover::handle_trigger`](crate::Popover::handle_trigger).
    fn listen_window_click(&mut self);

    /// Stop delivering window clicks.
    fn unlisten_window_click(&mut self);
}
