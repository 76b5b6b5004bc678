// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_popover --heading-base-level=0

//! Understory Popover: the lifecycle of an anchored floating panel.
//!
//! ## Overview
//!
//! A [`Popover`] decides when a tooltip-like panel opens and closes and keeps it
//! placed next to its anchor while it is shown. Placement itself is resolved by
//! `understory_placement`; this crate adds timing, a hidden-first reveal, and
//! scroll tracking.
//!
//! The crate does no I/O. Everything it needs from the toolkit goes through the
//! [`Host`] trait: measuring the anchor and panel, rendering a [`PanelStyle`],
//! scheduling timers, and waiting for layout to settle. The host calls back into
//! the popover when a timer fires, when a requested tick has settled, and when
//! the scroll container scrolls.
//!
//! ## Race discipline
//!
//! The "requested open" signal belongs to the popover's owner and may change at
//! any time. Every continuation (timer, tick) re-reads it and is dropped when it
//! no longer matches. Requesting the opposite transition cancels the pending
//! timer immediately, and a new positioning pass supersedes the one in flight.
//!
//! ## Triggers
//!
//! [`Popover::handle_trigger`] maps pointer, focus, and click events to an
//! [`OpenRequest`] according to the configured [`TriggerActions`]. The owner
//! applies the request, typically by calling [`Popover::set_open`].
//!
//! ## Example
//!
//! ```
//! use core::time::Duration;
//! use kurbo::{Rect, Size};
//! use understory_popover::{
//!     Host, PanelStyle, Part, Phase, Popover, PopoverConfig, ScrollContainer, TickId, TimerId,
//! };
//!
//! #[derive(Default)]
//! struct Immediate {
//!     ticks: Vec<TickId>,
//!     timers: Vec<TimerId>,
//!     style: PanelStyle,
//! }
//!
//! impl Host for Immediate {
//!     fn measure(&self, part: Part) -> Option<Rect> {
//!         Some(match part {
//!             Part::Anchor => Rect::new(100.0, 100.0, 150.0, 120.0),
//!             _ => Rect::new(0.0, 0.0, 200.0, 80.0),
//!         })
//!     }
//!     fn viewport(&self) -> Size {
//!         Size::new(400.0, 300.0)
//!     }
//!     fn show_overlay(&mut self) {}
//!     fn hide_overlay(&mut self) {}
//!     fn apply_style(&mut self, style: &PanelStyle) {
//!         self.style = *style;
//!     }
//!     fn schedule_timer(&mut self, _delay: Duration) -> TimerId {
//!         let id = TimerId(self.timers.len() as u64);
//!         self.timers.push(id);
//!         id
//!     }
//!     fn cancel_timer(&mut self, _id: TimerId) {}
//!     fn request_tick(&mut self, id: TickId) {
//!         self.ticks.push(id);
//!     }
//!     fn listen_scroll(&mut self, _container: ScrollContainer) {}
//!     fn unlisten_scroll(&mut self, _container: ScrollContainer) {}
//!     fn listen_window_click(&mut self) {}
//!     fn unlisten_window_click(&mut self) {}
//! }
//!
//! let mut host = Immediate::default();
//! let mut popover = Popover::new(PopoverConfig::default()).unwrap();
//! popover.set_open(true, &mut host);
//! assert_eq!(popover.phase(), Phase::OpeningScheduled);
//!
//! // The enter delay elapses.
//! let timer = host.timers.pop().unwrap();
//! popover.handle_timer(timer, &mut host);
//! // Layout settles, one tick at a time.
//! while let Some(tick) = host.ticks.pop() {
//!     popover.handle_tick(tick, &mut host);
//! }
//! assert_eq!(popover.phase(), Phase::Open);
//! assert!(host.style.visible);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod config;
pub mod host;
pub mod lifecycle;
pub mod trigger;

mod position;

#[cfg(test)]
mod testing;

pub use config::{ConfigError, PopoverConfig, ScrollContainer, TriggerActions, ValidConfig};
pub use host::{AnimationState, ArrowGeometry, Host, PanelStyle, Part, TickId, TimerId};
pub use lifecycle::{Phase, Popover};
pub use trigger::{EventTarget, OpenRequest, TriggerEvent, interpret};
