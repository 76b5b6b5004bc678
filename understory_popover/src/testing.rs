// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A scripted [`Host`] for unit tests: a virtual clock, a recorded call log, and a
//! panel whose measured size follows the applied max-size caps.

use alloc::collections::VecDeque;
use alloc::vec::Vec;
use core::time::Duration;

use kurbo::{Point, Rect, Size};

use crate::config::ScrollContainer;
use crate::host::{Host, PanelStyle, Part, TickId, TimerId};
use crate::lifecycle::Popover;

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Call {
    ShowOverlay,
    HideOverlay,
    ApplyStyle(PanelStyle),
    ScheduleTimer(TimerId, Duration),
    CancelTimer(TimerId),
    RequestTick(TickId),
    ListenScroll(ScrollContainer),
    UnlistenScroll(ScrollContainer),
    ListenWindowClick,
    UnlistenWindowClick,
}

#[derive(Debug)]
pub(crate) struct ScriptedHost {
    pub(crate) viewport: Size,
    pub(crate) anchor: Option<Rect>,
    pub(crate) container: Option<Rect>,
    /// Natural size of the panel content, before caps.
    pub(crate) content: Size,
    pub(crate) calls: Vec<Call>,
    pub(crate) now: Duration,
    timers: Vec<(TimerId, Duration)>,
    ticks: VecDeque<TickId>,
    next_timer: u64,
    style: PanelStyle,
}

impl ScriptedHost {
    pub(crate) fn new(viewport: Size) -> Self {
        Self {
            viewport,
            anchor: Some(Rect::from_origin_size((100.0, 100.0), (50.0, 20.0))),
            container: None,
            content: Size::new(200.0, 80.0),
            calls: Vec::new(),
            now: Duration::ZERO,
            timers: Vec::new(),
            ticks: VecDeque::new(),
            next_timer: 0,
            style: PanelStyle::default(),
        }
    }

    /// The oldest requested tick.
    pub(crate) fn take_tick(&mut self) -> Option<TickId> {
        self.ticks.pop_front()
    }

    /// Timers scheduled and not yet fired or cancelled.
    pub(crate) fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// The last style the popover rendered.
    pub(crate) fn rendered(&self) -> &PanelStyle {
        &self.style
    }

    pub(crate) fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.calls.iter().filter(|c| pred(c)).count()
    }

    /// Deliver every requested tick, including ticks requested while delivering.
    pub(crate) fn settle(&mut self, popover: &mut Popover) {
        while let Some(tick) = self.take_tick() {
            popover.handle_tick(tick, self);
        }
    }

    /// Move the clock forward, firing due timers in deadline order and settling
    /// ticks after each one.
    pub(crate) fn advance(&mut self, popover: &mut Popover, by: Duration) {
        let until = self.now + by;
        loop {
            let due = self
                .timers
                .iter()
                .enumerate()
                .filter(|(_, (_, at))| *at <= until)
                .min_by_key(|(_, (_, at))| *at)
                .map(|(i, _)| i);
            let Some(index) = due else {
                break;
            };
            let (id, at) = self.timers.remove(index);
            self.now = at;
            popover.handle_timer(id, self);
            self.settle(popover);
        }
        self.now = until;
    }
}

impl Host for ScriptedHost {
    fn measure(&self, part: Part) -> Option<Rect> {
        match part {
            Part::Anchor => self.anchor,
            Part::ScrollContainer => self.container,
            Part::Dialog => {
                let size = Size::new(
                    self.style
                        .max_width
                        .map_or(self.content.width, |w| self.content.width.min(w)),
                    self.style
                        .max_height
                        .map_or(self.content.height, |h| self.content.height.min(h)),
                );
                let origin = self.style.position.unwrap_or(Point::ORIGIN);
                Some(Rect::from_origin_size(origin, size))
            }
        }
    }

    fn viewport(&self) -> Size {
        self.viewport
    }

    fn show_overlay(&mut self) {
        self.calls.push(Call::ShowOverlay);
    }

    fn hide_overlay(&mut self) {
        self.calls.push(Call::HideOverlay);
    }

    fn apply_style(&mut self, style: &PanelStyle) {
        self.style = *style;
        self.calls.push(Call::ApplyStyle(*style));
    }

    fn schedule_timer(&mut self, delay: Duration) -> TimerId {
        self.next_timer += 1;
        let id = TimerId(self.next_timer);
        self.timers.push((id, self.now + delay));
        self.calls.push(Call::ScheduleTimer(id, delay));
        id
    }

    fn cancel_timer(&mut self, id: TimerId) {
        self.timers.retain(|(t, _)| *t != id);
        self.calls.push(Call::CancelTimer(id));
    }

    fn request_tick(&mut self, id: TickId) {
        self.ticks.push_back(id);
        self.calls.push(Call::RequestTick(id));
    }

    fn listen_scroll(&mut self, container: ScrollContainer) {
        self.calls.push(Call::ListenScroll(container));
    }

    fn unlisten_scroll(&mut self, container: ScrollContainer) {
        self.calls.push(Call::UnlistenScroll(container));
    }

    fn listen_window_click(&mut self) {
        self.calls.push(Call::ListenWindowClick);
    }

    fn unlisten_window_click(&mut self) {
        self.calls.push(Call::UnlistenWindowClick);
    }
}
