// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drive a popover with a virtual clock.
//!
//! The host here prints every effect the popover asks for. Three scripted
//! interactions run in order: a hover that opens and then closes the panel,
//! a hover that leaves before the enter delay (the open is abandoned), and a
//! scroll that moves the anchor to the bottom edge while the panel is shown.
//!
//! Run:
//! - `cargo run -p understory_demos --example popover_lifecycle`
//! - `RUST_LOG=understory_popover=trace cargo run -p understory_demos --example popover_lifecycle`

use std::collections::VecDeque;
use std::time::Duration;

use kurbo::{Rect, Size};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;
use understory_popover::{
    EventTarget, Host, OpenRequest, PanelStyle, Part, Popover, PopoverConfig, ScrollContainer,
    TickId, TimerId, TriggerEvent,
};

struct VirtualHost {
    now: Duration,
    anchor: Rect,
    content: Size,
    style: PanelStyle,
    timers: Vec<(TimerId, Duration)>,
    ticks: VecDeque<TickId>,
    next_timer: u64,
}

impl VirtualHost {
    fn new() -> Self {
        Self {
            now: Duration::ZERO,
            anchor: Rect::from_origin_size((100.0, 100.0), (50.0, 20.0)),
            content: Size::new(200.0, 80.0),
            style: PanelStyle::default(),
            timers: Vec::new(),
            ticks: VecDeque::new(),
            next_timer: 0,
        }
    }

    fn log(&self, what: impl std::fmt::Display) {
        println!("[{:>4}ms] {what}", self.now.as_millis());
    }

    fn settle(&mut self, popover: &mut Popover) {
        while let Some(tick) = self.ticks.pop_front() {
            popover.handle_tick(tick, self);
        }
    }

    fn advance(&mut self, popover: &mut Popover, by: Duration) {
        let until = self.now + by;
        while let Some(index) = self
            .timers
            .iter()
            .enumerate()
            .filter(|(_, (_, at))| *at <= until)
            .min_by_key(|(_, (_, at))| *at)
            .map(|(i, _)| i)
        {
            let (id, at) = self.timers.remove(index);
            self.now = at;
            popover.handle_timer(id, self);
            self.settle(popover);
        }
        self.now = until;
    }

    /// Route a trigger event through the popover and apply its request.
    fn trigger(&mut self, popover: &mut Popover, event: TriggerEvent) {
        self.log(format_args!("event {event:?}"));
        match popover.handle_trigger(event) {
            Some(OpenRequest::Open) => popover.set_open(true, self),
            Some(OpenRequest::Close) => popover.set_open(false, self),
            None => {}
        }
    }
}

impl Host for VirtualHost {
    fn measure(&self, part: Part) -> Option<Rect> {
        match part {
            Part::Anchor => Some(self.anchor),
            Part::Dialog => {
                let height = self
                    .style
                    .max_height
                    .map_or(self.content.height, |h| self.content.height.min(h));
                Some(Rect::from_origin_size(
                    (0.0, 0.0),
                    (self.content.width, height),
                ))
            }
            Part::ScrollContainer => None,
        }
    }

    fn viewport(&self) -> Size {
        Size::new(400.0, 300.0)
    }

    fn show_overlay(&mut self) {
        self.log("show overlay");
    }

    fn hide_overlay(&mut self) {
        self.log("hide overlay");
    }

    fn apply_style(&mut self, style: &PanelStyle) {
        if style.visible && !self.style.visible {
            self.log(format_args!(
                "panel visible: {:?} at {:?}",
                style.placement, style.position
            ));
        }
        self.style = *style;
    }

    fn schedule_timer(&mut self, delay: Duration) -> TimerId {
        self.next_timer += 1;
        let id = TimerId(self.next_timer);
        self.timers.push((id, self.now + delay));
        self.log(format_args!("timer {} in {}ms", id.0, delay.as_millis()));
        id
    }

    fn cancel_timer(&mut self, id: TimerId) {
        self.timers.retain(|(t, _)| *t != id);
        self.log(format_args!("timer {} cancelled", id.0));
    }

    fn request_tick(&mut self, id: TickId) {
        self.ticks.push_back(id);
    }

    fn listen_scroll(&mut self, container: ScrollContainer) {
        self.log(format_args!("listen scroll on {container:?}"));
    }

    fn unlisten_scroll(&mut self, container: ScrollContainer) {
        self.log(format_args!("unlisten scroll on {container:?}"));
    }

    fn listen_window_click(&mut self) {
        self.log("listen window click");
    }

    fn unlisten_window_click(&mut self) {
        self.log("unlisten window click");
    }
}

fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().without_time())
        .try_init()
        .ok();

    let mut host = VirtualHost::new();
    let mut popover = match Popover::new(PopoverConfig::default()) {
        Ok(popover) => popover,
        Err(err) => {
            eprintln!("bad config: {err}");
            return;
        }
    };
    let ms = Duration::from_millis;

    println!("-- hover, wait, leave");
    host.trigger(&mut popover, TriggerEvent::PointerEnter(EventTarget::Anchor));
    host.advance(&mut popover, ms(120));
    host.trigger(
        &mut popover,
        TriggerEvent::PointerLeave {
            from: EventTarget::Anchor,
            to: EventTarget::Panel,
        },
    );
    host.trigger(
        &mut popover,
        TriggerEvent::PointerLeave {
            from: EventTarget::Panel,
            to: EventTarget::Outside,
        },
    );
    host.advance(&mut popover, ms(200));
    println!("phase: {:?}", popover.phase());

    println!("-- hover shorter than the enter delay");
    host.trigger(&mut popover, TriggerEvent::PointerEnter(EventTarget::Anchor));
    host.advance(&mut popover, ms(50));
    host.trigger(
        &mut popover,
        TriggerEvent::PointerLeave {
            from: EventTarget::Anchor,
            to: EventTarget::Outside,
        },
    );
    host.advance(&mut popover, ms(200));
    println!("phase: {:?}", popover.phase());

    println!("-- scroll the anchor to the bottom edge");
    host.trigger(&mut popover, TriggerEvent::FocusIn(EventTarget::Anchor));
    host.advance(&mut popover, ms(100));
    host.anchor = Rect::from_origin_size((100.0, 250.0), (50.0, 20.0));
    popover.handle_scroll(&mut host);
    host.settle(&mut popover);
    host.log(format_args!(
        "after scroll: {:?} at {:?}",
        popover.style().placement,
        popover.style().position
    ));
    popover.dispose(&mut host);
}
