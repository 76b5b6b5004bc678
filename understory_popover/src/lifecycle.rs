// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The visibility and timing state machine of one popover.
//!
//! ## Phases
//!
//! ```text
//! Closed           --set_open(true)--> OpeningScheduled
//! OpeningScheduled --enter timer-----> Open
//! OpeningScheduled --set_open(false)-> Closed
//! Open             --set_open(false)-> ClosingScheduled
//! ClosingScheduled --leave timer-----> Closed
//! ClosingScheduled --set_open(true)--> Open
//! ```
//!
//! The owner holds the "requested open" signal and reports every change through
//! [`Popover::set_open`]. Timers and ticks are continuations; each one re-reads the
//! signal when it runs and is dropped if the signal no longer matches the
//! transition it was scheduled for. Requesting the opposite transition cancels the
//! pending timer at once.
//!
//! ## Reveal
//!
//! When the enter timer fires the overlay is shown with the panel hidden. After
//! one tick, two positioning passes run back to back; the first pass measures a
//! panel whose size has not settled yet. Only then is the panel made visible with
//! [`AnimationState::Show`].
//!
//! ## Listeners
//!
//! While the overlay is shown the popover listens to the scroll container, and to
//! window clicks when [`TriggerActions::CLICK`] is configured. Each listener is
//! added once when the overlay is shown and removed once when it is hidden.

use tracing::{debug, trace};

use crate::config::{ConfigError, PopoverConfig, TriggerActions, ValidConfig};
use crate::host::{AnimationState, Host, PanelStyle, TickId, TimerId};
use crate::position::{Advance, PositionLoop};
use crate::trigger::{OpenRequest, TriggerEvent, interpret};

/// Lifecycle phase of a [`Popover`].
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum Phase {
    /// Overlay hidden, nothing pending.
    #[default]
    Closed,
    /// The enter timer is running.
    OpeningScheduled,
    /// Overlay shown.
    Open,
    /// Overlay shown, the leave timer is running.
    ClosingScheduled,
}

impl Phase {
    /// Whether the overlay is shown in this phase.
    pub fn is_shown(self) -> bool {
        matches!(self, Self::Open | Self::ClosingScheduled)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum Reveal {
    /// Waiting for the hidden panel to render.
    Settling(TickId),
    /// Positioning passes left, counting the one in flight.
    Positioning(u8),
}

/// One anchored panel: its timers, style, and listeners.
///
/// A `Popover` is driven entirely by method calls. Every method that can cause
/// an effect takes the [`Host`] that performs it.
#[derive(Clone, Debug)]
pub struct Popover {
    config: ValidConfig,
    requested: bool,
    phase: Phase,
    open_timer: Option<TimerId>,
    close_timer: Option<TimerId>,
    style: PanelStyle,
    positioner: PositionLoop,
    reveal: Option<Reveal>,
    scroll_listener: bool,
    click_listener: bool,
}

impl Popover {
    /// Validate `config` and create a closed popover.
    pub fn new(config: PopoverConfig) -> Result<Self, ConfigError> {
        Ok(Self::with_config(config.validate()?))
    }

    /// Create a closed popover from an already validated configuration.
    pub fn with_config(config: ValidConfig) -> Self {
        Self {
            config,
            requested: false,
            phase: Phase::Closed,
            open_timer: None,
            close_timer: None,
            style: PanelStyle::default(),
            positioner: PositionLoop::default(),
            reveal: None,
            scroll_listener: false,
            click_listener: false,
        }
    }

    /// The configuration this popover runs on.
    pub fn config(&self) -> &ValidConfig {
        &self.config
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The style last pushed to the host.
    pub fn style(&self) -> &PanelStyle {
        &self.style
    }

    /// Current animation class.
    pub fn animation(&self) -> AnimationState {
        self.style.animation
    }

    /// The last value given to [`set_open`](Self::set_open).
    pub fn is_requested(&self) -> bool {
        self.requested
    }

    /// Report the owner's "requested open" signal.
    ///
    /// Repeating the current value does nothing.
    pub fn set_open<H: Host + ?Sized>(&mut self, open: bool, host: &mut H) {
        if open == self.requested {
            return;
        }
        self.requested = open;
        if open {
            self.request_open(host);
        } else {
            self.request_close(host);
        }
    }

    fn request_open<H: Host + ?Sized>(&mut self, host: &mut H) {
        match self.phase {
            Phase::Closed => {
                self.style.visible = false;
                host.apply_style(&self.style);
                self.open_timer = Some(host.schedule_timer(self.config.enter_delay()));
                self.phase = Phase::OpeningScheduled;
                debug!(delay = ?self.config.enter_delay(), "popover opening scheduled");
            }
            Phase::ClosingScheduled => {
                if let Some(id) = self.close_timer.take() {
                    host.cancel_timer(id);
                }
                self.style.animation = AnimationState::Show;
                host.apply_style(&self.style);
                self.phase = Phase::Open;
                debug!("popover close cancelled");
                if !self.style.visible && self.reveal.is_none() {
                    // The reveal was abandoned while closing; run it again.
                    self.begin_reveal(host);
                }
            }
            Phase::OpeningScheduled | Phase::Open => {}
        }
    }

    fn request_close<H: Host + ?Sized>(&mut self, host: &mut H) {
        match self.phase {
            Phase::OpeningScheduled => {
                if let Some(id) = self.open_timer.take() {
                    host.cancel_timer(id);
                }
                self.style.animation = AnimationState::Hide;
                host.apply_style(&self.style);
                self.phase = Phase::Closed;
                debug!("popover opening cancelled");
            }
            Phase::Open => {
                self.style.animation = AnimationState::Hide;
                host.apply_style(&self.style);
                self.close_timer = Some(host.schedule_timer(self.config.leave_delay()));
                self.phase = Phase::ClosingScheduled;
                debug!(delay = ?self.config.leave_delay(), "popover closing scheduled");
            }
            Phase::Closed | Phase::ClosingScheduled => {}
        }
    }

    /// Host callback for a timer scheduled by this popover.
    pub fn handle_timer<H: Host + ?Sized>(&mut self, id: TimerId, host: &mut H) {
        if self.open_timer == Some(id) {
            self.open_timer = None;
            if !self.requested || self.phase != Phase::OpeningScheduled {
                trace!(timer = ?id, "open abandoned: no longer requested");
                return;
            }
            self.open(host);
        } else if self.close_timer == Some(id) {
            self.close_timer = None;
            if self.requested || self.phase != Phase::ClosingScheduled {
                trace!(timer = ?id, "close abandoned: open requested again");
                return;
            }
            self.close(host);
        } else {
            trace!(timer = ?id, "stale timer ignored");
        }
    }

    /// Host callback for a tick requested by this popover.
    pub fn handle_tick<H: Host + ?Sized>(&mut self, tick: TickId, host: &mut H) {
        if self.reveal.is_some() && !self.requested {
            trace!(tick = ?tick, "reveal abandoned: no longer requested");
            self.reveal = None;
            self.positioner.cancel();
            return;
        }
        if self.reveal == Some(Reveal::Settling(tick)) {
            self.reveal = Some(Reveal::Positioning(2));
            let outcome = self.positioner.start(&self.config, &mut self.style, host);
            self.continue_reveal(outcome, host);
            return;
        }
        match self
            .positioner
            .advance(tick, &self.config, &mut self.style, host)
        {
            Advance::Stale => trace!(tick = ?tick, "stale tick ignored"),
            Advance::Waiting => {}
            outcome @ (Advance::Finished | Advance::Skipped) => self.continue_reveal(outcome, host),
        }
    }

    /// Host callback for a scroll of the configured container.
    ///
    /// Repositions a shown panel, superseding any pass in flight.
    pub fn handle_scroll<H: Host + ?Sized>(&mut self, host: &mut H) {
        if !self.phase.is_shown() {
            trace!("scroll ignored: overlay hidden");
            return;
        }
        let outcome = self.positioner.start(&self.config, &mut self.style, host);
        self.continue_reveal(outcome, host);
    }

    /// Interpret an input event under the configured trigger actions.
    ///
    /// The returned request is meant to be applied by the owner, usually by
    /// feeding it back into [`set_open`](Self::set_open).
    pub fn handle_trigger(&self, event: TriggerEvent) -> Option<OpenRequest> {
        let request = interpret(event, self.config.trigger_actions(), self.phase.is_shown());
        if request.is_some() {
            trace!(?event, ?request, "trigger");
        }
        request
    }

    /// Cancel pending timers, drop positioning, and remove listeners.
    ///
    /// For use when the panel's owner goes away. The overlay is left as is.
    pub fn dispose<H: Host + ?Sized>(&mut self, host: &mut H) {
        if let Some(id) = self.open_timer.take() {
            host.cancel_timer(id);
        }
        if let Some(id) = self.close_timer.take() {
            host.cancel_timer(id);
        }
        self.positioner.cancel();
        self.reveal = None;
        self.detach_listeners(host);
        self.requested = false;
        self.phase = Phase::Closed;
        debug!("popover disposed");
    }

    fn open<H: Host + ?Sized>(&mut self, host: &mut H) {
        host.show_overlay();
        self.phase = Phase::Open;
        self.attach_listeners(host);
        debug!("popover opened");
        self.begin_reveal(host);
    }

    fn begin_reveal<H: Host + ?Sized>(&mut self, host: &mut H) {
        let tick = self.positioner.request_tick(host);
        self.reveal = Some(Reveal::Settling(tick));
    }

    fn continue_reveal<H: Host + ?Sized>(&mut self, mut outcome: Advance, host: &mut H) {
        while matches!(outcome, Advance::Finished | Advance::Skipped) {
            let Some(Reveal::Positioning(remaining)) = self.reveal else {
                return;
            };
            if !self.requested {
                trace!("reveal abandoned: no longer requested");
                self.reveal = None;
                self.positioner.cancel();
                return;
            }
            if remaining > 1 {
                self.reveal = Some(Reveal::Positioning(remaining - 1));
                outcome = self.positioner.start(&self.config, &mut self.style, host);
            } else {
                self.reveal = None;
                self.style.visible = true;
                self.style.animation = AnimationState::Show;
                host.apply_style(&self.style);
                debug!(placement = ?self.style.placement, "popover revealed");
                return;
            }
        }
    }

    fn close<H: Host + ?Sized>(&mut self, host: &mut H) {
        host.hide_overlay();
        self.positioner.cancel();
        self.reveal = None;
        self.style = PanelStyle {
            animation: self.style.animation,
            ..PanelStyle::default()
        };
        host.apply_style(&self.style);
        self.detach_listeners(host);
        self.phase = Phase::Closed;
        debug!("popover closed");
    }

    fn attach_listeners<H: Host + ?Sized>(&mut self, host: &mut H) {
        if !self.scroll_listener {
            host.listen_scroll(self.config.scroll_container());
            self.scroll_listener = true;
        }
        if self.config.trigger_actions().contains(TriggerActions::CLICK) && !self.click_listener {
            host.listen_window_click();
            self.click_listener = true;
        }
    }

    fn detach_listeners<H: Host + ?Sized>(&mut self, host: &mut H) {
        if self.scroll_listener {
            host.unlisten_scroll(self.config.scroll_container());
            self.scroll_listener = false;
        }
        if self.click_listener {
            host.unlisten_window_click();
            self.click_listener = false;
        }
    }
}
