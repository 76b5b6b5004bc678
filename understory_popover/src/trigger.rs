// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trigger interpretation: which input events ask a popover to open or close.
//!
//! ## Overview
//!
//! The host reports pointer, focus, and click events in terms of the popover's two
//! parts, as an [`EventTarget`]. [`interpret`] filters them through the configured
//! [`TriggerActions`] and yields an [`OpenRequest`] or nothing.
//!
//! Requests are not applied directly. The owner of the popover keeps the
//! "requested open" signal and feeds it back through
//! [`Popover::set_open`](crate::Popover::set_open), so application state such as a
//! controlled `open` flag stays the single source of truth.
//!
//! Moving between the anchor and the panel never closes: a leave event whose
//! destination is the other part is ignored. This is what lets the pointer cross
//! the gap from anchor to panel.
//!
//! ```
//! use understory_popover::{EventTarget, OpenRequest, TriggerActions, TriggerEvent, interpret};
//!
//! let hover = TriggerActions::HOVER;
//! let leave = TriggerEvent::PointerLeave { from: EventTarget::Anchor, to: EventTarget::Panel };
//! assert_eq!(interpret(leave, hover, true), None);
//!
//! let leave = TriggerEvent::PointerLeave { from: EventTarget::Panel, to: EventTarget::Outside };
//! assert_eq!(interpret(leave, hover, true), Some(OpenRequest::Close));
//! ```

use crate::config::TriggerActions;

/// Where an input event happened, relative to a popover.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum EventTarget {
    /// Inside the anchor element.
    Anchor,
    /// Inside the panel, including the gap reserved next to the anchor.
    Panel,
    /// Anywhere else.
    Outside,
}

impl EventTarget {
    fn is_part(self) -> bool {
        !matches!(self, Self::Outside)
    }
}

/// An input event, as seen by one popover.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum TriggerEvent {
    /// The pointer entered `0`.
    PointerEnter(EventTarget),
    /// The pointer left `from` for `to`.
    PointerLeave {
        /// Part the pointer left.
        from: EventTarget,
        /// Where the pointer went.
        to: EventTarget,
    },
    /// Focus moved into `0`.
    FocusIn(EventTarget),
    /// Focus left `from` for `to`.
    FocusOut {
        /// Part that lost focus.
        from: EventTarget,
        /// Where focus went.
        to: EventTarget,
    },
    /// A click on `0`, delivered by the part itself.
    Click(EventTarget),
    /// A click anywhere in the window, delivered by the window-click listener.
    WindowClick(EventTarget),
}

/// What a trigger event asks of the popover's owner.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum OpenRequest {
    /// Set the requested-open signal.
    Open,
    /// Clear the requested-open signal.
    Close,
}

/// Map `event` to a request under `actions`.
///
/// `is_open` tells whether the panel is currently shown; outside clicks only
/// close a shown panel.
pub fn interpret(event: TriggerEvent, actions: TriggerActions, is_open: bool) -> Option<OpenRequest> {
    match event {
        TriggerEvent::PointerEnter(target) if actions.contains(TriggerActions::HOVER) => {
            target.is_part().then_some(OpenRequest::Open)
        }
        TriggerEvent::PointerLeave { from, to } if actions.contains(TriggerActions::HOVER) => {
            leave(from, to)
        }
        TriggerEvent::FocusIn(EventTarget::Anchor) if actions.contains(TriggerActions::FOCUS) => {
            Some(OpenRequest::Open)
        }
        TriggerEvent::FocusOut { from, to } if actions.contains(TriggerActions::FOCUS) => {
            leave(from, to)
        }
        TriggerEvent::Click(EventTarget::Anchor) if actions.contains(TriggerActions::CLICK) => {
            Some(OpenRequest::Open)
        }
        TriggerEvent::WindowClick(EventTarget::Outside)
            if is_open && actions.contains(TriggerActions::CLICK) =>
        {
            Some(OpenRequest::Close)
        }
        _ => None,
    }
}

fn leave(from: EventTarget, to: EventTarget) -> Option<OpenRequest> {
    // Anchor to panel, panel to anchor, and moves within one part keep it open.
    (from.is_part() && !to.is_part()).then_some(OpenRequest::Close)
}

#[cfg(test)]
mod tests {
    use super::*;
    use EventTarget::{Anchor, Outside, Panel};

    const ALL: TriggerActions = TriggerActions::all();

    #[test]
    fn hover_enter_and_leave() {
        let hover = TriggerActions::HOVER;
        assert_eq!(
            interpret(TriggerEvent::PointerEnter(Anchor), hover, false),
            Some(OpenRequest::Open)
        );
        assert_eq!(
            interpret(TriggerEvent::PointerEnter(Panel), hover, true),
            Some(OpenRequest::Open)
        );
        assert_eq!(
            interpret(TriggerEvent::PointerEnter(Outside), hover, true),
            None
        );
        assert_eq!(
            interpret(
                TriggerEvent::PointerLeave {
                    from: Anchor,
                    to: Outside
                },
                hover,
                true
            ),
            Some(OpenRequest::Close)
        );
        assert_eq!(
            interpret(
                TriggerEvent::PointerLeave {
                    from: Panel,
                    to: Anchor
                },
                hover,
                true
            ),
            None
        );
    }

    #[test]
    fn focus_follows_anchor_and_panel() {
        let focus = TriggerActions::FOCUS;
        assert_eq!(
            interpret(TriggerEvent::FocusIn(Anchor), focus, false),
            Some(OpenRequest::Open)
        );
        assert_eq!(interpret(TriggerEvent::FocusIn(Panel), focus, true), None);
        assert_eq!(
            interpret(
                TriggerEvent::FocusOut {
                    from: Anchor,
                    to: Panel
                },
                focus,
                true
            ),
            None
        );
        assert_eq!(
            interpret(
                TriggerEvent::FocusOut {
                    from: Panel,
                    to: Outside
                },
                focus,
                true
            ),
            Some(OpenRequest::Close)
        );
    }

    #[test]
    fn click_opens_and_outside_click_closes() {
        let click = TriggerActions::CLICK;
        assert_eq!(
            interpret(TriggerEvent::Click(Anchor), click, false),
            Some(OpenRequest::Open)
        );
        assert_eq!(interpret(TriggerEvent::Click(Panel), click, true), None);
        assert_eq!(
            interpret(TriggerEvent::WindowClick(Outside), click, true),
            Some(OpenRequest::Close)
        );
        assert_eq!(
            interpret(TriggerEvent::WindowClick(Panel), click, true),
            None
        );
        assert_eq!(
            interpret(TriggerEvent::WindowClick(Outside), click, false),
            None
        );
    }

    #[test]
    fn unconfigured_actions_are_ignored() {
        let focus = TriggerActions::FOCUS;
        assert_eq!(interpret(TriggerEvent::PointerEnter(Anchor), focus, false), None);
        assert_eq!(interpret(TriggerEvent::Click(Anchor), focus, false), None);
        assert_eq!(
            interpret(TriggerEvent::WindowClick(Outside), focus, true),
            None
        );
        assert_eq!(
            interpret(TriggerEvent::PointerEnter(Anchor), TriggerActions::empty(), false),
            None
        );
        assert_eq!(
            interpret(TriggerEvent::Click(Anchor), ALL, false),
            Some(OpenRequest::Open)
        );
    }
}
