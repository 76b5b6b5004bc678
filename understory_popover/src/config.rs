// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Construction-time configuration and its validation.
//!
//! [`PopoverConfig`] is a plain struct with defaults matching common tooltip
//! behaviour. [`PopoverConfig::validate`] checks it once and yields a
//! [`ValidConfig`], which is what a [`Popover`](crate::Popover) runs on.
//!
//! ```
//! use core::time::Duration;
//! use understory_placement::Placement;
//! use understory_popover::{PopoverConfig, TriggerActions};
//!
//! let config = PopoverConfig::default()
//!     .with_preferred_placement(Placement::Right)
//!     .with_trigger_actions(TriggerActions::CLICK)
//!     .with_enter_delay(Duration::ZERO)
//!     .validate()
//!     .unwrap();
//! assert_eq!(config.order().as_slice()[1], Placement::Left);
//! ```

use alloc::vec::Vec;
use core::time::Duration;

use understory_placement::{Axis, EmptyOrderError, Placement, PlacementOrder, PlacementStrategy};

bitflags::bitflags! {
    /// Input events that open and close a popover.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct TriggerActions: u8 {
        /// Pointer entering/leaving the anchor or panel.
        const HOVER = 0b0000_0001;
        /// Focus entering/leaving the anchor or panel.
        const FOCUS = 0b0000_0010;
        /// Clicking the anchor opens; clicking outside closes.
        const CLICK = 0b0000_0100;
    }
}

impl Default for TriggerActions {
    fn default() -> Self {
        Self::HOVER | Self::FOCUS
    }
}

/// The container whose scrolling repositions an open panel and whose edges bound it.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum ScrollContainer {
    /// The top-level document; the panel is bounded by the viewport.
    #[default]
    Document,
    /// A scrollable element, measured as [`Part::ScrollContainer`](crate::Part::ScrollContainer).
    Element,
}

/// Configuration errors reported by [`PopoverConfig::validate`].
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// An explicit placement order with no entries.
    #[error("invalid placement order: {0}")]
    EmptyPlacementOrder(#[from] EmptyOrderError),
    /// A negative or non-finite dialog offset.
    #[error("dialog offset must be finite and non-negative, got {0}")]
    InvalidOffset(f64),
    /// A negative or non-finite size bound.
    #[error("size bound `{name}` must be finite and non-negative, got {value}")]
    InvalidBound {
        /// Which bound.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// A minimum larger than the maximum on the same axis.
    #[error("minimum {axis:?} size {min} exceeds maximum {max}")]
    InvertedBounds {
        /// Axis of the offending pair.
        axis: Axis,
        /// Configured minimum.
        min: f64,
        /// Configured maximum.
        max: f64,
    },
}

/// Popover configuration as supplied by the caller.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct PopoverConfig {
    /// First candidate, and the seed of the default fallback order.
    pub preferred_placement: Placement,
    /// Explicit candidate order, replacing the fallback order derived from
    /// [`preferred_placement`](Self::preferred_placement).
    #[cfg_attr(feature = "serde", serde(rename = "orderOfPlacementsToBeTried"))]
    pub placement_order: Option<Vec<Placement>>,
    /// Search run on every positioning pass.
    #[cfg_attr(feature = "serde", serde(rename = "placementStrategy"))]
    pub strategy: PlacementStrategy,
    /// Input events that open and close the panel.
    pub trigger_actions: TriggerActions,
    /// Gap in pixels kept between anchor and panel.
    pub dialog_offset: f64,
    /// Delay before opening.
    #[cfg_attr(feature = "serde", serde(with = "millis"))]
    pub enter_delay: Duration,
    /// Delay before closing.
    #[cfg_attr(feature = "serde", serde(with = "millis"))]
    pub leave_delay: Duration,
    /// Scroll-tracking and bounding container.
    #[cfg_attr(feature = "serde", serde(rename = "scrollableContainer"))]
    pub scroll_container: ScrollContainer,
    /// Measure arrow geometry after every positioning pass.
    pub arrow: bool,
}

impl Default for PopoverConfig {
    fn default() -> Self {
        Self {
            preferred_placement: Placement::BottomStart,
            placement_order: None,
            strategy: PlacementStrategy::Default,
            trigger_actions: TriggerActions::default(),
            dialog_offset: 5.0,
            enter_delay: Duration::from_millis(100),
            leave_delay: Duration::from_millis(150),
            scroll_container: ScrollContainer::Document,
            arrow: false,
        }
    }
}

impl PopoverConfig {
    /// Set the preferred placement.
    pub fn with_preferred_placement(mut self, placement: Placement) -> Self {
        self.preferred_placement = placement;
        self
    }

    /// Set an explicit candidate order.
    pub fn with_placement_order(mut self, order: impl IntoIterator<Item = Placement>) -> Self {
        self.placement_order = Some(order.into_iter().collect());
        self
    }

    /// Set the placement strategy.
    pub fn with_strategy(mut self, strategy: PlacementStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Set the trigger actions.
    pub fn with_trigger_actions(mut self, actions: TriggerActions) -> Self {
        self.trigger_actions = actions;
        self
    }

    /// Set the gap between anchor and panel.
    pub fn with_dialog_offset(mut self, offset: f64) -> Self {
        self.dialog_offset = offset;
        self
    }

    /// Set the open delay.
    pub fn with_enter_delay(mut self, delay: Duration) -> Self {
        self.enter_delay = delay;
        self
    }

    /// Set the close delay.
    pub fn with_leave_delay(mut self, delay: Duration) -> Self {
        self.leave_delay = delay;
        self
    }

    /// Set the scroll container.
    pub fn with_scroll_container(mut self, container: ScrollContainer) -> Self {
        self.scroll_container = container;
        self
    }

    /// Enable arrow geometry.
    pub fn with_arrow(mut self, arrow: bool) -> Self {
        self.arrow = arrow;
        self
    }

    /// Check the configuration and resolve the candidate order.
    pub fn validate(self) -> Result<ValidConfig, ConfigError> {
        if !self.dialog_offset.is_finite() || self.dialog_offset < 0.0 {
            return Err(ConfigError::InvalidOffset(self.dialog_offset));
        }
        if let PlacementStrategy::KeepCurrent(bounds) = &self.strategy {
            let named = [
                ("minHeight", bounds.min_height),
                ("maxHeight", bounds.max_height),
                ("minWidth", bounds.min_width),
                ("maxWidth", bounds.max_width),
            ];
            for (name, value) in named {
                if let Some(value) = value
                    && (!value.is_finite() || value < 0.0)
                {
                    return Err(ConfigError::InvalidBound { name, value });
                }
            }
            for axis in [Axis::Vertical, Axis::Horizontal] {
                if let (Some(min), Some(max)) = (bounds.min_on(axis), bounds.max_on(axis))
                    && min > max
                {
                    return Err(ConfigError::InvertedBounds { axis, min, max });
                }
            }
        }
        let order = match self.placement_order {
            Some(list) => PlacementOrder::try_from(list)?,
            None => PlacementOrder::fallback_for(self.preferred_placement),
        };
        Ok(ValidConfig {
            order,
            strategy: self.strategy,
            trigger_actions: self.trigger_actions,
            dialog_offset: self.dialog_offset,
            enter_delay: self.enter_delay,
            leave_delay: self.leave_delay,
            scroll_container: self.scroll_container,
            arrow: self.arrow,
        })
    }
}

/// A checked configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct ValidConfig {
    order: PlacementOrder,
    strategy: PlacementStrategy,
    trigger_actions: TriggerActions,
    dialog_offset: f64,
    enter_delay: Duration,
    leave_delay: Duration,
    scroll_container: ScrollContainer,
    arrow: bool,
}

impl ValidConfig {
    /// Candidates in search order.
    pub fn order(&self) -> &PlacementOrder {
        &self.order
    }

    /// Placement strategy.
    pub fn strategy(&self) -> &PlacementStrategy {
        &self.strategy
    }

    /// Trigger actions.
    pub fn trigger_actions(&self) -> TriggerActions {
        self.trigger_actions
    }

    /// Gap between anchor and panel.
    pub fn dialog_offset(&self) -> f64 {
        self.dialog_offset
    }

    /// Open delay.
    pub fn enter_delay(&self) -> Duration {
        self.enter_delay
    }

    /// Close delay.
    pub fn leave_delay(&self) -> Duration {
        self.leave_delay
    }

    /// Scroll container.
    pub fn scroll_container(&self) -> ScrollContainer {
        self.scroll_container
    }

    /// Whether arrow geometry is measured.
    pub fn arrow(&self) -> bool {
        self.arrow
    }
}

#[cfg(feature = "serde")]
mod millis {
    use core::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub(super) fn serialize<S: Serializer>(delay: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u64(u64::try_from(delay.as_millis()).unwrap_or(u64::MAX))
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        u64::deserialize(d).map(Duration::from_millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use understory_placement::SizeBounds;

    #[test]
    fn defaults_validate() {
        let config = PopoverConfig::default().validate().unwrap();
        assert_eq!(
            config.order().as_slice(),
            &[
                Placement::BottomStart,
                Placement::TopStart,
                Placement::Left,
                Placement::Right
            ]
        );
        assert_eq!(config.enter_delay(), Duration::from_millis(100));
        assert_eq!(config.leave_delay(), Duration::from_millis(150));
        assert_eq!(
            config.trigger_actions(),
            TriggerActions::HOVER | TriggerActions::FOCUS
        );
        assert_eq!(config.scroll_container(), ScrollContainer::Document);
        assert!(!config.arrow());
    }

    #[test]
    fn explicit_order_overrides_fallback() {
        let config = PopoverConfig::default()
            .with_preferred_placement(Placement::Top)
            .with_placement_order([Placement::Left, Placement::Top])
            .validate()
            .unwrap();
        assert_eq!(config.order().as_slice(), &[Placement::Left, Placement::Top]);
    }

    #[test]
    fn empty_order_is_rejected() {
        let err = PopoverConfig::default()
            .with_placement_order(Vec::<Placement>::new())
            .validate()
            .unwrap_err();
        assert_eq!(err, ConfigError::EmptyPlacementOrder(EmptyOrderError));
    }

    #[test]
    fn bad_offset_is_rejected() {
        let err = PopoverConfig::default()
            .with_dialog_offset(-1.0)
            .validate()
            .unwrap_err();
        assert_eq!(err, ConfigError::InvalidOffset(-1.0));
        assert!(
            PopoverConfig::default()
                .with_dialog_offset(f64::INFINITY)
                .validate()
                .is_err()
        );
    }

    #[test]
    fn bounds_are_checked() {
        let inverted = PlacementStrategy::KeepCurrent(SizeBounds {
            min_width: Some(300.0),
            max_width: Some(200.0),
            ..Default::default()
        });
        assert_eq!(
            PopoverConfig::default()
                .with_strategy(inverted)
                .validate()
                .unwrap_err(),
            ConfigError::InvertedBounds {
                axis: Axis::Horizontal,
                min: 300.0,
                max: 200.0
            }
        );
        let negative = PlacementStrategy::KeepCurrent(SizeBounds {
            min_height: Some(-4.0),
            ..Default::default()
        });
        assert_eq!(
            PopoverConfig::default()
                .with_strategy(negative)
                .validate()
                .unwrap_err(),
            ConfigError::InvalidBound {
                name: "minHeight",
                value: -4.0
            }
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn loads_from_json() {
        let json = r#"{
            "preferredPlacement": "top",
            "placementStrategy": {"considerKeepingCurrentPlacement": {"minHeight": 50}},
            "triggerActions": "HOVER | CLICK",
            "dialogOffset": 8,
            "enterDelay": 0,
            "leaveDelay": 300,
            "scrollableContainer": "element",
            "arrow": true
        }"#;
        let config: PopoverConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.preferred_placement, Placement::Top);
        assert_eq!(
            config.trigger_actions,
            TriggerActions::HOVER | TriggerActions::CLICK
        );
        assert_eq!(config.enter_delay, Duration::ZERO);
        assert_eq!(config.leave_delay, Duration::from_millis(300));
        assert_eq!(config.scroll_container, ScrollContainer::Element);
        let valid = config.validate().unwrap();
        assert_eq!(valid.order().preferred(), Placement::Top);
        assert!(valid.arrow());
    }
}
