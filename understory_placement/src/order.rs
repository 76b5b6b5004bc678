// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ordered candidate lists.
//!
//! A [`PlacementOrder`] is never empty; its first entry is the preferred placement.
//! [`PlacementOrder::fallback_for`] derives the conventional fallback order from a
//! preferred placement: the preferred one, its mirror on the opposite side with
//! the same alignment, then the two centered perpendicular placements.

use alloc::vec::Vec;

use crate::types::Placement;

/// Error returned when building a [`PlacementOrder`] from an empty list.
#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("placement order must contain at least one placement")]
pub struct EmptyOrderError;

/// Non-empty, ordered list of candidate placements.
///
/// Duplicates are allowed; searches only ever act on the first occurrence.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<Placement>", into = "Vec<Placement>"))]
pub struct PlacementOrder(Vec<Placement>);

impl PlacementOrder {
    /// Build an order from a preferred placement and the ones to try after it.
    pub fn new(preferred: Placement, rest: impl IntoIterator<Item = Placement>) -> Self {
        let mut v = Vec::new();
        v.push(preferred);
        v.extend(rest);
        Self(v)
    }

    /// The default fallback order for `preferred`.
    ///
    /// ```
    /// use understory_placement::{Placement, PlacementOrder};
    ///
    /// let order = PlacementOrder::fallback_for(Placement::RightStart);
    /// assert_eq!(
    ///     order.as_slice(),
    ///     &[Placement::RightStart, Placement::LeftStart, Placement::Top, Placement::Bottom]
    /// );
    /// ```
    pub fn fallback_for(preferred: Placement) -> Self {
        let side = preferred.side();
        let mirrored = Placement::new(side.opposite(), preferred.alignment());
        Self::new(preferred, [mirrored].into_iter().chain(side.perpendicular()))
    }

    /// The first candidate.
    pub fn preferred(&self) -> Placement {
        self.0[0]
    }

    /// Candidates in search order.
    pub fn as_slice(&self) -> &[Placement] {
        &self.0
    }

    /// Number of candidates, at least one.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Iterate over candidates in search order.
    pub fn iter(&self) -> impl Iterator<Item = Placement> + '_ {
        self.0.iter().copied()
    }
}

impl TryFrom<Vec<Placement>> for PlacementOrder {
    type Error = EmptyOrderError;

    fn try_from(value: Vec<Placement>) -> Result<Self, Self::Error> {
        if value.is_empty() {
            Err(EmptyOrderError)
        } else {
            Ok(Self(value))
        }
    }
}

impl From<PlacementOrder> for Vec<Placement> {
    fn from(value: PlacementOrder) -> Self {
        value.0
    }
}

impl From<Placement> for PlacementOrder {
    fn from(value: Placement) -> Self {
        Self::fallback_for(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn fallback_orders_match_table() {
        use Placement::*;
        let expected: [(Placement, [Placement; 4]); 12] = [
            (TopStart, [TopStart, BottomStart, Left, Right]),
            (Top, [Top, Bottom, Left, Right]),
            (TopEnd, [TopEnd, BottomEnd, Left, Right]),
            (LeftStart, [LeftStart, RightStart, Top, Bottom]),
            (Left, [Left, Right, Top, Bottom]),
            (LeftEnd, [LeftEnd, RightEnd, Top, Bottom]),
            (RightStart, [RightStart, LeftStart, Top, Bottom]),
            (Right, [Right, Left, Top, Bottom]),
            (RightEnd, [RightEnd, LeftEnd, Top, Bottom]),
            (BottomStart, [BottomStart, TopStart, Left, Right]),
            (Bottom, [Bottom, Top, Left, Right]),
            (BottomEnd, [BottomEnd, TopEnd, Left, Right]),
        ];
        for (preferred, order) in expected {
            let got = PlacementOrder::fallback_for(preferred);
            assert_eq!(got.as_slice(), &order, "preferred {preferred}");
            assert_eq!(got.preferred(), preferred);
        }
    }

    #[test]
    fn empty_list_is_rejected() {
        assert_eq!(PlacementOrder::try_from(Vec::<Placement>::new()), Err(EmptyOrderError));
        let one = PlacementOrder::try_from(vec![Placement::Left]).unwrap();
        assert_eq!(one.len(), 1);
        assert!(!one.is_empty());
    }

    #[test]
    fn explicit_order_is_kept_verbatim() {
        let order = PlacementOrder::new(Placement::Right, [Placement::Right, Placement::TopEnd]);
        assert_eq!(
            order.as_slice(),
            &[Placement::Right, Placement::Right, Placement::TopEnd]
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_rejects_empty_order() {
        let order: PlacementOrder = serde_json::from_str(r#"["left","top-end"]"#).unwrap();
        assert_eq!(order.as_slice(), &[Placement::Left, Placement::TopEnd]);
        assert!(serde_json::from_str::<PlacementOrder>("[]").is_err());
    }
}
