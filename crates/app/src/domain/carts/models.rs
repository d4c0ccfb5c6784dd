//! Cart Models

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Number of slots every new cart starts with.
pub const CART_SLOTS: u32 = 300;

/// Cart slot id; product ids index directly into the cart.
pub type CartSlot = u32;

/// Per-user cart: slot id to quantity.
///
/// Serialises as a JSON object keyed by the stringified slot id, e.g.
/// `{"0": 0, "1": 2, ...}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CartData(BTreeMap<CartSlot, i64>);

impl CartData {
    /// A cart with every slot in `0..CART_SLOTS` set to zero.
    #[must_use]
    pub fn empty() -> Self {
        Self((0..CART_SLOTS).map(|slot| (slot, 0)).collect())
    }

    #[must_use]
    pub fn quantity(&self, slot: CartSlot) -> Option<i64> {
        self.0.get(&slot).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (CartSlot, i64)> + '_ {
        self.0.iter().map(|(slot, quantity)| (*slot, *quantity))
    }

    /// Add one to `slot`. Slots outside the initial range are created on first use.
    pub fn increment(&mut self, slot: CartSlot) {
        let quantity = self.0.entry(slot).or_insert(0);

        *quantity = quantity.saturating_add(1);
    }

    /// Take one from `slot`, never going below zero.
    pub fn decrement(&mut self, slot: CartSlot) {
        if let Some(quantity) = self.0.get_mut(&slot)
            && *quantity > 0
        {
            *quantity -= 1;
        }
    }
}

impl FromIterator<(CartSlot, i64)> for CartData {
    fn from_iter<I: IntoIterator<Item = (CartSlot, i64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
