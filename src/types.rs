//! Core data structures: outcomes, ranked orders, and the error type.
//!
//! An [`Order`] is a ranked partition of the outcome space `[0, bound)`:
//! a sequence of disjoint outcome sets ("tiers") whose index in the sequence
//! is the tier's rank ("height"). Lower index = lower rank. The order
//! builders in [`crate::orders`] guarantee the partition invariant (every
//! outcome in range appears in exactly one tier); [`Order::height`] surfaces
//! a violated invariant as [`XemeError::NotInOrder`] rather than guessing.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A possible drawn number in `[0, bound)`.
pub type Outcome = i64;

/// A payout multiplier. Kept integral so EV sums stay exact rationals.
pub type Weight = i64;

/// A set of outcomes (one tier of an order).
pub type OutcomeSet = BTreeSet<Outcome>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum XemeError {
    /// An outcome was not found in any tier of an order. Signals a broken
    /// partition (builder bug) or a player/host order pair built with
    /// mismatched bounds. Never an expected case.
    #[error("outcome {0} not found in any tier of the order")]
    NotInOrder(Outcome),
    /// The outcome space is empty; EV over zero outcomes is undefined.
    #[error("bound must be positive, got {0}")]
    ZeroBound(i64),
}

/// Ranked partition of the outcome space: tier index = height.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    tiers: Vec<OutcomeSet>,
}

impl Order {
    pub fn new() -> Self {
        Self { tiers: Vec::new() }
    }

    pub fn from_tiers(tiers: Vec<OutcomeSet>) -> Self {
        Self { tiers }
    }

    /// Append a tier at the highest rank.
    pub fn push(&mut self, tier: OutcomeSet) {
        self.tiers.push(tier);
    }

    pub fn tiers(&self) -> &[OutcomeSet] {
        &self.tiers
    }

    pub fn len(&self) -> usize {
        self.tiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }

    /// Rank of the first tier containing `value`, scanning from rank 0.
    ///
    /// Errors with [`XemeError::NotInOrder`] when no tier contains `value`.
    /// For a well-built order this never happens for outcomes in
    /// `[0, bound)`; the error exists to surface a broken partition.
    pub fn height(&self, value: Outcome) -> Result<usize, XemeError> {
        self.tiers
            .iter()
            .position(|tier| tier.contains(&value))
            .ok_or(XemeError::NotInOrder(value))
    }

    /// Convert a player order into the paired host order by prepending an
    /// empty tier at rank 0, shifting every existing tier up one rank.
    ///
    /// Note: the leme host order is *not* built this way; see
    /// [`crate::orders::make_leme_host_order`].
    pub fn hostify(mut self) -> Self {
        self.tiers.insert(0, OutcomeSet::new());
        self
    }

    /// Structural equivalence used for preset detection: same number of
    /// tiers with identical contents, ignoring the sequence position of the
    /// tiers. Tiers are compared after sorting by smallest element (empty
    /// tiers first), so two orders listing the same tiers in a different
    /// arrangement compare equal.
    pub fn is_equivalent(&self, other: &Order) -> bool {
        if self.tiers.len() != other.tiers.len() {
            return false;
        }
        let normalize = |order: &Order| -> Vec<OutcomeSet> {
            let mut tiers = order.tiers.clone();
            tiers.sort_by_key(|t| t.iter().next().copied());
            tiers
        };
        normalize(self) == normalize(other)
    }
}
