//! Payout multipliers: fixed per-game weight functions and custom tables.
//!
//! The fixed functions are keyed to the same digit reduction the game's
//! order uses. [`WeightTable`] generalizes them for custom games: explicit
//! per-display-value overrides on top of a default weight, with the
//! built-in games available as presets.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_WEIGHT;
use crate::games::Game;
use crate::reduction::xemmify;
use crate::transform::Transform;
use crate::types::{Outcome, Weight};

/// Reme payout: reduced digit 0 pays 3, everything else pays 2.
pub fn reme_weight(num: Outcome, base: i64) -> Weight {
    if xemmify(num, base) == 0 {
        3
    } else {
        2
    }
}

/// Jeme payout: digit 0 pays 5, digit 1 pays 4, everything else pays 2.
pub fn jeme_weight(num: Outcome) -> Weight {
    match xemmify(num, 10) {
        0 => 5,
        1 => 4,
        _ => 2,
    }
}

/// Leme payout: digit 0 pays 4, digit 1 pays 3, everything else pays 2.
pub fn leme_weight(num: Outcome) -> Weight {
    match xemmify(num, 10) {
        0 => 4,
        1 => 3,
        _ => 2,
    }
}

/// Custom payout table: display value -> weight, over a default weight.
///
/// Lookups go through a [`Transform`] so the same table can be addressed by
/// reduced digit, last digit, or raw outcome. Overrides equal to the
/// default are pruned when the default changes, keeping the override map
/// minimal for preset comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightTable {
    default_weight: Weight,
    weights: BTreeMap<Outcome, Weight>,
}

impl Default for WeightTable {
    fn default() -> Self {
        Self::new()
    }
}

impl WeightTable {
    pub fn new() -> Self {
        Self {
            default_weight: DEFAULT_WEIGHT,
            weights: BTreeMap::new(),
        }
    }

    /// The fixed table of one of the built-in games.
    pub fn preset(game: Game) -> Self {
        let mut table = Self::new();
        match game {
            Game::Reme => {
                table.set_weight(0, 3);
            }
            Game::Jeme => {
                table.set_weight(0, 5);
                table.set_weight(1, 4);
            }
            Game::Leme => {
                table.set_weight(0, 4);
                table.set_weight(1, 3);
            }
        }
        table
    }

    /// Weight of a raw outcome, addressed through `transform`.
    pub fn weight_of(&self, raw: Outcome, transform: Transform, base: i64) -> Weight {
        let display = transform.apply(raw, base);
        self.weights
            .get(&display)
            .copied()
            .unwrap_or(self.default_weight)
    }

    pub fn set_weight(&mut self, display: Outcome, weight: Weight) {
        self.weights.insert(display, weight);
    }

    /// Change the default and drop overrides that now equal it.
    pub fn set_default_weight(&mut self, weight: Weight) {
        self.default_weight = weight;
        self.weights.retain(|_, w| *w != weight);
    }

    pub fn default_weight(&self) -> Weight {
        self.default_weight
    }

    pub fn overrides(&self) -> &BTreeMap<Outcome, Weight> {
        &self.weights
    }
}
