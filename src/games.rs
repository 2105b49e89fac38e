//! The built-in game variants and their order/weight pairings.

use num::BigRational;
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_BASE;
use crate::ev::expected_value;
use crate::orders;
use crate::reduction::InverseIndex;
use crate::types::{Order, Outcome, Weight, XemeError};
use crate::weights::{self, WeightTable};

/// A xeme game variant. Each couples a player order, a host order, and a
/// weight function over the same digit reduction (base 10).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Game {
    Reme,
    Jeme,
    Leme,
}

impl Game {
    pub const ALL: [Game; 3] = [Game::Reme, Game::Jeme, Game::Leme];

    pub fn name(self) -> &'static str {
        match self {
            Game::Reme => "reme",
            Game::Jeme => "jeme",
            Game::Leme => "leme",
        }
    }

    pub fn player_order(self, idx: &InverseIndex, bound: i64) -> Order {
        match self {
            Game::Reme => orders::make_reme_player_order(idx, bound, DEFAULT_BASE),
            Game::Jeme => orders::make_jeme_player_order(idx, bound),
            Game::Leme => orders::make_leme_player_order(idx, bound),
        }
    }

    pub fn host_order(self, idx: &InverseIndex, bound: i64) -> Order {
        match self {
            Game::Reme => orders::make_reme_host_order(idx, bound, DEFAULT_BASE),
            Game::Jeme => orders::make_jeme_host_order(idx, bound),
            Game::Leme => orders::make_leme_host_order(idx, bound),
        }
    }

    pub fn weight(self, num: Outcome) -> Weight {
        match self {
            Game::Reme => weights::reme_weight(num, DEFAULT_BASE),
            Game::Jeme => weights::jeme_weight(num),
            Game::Leme => weights::leme_weight(num),
        }
    }

    /// Single-round EV of this game at the given bound.
    pub fn ev(self, idx: &InverseIndex, bound: i64) -> Result<BigRational, XemeError> {
        let player = self.player_order(idx, bound);
        let host = self.host_order(idx, bound);
        expected_value(&player, &host, |n| self.weight(n), bound)
    }

    /// Which built-in game a custom configuration reproduces, if any.
    ///
    /// A configuration matches when its weight table equals the game's
    /// preset and both orders are equivalent (same tiers, any arrangement)
    /// to the game's orders at `bound`. Returns `None` for custom setups.
    pub fn detect(
        player: &Order,
        host: &Order,
        table: &WeightTable,
        idx: &InverseIndex,
        bound: i64,
    ) -> Option<Game> {
        Game::ALL.into_iter().find(|&game| {
            *table == WeightTable::preset(game)
                && player.is_equivalent(&game.player_order(idx, bound))
                && host.is_equivalent(&game.host_order(idx, bound))
        })
    }
}

impl std::fmt::Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
