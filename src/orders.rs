//! Order builders: the ranked partition each game uses to compare numbers.
//!
//! Every builder covers `[0, bound)` exactly once by materializing tiers of
//! reduced digits through the [`InverseIndex`]. Host orders carry an empty
//! tier at rank 0, so a host number always out-ranks rank 0 and the player
//! only wins on height >= host height. Reme and jeme derive their host
//! order mechanically via [`Order::hostify`]; the leme host order is an
//! independent table with different tier boundaries (2-7 as singletons,
//! then {8,9}) — an intentional asymmetry of the game, not a derivation.
//!
//! A player order and its paired host order must be built with the same
//! `bound` to be comparable.

use crate::reduction::InverseIndex;
use crate::types::Order;

/// Reme ranks plain reduced digits: 1 through base-1 as ascending singleton
/// tiers, with digit 0 on top as the highest rank.
pub fn make_reme_player_order(idx: &InverseIndex, bound: i64, base: i64) -> Order {
    let mut order = Order::new();
    for digit in 1..base {
        order.push((*idx.lookup(digit, bound, base)).clone());
    }
    order.push((*idx.lookup(0, bound, base)).clone());
    order
}

pub fn make_reme_host_order(idx: &InverseIndex, bound: i64, base: i64) -> Order {
    make_reme_player_order(idx, bound, base).hostify()
}

/// Jeme floors digits 2-5 together, ranks 6-9 individually, and puts {0,1}
/// on top. Base 10 only.
pub fn make_jeme_player_order(idx: &InverseIndex, bound: i64) -> Order {
    let mut order = Order::new();
    order.push(idx.lookup_multi([2, 3, 4, 5], bound, 10));
    for digit in 6..10 {
        order.push((*idx.lookup(digit, bound, 10)).clone());
    }
    order.push(idx.lookup_multi([0, 1], bound, 10));
    order
}

pub fn make_jeme_host_order(idx: &InverseIndex, bound: i64) -> Order {
    make_jeme_player_order(idx, bound).hostify()
}

/// Leme floors {2,9} together, ranks 3-8 individually, and puts {1,0} on
/// top. Base 10 only.
pub fn make_leme_player_order(idx: &InverseIndex, bound: i64) -> Order {
    let mut order = Order::new();
    order.push(idx.lookup_multi([2, 9], bound, 10));
    for digit in 3..9 {
        order.push((*idx.lookup(digit, bound, 10)).clone());
    }
    order.push(idx.lookup_multi([1, 0], bound, 10));
    order
}

/// The leme host order is hand-specified, not a hostified player order:
/// empty tier, then 2-7 as ascending singletons, then {8,9}, then {1,0}.
/// Digit 9 sits near the top here but at the bottom of the player order.
pub fn make_leme_host_order(idx: &InverseIndex, bound: i64) -> Order {
    let mut order = Order::new();
    order.push(Default::default());
    for digit in 2..8 {
        order.push((*idx.lookup(digit, bound, 10)).clone());
    }
    order.push(idx.lookup_multi([8, 9], bound, 10));
    order.push(idx.lookup_multi([1, 0], bound, 10));
    order
}
