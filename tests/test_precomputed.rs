//! Hand-verifiable exact values for the built-in games.
//!
//! The bound=4 scenarios are small enough to check on paper; the bound=37
//! fractions are the canonical single-zero-roulette figures for each game.

use num::BigRational;
use xeme::constants::ROULETTE_BOUND;
use xeme::ev::{expected_value, house_edge, to_decimal};
use xeme::games::Game;
use xeme::orders::{make_leme_host_order, make_leme_player_order, make_reme_player_order};
use xeme::reduction::{xemmify, InverseIndex};
use xeme::types::{OutcomeSet, XemeError};
use xeme::weights::{jeme_weight, leme_weight, reme_weight};

fn ratio(numer: i64, denom: i64) -> BigRational {
    BigRational::new(numer.into(), denom.into())
}

#[test]
fn reduction_below_base_is_identity() {
    for v in 0..10 {
        assert_eq!(xemmify(v, 10), v);
    }
    assert_eq!(xemmify(10, 10), 1);
    assert_eq!(xemmify(25, 10), 7);
    assert_eq!(xemmify(36, 10), 9);
}

#[test]
fn inverse_sets_at_small_bounds() {
    let idx = InverseIndex::new();
    for digit in 0..4 {
        assert_eq!(*idx.lookup(digit, 4, 10), OutcomeSet::from([digit]));
    }
    assert_eq!(*idx.lookup(0, 37, 10), OutcomeSet::from([0, 19, 28]));
    assert_eq!(*idx.lookup(1, 37, 10), OutcomeSet::from([1, 10, 29]));
    assert_eq!(*idx.lookup(9, 37, 10), OutcomeSet::from([9, 18, 27, 36]));
}

#[test]
fn reme_order_at_bound_4() {
    let idx = InverseIndex::new();
    let order = make_reme_player_order(&idx, 4, 10);
    // outcomes 1,2,3 as ascending singleton tiers, 0 on top; digits 4-9
    // materialize as empty tiers under this bound
    assert_eq!(order.height(1).unwrap(), 0);
    assert_eq!(order.height(2).unwrap(), 1);
    assert_eq!(order.height(3).unwrap(), 2);
    assert_eq!(order.height(0).unwrap(), 9);

    // with base matching the bound there are no empty tiers and 0 sits
    // directly above the last nonzero digit
    let order = make_reme_player_order(&idx, 4, 4);
    assert_eq!(order.height(1).unwrap(), 0);
    assert_eq!(order.height(0).unwrap(), 3);
}

#[test]
fn weight_tables() {
    assert_eq!(reme_weight(0, 10), 3);
    assert_eq!(reme_weight(5, 10), 2);
    assert_eq!(reme_weight(19, 10), 3); // reduces to 0

    assert_eq!(jeme_weight(0), 5);
    assert_eq!(jeme_weight(10), 4); // reduces to 1
    assert_eq!(jeme_weight(7), 2);

    assert_eq!(leme_weight(28), 4); // reduces to 0
    assert_eq!(leme_weight(1), 3);
    assert_eq!(leme_weight(9), 2);
}

#[test]
fn exact_ev_at_bound_4() {
    let idx = InverseIndex::new();
    assert_eq!(Game::Reme.ev(&idx, 4).unwrap(), ratio(15, 16));
    assert_eq!(Game::Jeme.ev(&idx, 4).unwrap(), ratio(9, 8));
    assert_eq!(Game::Leme.ev(&idx, 4).unwrap(), ratio(1, 1));
}

#[test]
fn exact_ev_at_roulette_bound() {
    let idx = InverseIndex::new();
    assert_eq!(Game::Reme.ev(&idx, ROULETTE_BOUND).unwrap(), ratio(36, 37));
    assert_eq!(Game::Jeme.ev(&idx, ROULETTE_BOUND).unwrap(), ratio(1509, 1369));
    assert_eq!(Game::Leme.ev(&idx, ROULETTE_BOUND).unwrap(), ratio(1275, 1369));
}

#[test]
fn reme_edge_at_roulette_bound() {
    let ev = ratio(36, 37);
    assert_eq!(house_edge(&ev, 1), ratio(1, 37));
    // exact rational power: (36/37)^2 = 1296/1369
    assert_eq!(house_edge(&ev, 2), ratio(73, 1369));
    assert_eq!(to_decimal(&house_edge(&ev, 10), 6), "0.239660");
}

#[test]
fn leme_host_order_is_not_a_hostified_player_order() {
    let idx = InverseIndex::new();
    let hand_specified = make_leme_host_order(&idx, ROULETTE_BOUND);
    let mechanical = make_leme_player_order(&idx, ROULETTE_BOUND).hostify();
    assert_ne!(hand_specified, mechanical);
    // digit 9 sits in the {8,9} tier of the real host order, but at the
    // bottom tier of the player order
    assert_eq!(hand_specified.height(9).unwrap(), 7);
    assert_eq!(mechanical.height(9).unwrap(), 1);
}

#[test]
fn zero_bound_is_rejected() {
    let idx = InverseIndex::new();
    let player = Game::Reme.player_order(&idx, 4);
    let host = Game::Reme.host_order(&idx, 4);
    assert_eq!(
        expected_value(&player, &host, |n| Game::Reme.weight(n), 0),
        Err(XemeError::ZeroBound(0))
    );
}

#[test]
fn mismatched_bounds_surface_as_partition_errors() {
    let idx = InverseIndex::new();
    let player = Game::Reme.player_order(&idx, 4);
    let host = Game::Reme.host_order(&idx, 4);
    // outcomes 4..36 exist under bound=37 but appear in no tier of these orders
    assert_eq!(
        expected_value(&player, &host, |n| Game::Reme.weight(n), 37),
        Err(XemeError::NotInOrder(4))
    );
}
