//! # Xeme — Exact EV & House-Edge Calculator
//!
//! Computes the exact expected value and cumulative house edge for the xeme
//! family of roulette-like betting games (reme, jeme, leme). Outcomes in
//! `[0, bound)` are partitioned into ranked tiers ("orders") by a
//! digit-sum-reduction rule; the player wins a round when the tier rank of
//! their chosen number is greater than or equal to the tier rank of the drawn
//! host number.
//!
//! ## Pipeline overview
//!
//! The computation is a strict pipeline, leaves first:
//!
//! | Stage | Rust module | Description |
//! |-------|-------------|-------------|
//! | 1 | [`reduction`] | Digit reduction `xemmify` and its memoized inverse index |
//! | 2 | [`orders`] | Per-game ranked partitions of `[0, bound)` built from inverse sets |
//! | 3 | [`weights`] | Payout multipliers per reduced digit, fixed and custom tables |
//! | 4 | [`ev`] | Exact single-round EV over the full `bound × bound` outcome grid |
//! | 5 | [`ev::house_edge`] | Cumulative edge `1 - EV^rounds` over repeated rounds |
//!
//! Everything is closed-form over the full discrete outcome space: no
//! randomness, no simulation, no floating point. All EV/edge arithmetic uses
//! exact rationals ([`num::BigRational`]), so raising an EV to a large number
//! of rounds introduces no drift.
//!
//! ## Example
//!
//! ```
//! use xeme::ev::house_edge;
//! use xeme::games::Game;
//! use xeme::reduction::InverseIndex;
//!
//! let idx = InverseIndex::new();
//! let ev = Game::Reme.ev(&idx, 37).unwrap(); // single-zero roulette wheel
//! assert_eq!(ev, num::BigRational::new(36.into(), 37.into()));
//! let edge = house_edge(&ev, 1); // 1/37 against the player per round
//! assert!(edge > num::BigRational::from_integer(0.into()));
//! ```

pub mod constants;
pub mod env_config;
pub mod ev;
pub mod games;
pub mod orders;
pub mod reduction;
pub mod transform;
pub mod types;
pub mod weights;
