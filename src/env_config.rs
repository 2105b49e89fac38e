//! Shared environment configuration for xeme binaries.
//!
//! Consolidates the `XEME_BOUND` and `XEME_ROUNDS` reads so every binary
//! reports and defaults them the same way. Library code never touches the
//! environment; callers pass `bound` and `rounds` explicitly.

use crate::constants::ROULETTE_BOUND;

/// Read `XEME_BOUND` (default 37, the single-zero roulette wheel).
/// Exits on a non-positive bound; the EV engine has no meaning for one.
pub fn bound() -> i64 {
    let bound = std::env::var("XEME_BOUND")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(ROULETTE_BOUND);
    if bound <= 0 {
        eprintln!("XEME_BOUND must be positive, got {}", bound);
        std::process::exit(1);
    }
    println!("XEME_BOUND={}", bound);
    bound
}

/// Read `XEME_ROUNDS` (default 1).
pub fn rounds() -> u32 {
    let rounds = std::env::var("XEME_ROUNDS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(1);
    println!("XEME_ROUNDS={}", rounds);
    rounds
}
