//! Shared game constants.

/// Default digit-reduction base. Jeme and leme are only defined for base 10;
/// reme is parametric over the base.
pub const DEFAULT_BASE: i64 = 10;

/// Outcome count of a single-zero roulette wheel (numbers 0-36), the
/// canonical exclusive bound for the xeme games.
pub const ROULETTE_BOUND: i64 = 37;

/// Payout multiplier for any reduced digit without an explicit entry in a
/// weight table.
pub const DEFAULT_WEIGHT: i64 = 2;
