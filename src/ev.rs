//! Exact single-round EV and cumulative house edge.
//!
//! All arithmetic here is exact rational ([`num::BigRational`]); nothing
//! flows through floating point. This matters for [`house_edge`], where a
//! per-round EV is raised to the number of rounds and any representation
//! error would compound.

use num::traits::Pow;
use num::{BigInt, BigRational, One, Zero};

use crate::types::{Order, Outcome, Weight, XemeError};

/// Single-round EV with respect to the player, assuming a 1-unit bet.
///
/// Sums over the full `bound × bound` grid of (host, player) pairs, each
/// with probability `1 / bound²`. A pair pays out `weight(player_num)` when
/// the player number's height is greater than or equal to the host
/// number's height (ties win for the player), and nothing otherwise.
///
/// Both orders must be built with this same `bound`; a mismatch surfaces as
/// [`XemeError::NotInOrder`] from the height lookup. `bound <= 0` is
/// rejected as [`XemeError::ZeroBound`].
pub fn expected_value<F>(
    player_order: &Order,
    host_order: &Order,
    weight: F,
    bound: i64,
) -> Result<BigRational, XemeError>
where
    F: Fn(Outcome) -> Weight,
{
    if bound <= 0 {
        return Err(XemeError::ZeroBound(bound));
    }

    // Heights are scanned once per outcome, not once per pair.
    let player_heights: Vec<usize> = (0..bound)
        .map(|n| player_order.height(n))
        .collect::<Result<_, _>>()?;
    let host_heights: Vec<usize> = (0..bound)
        .map(|n| host_order.height(n))
        .collect::<Result<_, _>>()?;

    let mut total_payout = BigInt::zero();
    for &host_height in &host_heights {
        for (player_num, &player_height) in player_heights.iter().enumerate() {
            if player_height < host_height {
                continue;
            }
            total_payout += weight(player_num as Outcome);
        }
    }

    log::debug!("ev: bound={bound}, total payout over {} pairs: {total_payout}", bound * bound);
    Ok(BigRational::new(
        total_payout,
        BigInt::from(bound) * BigInt::from(bound),
    ))
}

/// Cumulative house edge over `rounds` independent rounds at the same EV:
/// `1 - EV^rounds`. Exact; `rounds = 0` or `EV = 1` both give 0.
pub fn house_edge(ev: &BigRational, rounds: u32) -> BigRational {
    BigRational::one() - Pow::pow(ev.clone(), rounds)
}

/// Render a rational as a decimal string with `digits` fractional digits,
/// truncated toward zero (`36/37` with 6 digits is `"0.972972"`).
pub fn to_decimal(value: &BigRational, digits: usize) -> String {
    use num::Signed;

    let scale: BigInt = Pow::pow(BigInt::from(10), digits);
    let scaled = (value.numer() * &scale) / value.denom();
    if digits == 0 {
        return scaled.to_string();
    }
    let int_part = &scaled / &scale;
    let frac_part = (&scaled % &scale).abs();
    let sign = if scaled.is_negative() && int_part.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}{int_part}.{frac:0>digits$}", frac = frac_part.to_string())
}
