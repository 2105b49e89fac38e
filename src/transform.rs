//! Display-value transforms between raw outcomes and table values.
//!
//! Custom order tables are edited in a display domain (reduced digits, last
//! digits, or raw outcomes) and mapped back to raw outcome sets before any
//! EV computation. `Xeme` is the reduction the built-in games use; `Qq` is a
//! plain last-digit view; `Raw` is the identity.

use serde::{Deserialize, Serialize};

use crate::reduction::xemmify;
use crate::types::{Outcome, OutcomeSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Transform {
    /// Digit-sum reduction: `((v mod b) + floor(v / b)) mod b`.
    Xeme,
    /// Last digit: `v mod b`.
    Qq,
    /// Identity.
    Raw,
}

impl Transform {
    /// Map a raw outcome to its display value.
    pub fn apply(self, value: Outcome, base: i64) -> Outcome {
        match self {
            Transform::Xeme => xemmify(value, base),
            Transform::Qq => value.rem_euclid(base),
            Transform::Raw => value,
        }
    }

    /// All raw outcomes in `[0, bound)` displaying as `display`.
    ///
    /// `Raw` is the exception: it maps straight back to the singleton
    /// `{display}` without a range check, mirroring its identity semantics.
    pub fn invert(self, display: Outcome, bound: i64, base: i64) -> OutcomeSet {
        match self {
            Transform::Raw => OutcomeSet::from([display]),
            _ => (0..bound.max(0))
                .filter(|&x| self.apply(x, base) == display)
                .collect(),
        }
    }

    /// Union of [`Self::invert`] over several display values.
    pub fn invert_multi<I>(self, displays: I, bound: i64, base: i64) -> OutcomeSet
    where
        I: IntoIterator<Item = Outcome>,
    {
        let mut out = OutcomeSet::new();
        for display in displays {
            out.extend(self.invert(display, bound, base));
        }
        out
    }
}
