//! Digit reduction (`xemmify`) and its memoized inverse index.
//!
//! `xemmify` is a single digit-sum-reduction step, not an iterated digit
//! sum: `((v mod b) + floor(v / b)) mod b`. The inverse direction — "which
//! outcomes under `bound` reduce to this digit?" — is what the order
//! builders consume, so it is memoized per `(digit, bound, base)` triple in
//! an explicit [`InverseIndex`] owned by the caller.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::types::{Outcome, OutcomeSet};

/// Reduce `value` to a single digit in `[0, base)`.
///
/// Uses euclidean division, so the result matches floor-division /
/// non-negative-modulo semantics for negative inputs as well:
/// `xemmify(-1, 10) == 8`.
pub fn xemmify(value: Outcome, base: i64) -> i64 {
    (value.rem_euclid(base) + value.div_euclid(base)).rem_euclid(base)
}

/// Memoized inverse of [`xemmify`] over a bounded outcome range.
///
/// Construct one index per computation scope and share it by reference; the
/// cache grows monotonically and is never invalidated (the key fully
/// determines the result of a pure function). Cached sets are handed out as
/// [`Arc`] clones, so callers cannot mutate a cached set in place. The
/// interior mutex makes the read-check-insert atomic, so a shared
/// `&InverseIndex` is also safe across threads.
#[derive(Debug, Default)]
pub struct InverseIndex {
    cache: Mutex<HashMap<(i64, i64, i64), Arc<OutcomeSet>>>,
}

impl InverseIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// All outcomes x in `[0, bound)` with `xemmify(x, base) == digit`.
    ///
    /// A non-positive `bound` yields the empty set.
    pub fn lookup(&self, digit: i64, bound: i64, base: i64) -> Arc<OutcomeSet> {
        let mut cache = self.cache.lock().expect("inverse cache lock poisoned");
        cache
            .entry((digit, bound, base))
            .or_insert_with(|| {
                let set: OutcomeSet = (0..bound.max(0))
                    .filter(|&x| xemmify(x, base) == digit)
                    .collect();
                log::debug!(
                    "inverse({digit}, bound={bound}, base={base}): {} outcomes",
                    set.len()
                );
                Arc::new(set)
            })
            .clone()
    }

    /// Union of [`Self::lookup`] over several target digits.
    pub fn lookup_multi<I>(&self, digits: I, bound: i64, base: i64) -> OutcomeSet
    where
        I: IntoIterator<Item = i64>,
    {
        let mut out = OutcomeSet::new();
        for digit in digits {
            out.extend(self.lookup(digit, bound, base).iter().copied());
        }
        out
    }

    /// Number of distinct `(digit, bound, base)` triples computed so far.
    pub fn cached_entries(&self) -> usize {
        self.cache.lock().expect("inverse cache lock poisoned").len()
    }
}
