use std::ops::Range;

use crate::MOD;

/// Prefix sums reduced modulo [`MOD`], answering any range sum in O(1).
pub struct ModPrefixSum {
    // sums[k] is the sum of the first k terms; length n + 1, sums[0] == 0.
    sums: Vec<u64>,
}

impl ModPrefixSum {
    /// Terms are reduced as they are accumulated, so callers may feed raw
    /// `u64` terms above the modulus.
    pub fn new<I: IntoIterator<Item = u64>>(terms: I) -> Self {
        let sums: Vec<u64> = std::iter::once(0)
            .chain(terms.into_iter().scan(0u64, |sum, term| {
                *sum = (*sum + term % MOD) % MOD;
                Some(*sum)
            }))
            .collect();
        ModPrefixSum { sums }
    }

    /// Sum of the terms in `range`, in `[0, MOD)`.
    pub fn sum(&self, range: Range<usize>) -> u64 {
        assert!(range.end < self.sums.len());
        if range.is_empty() {
            return 0;
        }
        (self.sums[range.end] + MOD - self.sums[range.start]) % MOD
    }
}
