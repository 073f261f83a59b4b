mod boundary;
mod prefix;

pub use boundary::MinWindows;
pub use prefix::ModPrefixSum;

/// Every arithmetic step is reduced modulo this prime.
pub const MOD: u64 = 1_000_000_007;

fn sub(a: u64, b: u64) -> u64 {
    (a + MOD - b) % MOD
}

/// Total power of a sequence: the sum over every contiguous subarray of
/// `min(subarray) * sum(subarray)`, reduced modulo [`MOD`]. O(n).
///
/// Each index is charged for exactly the subarrays inside its
/// [`MinWindows`] window, and the sum of the sums of those subarrays
/// collapses into two prefix-sum differences, so accumulation is O(1) per
/// index. Validated against [`find_total_power_naive`].
pub fn find_total_power(power: &[u32]) -> u64 {
    let windows = MinWindows::new(power);
    let plain = ModPrefixSum::new(power.iter().map(|&p| u64::from(p)));
    let weighted = ModPrefixSum::new(
        power
            .iter()
            .enumerate()
            .map(|(j, &p)| (j as u64 + 1) % MOD * (u64::from(p) % MOD)),
    );

    let mut total = 0;
    for (i, &minimum) in power.iter().enumerate() {
        let window = windows.window(i);
        let (lo, hi) = (window.start, window.end);

        // power[j] for j in [lo, i] appears in (j + 1 - lo) * (hi - i) of
        // the subarrays owned by i.
        let left = (hi - i) as u64 % MOD
            * sub(
                weighted.sum(lo..i + 1),
                lo as u64 % MOD * plain.sum(lo..i + 1) % MOD,
            )
            % MOD;
        // power[j] for j in (i, hi) appears in (i + 1 - lo) * (hi - j).
        let right = (i + 1 - lo) as u64 % MOD
            * sub(
                (hi as u64 + 1) % MOD * plain.sum(i + 1..hi) % MOD,
                weighted.sum(i + 1..hi),
            )
            % MOD;

        total = (total + u64::from(minimum) % MOD * ((left + right) % MOD)) % MOD;
    }
    total
}

/// Direct evaluation of the definition with a running minimum and running
/// modular sum. O(n^2); this is the oracle the fast path is tested against.
pub fn find_total_power_naive(power: &[u32]) -> u64 {
    let mut total = 0u64;
    for l in 0..power.len() {
        let mut minimum = u64::MAX;
        let mut sum = 0u64;
        for &value in &power[l..] {
            minimum = minimum.min(u64::from(value));
            sum = (sum + u64::from(value)) % MOD;
            total = (total + minimum % MOD * sum) % MOD;
        }
    }
    total
}

struct AllSequencesIterator {
    next: Option<Vec<u32>>,
    max_value: u32,
}

impl Iterator for AllSequencesIterator {
    type Item = Vec<u32>;

    fn next(&mut self) -> Option<Vec<u32>> {
        let current = self.next.take()?;
        // Find the last position that can still be incremented.
        if let Some(i) = current.iter().rposition(|&v| v < self.max_value) {
            let mut succ = current.clone();
            succ[i] += 1;
            for v in &mut succ[i + 1..] {
                *v = 0;
            }
            self.next = Some(succ);
        }
        Some(current)
    }
}

/// Every sequence with length in `min_len..=max_len` and values in
/// `0..=max_value`, in lexicographic order per length. Exhaustive-test
/// fuel for [`find_total_power`] against the naive oracle.
pub fn all_sequences(
    min_len: usize,
    max_len: usize,
    max_value: u32,
) -> impl Iterator<Item = Vec<u32>> {
    (min_len..=max_len).flat_map(move |len| AllSequencesIterator {
        next: Some(vec![0; len]),
        max_value,
    })
}
