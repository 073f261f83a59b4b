use std::ops::Range;

/// For every index of a sequence, the maximal half-open window in which the
/// element at that index is the designated minimum.
///
/// `window(i)` is `lo..hi` where `lo - 1` is the nearest index left of `i`
/// holding a strictly smaller value (`lo == 0` if none) and `hi` is the
/// nearest index right of `i` holding a smaller-or-equal value (`hi == n`
/// if none). The strict/non-strict asymmetry makes exactly one index of
/// every subarray own that subarray, even when the minimum value repeats.
pub struct MinWindows {
    lo: Vec<usize>,
    hi: Vec<usize>,
}

impl MinWindows {
    /// Two monotonic-stack passes; each index is pushed and popped at most
    /// once per pass, so construction is O(n).
    pub fn new(values: &[u32]) -> MinWindows {
        let n = values.len();
        let mut lo = vec![0; n];
        let mut hi = vec![n; n];
        let mut stack: Vec<usize> = Vec::new();

        for i in 0..n {
            while stack.last().is_some_and(|&top| values[top] >= values[i]) {
                stack.pop();
            }
            lo[i] = stack.last().map_or(0, |&top| top + 1);
            stack.push(i);
        }

        stack.clear();
        for i in (0..n).rev() {
            while stack.last().is_some_and(|&top| values[top] > values[i]) {
                stack.pop();
            }
            hi[i] = stack.last().map_or(n, |&top| top);
            stack.push(i);
        }

        MinWindows { lo, hi }
    }

    pub fn window(&self, index: usize) -> Range<usize> {
        self.lo[index]..self.hi[index]
    }
}
