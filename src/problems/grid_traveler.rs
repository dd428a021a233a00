//! Monotone lattice-path counting on a 2D grid.
//!
//! A traveler starts in the top-left corner of an m×n grid and may only move
//! down or right. How many distinct paths reach the bottom-right corner?
//!
//! Without the memo the recursion explores O(2^(m+n)) branches; with it the
//! work drops to O(m·n) subproblems. The answer is the binomial coefficient
//! C(m+n-2, m-1), which the tests use as an independent check.

use crate::cache::Memo;

/// Count down/right-only paths from the top-left to the bottom-right corner
/// of an `m` × `n` grid.
///
/// Base cases: 0 if either dimension is 0 (no grid), 1 if either is 1 (a
/// single straight corridor). The count is symmetric in `m` and `n`.
pub fn grid_traveler(m: u64, n: u64) -> u64 {
    #[cfg(feature = "tracing")]
    let span = tracing::trace_span!("grid_traveler", m, n);
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    let mut memo = Memo::new();
    traveler_memo(m, n, &mut memo)
}

/// Recursive worker. The memo is keyed by the unordered pair {m, n},
/// canonicalized as (min, max) so that (m, n) and (n, m) share one entry.
fn traveler_memo(m: u64, n: u64, memo: &mut Memo<(u64, u64), u64>) -> u64 {
    if m == 0 || n == 0 {
        return 0;
    }
    if m == 1 || n == 1 {
        return 1;
    }
    let key = (m.min(n), m.max(n));
    if let Some(&hit) = memo.get(&key) {
        return hit;
    }
    let paths = traveler_memo(m - 1, n, memo) + traveler_memo(m, n - 1, memo);
    *memo.insert(key, paths)
}

#[cfg(test)]
mod tests {
    use super::grid_traveler;

    #[test]
    fn degenerate_grids() {
        assert_eq!(grid_traveler(0, 0), 0);
        assert_eq!(grid_traveler(0, 5), 0);
        assert_eq!(grid_traveler(1, 1), 1);
        assert_eq!(grid_traveler(1, 7), 1);
    }

    #[test]
    fn small_grids() {
        assert_eq!(grid_traveler(2, 2), 2);
        assert_eq!(grid_traveler(2, 3), 3);
        assert_eq!(grid_traveler(3, 2), 3);
        assert_eq!(grid_traveler(3, 3), 6);
    }

    #[test]
    fn symmetric_in_dimensions() {
        for m in 0..8 {
            for n in 0..8 {
                assert_eq!(grid_traveler(m, n), grid_traveler(n, m));
            }
        }
    }

    #[test]
    fn large_grid_matches_binomial() {
        // 18x18 paths = C(34, 17).
        assert_eq!(grid_traveler(18, 18), 2_333_606_220);
    }
}
