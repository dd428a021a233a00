//! Subset-sum reachability with repeatable addends.
//!
//! `can_sum(7, &[5, 3, 4, 7])` asks whether 7 can be written as a sum of
//! elements drawn (with repetition) from the slice. Brute force explores an
//! O(n^m) tree (m = target, n = addend count); the memoized recursion visits
//! each remaining target at most once, for O(m·n) time and O(m) space.

use crate::cache::Memo;

/// Returns true iff some multiset drawn with repetition from `numbers` sums
/// exactly to `target`.
///
/// Addends larger than the remaining target are pruned, and zero addends are
/// skipped: subtracting zero would recurse on the same target forever without
/// ever contributing to a solution.
pub fn can_sum(target: u64, numbers: &[u64]) -> bool {
    #[cfg(feature = "tracing")]
    let span = tracing::trace_span!("can_sum", target, addends = numbers.len());
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    let mut memo = Memo::new();
    can_sum_memo(target, numbers, &mut memo)
}

/// Recursive worker. The memo is keyed by the remaining target alone, which
/// is sound because `numbers` is fixed across the whole call tree. Negative
/// results are cached too, so dead ends are only explored once.
fn can_sum_memo(target: u64, numbers: &[u64], memo: &mut Memo<u64, bool>) -> bool {
    if target == 0 {
        return true;
    }
    if let Some(&hit) = memo.get(&target) {
        return hit;
    }
    for &num in numbers {
        if num == 0 || num > target {
            continue;
        }
        if can_sum_memo(target - num, numbers, memo) {
            memo.insert(target, true);
            return true;
        }
    }
    memo.insert(target, false);
    false
}

#[cfg(test)]
mod tests {
    use super::can_sum;

    #[test]
    fn classic_examples() {
        assert!(can_sum(7, &[2, 3]));
        assert!(can_sum(7, &[5, 3, 4, 7]));
        assert!(!can_sum(7, &[2, 4]));
        assert!(can_sum(8, &[2, 3, 5]));
    }

    #[test]
    fn zero_target_is_always_reachable() {
        assert!(can_sum(0, &[2, 3]));
        assert!(can_sum(0, &[]));
    }

    #[test]
    fn empty_and_zero_addends() {
        assert!(!can_sum(5, &[]));
        // A zero addend can never help and must not hang.
        assert!(!can_sum(5, &[0]));
        assert!(can_sum(5, &[0, 5]));
    }

    #[test]
    fn large_targets_terminate() {
        // 300 is not a multiple of 7, and 14 = 2*7.
        assert!(!can_sum(300, &[7, 14]));
        assert!(can_sum(1400, &[7, 14]));
    }
}
