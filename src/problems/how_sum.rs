//! A witness combination for a target sum.
//!
//! Same reachability question as [`can_sum`](crate::problems::can_sum), but
//! the answer is one concrete combination of addends instead of a boolean.
//! Memoized complexity: O(n·m²) time, O(m²) space (the cached witnesses are
//! up to m elements long).

use crate::cache::Memo;

/// Returns one multiset of elements from `numbers` (repetition allowed) that
/// sums exactly to `target`, or `None` if the target is unreachable.
///
/// `Some(vec![])` means the target was already 0: nothing left to add. When
/// several combinations exist, which one is returned depends only on the
/// iteration order of `numbers` (first success wins); any valid combination
/// satisfies the contract. Zero addends are skipped.
pub fn how_sum(target: u64, numbers: &[u64]) -> Option<Vec<u64>> {
    #[cfg(feature = "tracing")]
    let span = tracing::trace_span!("how_sum", target, addends = numbers.len());
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    let mut memo = Memo::new();
    how_sum_memo(target, numbers, &mut memo)
}

/// Recursive worker, keyed by remaining target. Unreachable targets cache
/// `None` so each dead end is proven only once.
fn how_sum_memo(
    target: u64,
    numbers: &[u64],
    memo: &mut Memo<u64, Option<Vec<u64>>>,
) -> Option<Vec<u64>> {
    if target == 0 {
        return Some(Vec::new());
    }
    if let Some(hit) = memo.get(&target) {
        return hit.clone();
    }
    for &num in numbers {
        if num == 0 || num > target {
            continue;
        }
        if let Some(mut combo) = how_sum_memo(target - num, numbers, memo) {
            combo.push(num);
            memo.insert(target, Some(combo.clone()));
            return Some(combo);
        }
    }
    memo.insert(target, None);
    None
}
