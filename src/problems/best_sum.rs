//! The shortest combination summing to a target.
//!
//! Unlike [`how_sum`](crate::problems::how_sum), the first combination found
//! is not good enough: every addend must be tried at every remaining target,
//! because the shortest result is not discoverable by first success. The memo
//! still caps the work at one exploration per remaining target.

use crate::cache::Memo;

/// Returns a combination of elements from `numbers` (repetition allowed)
/// with the fewest terms among all combinations summing exactly to `target`,
/// or `None` if the target is unreachable.
///
/// Ties are broken by whichever combination is found first in the iteration
/// order of `numbers`. `Some(vec![])` means the target was already 0.
/// Zero addends are skipped.
pub fn best_sum(target: u64, numbers: &[u64]) -> Option<Vec<u64>> {
    #[cfg(feature = "tracing")]
    let span = tracing::trace_span!("best_sum", target, addends = numbers.len());
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    let mut memo = Memo::new();
    best_sum_memo(target, numbers, &mut memo)
}

/// Recursive worker, keyed by remaining target and storing the best
/// combination found for it (or `None` for unreachable targets). No
/// short-circuiting: the loop runs over all addends before the entry is
/// written.
fn best_sum_memo(
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

    let mut shortest: Option<Vec<u64>> = None;
    for &num in numbers {
        if num == 0 || num > target {
            continue;
        }
        if let Some(mut combo) = best_sum_memo(target - num, numbers, memo) {
            combo.push(num);
            let better = shortest
                .as_ref()
                .map_or(true, |best| combo.len() < best.len());
            if better {
                shortest = Some(combo);
            }
        }
    }

    memo.insert(target, shortest.clone());
    shortest
}
