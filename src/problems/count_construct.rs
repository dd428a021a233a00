//! Counting word-bank partitions of a string.
//!
//! Same recursion shape as [`can_construct`](crate::problems::can_construct),
//! but instead of succeeding on the first branch, the contributions of *all*
//! matching words are summed before a suffix's count is cached. Two
//! partitions are distinct if their ordered sequences of bank words differ.

use crate::cache::Memo;

/// Returns the number of distinct ways to build `target` by concatenating
/// elements of `word_bank`, each usable any number of times.
///
/// The empty target has exactly one construction: use nothing. Empty bank
/// words are skipped (they would make every count infinite). The count is
/// zero iff [`can_construct`](crate::problems::can_construct::can_construct)
/// returns false for the same inputs.
pub fn count_construct(target: &str, word_bank: &[&str]) -> u64 {
    #[cfg(feature = "tracing")]
    let span = tracing::trace_span!(
        "count_construct",
        target_len = target.len(),
        words = word_bank.len()
    );
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    let mut memo = Memo::with_capacity(target.len());
    count_memo(target, word_bank, &mut memo)
}

/// Recursive worker keyed by remaining-suffix length (see `can_construct`
/// for why the length identifies the suffix). The cached value is the raw
/// total over all branches; no early return on a nonzero branch.
fn count_memo(suffix: &str, word_bank: &[&str], memo: &mut Memo<usize, u64>) -> u64 {
    if suffix.is_empty() {
        return 1;
    }
    if let Some(&hit) = memo.get(&suffix.len()) {
        return hit;
    }
    let mut total = 0u64;
    for word in word_bank {
        if word.is_empty() {
            continue;
        }
        if let Some(rest) = suffix.strip_prefix(word) {
            total += count_memo(rest, word_bank, memo);
        }
    }
    *memo.insert(suffix.len(), total)
}

#[cfg(test)]
mod tests {
    use super::count_construct;

    #[test]
    fn two_partitions_of_abcdef() {
        // [ab, cd, def] and [abc, def].
        assert_eq!(
            count_construct("abcdef", &["ab", "abc", "cd", "def", "abcd"]),
            2
        );
    }

    #[test]
    fn unconstructible_targets_count_zero() {
        assert_eq!(
            count_construct("skateboard", &["bo", "rd", "ate", "t", "ska", "sk", "boar"]),
            0
        );
    }

    #[test]
    fn four_partitions_of_enterapotentpot() {
        assert_eq!(
            count_construct("enterapotentpot", &["a", "p", "ent", "enter", "ot", "o", "t"]),
            4
        );
    }

    #[test]
    fn purple_has_two_partitions() {
        // [purp, le] and [p, ur, p, le].
        assert_eq!(
            count_construct("purple", &["purp", "p", "ur", "le", "purpl"]),
            2
        );
    }

    #[test]
    fn empty_target_counts_one() {
        assert_eq!(count_construct("", &["a", "b"]), 1);
        assert_eq!(count_construct("", &[]), 1);
    }

    #[test]
    fn pathological_input_counts_zero() {
        // The trailing 'f' is never coverable, so every branch dies; the memo
        // keeps the exponential e-prefix tree polynomial.
        let target = "e".repeat(52) + "f";
        let bank = ["e", "ee", "eee", "eeee", "eeeee"];
        assert_eq!(count_construct(&target, &bank), 0);
    }
}
