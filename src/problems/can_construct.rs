//! Word-bank string reachability.
//!
//! `can_construct("abcdef", &["ab", "abc", "cd", "def", "abcd"])` asks
//! whether the target can be fully partitioned into a concatenation of bank
//! words, each reusable any number of times. Brute force is O(n^m · m)
//! (m = target length, n = bank size); memoizing on the remaining suffix
//! brings it down to O(n·m²) time and O(m²) space.

use crate::cache::Memo;

/// Returns true iff `target` can be built by concatenating elements of
/// `word_bank`, each usable any number of times.
///
/// Empty bank words are skipped: stripping an empty prefix recurses on the
/// same suffix forever and never consumes any of the target.
pub fn can_construct(target: &str, word_bank: &[&str]) -> bool {
    #[cfg(feature = "tracing")]
    let span = tracing::trace_span!(
        "can_construct",
        target_len = target.len(),
        words = word_bank.len()
    );
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    let mut memo = Memo::with_capacity(target.len());
    construct_memo(target, word_bank, &mut memo)
}

/// Recursive worker over the remaining suffix of the original target.
///
/// Every suffix reached by stripping prefixes is a suffix of the original
/// target, so it is fully determined by its length; the memo is keyed by
/// that length, avoiding an owned `String` per level.
fn construct_memo(suffix: &str, word_bank: &[&str], memo: &mut Memo<usize, bool>) -> bool {
    if suffix.is_empty() {
        return true;
    }
    if let Some(&hit) = memo.get(&suffix.len()) {
        return hit;
    }
    for word in word_bank {
        if word.is_empty() {
            continue;
        }
        if let Some(rest) = suffix.strip_prefix(word) {
            if construct_memo(rest, word_bank, memo) {
                memo.insert(suffix.len(), true);
                return true;
            }
        }
    }
    memo.insert(suffix.len(), false);
    false
}

#[cfg(test)]
mod tests {
    use super::can_construct;

    #[test]
    fn classic_examples() {
        assert!(can_construct(
            "abcdef",
            &["ab", "abc", "cd", "def", "abcd"]
        ));
        assert!(!can_construct(
            "skateboard",
            &["bo", "rd", "ate", "t", "ska", "sk", "boar"]
        ));
        assert!(can_construct(
            "enterapotentpot",
            &["a", "p", "ent", "enter", "ot", "o", "t"]
        ));
    }

    #[test]
    fn empty_target_is_always_constructible() {
        assert!(can_construct("", &["a"]));
        assert!(can_construct("", &[]));
    }

    #[test]
    fn empty_bank_words_are_ignored() {
        assert!(!can_construct("ab", &[""]));
        assert!(can_construct("ab", &["", "ab"]));
    }

    #[test]
    fn pathological_input_terminates() {
        // 52 'e's followed by 'f': the 'f' is never coverable, but the naive
        // tree over the e-prefix is astronomically large.
        let target = "e".repeat(52) + "f";
        let bank = ["e", "ee", "eee", "eeee", "eeeee"];
        assert!(!can_construct(&target, &bank));
    }
}
