//! The nth Fibonacci number.
//!
//! The naive recursion `fib(n-1) + fib(n-2)` revisits the same subproblems
//! over and over: O(2^n) time, O(n) stack. Caching each computed term turns
//! it into O(n) time and O(n) space.

use crate::cache::Memo;

/// Returns the nth term of the Fibonacci sequence: fib(1) = fib(2) = 1,
/// fib(k) = fib(k-1) + fib(k-2).
///
/// `fib(0)` is defined as 0, the standard extension of the sequence.
/// `u64` holds every term through `fib(93)`; beyond that the sum overflows.
pub fn fib(n: u64) -> u64 {
    #[cfg(feature = "tracing")]
    let span = tracing::trace_span!("fib", n);
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    let mut memo = Memo::with_capacity(n as usize);
    fib_memo(n, &mut memo)
}

fn fib_memo(n: u64, memo: &mut Memo<u64, u64>) -> u64 {
    if n == 0 {
        return 0;
    }
    if n <= 2 {
        return 1;
    }
    if let Some(&hit) = memo.get(&n) {
        return hit;
    }
    let sum = fib_memo(n - 1, memo) + fib_memo(n - 2, memo);
    *memo.insert(n, sum)
}
