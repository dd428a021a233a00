//! Memoized dynamic programming, one classic exercise at a time.
//!
//! Every problem in this crate follows the same recipe:
//! 1. Make it work: visualize the problem as a tree, implement the tree with
//!    recursion, treat the leaves as base cases.
//! 2. Make it fast: add a memo table keyed by the recursive-call arguments,
//!    return cached values before branching, store results on the way out.
//!
//! Step 2 turns an exponential recursion tree into a polynomial-time one
//! because the computations are referentially transparent: the same arguments
//! always produce the same result, so a populated cache entry never needs to
//! be invalidated within a call tree.
//!
//! The memo lives in [`Memo`], is allocated fresh per top-level call, and is
//! threaded by `&mut` through the recursion. It is never shared between
//! independent invocations.
//!
//! ## Quick start
//! ```
//! use memo_dp::problems::{can_sum::can_sum, grid_traveler::grid_traveler};
//!
//! assert_eq!(grid_traveler(2, 3), 3);
//! assert!(can_sum(7, &[2, 3]));
//! assert!(!can_sum(7, &[2, 4]));
//! ```
//!
//! ## Built-in problems
//! - [`problems::fib`]             : nth Fibonacci number.
//! - [`problems::grid_traveler`]   : monotone lattice-path counting.
//! - [`problems::can_sum`]         : subset-sum reachability with repetition.
//! - [`problems::how_sum`]         : one witness combination for a target sum.
//! - [`problems::best_sum`]        : shortest witness combination.
//! - [`problems::can_construct`]   : word-bank string reachability.
//! - [`problems::count_construct`] : word-bank partition counting.

pub mod cache;
pub mod problems;

pub use crate::cache::Memo;
