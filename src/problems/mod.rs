//! The classic memoization exercises.
//!
//! Each module is a standalone pure computation: none of them call each
//! other, and each allocates its own [`Memo`](crate::Memo) per top-level
//! invocation.
//!
//! - [`fib`]             : nth Fibonacci number via linear-cache recursion.
//! - [`grid_traveler`]   : count monotone lattice paths on an m×n grid.
//! - [`can_sum`]         : reachability of a target sum with repeatable addends.
//! - [`how_sum`]         : one combination summing to the target.
//! - [`best_sum`]        : shortest combination summing to the target.
//! - [`can_construct`]   : reachability of a string from word-bank pieces.
//! - [`count_construct`] : number of ways to assemble a string from pieces.

pub mod best_sum;
pub mod can_construct;
pub mod can_sum;
pub mod count_construct;
pub mod fib;
pub mod grid_traveler;
pub mod how_sum;
