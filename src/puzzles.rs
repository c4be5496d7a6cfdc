//! Standalone puzzle solvers: each is a pure function over its own small input.

pub mod concat;
pub mod egg_drop;
pub mod interleave;
pub mod knapsack;
pub mod primes;
pub mod subarray;
