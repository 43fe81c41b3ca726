//! Greedy shortest-edit-script solver.
//!
//! Implements the O((N+M)·D) algorithm from Eugene Myers' "An O(ND)
//! Difference Algorithm and Its Variations" (1986): a forward diagonal
//! search over the edit graph, a backtrace over the retained per-distance
//! history, and a coalescing pass that folds the chronological edit path
//! into contiguous change regions.

pub mod algorithm;

pub use algorithm::diff;
