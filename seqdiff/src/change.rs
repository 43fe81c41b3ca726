//! The change record produced by the solver.
//!
//! A [`Change`] is one contiguous edit region: `del` elements removed from
//! the first sequence starting at `a`, and `ins` elements inserted from the
//! second sequence starting at `b`. Downstream renderers consume the
//! serialized field names `A`, `B`, `Del`, `Ins` as a wire contract, so the
//! serde derive pins them.

use std::ops::Range;

use serde::{Deserialize, Serialize};

/// A single contiguous edit region.
///
/// A produced list is ordered by ascending `a` (equivalently ascending `b`),
/// non-overlapping, and maximal: no two adjacent records can be merged
/// without crossing at least one unchanged element. [`crate::granular()`]
/// deliberately relaxes maximality under a threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Change {
    /// Index into the first sequence where the region starts.
    pub a: usize,
    /// Index into the second sequence where the region starts.
    pub b: usize,
    /// Count of consecutive elements removed from the first sequence at `a`.
    pub del: usize,
    /// Count of consecutive elements inserted from the second sequence at `b`.
    pub ins: usize,
}

impl Change {
    /// Creates a change record.
    #[must_use]
    pub const fn new(a: usize, b: usize, del: usize, ins: usize) -> Self {
        Self { a, b, del, ins }
    }

    /// One past the last removed index in the first sequence.
    #[must_use]
    pub const fn a_end(&self) -> usize {
        self.a + self.del
    }

    /// One past the last inserted index in the second sequence.
    #[must_use]
    pub const fn b_end(&self) -> usize {
        self.b + self.ins
    }

    /// The removed region of the first sequence.
    #[must_use]
    pub const fn a_range(&self) -> Range<usize> {
        self.a..self.a_end()
    }

    /// The inserted region of the second sequence.
    #[must_use]
    pub const fn b_range(&self) -> Range<usize> {
        self.b..self.b_end()
    }

    /// Returns true if the record denotes no edit at all.
    ///
    /// The solver never produces such a record; the check exists for
    /// validating externally supplied lists.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.del == 0 && self.ins == 0
    }
}

/// Returns true if the list is ordered and non-overlapping on both sequences.
#[must_use]
pub fn is_ordered(changes: &[Change]) -> bool {
    changes.windows(2).all(|w| {
        w[1].a >= w[0].a_end() && w[1].b >= w[0].b_end()
    })
}
