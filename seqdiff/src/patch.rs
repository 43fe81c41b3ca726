//! Applying a change list to reconstruct the second sequence.

use thiserror::Error;

use crate::change::Change;

/// Errors raised when a change list cannot be applied to its sequences.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PatchError {
    /// A change starts before the end of the previous one.
    #[error("change #{index} out of order: starts at {at}, expected at least {expected}")]
    OutOfOrder {
        /// Position of the offending change in the list.
        index: usize,
        /// Where the change starts in the first sequence.
        at: usize,
        /// Minimum admissible start position.
        expected: usize,
    },
    /// A deleted region runs past the end of the first sequence.
    #[error("change #{index} overruns the source: region ends at {end}, length is {len}")]
    SourceOverrun {
        /// Position of the offending change in the list.
        index: usize,
        /// One past the last deleted index.
        end: usize,
        /// Length of the first sequence.
        len: usize,
    },
    /// An inserted region runs past the end of the second sequence.
    #[error("change #{index} overruns the target: region ends at {end}, length is {len}")]
    TargetOverrun {
        /// Position of the offending change in the list.
        index: usize,
        /// One past the last inserted index.
        end: usize,
        /// Length of the second sequence.
        len: usize,
    },
}

/// Applies `changes` to `a`, taking inserted elements from `b`.
///
/// Each region `[a, a+del)` of the first sequence is replaced with the
/// elements `[b, b+ins)` of the second; unchanged runs are copied through.
/// For a list produced by [`crate::diff`] over `(a, b)` the result equals
/// `b` exactly.
///
/// # Errors
/// Returns a [`PatchError`] if the list is out of order or any region falls
/// outside its sequence. Validation happens before any output is built.
pub fn apply<T: Clone>(a: &[T], b: &[T], changes: &[Change]) -> Result<Vec<T>, PatchError> {
    let mut pos = 0;
    for (index, c) in changes.iter().enumerate() {
        if c.a < pos {
            return Err(PatchError::OutOfOrder {
                index,
                at: c.a,
                expected: pos,
            });
        }
        if c.a_end() > a.len() {
            return Err(PatchError::SourceOverrun {
                index,
                end: c.a_end(),
                len: a.len(),
            });
        }
        if c.b_end() > b.len() {
            return Err(PatchError::TargetOverrun {
                index,
                end: c.b_end(),
                len: b.len(),
            });
        }
        pos = c.a_end();
    }

    let mut out = Vec::with_capacity(b.len());
    let mut ai = 0;
    for c in changes {
        out.extend_from_slice(&a[ai..c.a]);
        out.extend_from_slice(&b[c.b_range()]);
        ai = c.a_end();
    }
    out.extend_from_slice(&a[ai..]);
    Ok(out)
}
