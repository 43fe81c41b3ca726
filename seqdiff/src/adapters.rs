//! Entry points for concrete sequence types.
//!
//! Thin shims translating slices and strings into the comparator the solver
//! works against. No algorithmic logic lives here.

use crate::change::Change;
use crate::compare::SlicePair;
use crate::myers;

/// Diffs two slices of comparable elements.
#[must_use]
pub fn slices<T: PartialEq>(a: &[T], b: &[T]) -> Vec<Change> {
    myers::diff(a.len(), b.len(), &SlicePair::new(a, b))
}

/// Diffs two strings character by character.
///
/// Indices in the returned changes count `char`s, not bytes.
#[must_use]
pub fn chars(a: &str, b: &str) -> Vec<Change> {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    slices(&a, &b)
}

/// Diffs the raw bytes of two strings without collecting them.
#[must_use]
pub fn byte_strings(a: &str, b: &str) -> Vec<Change> {
    slices(a.as_bytes(), b.as_bytes())
}
