//! Granularity pass: absorbs short unchanged runs into surrounding changes.

use tracing::debug;

use crate::change::{is_ordered, Change};

/// Merges adjacent changes separated by an unchanged run of at most `level`
/// elements, returning a new list.
///
/// The absorbed run counts as both deleted and re-inserted, so the merged
/// region spans it on both sequences. Merging cascades: a whole cluster of
/// changes with pairwise gaps within `level` collapses into one record.
/// Raising `level` never increases the number of records, and once `level`
/// exceeds every gap the output no longer changes.
///
/// The input must be ordered and non-overlapping, as produced by
/// [`crate::diff`] or a previous `granular` pass.
#[must_use]
pub fn granular(level: usize, changes: &[Change]) -> Vec<Change> {
    debug_assert!(is_ordered(changes), "change list must be ordered");

    let mut merged = Vec::with_capacity(changes.len());
    let mut open: Option<Change> = None;

    for next in changes {
        let Some(cur) = open.as_mut() else {
            open = Some(*next);
            continue;
        };
        let gap = next.a - cur.a_end();
        if gap <= level {
            cur.del = next.a_end() - cur.a;
            cur.ins = next.b_end() - cur.b;
        } else {
            merged.push(*cur);
            *cur = *next;
        }
    }
    if let Some(cur) = open {
        merged.push(cur);
    }

    if merged.len() < changes.len() {
        debug!(
            "granularity {} collapsed {} changes into {}",
            level,
            changes.len(),
            merged.len()
        );
    }
    merged
}
