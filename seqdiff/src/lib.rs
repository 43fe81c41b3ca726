//! Shortest edit script computation over abstract sequences.
//!
//! The solver never sees sequence elements. Callers supply the two sequence
//! lengths and a [`SequenceComparator`] answering whether element `i` of the
//! first sequence equals element `j` of the second; the solver returns the
//! ordered list of [`Change`] regions whose total size is the minimal edit
//! distance between the sequences. A [`granular()`] pass can then absorb short
//! unchanged runs into their surrounding changes, trading precision for
//! readability.
//!
//! ```
//! use seqdiff::{adapters, Change};
//!
//! let changes = adapters::slices(&[1, 2, 3], &[0, 1, 2, 3]);
//! assert_eq!(changes, vec![Change { a: 0, b: 0, del: 0, ins: 1 }]);
//! ```

pub mod adapters;
pub mod change;
pub mod compare;
pub mod granular;
pub mod myers;
pub mod patch;

pub use change::Change;
pub use compare::{SequenceComparator, SlicePair};
pub use granular::granular;
pub use myers::diff;
pub use patch::{apply, PatchError};
