use thiserror::Error;

use crate::EntryKind;

/// The error returned when a runtime [`Sequence`](crate::Sequence) does not have the shape of the
/// [`TupleMetadata`](crate::TupleMetadata) it is being converted into.
///
/// Typed composition never fails; this error only arises on the way back from a runtime
/// sequence, via [`Sequence::try_into_metadata`](crate::Sequence::try_into_metadata).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ShapeError {
    /// The sequence has a different number of entries than the target tuple.
    #[error("expected {expected} entries, found {found}")]
    ArityMismatch {
        /// The arity of the target tuple.
        expected: usize,
        /// The number of entries available.
        found: usize,
    },
    /// The entry at `position` is of the wrong kind.
    #[error("entry {position} is a {found}, but the target expects a {expected}")]
    KindMismatch {
        /// The zero-based position of the first offending entry.
        position: usize,
        /// The kind the target tuple has at that position.
        expected: EntryKind,
        /// The kind actually found there.
        found: EntryKind,
    },
}
