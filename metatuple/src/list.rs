//! Operations over inductive lists of entries, each defined once by induction on the list.
//!
//! Most users never name these traits directly; they show up as bounds on the methods of
//! [`TupleMetadata`](crate::TupleMetadata) and [`Sequence`](crate::Sequence).

use crate::kind::{Erase, Kind, Restore};
use crate::tuple::HasLength;
use crate::unary::{Unary, S, Z};
use crate::{AnyEntry, Entry, EntryKind, ShapeError};

/// Every element of this list is an [`Entry`].
pub trait EachEntry: HasLength + sealed::EachEntry {
    /// The list of the kinds of each entry, position by position.
    type Kinds;

    /// Append the runtime kind of each entry, in order.
    fn push_kinds(kinds: &mut Vec<EntryKind>);
}

impl EachEntry for () {
    type Kinds = ();

    fn push_kinds(_: &mut Vec<EntryKind>) {}
}

impl<E: Entry, Es: EachEntry> EachEntry for (E, Es) {
    type Kinds = (E::Kind, Es::Kinds);

    fn push_kinds(kinds: &mut Vec<EntryKind>) {
        kinds.push(<E::Kind as Kind>::KIND);
        Es::push_kinds(kinds);
    }
}

/// This list has at least one element.
pub trait NonEmpty: sealed::NonEmpty {}

impl<T, Ts> NonEmpty for (T, Ts) {}

/// Index into a list by a unary position `N`.
///
/// # Examples
///
/// ```
/// use metatuple::list::Select;
/// use metatuple::unary::UnaryOf;
///
/// let list = ("zero", (1, ('2', ())));
/// assert_eq!(*Select::<UnaryOf<2>>::select(&list), '2');
/// ```
///
/// Selecting past the end does not compile:
///
/// ```compile_fail
/// use metatuple::list::Select;
/// use metatuple::unary::UnaryOf;
///
/// let list = ("zero", (1, ()));
/// let _ = Select::<UnaryOf<2>>::select(&list);
/// ```
pub trait Select<N: Unary>: sealed::Select<N> {
    /// The element at position `N`.
    type Selected;

    /// Borrow the element at position `N`.
    fn select(&self) -> &Self::Selected;

    /// Take the element at position `N`, dropping the rest.
    fn into_selected(self) -> Self::Selected;
}

impl<T, Ts> Select<Z> for (T, Ts) {
    type Selected = T;

    fn select(&self) -> &T {
        &self.0
    }

    fn into_selected(self) -> T {
        self.0
    }
}

impl<N: Unary, T, Ts: Select<N>> Select<S<N>> for (T, Ts) {
    type Selected = Ts::Selected;

    fn select(&self) -> &Ts::Selected {
        self.1.select()
    }

    fn into_selected(self) -> Ts::Selected {
        self.1.into_selected()
    }
}

/// Convert each entry of this list into an [`AnyEntry<L, G>`].
pub trait EachErase<L, G>: EachEntry {
    /// Push the erased form of each entry onto `out`, in order.
    fn erase_into(self, out: &mut Vec<AnyEntry<L, G>>);
}

impl<L, G> EachErase<L, G> for () {
    fn erase_into(self, _: &mut Vec<AnyEntry<L, G>>) {}
}

impl<L, G, E, Es> EachErase<L, G> for (E, Es)
where
    E: Entry,
    E::Kind: Erase<E::Content, L, G>,
    Es: EachErase<L, G>,
{
    fn erase_into(self, out: &mut Vec<AnyEntry<L, G>>) {
        let (entry, rest) = self;
        out.push(<E::Kind as Erase<E::Content, L, G>>::erase(
            entry.into_content(),
        ));
        rest.erase_into(out);
    }
}

/// Rebuild this list from [`AnyEntry<L, G>`]s, checking the kind of each.
pub trait EachRestore<L, G>: EachEntry {
    /// Pull one entry per position from `entries`, the first of which sits at `position` in the
    /// overall sequence.
    ///
    /// The caller checks the total arity up front; running out of entries early is still
    /// reported as an [`ArityMismatch`](ShapeError::ArityMismatch) rather than a panic.
    fn restore_from<I>(entries: &mut I, position: usize) -> Result<Self, ShapeError>
    where
        I: Iterator<Item = AnyEntry<L, G>>,
        Self: Sized;
}

impl<L, G> EachRestore<L, G> for () {
    fn restore_from<I>(_: &mut I, _: usize) -> Result<Self, ShapeError>
    where
        I: Iterator<Item = AnyEntry<L, G>>,
    {
        Ok(())
    }
}

impl<L, G, E, Es> EachRestore<L, G> for (E, Es)
where
    E: Entry,
    E::Kind: Restore<E::Content, L, G>,
    Es: EachRestore<L, G>,
{
    fn restore_from<I>(entries: &mut I, position: usize) -> Result<Self, ShapeError>
    where
        I: Iterator<Item = AnyEntry<L, G>>,
    {
        let entry = entries.next().ok_or(ShapeError::ArityMismatch {
            expected: position + <<Self as HasLength>::Length as Unary>::VALUE,
            found: position,
        })?;
        let content = <E::Kind as Restore<E::Content, L, G>>::restore(entry).map_err(|found| {
            ShapeError::KindMismatch {
                position,
                expected: <E::Kind as Kind>::KIND,
                found,
            }
        })?;
        let rest = Es::restore_from(entries, position + 1)?;
        Ok((E::from_content(content), rest))
    }
}

mod sealed {
    use super::*;

    pub trait EachEntry {}
    impl EachEntry for () {}
    impl<E: Entry, Es: EachEntry> EachEntry for (E, Es) {}

    pub trait NonEmpty {}
    impl<T, Ts> NonEmpty for (T, Ts) {}

    pub trait Select<N> {}
    impl<N: Unary, T, Ts> Select<N> for (T, Ts) {}
}
