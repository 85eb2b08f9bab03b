use std::fmt::Debug;
use std::hash::Hash;

use crate::list::{EachEntry, EachErase, NonEmpty, Select};
use crate::tuple::{HasLength, List, Tuple};
use crate::unary::{Number, ToUnary, Unary, UnaryOf};
use crate::{EntryKind, Group, Sequence};

/// An ordered, fixed-length, heterogeneous composite of metadata entries.
///
/// The tuple `T` lists the entries, each of which is either a [`Leaf`](struct@crate::Leaf) item
/// or a [`Group`](struct@Group) (or any other [`Entry`](crate::Entry)). The length of the
/// composite and the kind at each position are part of its type, fixed when it is built by
/// [`compose`](fn@crate::compose), and cannot change afterwards: no method hands out mutable
/// access to the entries.
///
/// # Examples
///
/// ```
/// use metatuple::prelude::*;
///
/// let meta = compose((Group(["a", "b"]), Group(["c"]), Leaf(3)));
///
/// assert_eq!(TupleMetadata::<(Group<[&str; 2]>, Group<[&str; 1]>, Leaf<i32>)>::LEN, 3);
/// assert_eq!(meta.kinds(), [EntryKind::Group, EntryKind::Group, EntryKind::Leaf]);
/// assert_eq!(meta.into_inner(), (Group(["a", "b"]), Group(["c"]), Leaf(3)));
/// ```
#[derive(Derivative)]
#[derivative(
    Debug(bound = "T::AsList: Debug"),
    Clone(bound = "T::AsList: Clone"),
    Copy(bound = "T::AsList: Copy"),
    PartialEq(bound = "T::AsList: PartialEq"),
    Eq(bound = "T::AsList: Eq"),
    Hash(bound = "T::AsList: Hash")
)]
pub struct TupleMetadata<T: Tuple> {
    entries: T::AsList,
}

/// The type-level kinds of the entries in the tuple `T`, as a tuple of
/// [`LeafKind`](crate::kind::LeafKind)s and [`GroupKind`](crate::kind::GroupKind)s.
///
/// # Examples
///
/// ```
/// use metatuple::kind::{GroupKind, LeafKind};
/// use metatuple::{Group, KindsOf, Leaf};
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(KindsOf<(Leaf<u8>, Group<()>)>, (LeafKind, GroupKind));
/// ```
pub type KindsOf<T> = <<<T as Tuple>::AsList as EachEntry>::Kinds as List>::AsTuple;

/// Compose a tuple of entries into a [`TupleMetadata`].
///
/// The tuple may have any arity from 1 to [`MAX_ARITY`](crate::MAX_ARITY), and every position
/// may independently be a leaf item or a group. The entries are moved into the result unchanged
/// and in order. This cannot fail.
///
/// # Examples
///
/// ```
/// use metatuple::prelude::*;
///
/// let meta = compose((Leaf("a"),));
/// assert_eq!(meta.kinds(), [EntryKind::Leaf]);
///
/// let meta = compose((Leaf("a"), Group(vec!["b", "c"])));
/// assert_eq!(meta.kinds(), [EntryKind::Leaf, EntryKind::Group]);
/// ```
///
/// Only entries can be composed:
///
/// ```compile_fail
/// use metatuple::prelude::*;
///
/// let meta = compose((Leaf("a"), "b"));
/// ```
///
/// And there must be at least one of them:
///
/// ```compile_fail
/// use metatuple::prelude::*;
///
/// let meta = compose(());
/// ```
pub fn compose<T>(entries: T) -> TupleMetadata<T>
where
    T: Tuple,
    T::AsList: EachEntry + NonEmpty,
{
    TupleMetadata::new(entries)
}

impl<T> TupleMetadata<T>
where
    T: Tuple,
    T::AsList: EachEntry + NonEmpty,
{
    /// Compose a tuple of entries. This is the same as [`compose`](fn@crate::compose).
    pub fn new(entries: T) -> Self {
        TupleMetadata {
            entries: entries.into_list(),
        }
    }

    pub(crate) fn from_list(entries: T::AsList) -> Self {
        TupleMetadata { entries }
    }

    /// The number of entries.
    pub const LEN: usize = <<T::AsList as HasLength>::Length as Unary>::VALUE;

    /// The number of entries; always [`Self::LEN`].
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        Self::LEN
    }

    /// The kind of each entry, in order.
    pub fn kinds(&self) -> Vec<EntryKind> {
        let mut kinds = Vec::with_capacity(Self::LEN);
        <T::AsList as EachEntry>::push_kinds(&mut kinds);
        kinds
    }

    /// Borrow the entry at position `I`.
    ///
    /// Asking for a position past the end does not compile.
    ///
    /// # Examples
    ///
    /// ```
    /// use metatuple::prelude::*;
    ///
    /// let meta = compose!(Leaf('x'), Group("yz"));
    /// assert_eq!(meta.get::<0>(), &Leaf('x'));
    /// assert_eq!(meta.get::<1>(), &Group("yz"));
    /// ```
    ///
    /// ```compile_fail
    /// use metatuple::prelude::*;
    ///
    /// let meta = compose!(Leaf('x'), Group("yz"));
    /// let _ = meta.get::<2>();
    /// ```
    pub fn get<const I: usize>(&self) -> &<T::AsList as Select<UnaryOf<I>>>::Selected
    where
        Number<I>: ToUnary,
        T::AsList: Select<UnaryOf<I>>,
    {
        <T::AsList as Select<UnaryOf<I>>>::select(&self.entries)
    }

    /// Borrow the entries as an inductive list.
    pub fn as_list(&self) -> &T::AsList {
        &self.entries
    }

    /// Give back the tuple of entries, each exactly as it was passed to
    /// [`compose`](fn@crate::compose).
    pub fn into_inner(self) -> T {
        self.entries.into_tuple()
    }

    /// Wrap this composite as a [`Group`](struct@Group), so it can be nested inside another.
    ///
    /// Nothing is flattened: the outer composite sees one opaque group entry.
    ///
    /// ```
    /// use metatuple::prelude::*;
    ///
    /// let inner = compose!(Leaf(1), Leaf(2));
    /// let outer = compose!(Leaf(0), inner.into_group());
    /// assert_eq!(outer.len(), 2);
    /// assert_eq!(outer.get::<1>().0.len(), 2);
    /// ```
    pub fn into_group(self) -> Group<Self> {
        Group(self)
    }

    /// Erase the static shape, giving a [`Sequence`] of the same entries in the same order.
    ///
    /// Each leaf's content is converted into `L` and each group's into `G`.
    ///
    /// ```
    /// use metatuple::prelude::*;
    ///
    /// let meta = compose!(Leaf(1_u8), Group("rest"), Leaf(2_u16));
    /// let sequence: Sequence<u32, String> = meta.into_sequence();
    /// assert_eq!(
    ///     sequence.into_entries(),
    ///     [AnyEntry::Leaf(1), AnyEntry::Group("rest".to_owned()), AnyEntry::Leaf(2)],
    /// );
    /// ```
    pub fn into_sequence<L, G>(self) -> Sequence<L, G>
    where
        T::AsList: EachErase<L, G>,
    {
        let mut entries = Vec::with_capacity(Self::LEN);
        self.entries.erase_into(&mut entries);
        tracing::trace!(len = entries.len(), "erased metadata tuple into a sequence");
        Sequence::new(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::{GroupKind, LeafKind};
    use crate::Leaf;
    use static_assertions::{assert_impl_all, assert_not_impl_any, assert_type_eq_all};
    use std::collections::HashSet;
    use std::rc::Rc;

    assert_type_eq_all!(KindsOf<(Leaf<u8>,)>, (LeafKind,));
    assert_type_eq_all!(
        KindsOf<(Group<u8>, Group<u8>, Leaf<u8>)>,
        (GroupKind, GroupKind, LeafKind)
    );
    assert_impl_all!(TupleMetadata<(Leaf<u8>, Group<u8>)>: Copy, Eq, Hash, Send, Sync);
    assert_not_impl_any!(TupleMetadata<(Leaf<Rc<u8>>,)>: Copy, Send, Sync);

    #[test]
    fn single_leaf() {
        let meta = compose((Leaf("a"),));
        assert_eq!(meta.len(), 1);
        assert_eq!(meta.kinds(), [EntryKind::Leaf]);
        assert_eq!(meta.into_inner(), (Leaf("a"),));
    }

    #[test]
    fn leaf_then_group() {
        let meta = compose((Leaf("a"), Group("b")));
        assert_eq!(meta.kinds(), [EntryKind::Leaf, EntryKind::Group]);
        assert_eq!(meta.get::<0>(), &Leaf("a"));
        assert_eq!(meta.get::<1>(), &Group("b"));
    }

    #[test]
    fn group_group_leaf() {
        let meta = compose((Group("a"), Group("b"), Leaf("c")));
        assert_eq!(
            meta.kinds(),
            [EntryKind::Group, EntryKind::Group, EntryKind::Leaf]
        );
        assert_eq!(meta.into_inner(), (Group("a"), Group("b"), Leaf("c")));
    }

    #[test]
    fn same_entries_compose_equal() {
        let first = compose!(Leaf(1), Group(vec![2, 3]));
        let second = compose!(Leaf(1), Group(vec![2, 3]));
        assert_eq!(first, second);

        let mut seen = HashSet::new();
        assert!(seen.insert(first));
        assert!(!seen.insert(second));
    }

    #[test]
    fn list_view_matches_positions() {
        let meta = compose!(Leaf('a'), Group("bc"), Leaf(3));
        let list = meta.as_list();
        assert_eq!(list, &(Leaf('a'), (Group("bc"), (Leaf(3), ()))));
        assert!(std::ptr::eq(&(list.1).0, meta.get::<1>()));
    }

    #[test]
    fn order_is_significant() {
        assert_ne!(compose!(Leaf(1), Leaf(2)), compose!(Leaf(2), Leaf(1)));
    }

    #[test]
    fn entries_are_moved_not_copied() {
        let leaf = Rc::new("summary");
        let group = Rc::new(vec!["x", "y"]);
        let meta = compose!(Leaf(Rc::clone(&leaf)), Group(Rc::clone(&group)));
        let (Leaf(leaf_back), Group(group_back)) = meta.into_inner();
        assert!(Rc::ptr_eq(&leaf, &leaf_back));
        assert!(Rc::ptr_eq(&group, &group_back));
    }

    #[test]
    fn largest_arity() {
        let meta = compose((
            Leaf(0),
            Group(1),
            Leaf(2),
            Group(3),
            Leaf(4),
            Group(5),
            Leaf(6),
            Group(7),
            Leaf(8),
            Group(9),
            Leaf(10),
            Group(11),
            Leaf(12),
            Group(13),
            Leaf(14),
            Group(15),
            Leaf(16),
            Group(17),
            Leaf(18),
            Group(19),
            Leaf(20),
            Group(21),
            Leaf(22),
            Group(23),
            Leaf(24),
            Group(25),
            Leaf(26),
            Group(27),
            Leaf(28),
            Group(29),
            Leaf(30),
            Group(31),
        ));
        assert_eq!(meta.len(), crate::MAX_ARITY);
        assert_eq!(meta.get::<31>(), &Group(31));
        assert!(meta
            .kinds()
            .iter()
            .enumerate()
            .all(|(i, kind)| kind.is_leaf() == (i % 2 == 0)));
    }

    #[test]
    fn nested_group_stays_opaque() {
        let inner = compose!(Leaf(1), Leaf(2), Leaf(3));
        let outer = compose!(inner.into_group(), Leaf(4));
        assert_eq!(outer.len(), 2);
        assert_eq!(outer.kinds(), [EntryKind::Group, EntryKind::Leaf]);
        assert_eq!(outer.get::<0>().0, inner);
    }

    #[test]
    fn debug_shows_entries_in_order() {
        let meta = compose!(Leaf(1), Group("g"));
        let rendered = format!("{:?}", meta);
        let leaf = rendered.find("Leaf(1)").unwrap();
        let group = rendered.find("Group(\"g\")").unwrap();
        assert!(leaf < group);
    }
}
