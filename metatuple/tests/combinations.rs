//! Every assignment of leaf/group kinds to every position, for every arity from 1 to 10.
//!
//! The test functions themselves are written by `build.rs`, one per arity, each invoking
//! `check_combination!` once per kind assignment.

use std::fmt::Debug;

use metatuple::kind::{GroupKind, LeafKind};
use metatuple::list::{EachEntry, EachErase, EachRestore, NonEmpty};
use metatuple::prelude::*;
use metatuple::tuple::Tuple;
use metatuple::KindsOf;
use static_assertions::assert_type_eq_all;

/// The entry at a given position: leaves carry their position as a number, groups as a string.
macro_rules! entry {
    (leaf $position:literal) => {
        Leaf::<u32>($position)
    };
    (group $position:literal) => {
        Group::<String>(stringify!($position).to_owned())
    };
}

macro_rules! entry_type {
    (leaf) => { Leaf<u32> };
    (group) => { Group<String> };
}

macro_rules! kind_marker {
    (leaf) => {
        LeafKind
    };
    (group) => {
        GroupKind
    };
}

macro_rules! entry_kind {
    (leaf) => {
        EntryKind::Leaf
    };
    (group) => {
        EntryKind::Group
    };
}

macro_rules! check_combination {
    ($($kind:ident $position:literal),+) => {{
        type Entries = ($(entry_type!($kind),)+);
        assert_type_eq_all!(KindsOf<Entries>, ($(kind_marker!($kind),)+));

        let entries = || -> Entries { ($(entry!($kind $position),)+) };
        check(compose(entries()), entries(), &[$(entry_kind!($kind)),+]);
    }};
}

fn check<T>(meta: TupleMetadata<T>, entries: T, kinds: &[EntryKind])
where
    T: Tuple + Clone + PartialEq + Debug,
    T::AsList: EachEntry
        + NonEmpty
        + EachErase<u32, String>
        + EachRestore<u32, String>
        + Clone
        + PartialEq
        + Debug,
{
    // Length and kinds, in declaration order.
    assert_eq!(meta.len(), kinds.len());
    assert_eq!(TupleMetadata::<T>::LEN, kinds.len());
    assert_eq!(meta.kinds(), kinds);

    // Composing the same entries again gives an equal composite.
    assert_eq!(meta, compose(entries.clone()));

    // Every position holds what was passed there.
    assert_eq!(meta.clone().into_inner(), entries);

    // Erasing keeps order, kinds and values.
    let sequence: Sequence<u32, String> = meta.clone().into_sequence();
    assert_eq!(sequence.kinds(), kinds);
    for (position, entry) in sequence.iter().enumerate() {
        match entry {
            AnyEntry::Leaf(leaf) => assert_eq!(*leaf as usize, position),
            AnyEntry::Group(group) => assert_eq!(group, &position.to_string()),
        }
    }

    // And restoring gives back the very same composite.
    assert_eq!(sequence.try_into_metadata::<T>(), Ok(meta));
}

#[test]
fn scenarios() {
    check_combination!(leaf 0);
    check_combination!(leaf 0, group 1);
    check_combination!(group 0, group 1, leaf 2);
}

include!(concat!(env!("OUT_DIR"), "/combinations.rs"));
