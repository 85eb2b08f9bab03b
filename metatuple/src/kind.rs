//! The two kinds of metadata entry, at the value level ([`EntryKind`]) and at the type level
//! ([`LeafKind`] and [`GroupKind`]).

use std::fmt;

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

use crate::AnyEntry;

/// The runtime tag of an entry: a [`Leaf`](struct@crate::Leaf) item or a
/// [`Group`](struct@crate::Group).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate", rename_all = "snake_case")
)]
pub enum EntryKind {
    /// A single, atomic metadata item.
    Leaf,
    /// A pre-formed collection of metadata.
    Group,
}

impl EntryKind {
    /// Is this [`EntryKind::Leaf`]?
    pub fn is_leaf(self) -> bool {
        self == EntryKind::Leaf
    }

    /// Is this [`EntryKind::Group`]?
    pub fn is_group(self) -> bool {
        self == EntryKind::Group
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EntryKind::Leaf => write!(f, "leaf"),
            EntryKind::Group => write!(f, "group"),
        }
    }
}

/// A type-level entry kind: either [`LeafKind`] or [`GroupKind`].
///
/// This trait is sealed and cannot be implemented outside this crate.
pub trait Kind: sealed::Kind + Sized + Send + Sync + 'static {
    /// The runtime tag corresponding to this kind.
    const KIND: EntryKind;
}

/// The type-level kind of a leaf item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct LeafKind;

/// The type-level kind of a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct GroupKind;

impl Kind for LeafKind {
    const KIND: EntryKind = EntryKind::Leaf;
}

impl Kind for GroupKind {
    const KIND: EntryKind = EntryKind::Group;
}

/// Put the content `C` of an entry of this kind into the matching case of an [`AnyEntry<L, G>`].
///
/// Leaf content must convert into `L`, group content into `G`.
pub trait Erase<C, L, G>: Kind {
    /// Wrap `content` in the case of [`AnyEntry`] for this kind.
    fn erase(content: C) -> AnyEntry<L, G>;
}

impl<C: Into<L>, L, G> Erase<C, L, G> for LeafKind {
    fn erase(content: C) -> AnyEntry<L, G> {
        AnyEntry::Leaf(content.into())
    }
}

impl<C: Into<G>, L, G> Erase<C, L, G> for GroupKind {
    fn erase(content: C) -> AnyEntry<L, G> {
        AnyEntry::Group(content.into())
    }
}

/// Take the content `C` of an entry of this kind back out of an [`AnyEntry<L, G>`].
pub trait Restore<C, L, G>: Kind {
    /// Extract the content if `entry` is of this kind; otherwise return the entry's actual kind.
    fn restore(entry: AnyEntry<L, G>) -> Result<C, EntryKind>;
}

impl<C, L: Into<C>, G> Restore<C, L, G> for LeafKind {
    fn restore(entry: AnyEntry<L, G>) -> Result<C, EntryKind> {
        match entry {
            AnyEntry::Leaf(leaf) => Ok(leaf.into()),
            AnyEntry::Group(_) => Err(EntryKind::Group),
        }
    }
}

impl<C, L, G: Into<C>> Restore<C, L, G> for GroupKind {
    fn restore(entry: AnyEntry<L, G>) -> Result<C, EntryKind> {
        match entry {
            AnyEntry::Group(group) => Ok(group.into()),
            AnyEntry::Leaf(_) => Err(EntryKind::Leaf),
        }
    }
}

mod sealed {
    pub trait Kind {}
    impl Kind for super::LeafKind {}
    impl Kind for super::GroupKind {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_constants_match_tags() {
        assert_eq!(LeafKind::KIND, EntryKind::Leaf);
        assert_eq!(GroupKind::KIND, EntryKind::Group);
        assert!(EntryKind::Leaf.is_leaf() && !EntryKind::Leaf.is_group());
        assert!(EntryKind::Group.is_group() && !EntryKind::Group.is_leaf());
    }

    #[test]
    fn display_is_lowercase() {
        assert_eq!(EntryKind::Leaf.to_string(), "leaf");
        assert_eq!(EntryKind::Group.to_string(), "group");
    }

    #[test]
    fn erase_picks_the_case_for_the_kind() {
        let leaf: AnyEntry<u64, String> = <LeafKind as Erase<u32, _, _>>::erase(7);
        assert_eq!(leaf, AnyEntry::Leaf(7));

        let group: AnyEntry<u64, String> = <GroupKind as Erase<&str, _, _>>::erase("all");
        assert_eq!(group, AnyEntry::Group("all".to_owned()));
    }

    #[test]
    fn restore_reports_the_kind_actually_found() {
        let found: Result<u64, _> =
            <LeafKind as Restore<_, _, String>>::restore(AnyEntry::<u64, String>::Leaf(3));
        assert_eq!(found, Ok(3));

        let found: Result<u64, _> =
            <LeafKind as Restore<_, u64, String>>::restore(AnyEntry::Group("x".to_owned()));
        assert_eq!(found, Err(EntryKind::Group));

        let found: Result<String, _> =
            <GroupKind as Restore<_, u64, String>>::restore(AnyEntry::Leaf(3));
        assert_eq!(found, Err(EntryKind::Leaf));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_as_snake_case() {
        assert_eq!(serde_json::to_string(&EntryKind::Group).unwrap(), "\"group\"");
        assert_eq!(
            serde_json::from_str::<EntryKind>("\"leaf\"").unwrap(),
            EntryKind::Leaf
        );
    }
}
