/*!
> **metatuple (crate):** Fixed-arity, statically kinded tuples of metadata entries.

A metadata composition layer often needs to gather a handful of already-built entries into one
value while remembering, *in the type*, how many there were and what each one was. Every entry
is one of two kinds:

- a **leaf**, a single opaque metadata item; or
- a **group**, a pre-formed collection of metadata that this crate treats as just as opaque.

[`compose`](fn@crate::compose) takes a tuple of such entries, of any arity from 1 to
[`MAX_ARITY`] and any mix of kinds, and wraps it into a [`TupleMetadata`]. Nothing is validated
or rearranged: the composite holds exactly the values it was given, in the order it was given
them, and its type spells out the kind at every position.

```
use metatuple::prelude::*;
use metatuple::kind::{GroupKind, LeafKind};
use metatuple::KindsOf;
use static_assertions::assert_type_eq_all;

let meta = compose!(Leaf("summary"), Group(vec![200, 404]), Leaf("tag"));

assert_eq!(meta.len(), 3);
assert_eq!(meta.kinds(), [EntryKind::Leaf, EntryKind::Group, EntryKind::Leaf]);
assert_eq!(meta.get::<1>(), &Group(vec![200, 404]));

type Meta = MetadataTuple![Leaf<&'static str>, Group<Vec<i32>>, Leaf<&'static str>];
assert_type_eq_all!(
    KindsOf<(Leaf<&'static str>, Group<Vec<i32>>, Leaf<&'static str>)>,
    (LeafKind, GroupKind, LeafKind),
);
let _: Meta = meta;
```

The per-arity work amounts to converting between flat tuples and inductive lists (see the
[`tuple`] module); every other operation is written once, by induction over the list.

## Runtime sequences

When the shape is only known at runtime, [`AnyEntry`] is the two-case variant of an entry and
[`Sequence`] is an ordered run of them. A [`TupleMetadata`] can be erased into a [`Sequence`]
with [`into_sequence`](TupleMetadata::into_sequence), and a [`Sequence`] can be checked back into
a typed [`TupleMetadata`] with [`try_into_metadata`](Sequence::try_into_metadata), which reports
a [`ShapeError`] when the arity or a kind does not line up.

## Features

- `serde` (on by default): `Serialize` and `Deserialize` for the entry wrappers, [`EntryKind`],
  [`AnyEntry`] and [`Sequence`].
*/

#![allow(clippy::type_complexity)]
#![warn(missing_docs)]
#![warn(missing_copy_implementations, missing_debug_implementations)]
#![warn(unused_results)]
#![warn(future_incompatible)]
#![warn(unused)]
// Documentation configuration
#![forbid(broken_intra_doc_links)]
#![cfg_attr(docsrs, feature(doc_cfg))]

// Lets the procedural macros name this crate as `metatuple` from inside it, too.
extern crate self as metatuple;

#[macro_use]
extern crate derivative;

/// Compose a positional list of entries into a [`TupleMetadata`].
///
/// `compose!(a, b, c)` is [`compose`](fn@crate::compose)`((a, b, c))`; a single entry becomes a
/// 1-tuple.
///
/// ```
/// use metatuple::prelude::*;
///
/// let one = compose!(Leaf(1));
/// assert_eq!(one.into_inner(), (Leaf(1),));
///
/// let two = compose!(Leaf(1), Group("rest"));
/// assert_eq!(two.kinds(), [EntryKind::Leaf, EntryKind::Group]);
/// ```
///
/// Composing nothing is rejected at compile time:
///
/// ```compile_fail
/// use metatuple::prelude::*;
///
/// let none = compose!();
/// ```
#[macro_export]
macro_rules! compose {
    ($($entry:expr),+ $(,)?) => {
        $crate::compose(($($entry,)+))
    };
}

/// Name the [`TupleMetadata`] type for a positional list of entry types.
///
/// ```
/// use metatuple::prelude::*;
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(
///     MetadataTuple![Leaf<u8>, Group<String>],
///     TupleMetadata<(Leaf<u8>, Group<String>)>,
/// );
/// ```
#[macro_export]
macro_rules! MetadataTuple {
    ($($entry:ty),+ $(,)?) => {
        $crate::TupleMetadata<($($entry,)+)>
    };
}

pub mod kind;
pub mod list;
pub mod tuple;
pub mod unary;

mod entry;
mod error;
mod metadata;
mod sequence;

pub use entry::{Entry, Group, Leaf};
pub use error::ShapeError;
pub use kind::EntryKind;
pub use metadata::{compose, KindsOf, TupleMetadata};
pub use metatuple_macro::{Group, Leaf};
pub use sequence::{compose_all, AnyEntry, Sequence};
pub use tuple::MAX_ARITY;

/// The prelude module for quickly getting started with metatuple.
///
/// This module is designed to be imported as `use metatuple::prelude::*;`.
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::{
        compose, compose_all, AnyEntry, Entry, EntryKind, Group, Leaf, MetadataTuple, Sequence,
        ShapeError, TupleMetadata,
    };
}
