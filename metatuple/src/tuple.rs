//! Conversions back and forth between flat tuples and their corresponding inductive list
//! structures.
//!
//! Internally, this library uses inductive lists `(T0, (T1, (T2, ())))`, but presents an external
//! interface in terms of tuples `(T0, T1, T2)`, for readability. The traits here convert between
//! the two equivalent representations, at the type level and at the value level.
//!
//! At present, tuples up to size [`MAX_ARITY`] are supported.
//!
//! # Examples
//!
//! ```
//! use metatuple::tuple::{List, Tuple};
//!
//! let list = ('a', 2, "three").into_list();
//! assert_eq!(list, ('a', (2, ("three", ()))));
//! assert_eq!(list.into_tuple(), ('a', 2, "three"));
//! ```

use super::unary::*;

/// The largest tuple which can be converted into a list, and therefore the largest number of
/// entries a [`TupleMetadata`](crate::TupleMetadata) can hold.
pub const MAX_ARITY: usize = 32;

/// Convert a tuple into its corresponding inductive list structure.
pub trait Tuple: Sized {
    /// The corresponding inductive list.
    type AsList: List<AsTuple = Self>;

    /// Convert this tuple value into the list value holding the same elements in the same order.
    fn into_list(self) -> Self::AsList;
}

/// Convert an inductive list structure into its corresponding tuple.
pub trait List: Sized {
    /// The corresponding tuple.
    type AsTuple: Tuple<AsList = Self>;

    /// Convert this list value into the tuple value holding the same elements in the same order.
    fn into_tuple(self) -> Self::AsTuple;
}

/// Take the length of a type-level list as a unary type-level number.
///
/// # Examples
///
/// ```
/// use metatuple::tuple::HasLength;
/// use metatuple::unary::Unary;
///
/// assert_eq!(<<(u8, (u8, ())) as HasLength>::Length as Unary>::VALUE, 2);
/// ```
pub trait HasLength {
    /// The length of a type-level list.
    type Length: Unary;
}

impl HasLength for () {
    type Length = Z;
}

impl<T, Ts: HasLength> HasLength for (T, Ts) {
    type Length = S<Ts::Length>;
}

metatuple_macro::impl_tuples!(32);

#[cfg(test)]
mod tests {
    use super::*;
    use static_assertions::{assert_impl_all, assert_type_eq_all};

    assert_type_eq_all!(<() as Tuple>::AsList, ());
    assert_type_eq_all!(<(u8,) as Tuple>::AsList, (u8, ()));
    assert_type_eq_all!(<(u8, (u16, ())) as List>::AsTuple, (u8, u16));
    assert_impl_all!(
        (
            u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8,
            u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8,
        ): Tuple
    );

    #[test]
    fn singleton_round_trip() {
        assert_eq!(("only",).into_list(), ("only", ()));
        assert_eq!(("only", ()).into_tuple(), ("only",));
    }

    #[test]
    fn empty_round_trip() {
        let () = ().into_list();
        let () = ().into_tuple();
    }

    #[test]
    fn order_is_kept() {
        let tuple = (1, 2, 3, 4, 5, 6, 7, 8, 9, 10);
        let list = tuple.into_list();
        assert_eq!(list.0, 1);
        assert_eq!((list.1).0, 2);
        assert_eq!(list.into_tuple(), tuple);
    }
}
