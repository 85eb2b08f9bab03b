//! Token generation for the procedural macros of the `metatuple` crate.
//!
//! Everything here operates on [`proc_macro2`] token streams so that it can be exercised from
//! ordinary tests; the `metatuple-macro` crate is a thin shim which forwards
//! [`proc_macro::TokenStream`]s into and out of these functions.
//!
//! [`proc_macro::TokenStream`]: https://doc.rust-lang.org/proc_macro/struct.TokenStream.html

#![warn(missing_docs)]
#![warn(missing_copy_implementations, missing_debug_implementations)]
#![warn(unused_qualifications, unused_results)]
#![warn(future_incompatible)]
#![warn(unused)]

use {
    lazy_static::lazy_static,
    proc_macro2::Span,
    proc_macro_crate::FoundCrate,
    syn::Ident,
    thiserror::Error,
};

mod derive;
mod tuples;
mod unary;

pub use derive::{derive_entry, EntryKind};
pub use tuples::TupleImpls;
pub use unary::UnaryImpls;

/// The largest arity any of the generators will agree to emit impls for.
pub const ARITY_LIMIT: usize = 256;

/// Reasons a macro invocation is rejected before any code is generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum CodegenError {
    /// The requested number of impls exceeds [`ARITY_LIMIT`].
    #[error("cannot generate impls up to {requested}: the limit is {limit}")]
    ArityLimit {
        /// The arity written at the call site.
        requested: usize,
        /// The largest arity accepted.
        limit: usize,
    },
    /// An entry derive was applied to a `union`.
    #[error("`{derive}` cannot be derived for unions")]
    Union {
        /// The name of the derive that was attempted.
        derive: &'static str,
    },
}

/// The identifier by which generated code refers to the `metatuple` crate at the call site.
///
/// Within `metatuple` itself this is still `metatuple`, since the crate declares
/// `extern crate self as metatuple;`.
pub fn crate_ident(span: Span) -> Ident {
    lazy_static! {
        static ref CRATE_NAME: String = match proc_macro_crate::crate_name("metatuple") {
            Ok(FoundCrate::Name(name)) => name,
            Ok(FoundCrate::Itself) | Err(_) => "metatuple".to_owned(),
        };
    }

    Ident::new(&**CRATE_NAME, span)
}

/// Parse a bound of the form `N` (a non-negative integer literal) and check it against
/// [`ARITY_LIMIT`].
fn parse_bound(input: syn::parse::ParseStream) -> syn::Result<usize> {
    let literal = input.parse::<syn::LitInt>()?;
    let requested = literal.base10_parse::<usize>()?;
    if requested > ARITY_LIMIT {
        return Err(syn::Error::new(
            literal.span(),
            CodegenError::ArityLimit {
                requested,
                limit: ARITY_LIMIT,
            },
        ));
    }
    Ok(requested)
}
