extern crate proc_macro;

use {
    metatuple_codegen::{EntryKind, TupleImpls, UnaryImpls},
    proc_macro::TokenStream,
    quote::ToTokens,
    syn::{parse_macro_input, DeriveInput},
};

/// Mark a type as a leaf metadata item: an opaque, atomic entry whose content is the type itself.
///
/// ```
/// use metatuple::prelude::*;
///
/// #[derive(Leaf)]
/// struct Summary(&'static str);
///
/// assert_eq!(Summary("list users").kind(), EntryKind::Leaf);
/// ```
#[proc_macro_derive(Leaf)]
pub fn derive_leaf(input: TokenStream) -> TokenStream {
    derive(parse_macro_input!(input as DeriveInput), EntryKind::Leaf)
}

/// Mark a type as a metadata group: a pre-formed collection of metadata, opaque to this crate,
/// whose content is the type itself.
///
/// ```
/// use metatuple::prelude::*;
///
/// #[derive(Group)]
/// struct Responses {
///     codes: Vec<u16>,
/// }
///
/// assert_eq!(Responses { codes: vec![200] }.kind(), EntryKind::Group);
/// ```
#[proc_macro_derive(Group)]
pub fn derive_group(input: TokenStream) -> TokenStream {
    derive(parse_macro_input!(input as DeriveInput), EntryKind::Group)
}

fn derive(input: DeriveInput, kind: EntryKind) -> TokenStream {
    match metatuple_codegen::derive_entry(&input, kind) {
        Ok(tokens) => tokens.into(),
        Err(error) => error.to_compile_error().into(),
    }
}

#[doc(hidden)]
#[proc_macro]
pub fn impl_tuples(input: TokenStream) -> TokenStream {
    parse_macro_input!(input as TupleImpls)
        .into_token_stream()
        .into()
}

#[doc(hidden)]
#[proc_macro]
pub fn generate_unary_conversion_impls(input: TokenStream) -> TokenStream {
    parse_macro_input!(input as UnaryImpls)
        .into_token_stream()
        .into()
}
