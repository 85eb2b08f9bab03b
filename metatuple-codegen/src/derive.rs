//! The `#[derive(Leaf)]` and `#[derive(Group)]` entry markers.

use {
    proc_macro2::TokenStream,
    quote::quote_spanned,
    syn::{spanned::Spanned, Data, DeriveInput, Error},
};

use crate::{crate_ident, CodegenError};

/// Which kind of entry a derive marks its type as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    /// `#[derive(Leaf)]`
    Leaf,
    /// `#[derive(Group)]`
    Group,
}

impl EntryKind {
    fn derive_name(self) -> &'static str {
        match self {
            EntryKind::Leaf => "Leaf",
            EntryKind::Group => "Group",
        }
    }

    fn marker(self) -> &'static str {
        match self {
            EntryKind::Leaf => "LeafKind",
            EntryKind::Group => "GroupKind",
        }
    }
}

/// Implement `Entry` for the derive input, with the type itself as its content.
pub fn derive_entry(input: &DeriveInput, kind: EntryKind) -> Result<TokenStream, Error> {
    if let Data::Union(union) = &input.data {
        return Err(Error::new(
            union.union_token.span(),
            CodegenError::Union {
                derive: kind.derive_name(),
            },
        ));
    }

    let span = input.ident.span();
    let krate = crate_ident(span);
    let marker = syn::Ident::new(kind.marker(), span);
    let name = &input.ident;
    let (impl_generics, type_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote_spanned! {span=>
        impl #impl_generics #krate::Entry for #name #type_generics #where_clause {
            type Kind = #krate::kind::#marker;
            type Content = Self;

            #[inline]
            fn into_content(self) -> Self::Content {
                self
            }

            #[inline]
            fn from_content(content: Self::Content) -> Self {
                content
            }
        }
    })
}
