//! Conversions between flat tuples and inductive lists, one pair of impls per arity.

use {
    proc_macro2::{Span, TokenStream},
    quote::{format_ident, quote, ToTokens},
    syn::parse::{Parse, ParseStream, Result},
};

use crate::{crate_ident, parse_bound};

/// The input to `impl_tuples!(N)`: emit `Tuple` and `List` impls for every arity from `0` to `N`
/// inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TupleImpls {
    /// The largest arity to cover.
    pub max: usize,
}

impl Parse for TupleImpls {
    fn parse(input: ParseStream) -> Result<Self> {
        Ok(TupleImpls {
            max: parse_bound(input)?,
        })
    }
}

impl TupleImpls {
    /// The `Tuple` and `List` impls for exactly one arity.
    pub fn arity(arity: usize) -> TokenStream {
        let krate = crate_ident(Span::call_site());
        let types = (0..arity)
            .map(|i| format_ident!("T{}", i))
            .collect::<Vec<_>>();
        let values = (0..arity)
            .map(|i| format_ident!("t{}", i))
            .collect::<Vec<_>>();

        // (T0, (T1, (T2, ()))) and the matching value pattern
        let list_type = types
            .iter()
            .rev()
            .fold(quote!(()), |tail, head| quote!((#head, #tail)));
        let list_value = values
            .iter()
            .rev()
            .fold(quote!(()), |tail, head| quote!((#head, #tail)));

        quote! {
            impl<#(#types),*> #krate::tuple::Tuple for (#(#types,)*) {
                type AsList = #list_type;

                #[inline]
                fn into_list(self) -> Self::AsList {
                    let (#(#values,)*) = self;
                    #list_value
                }
            }

            impl<#(#types),*> #krate::tuple::List for #list_type {
                type AsTuple = (#(#types,)*);

                #[inline]
                fn into_tuple(self) -> Self::AsTuple {
                    let #list_value = self;
                    (#(#values,)*)
                }
            }
        }
    }
}

impl ToTokens for TupleImpls {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        for arity in 0..=self.max {
            Self::arity(arity).to_tokens(tokens);
        }
    }
}
