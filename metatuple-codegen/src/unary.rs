//! Conversions between `Number<N>` constants and unary type-level numbers.

use {
    proc_macro2::{Literal, Span, TokenStream},
    quote::{quote, ToTokens},
    syn::parse::{Parse, ParseStream, Result},
};

use crate::{crate_ident, parse_bound};

/// The input to `generate_unary_conversion_impls!(N)`: emit `ToUnary` and `ToConstant` impls for
/// every number from `0` to `N` inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnaryImpls {
    /// The largest number to cover.
    pub max: usize,
}

impl Parse for UnaryImpls {
    fn parse(input: ParseStream) -> Result<Self> {
        Ok(UnaryImpls {
            max: parse_bound(input)?,
        })
    }
}

impl UnaryImpls {
    /// The unary spelling of `n`, as in `S<S<Z>>` for `2`.
    pub fn unary_type(n: usize) -> TokenStream {
        let krate = crate_ident(Span::call_site());
        (0..n).fold(quote!(#krate::unary::Z), |inner, _| {
            quote!(#krate::unary::S<#inner>)
        })
    }

    /// The pair of conversion impls for exactly one number.
    pub fn number(n: usize) -> TokenStream {
        let krate = crate_ident(Span::call_site());
        let unary = Self::unary_type(n);
        let n = Literal::usize_unsuffixed(n);
        quote! {
            impl #krate::unary::ToUnary for #krate::unary::Number<#n> {
                type AsUnary = #unary;
            }

            impl #krate::unary::ToConstant for #unary {
                type AsConstant = #krate::unary::Number<#n>;
            }
        }
    }
}

impl ToTokens for UnaryImpls {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        for n in 0..=self.max {
            Self::number(n).to_tokens(tokens);
        }
    }
}
