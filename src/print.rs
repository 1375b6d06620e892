use crate::QualifiedName;

use proc_macro2::{Ident, Span, TokenStream};
use quote::{quote, ToTokens, TokenStreamExt};
use ref_cast::RefCast;

#[derive(RefCast)]
#[repr(C)]
pub(crate) struct Print<T>(T);

impl ToTokens for Print<QualifiedName> {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let segments = self
            .0
            .segments()
            .iter()
            .map(|segment| Ident::new(segment, Span::call_site()));
        tokens.append_all(quote!(#(#segments)::*));
    }
}
