//! `#[derive(Abstraction)]` for structs that embed a `base: Base` field.

use proc_macro::{self, TokenStream};
use quote::quote;
use syn::{parse_macro_input, DeriveInput};

/// Implements `type_identity_bench::Abstraction`.
///
/// The struct must have a field named `base` of type `type_identity_bench::Base`.
#[proc_macro_derive(Abstraction)]
pub fn derive_abstraction(input: TokenStream) -> TokenStream {
    let DeriveInput {
        ident, generics, ..
    } = parse_macro_input!(input);
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();
    let output = quote! {
        impl #impl_generics ::type_identity_bench::Abstraction for #ident #ty_generics #where_clause {
            fn base(&self) -> &::type_identity_bench::Base {
                &self.base
            }
        }
    };
    output.into()
}
