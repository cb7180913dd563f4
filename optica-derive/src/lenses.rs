//! Implementation of the `#[derive(Lenses)]` macro.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{Data, DeriveInput, Field, Fields, Generics, Ident, parse_macro_input};

/// Main implementation of the Lenses derive macro.
pub fn derive_lenses_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let expanded = match &input.data {
        Data::Struct(data_struct) => {
            generate_struct_lenses(&input.ident, &input.generics, &data_struct.fields)
                .unwrap_or_else(syn::Error::into_compile_error)
        }
        Data::Enum(_) => syn::Error::new_spanned(
            &input.ident,
            "Lenses can only be derived for structs, not enums. Use #[derive(Prisms)] for enums.",
        )
        .into_compile_error(),
        Data::Union(_) => {
            syn::Error::new_spanned(&input.ident, "Lenses cannot be derived for unions.")
                .into_compile_error()
        }
    };

    TokenStream::from(expanded)
}

fn generate_struct_lenses(
    name: &Ident,
    generics: &Generics,
    fields: &Fields,
) -> syn::Result<TokenStream2> {
    let named_fields = match fields {
        Fields::Named(named_fields) => named_fields,
        Fields::Unnamed(_) => {
            return Err(syn::Error::new_spanned(
                name,
                "Lenses can only be derived for structs with named fields, not tuple structs.",
            ));
        }
        Fields::Unit => {
            return Err(syn::Error::new_spanned(
                name,
                "Lenses cannot be derived for unit structs (structs with no fields).",
            ));
        }
    };

    let lens_methods = named_fields
        .named
        .iter()
        .map(generate_field_lens)
        .collect::<syn::Result<Vec<_>>>()?;

    let (impl_generics, type_generics, where_clause) = generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics #name #type_generics #where_clause {
            #(#lens_methods)*
        }
    })
}

fn generate_field_lens(field: &Field) -> syn::Result<TokenStream2> {
    let field_name = field
        .ident
        .as_ref()
        .ok_or_else(|| syn::Error::new_spanned(field, "expected a named field"))?;
    let field_type = &field.ty;
    let method_name = format_ident!("{}_lens", field_name);
    let document = format!(" Returns a lens focusing on the `{field_name}` field.");

    Ok(quote! {
        #[doc = #document]
        #[inline]
        #[must_use]
        pub fn #method_name() -> impl ::optica::optics::Lens<Self, #field_type> + ::std::clone::Clone
        where
            #field_type: ::std::clone::Clone,
        {
            ::optica::optics::FunctionLens::new(
                |source: &Self| ::std::clone::Clone::clone(&source.#field_name),
                |mut source: Self, value: #field_type| {
                    source.#field_name = value;
                    source
                },
            )
        }
    })
}
