//! Implementation of the `#[derive(Prisms)]` macro.
//!
//! Every generated prism is a two-function `FunctionPrism`: `preview`
//! matches the variant and clones its fields out, `review` rebuilds the
//! variant from them.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{Data, DeriveInput, Fields, Generics, Ident, Type, Variant, parse_macro_input};

/// Main implementation of the Prisms derive macro.
pub fn derive_prisms_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let expanded = match &input.data {
        Data::Enum(data_enum) => generate_enum_prisms(
            &input.ident,
            &input.generics,
            &data_enum.variants.iter().collect::<Vec<_>>(),
        ),
        Data::Struct(_) => syn::Error::new_spanned(
            &input.ident,
            "Prisms can only be derived for enums, not structs. Use #[derive(Lenses)] for structs.",
        )
        .into_compile_error(),
        Data::Union(_) => {
            syn::Error::new_spanned(&input.ident, "Prisms cannot be derived for unions.")
                .into_compile_error()
        }
    };

    TokenStream::from(expanded)
}

fn generate_enum_prisms(name: &Ident, generics: &Generics, variants: &[&Variant]) -> TokenStream2 {
    let prism_methods: Vec<TokenStream2> = variants
        .iter()
        .map(|variant| generate_variant_prism(variant))
        .collect();

    let (impl_generics, type_generics, where_clause) = generics.split_for_impl();

    quote! {
        impl #impl_generics #name #type_generics #where_clause {
            #(#prism_methods)*
        }
    }
}

fn generate_variant_prism(variant: &Variant) -> TokenStream2 {
    let variant_name = &variant.ident;
    let method_name = format_ident!("{}_prism", to_snake_case(&variant_name.to_string()));
    let document = format!(" Returns a prism focusing on the `{variant_name}` variant.");

    match &variant.fields {
        Fields::Unit => quote! {
            #[doc = #document]
            #[inline]
            #[must_use]
            pub fn #method_name() -> impl ::optica::optics::Prism<Self, ()> + ::std::clone::Clone {
                ::optica::optics::FunctionPrism::new(
                    |source: &Self| match source {
                        Self::#variant_name => Some(()),
                        #[allow(unreachable_patterns)]
                        _ => None,
                    },
                    |(): ()| Self::#variant_name,
                )
            }
        },

        Fields::Unnamed(fields) if fields.unnamed.len() == 1 => {
            let field_type = &fields.unnamed[0].ty;
            quote! {
                #[doc = #document]
                #[inline]
                #[must_use]
                pub fn #method_name() -> impl ::optica::optics::Prism<Self, #field_type> + ::std::clone::Clone
                where
                    #field_type: ::std::clone::Clone,
                {
                    ::optica::optics::FunctionPrism::new(
                        |source: &Self| match source {
                            Self::#variant_name(value) => Some(::std::clone::Clone::clone(value)),
                            #[allow(unreachable_patterns)]
                            _ => None,
                        },
                        |value: #field_type| Self::#variant_name(value),
                    )
                }
            }
        }

        Fields::Unnamed(fields) => {
            let field_types: Vec<&Type> = fields.unnamed.iter().map(|field| &field.ty).collect();
            let bindings: Vec<Ident> = (0..field_types.len())
                .map(|index| format_ident!("v{}", index))
                .collect();
            let pattern = quote! { Self::#variant_name(#(#bindings),*) };

            generate_tuple_prism(&document, &method_name, &field_types, &bindings, &pattern)
        }

        Fields::Named(fields) => {
            let field_types: Vec<&Type> = fields.named.iter().map(|field| &field.ty).collect();
            let bindings: Vec<&Ident> = fields
                .named
                .iter()
                .filter_map(|field| field.ident.as_ref())
                .collect();
            let pattern = quote! { Self::#variant_name { #(#bindings),* } };

            generate_tuple_prism(&document, &method_name, &field_types, &bindings, &pattern)
        }
    }
}

/// Generates a prism onto a variant with several fields, exposed as a tuple
/// in definition order.
///
/// `pattern` both destructures the variant in `preview` and rebuilds it in
/// `review`, with `bindings` naming the fields in either position.
fn generate_tuple_prism<B: quote::ToTokens>(
    document: &str,
    method_name: &Ident,
    field_types: &[&Type],
    bindings: &[B],
    pattern: &TokenStream2,
) -> TokenStream2 {
    let tuple_type = quote! { (#(#field_types,)*) };

    quote! {
        #[doc = #document]
        #[inline]
        #[must_use]
        pub fn #method_name() -> impl ::optica::optics::Prism<Self, #tuple_type> + ::std::clone::Clone
        where
            #(#field_types: ::std::clone::Clone,)*
        {
            ::optica::optics::FunctionPrism::new(
                |source: &Self| match source {
                    #pattern => Some((#(::std::clone::Clone::clone(#bindings),)*)),
                    #[allow(unreachable_patterns)]
                    _ => None,
                },
                |(#(#bindings,)*): #tuple_type| #pattern,
            )
        }
    }
}

/// Converts a `CamelCase` or `PascalCase` string to `snake_case`.
fn to_snake_case(input: &str) -> String {
    let mut result = String::with_capacity(input.len() + 4);
    let chars: Vec<char> = input.chars().collect();

    for (index, &character) in chars.iter().enumerate() {
        if character.is_uppercase() {
            if index > 0 {
                let previous_char = chars[index - 1];
                let next_is_lowercase = chars.get(index + 1).is_some_and(|c| c.is_lowercase());

                // "keyPress" -> "key_press", "XMLParser" -> "xml_parser"
                if previous_char.is_lowercase() || (previous_char.is_uppercase() && next_is_lowercase)
                {
                    result.push('_');
                }
            }
            result.extend(character.to_lowercase());
        } else {
            result.push(character);
        }
    }

    result
}
