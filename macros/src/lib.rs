//! Procedural macros for the seqext rebinding resolver.
//!
//! | Macro | Target | Purpose |
//! |-------|--------|---------|
//! | `#[derive(Rebind)]` | struct/enum | Implement the rebinding rule for a carrier kind |
//! | `#[rebind(as = Kind)]` | container attribute | Explicit override: name the analogous kind |
//!
//! ## Resolution order
//!
//! 1. If the type carries `#[rebind(as = Kind)]`, the generated impl names
//!    `Kind<U>` directly. The override wins even when the type is itself
//!    parameterized by its element type.
//! 2. Otherwise the type must have at least one type parameter; the first
//!    one is taken to be the element type and is substituted, all other
//!    generic parameters are left unchanged.
//! 3. A non-parameterized type without the override cannot be rebound and
//!    is rejected with a compile error — before anything runs.
//!
//! ```ignore
//! // Structural rule: mapping a MyStack lands in a MyStack.
//! #[derive(Rebind)]
//! struct MyStack<T>(Vec<T>);
//!
//! // Explicit override: mapping an IntRow lands in a LinkedList.
//! #[derive(Rebind)]
//! #[rebind(as = std::collections::LinkedList)]
//! struct IntRow(Vec<i32>);
//! ```

use proc_macro::TokenStream;
use quote::quote;
use syn::parse::ParseStream;
use syn::{DeriveInput, GenericParam, Path, Token, parse_macro_input};

/// Implement `seqext::Rebind` for a carrier kind.
///
/// See the crate-level docs for the resolution order. The generated impl
/// requires the type (and, under the structural rule, every `Self<U>`) to
/// implement `seqext::Carrier`; a kind whose carrier impl only exists for
/// specific element types fails right there, at binding time.
#[proc_macro_derive(Rebind, attributes(rebind))]
pub fn derive_rebind(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand_rebind(input)
        .unwrap_or_else(|err| err.to_compile_error())
        .into()
}

fn expand_rebind(input: DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    // Rule (a): explicit override. Checked first so it shadows the
    // structural rule on parameterized kinds too.
    if let Some(kind) = override_kind(&input)? {
        return Ok(quote! {
            impl #impl_generics ::seqext::Rebind for #name #ty_generics #where_clause {
                type Of<U> = #kind<U>;
            }
        });
    }

    // Rule (b): structural substitution of the first type parameter.
    let Some(elem) = input.generics.type_params().next() else {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "cannot rebind a kind with no element type parameter; \
             name the analogous kind with #[rebind(as = Kind)]",
        ));
    };
    let elem_ident = elem.ident.clone();

    let rebound_args = input.generics.params.iter().map(|param| match param {
        GenericParam::Lifetime(lt) => {
            let lt = &lt.lifetime;
            quote!(#lt)
        }
        GenericParam::Type(ty) if ty.ident == elem_ident => quote!(U),
        GenericParam::Type(ty) => {
            let ident = &ty.ident;
            quote!(#ident)
        }
        GenericParam::Const(ct) => {
            let ident = &ct.ident;
            quote!(#ident)
        }
    });

    Ok(quote! {
        impl #impl_generics ::seqext::Rebind for #name #ty_generics #where_clause {
            type Of<U> = #name<#(#rebound_args),*>;
        }
    })
}

/// Parse `#[rebind(as = Kind)]`, if present.
///
/// `as` is a keyword, so the arguments are parsed token by token rather
/// than through the nested-meta helpers.
fn override_kind(input: &DeriveInput) -> syn::Result<Option<Path>> {
    let mut kind = None;
    for attr in &input.attrs {
        if !attr.path().is_ident("rebind") {
            continue;
        }
        kind = Some(attr.parse_args_with(|args: ParseStream| {
            args.parse::<Token![as]>()?;
            args.parse::<Token![=]>()?;
            args.parse::<Path>()
        })?);
    }
    Ok(kind)
}
