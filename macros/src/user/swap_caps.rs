//! `#[derive(SwapCaps)]`
//!
//! | Option                  | Effect                                               |
//! |-------------------------|------------------------------------------------------|
//! | `exchange = path`       | `fn(&mut Self, &mut Self)` replaces the fallback     |
//! | `exchange_may_panic`    | that exchange can panic (`ExchangeNoPanic = Absent`) |
//! | `take`                  | `Default` exists and cannot panic                    |
//! | `clone`                 | a copy exists (detected for non-generic types)       |
//! | `drop_may_panic`        | overrides the per-field drop answer with `Absent`    |
//! | `drop_no_panic`         | overrides the per-field drop answer with `Present`   |
//!
//! `DropNoPanic` is the conjunction of the field types' answers, so a
//! struct holding a type whose drop can panic inherits that. Either drop
//! override skips the per-field answer, so fields need not be `SwapCaps`.

use proc_macro2::TokenStream;
use quote::quote;
use syn::parse::{Parse, ParseStream};
use syn::{Data, DeriveInput, Path, Type};

use crate::common::{parse_comma_separated, parse_keyword};

const OPTIONS: &[&str] = &[
    "exchange",
    "exchange_may_panic",
    "take",
    "clone",
    "drop_may_panic",
    "drop_no_panic",
];

/// One option inside `#[swap_caps(...)]`.
enum SwapCapsOption {
    Exchange(Path),
    ExchangeMayPanic,
    Take,
    Clone,
    DropMayPanic,
    DropNoPanic,
}

impl Parse for SwapCapsOption {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let (ident, has_value) = parse_keyword(input, OPTIONS)?;
        let name = ident.to_string();
        match (name.as_str(), has_value) {
            ("exchange", true) => Ok(SwapCapsOption::Exchange(input.parse()?)),
            ("exchange", false) => Err(syn::Error::new(
                ident.span(),
                "`exchange` needs a function path: `exchange = path::to::fn`",
            )),
            (_, true) => Err(syn::Error::new(ident.span(), format!("`{}` takes no value", name))),
            ("exchange_may_panic", false) => Ok(SwapCapsOption::ExchangeMayPanic),
            ("take", false) => Ok(SwapCapsOption::Take),
            ("clone", false) => Ok(SwapCapsOption::Clone),
            ("drop_may_panic", false) => Ok(SwapCapsOption::DropMayPanic),
            _ => Ok(SwapCapsOption::DropNoPanic),
        }
    }
}

#[derive(Default)]
struct SwapCapsOptions {
    exchange: Option<Path>,
    exchange_may_panic: bool,
    take: bool,
    clone: bool,
    drop_may_panic: bool,
    drop_no_panic: bool,
}

impl SwapCapsOptions {
    fn from_attrs(attrs: &[syn::Attribute]) -> syn::Result<Self> {
        let mut options = SwapCapsOptions::default();
        let mut may_panic_attr = None;
        let mut drop_attr = None;

        for attr in attrs.iter().filter(|attr| attr.path().is_ident("swap_caps")) {
            for option in attr.parse_args_with(parse_comma_separated::<SwapCapsOption>)? {
                match option {
                    SwapCapsOption::Exchange(path) => {
                        if options.exchange.is_some() {
                            return Err(syn::Error::new_spanned(path, "duplicate `exchange` option"));
                        }
                        options.exchange = Some(path);
                    }
                    SwapCapsOption::ExchangeMayPanic => {
                        options.exchange_may_panic = true;
                        may_panic_attr = Some(attr);
                    }
                    SwapCapsOption::Take => options.take = true,
                    SwapCapsOption::Clone => options.clone = true,
                    SwapCapsOption::DropMayPanic => options.drop_may_panic = true,
                    SwapCapsOption::DropNoPanic => {
                        options.drop_no_panic = true;
                        drop_attr = Some(attr);
                    }
                }
            }
        }

        if let (Some(attr), None) = (may_panic_attr, &options.exchange) {
            return Err(syn::Error::new_spanned(
                attr,
                "`exchange_may_panic` needs `exchange = ...`; the fallback exchange cannot panic",
            ));
        }
        if let (Some(attr), true) = (drop_attr, options.drop_may_panic) {
            return Err(syn::Error::new_spanned(
                attr,
                "`drop_no_panic` and `drop_may_panic` are mutually exclusive",
            ));
        }
        Ok(options)
    }
}

fn field_types(input: &DeriveInput) -> syn::Result<Vec<&Type>> {
    match &input.data {
        Data::Struct(data) => Ok(data.fields.iter().map(|field| &field.ty).collect()),
        Data::Enum(data) => Ok(data
            .variants
            .iter()
            .flat_map(|variant| variant.fields.iter().map(|field| &field.ty))
            .collect()),
        Data::Union(data) => Err(syn::Error::new(
            data.union_token.span,
            "SwapCaps cannot be derived for unions",
        )),
    }
}

fn bool_tokens(value: bool) -> TokenStream {
    if value {
        quote! { ::error_or::Present }
    } else {
        quote! { ::error_or::Absent }
    }
}

pub fn expand_derive_swap_caps(input: DeriveInput) -> TokenStream {
    match try_expand(&input) {
        Ok(tokens) => tokens,
        Err(err) => err.to_compile_error(),
    }
}

fn try_expand(input: &DeriveInput) -> syn::Result<TokenStream> {
    let name = &input.ident;
    let options = SwapCapsOptions::from_attrs(&input.attrs)?;
    let fields = field_types(input)?;
    let is_generic = input.generics.type_params().next().is_some()
        || input.generics.const_params().next().is_some();

    // Drop: AND over the fields unless overridden.
    let mut generics = input.generics.clone();
    let drop_no_panic = if options.drop_may_panic {
        quote! { ::error_or::Absent }
    } else if options.drop_no_panic {
        quote! { ::error_or::Present }
    } else {
        if is_generic {
            let where_clause = generics.make_where_clause();
            for ty in &fields {
                where_clause
                    .predicates
                    .push(syn::parse_quote! { #ty: ::error_or::probe::SwapCaps });
            }
        }
        fields.iter().fold(quote! { ::error_or::Present }, |acc, ty| {
            quote! {
                <#acc as ::error_or::Bool>::And<<#ty as ::error_or::probe::SwapCaps>::DropNoPanic>
            }
        })
    };
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    // Clone: explicit, or detected when the type is concrete.
    let (clone_probe, cloneable) = if options.clone {
        (quote! {}, quote! { ::error_or::Present })
    } else if is_generic {
        (quote! {}, quote! { ::error_or::Absent })
    } else {
        (
            quote! {
                #[allow(unused_imports)]
                use ::error_or::probe::detect::CloneFallback;
                const IS_CLONE: bool = ::error_or::probe::detect::Detect::<#name>::IS_CLONE;
            },
            quote! { <() as ::error_or::primitives::SelectBool<{ IS_CLONE }>>::Out },
        )
    };

    let (custom_exchange, exchange_fn) = match &options.exchange {
        Some(path) => (
            quote! { ::error_or::Present },
            quote! {
                #[inline]
                fn exchange(a: &mut Self, b: &mut Self) {
                    #path(a, b)
                }
            },
        ),
        None => (quote! { ::error_or::Absent }, quote! {}),
    };
    let exchange_no_panic = bool_tokens(!options.exchange_may_panic);
    let take_no_panic = bool_tokens(options.take);

    Ok(quote! {
        const _: () = {
            #clone_probe

            impl #impl_generics ::error_or::probe::SwapCaps for #name #ty_generics #where_clause {
                type CustomExchange = #custom_exchange;
                type ExchangeNoPanic = #exchange_no_panic;
                type TakeNoPanic = #take_no_panic;
                type Cloneable = #cloneable;
                type DropNoPanic = #drop_no_panic;

                #exchange_fn
            }
        };
    })
}
