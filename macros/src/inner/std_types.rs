//! Standard library type definitions for `SwapCaps` auto-generation.
//!
//! Single source of truth for the std impls. To cover a type, add it here.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum TypeKind {
    Concrete,
    Generic(&'static str),
}

/// How a table entry answers one fact.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Fact {
    Yes,
    No,
    /// Same answer as the named type parameter.
    Param(&'static str),
    /// Conjunction of the named type parameters' answers.
    All(&'static [&'static str]),
}

use Fact::*;
use TypeKind::*;

/// One row: type, generics, then `TakeNoPanic`, `Cloneable`, `DropNoPanic`.
pub type Row = (&'static str, TypeKind, Fact, Fact, Fact);

const CAPS: &str = "T: ::error_or::probe::SwapCaps";
const KEY_VALUE_CAPS: &str = "K: ::error_or::probe::SwapCaps, V: ::error_or::probe::SwapCaps";
const KV: &[&str] = &["K", "V"];

/// Largest tuple arity with an impl.
pub const MAX_TUPLE_ARITY: usize = 12;

/// Primitive types (always available). Every fact holds.
pub const PRIMITIVE_TYPES: &[&str] = &[
    "()", "bool", "char",
    "u8", "u16", "u32", "u64", "u128", "usize",
    "i8", "i16", "i32", "i64", "i128", "isize",
    "f32", "f64",
];

/// Core types (always available).
pub const CORE_TYPES: &[Row] = &[
    // NonZero has no Default, so nothing can be left behind
    ("core::num::NonZeroU8", Concrete, No, Yes, Yes),
    ("core::num::NonZeroU16", Concrete, No, Yes, Yes),
    ("core::num::NonZeroU32", Concrete, No, Yes, Yes),
    ("core::num::NonZeroU64", Concrete, No, Yes, Yes),
    ("core::num::NonZeroU128", Concrete, No, Yes, Yes),
    ("core::num::NonZeroUsize", Concrete, No, Yes, Yes),
    ("core::num::NonZeroI8", Concrete, No, Yes, Yes),
    ("core::num::NonZeroI16", Concrete, No, Yes, Yes),
    ("core::num::NonZeroI32", Concrete, No, Yes, Yes),
    ("core::num::NonZeroI64", Concrete, No, Yes, Yes),
    ("core::num::NonZeroI128", Concrete, No, Yes, Yes),
    ("core::num::NonZeroIsize", Concrete, No, Yes, Yes),

    ("core::time::Duration", Concrete, Yes, Yes, Yes),
    ("core::cmp::Ordering", Concrete, No, Yes, Yes),
    ("core::convert::Infallible", Concrete, No, Yes, Yes),
    ("core::marker::PhantomPinned", Concrete, Yes, Yes, Yes),

    // Atomics have Default but no Clone
    ("core::sync::atomic::AtomicBool", Concrete, Yes, No, Yes),
    ("core::sync::atomic::AtomicU32", Concrete, Yes, No, Yes),
    ("core::sync::atomic::AtomicU64", Concrete, Yes, No, Yes),
    ("core::sync::atomic::AtomicUsize", Concrete, Yes, No, Yes),
    ("core::sync::atomic::AtomicI32", Concrete, Yes, No, Yes),
    ("core::sync::atomic::AtomicI64", Concrete, Yes, No, Yes),
    ("core::sync::atomic::AtomicIsize", Concrete, Yes, No, Yes),

    // Option leaves None behind
    ("Option<T>", Generic(CAPS), Yes, Param("T"), Param("T")),
    // Result has no Default
    (
        "Result<T, E>",
        Generic("T: ::error_or::probe::SwapCaps, E: ::error_or::probe::SwapCaps"),
        No,
        All(&["T", "E"]),
        All(&["T", "E"]),
    ),
    ("core::num::Wrapping<T>", Generic(CAPS), Param("T"), Param("T"), Param("T")),
    ("core::num::Saturating<T>", Generic(CAPS), Param("T"), Param("T"), Param("T")),
    ("core::cmp::Reverse<T>", Generic(CAPS), Param("T"), Param("T"), Param("T")),
    ("core::ops::Range<T>", Generic(CAPS), Param("T"), Param("T"), Param("T")),
    ("core::ops::RangeInclusive<T>", Generic(CAPS), No, Param("T"), Param("T")),
    ("core::mem::ManuallyDrop<T>", Generic(CAPS), Param("T"), Param("T"), Yes),
    // Arrays: Default only exists for short lengths
    ("[T; N]", Generic("T: ::error_or::probe::SwapCaps, const N: usize"), No, Param("T"), Param("T")),

    // Cell is Clone only for Copy payloads
    ("core::cell::Cell<T>", Generic(CAPS), Param("T"), No, Param("T")),
    ("core::cell::RefCell<T>", Generic(CAPS), Param("T"), Param("T"), Param("T")),
    ("core::cell::OnceCell<T>", Generic(CAPS), Yes, Param("T"), Param("T")),

    ("&'a T", Generic("'a, T: ?Sized"), No, Yes, Yes),
    ("&'a mut T", Generic("'a, T: ?Sized"), No, No, Yes),
    ("core::marker::PhantomData<T>", Generic("T: ?Sized"), Yes, Yes, Yes),
];

/// Alloc types (requires "alloc" feature).
pub const ALLOC_TYPES: &[Row] = &[
    ("alloc::string::String", Concrete, Yes, Yes, Yes),
    ("alloc::vec::Vec<T>", Generic(CAPS), Yes, Param("T"), Param("T")),
    ("alloc::collections::VecDeque<T>", Generic(CAPS), Yes, Param("T"), Param("T")),
    ("alloc::collections::LinkedList<T>", Generic(CAPS), Yes, Param("T"), Param("T")),
    ("alloc::collections::BinaryHeap<T>", Generic(CAPS), Yes, Param("T"), Param("T")),
    ("alloc::collections::BTreeSet<T>", Generic(CAPS), Yes, Param("T"), Param("T")),
    ("alloc::collections::BTreeMap<K, V>", Generic(KEY_VALUE_CAPS), Yes, All(KV), All(KV)),
    // Box/Rc/Arc::default build a T::default()
    ("alloc::boxed::Box<T>", Generic(CAPS), Param("T"), Param("T"), Param("T")),
    ("alloc::boxed::Box<str>", Concrete, Yes, Yes, Yes),
    ("alloc::boxed::Box<[T]>", Generic(CAPS), Yes, Param("T"), Param("T")),
    ("alloc::rc::Rc<T>", Generic(CAPS), Param("T"), Yes, Param("T")),
    ("alloc::rc::Rc<str>", Concrete, No, Yes, Yes),
    ("alloc::sync::Arc<T>", Generic(CAPS), Param("T"), Yes, Param("T")),
    ("alloc::sync::Arc<str>", Concrete, No, Yes, Yes),
    // Owned side of a Cow is a std buffer type
    (
        "alloc::borrow::Cow<'a, B>",
        Generic("'a, B: ?Sized + alloc::borrow::ToOwned + 'a"),
        No,
        Yes,
        Yes,
    ),
];

/// Std types (requires "std" feature).
pub const STD_TYPES: &[Row] = &[
    ("std::io::Error", Concrete, No, No, Yes),
    ("std::path::PathBuf", Concrete, Yes, Yes, Yes),
    ("std::ffi::OsString", Concrete, Yes, Yes, Yes),
    ("std::ffi::CString", Concrete, Yes, Yes, Yes),
    ("std::time::Instant", Concrete, No, Yes, Yes),
    ("std::time::SystemTime", Concrete, No, Yes, Yes),
    ("std::net::IpAddr", Concrete, No, Yes, Yes),
    ("std::net::Ipv4Addr", Concrete, No, Yes, Yes),
    ("std::net::Ipv6Addr", Concrete, No, Yes, Yes),
    ("std::net::SocketAddr", Concrete, No, Yes, Yes),
    ("std::fs::File", Concrete, No, No, Yes),
    (
        "std::collections::HashMap<K, V, S>",
        Generic("K: ::error_or::probe::SwapCaps, V: ::error_or::probe::SwapCaps, S"),
        Yes,
        All(KV),
        All(KV),
    ),
    ("std::collections::HashSet<T, S>", Generic("T: ::error_or::probe::SwapCaps, S"), Yes, Param("T"), Param("T")),
    // Locks have no Clone; their Default builds a T::default()
    ("std::sync::Mutex<T>", Generic(CAPS), Param("T"), No, Param("T")),
    ("std::sync::RwLock<T>", Generic(CAPS), Param("T"), No, Param("T")),
    ("std::sync::OnceLock<T>", Generic(CAPS), Yes, Param("T"), Param("T")),
];

fn param_fact(param: &str, name: &str) -> TokenStream {
    let param = format_ident!("{}", param);
    let name = format_ident!("{}", name);
    quote! { <#param as ::error_or::probe::SwapCaps>::#name }
}

/// `<<A as SwapCaps>::F as Bool>::And<<B as SwapCaps>::F>...`, `Present` when empty.
fn all_facts<'p>(params: impl IntoIterator<Item = &'p str>, name: &str) -> TokenStream {
    params.into_iter().fold(quote! { ::error_or::Present }, |acc, param| {
        let fact = param_fact(param, name);
        quote! { <#acc as ::error_or::Bool>::And<#fact> }
    })
}

fn fact_tokens(fact: Fact, name: &str) -> TokenStream {
    match fact {
        Yes => quote! { ::error_or::Present },
        No => quote! { ::error_or::Absent },
        Param(param) => param_fact(param, name),
        All(params) => all_facts(params.iter().copied(), name),
    }
}

fn expand_impl(
    generics: TokenStream,
    ty: TokenStream,
    facts: [TokenStream; 3],
    cfg: &TokenStream,
) -> TokenStream {
    let [take, clone, drop] = facts;
    quote! {
        #cfg
        impl #generics ::error_or::probe::SwapCaps for #ty {
            type CustomExchange = ::error_or::Absent;
            type ExchangeNoPanic = ::error_or::Present;
            type TakeNoPanic = #take;
            type Cloneable = #clone;
            type DropNoPanic = #drop;
        }
    }
}

fn expand_row(row: &Row, cfg: &TokenStream) -> TokenStream {
    let (ty, kind, take, clone, drop) = *row;
    let ty: syn::Type = syn::parse_str(ty).expect("std type table holds valid types");
    let generics = match kind {
        Concrete => quote! {},
        Generic(params) => {
            let params: TokenStream = params.parse().expect("std type table holds valid generics");
            quote! { <#params> }
        }
    };
    let facts = [
        fact_tokens(take, "TakeNoPanic"),
        fact_tokens(clone, "Cloneable"),
        fact_tokens(drop, "DropNoPanic"),
    ];
    expand_impl(generics, quote! { #ty }, facts, cfg)
}

/// Tuples answer with the conjunction over their elements.
fn expand_tuple(arity: usize) -> TokenStream {
    let names: Vec<String> = (0..arity).map(|i| format!("T{}", i)).collect();
    let idents: Vec<_> = names.iter().map(|name| format_ident!("{}", name)).collect();
    let generics = quote! { <#(#idents: ::error_or::probe::SwapCaps),*> };
    let ty = quote! { (#(#idents,)*) };
    let facts = [
        all_facts(names.iter().map(String::as_str), "TakeNoPanic"),
        all_facts(names.iter().map(String::as_str), "Cloneable"),
        all_facts(names.iter().map(String::as_str), "DropNoPanic"),
    ];
    expand_impl(generics, ty, facts, &quote! {})
}

/// Generate `SwapCaps` impls for every table entry.
pub fn expand_std_swap_caps() -> TokenStream {
    let mut impls = Vec::new();

    for ty in PRIMITIVE_TYPES {
        impls.push(expand_row(&(*ty, Concrete, Yes, Yes, Yes), &quote! {}));
    }
    for row in CORE_TYPES {
        impls.push(expand_row(row, &quote! {}));
    }
    for arity in 1..=MAX_TUPLE_ARITY {
        impls.push(expand_tuple(arity));
    }
    for row in ALLOC_TYPES {
        impls.push(expand_row(row, &quote! { #[cfg(feature = "alloc")] }));
    }
    for row in STD_TYPES {
        impls.push(expand_row(row, &quote! { #[cfg(feature = "std")] }));
    }

    quote! { #(#impls)* }
}
