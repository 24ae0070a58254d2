//! Common parsing utilities
//!
//! Shared parsing helpers for consistent attribute syntax across macros.

use syn::{
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    Ident, Token,
};

// =============================================================================
// Comma-separated List Parsing
// =============================================================================

/// Parse a comma-separated list of items
pub fn parse_comma_separated<T: Parse>(input: ParseStream) -> syn::Result<Vec<T>> {
    let items = Punctuated::<T, Token![,]>::parse_terminated(input)?;
    Ok(items.into_iter().collect())
}

// =============================================================================
// Keyword Detection
// =============================================================================

/// Parse `name` or `name = value` where `name` must be one of `keywords`.
///
/// Returns the keyword and whether an `=` follows it.
pub fn parse_keyword(input: ParseStream, keywords: &[&str]) -> syn::Result<(Ident, bool)> {
    let ident: Ident = input.parse()?;
    let name = ident.to_string();
    if !keywords.contains(&name.as_str()) {
        return Err(syn::Error::new(
            ident.span(),
            format!("unknown option `{}`; expected one of: {}", name, keywords.join(", ")),
        ));
    }
    let has_value = input.peek(Token![=]);
    if has_value {
        input.parse::<Token![=]>()?;
    }
    Ok((ident, has_value))
}
