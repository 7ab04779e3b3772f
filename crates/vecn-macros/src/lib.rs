//! Procedural macros used by `vecn` and `vecn-linalg`.
//!
//! Do not use this crate directly, use `vecn` instead.

use std::collections::HashSet;

use itertools::Itertools;
use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::{format_ident, quote};
use syn::{
    bracketed,
    parse::{Error, Parse, ParseStream},
    parse_macro_input,
    punctuated::Punctuated,
    ItemFn, LitInt, LitStr, Token,
};

/// Marks the entry point of a `vecn` application.
///
/// The annotated `main` function runs after logging has been initialized with
/// `vecn::init_logger!()`. It may return anything `main` could return, eg. `anyhow::Result<()>`.
#[proc_macro_attribute]
pub fn main(args: TokenStream, item: TokenStream) -> TokenStream {
    match expand_main(args, item.clone()) {
        Ok(tokens) => tokens,
        Err(err) => {
            // Emit the original item too, so that errors inside of it are still reported.
            let mut error = item;
            error.extend(TokenStream::from(err.to_compile_error()));
            error
        }
    }
}

fn expand_main(args: TokenStream, item: TokenStream) -> syn::Result<TokenStream> {
    if !args.is_empty() {
        return Err(Error::new(
            Span::call_site(),
            "`#[vecn::main]` does not accept arguments",
        ));
    }

    let item = syn::parse::<ItemFn>(item)?;
    if item.sig.ident != "main" {
        return Err(Error::new(
            item.sig.ident.span(),
            "`#[vecn::main]` must be applied to a function called `main`",
        ));
    }
    if !item.sig.inputs.is_empty() {
        return Err(Error::new(
            item.sig.ident.span(),
            "`main` must not take any arguments",
        ));
    }

    let output = &item.sig.output;
    Ok(quote! {
        fn main() #output {
            #item

            ::vecn::init_logger!();

            main()
        }
    }
    .into())
}

/// Generates the swizzle accessor methods of `Vector<T, N>`.
///
/// Invoked as `swizzles!(N, ["xyzw", "rgba", ...])`. For every alias table, in the given order,
/// and every length `k` from 1 to `N`, one method is emitted per ordered selection of `k`
/// component indices (with repetition). Length-1 accessors return the element itself, longer
/// ones return a new `Vector<T, k>`.
///
/// The expansion refers to `crate::Vector`, so this macro only works inside `vecn-linalg`.
#[proc_macro]
pub fn swizzles(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as SwizzleInput);
    match expand_swizzles(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

struct SwizzleInput {
    dim: LitInt,
    tables: Vec<LitStr>,
}

impl Parse for SwizzleInput {
    fn parse(input: ParseStream<'_>) -> syn::Result<Self> {
        let dim = input.parse()?;
        input.parse::<Token![,]>()?;
        let content;
        bracketed!(content in input);
        let tables = Punctuated::<LitStr, Token![,]>::parse_terminated(&content)?;
        input.parse::<Option<Token![,]>>()?;
        Ok(Self {
            dim,
            tables: tables.into_iter().collect(),
        })
    }
}

fn expand_swizzles(input: SwizzleInput) -> syn::Result<proc_macro2::TokenStream> {
    let dim = input.dim.base10_parse::<usize>()?;
    if dim == 0 {
        return Err(Error::new(input.dim.span(), "vector dimension must be at least 1"));
    }

    let mut tables = Vec::new();
    for lit in &input.tables {
        let chars = lit.value().chars().collect::<Vec<_>>();
        if chars.len() < dim {
            return Err(Error::new(
                lit.span(),
                format!("alias table names {} components, need {dim}", chars.len()),
            ));
        }
        tables.push(chars);
    }

    let accessors = enumerate_accessors(dim, &tables).map_err(|name| {
        Error::new(
            Span::call_site(),
            format!("swizzle `{name}` is generated by more than one alias table"),
        )
    })?;

    let names = accessors.iter().map(|(name, _)| name);
    let methods = accessors.iter().map(|(name, indices)| {
        let ident = format_ident!("{}", name);
        let doc = format!(
            "Returns component{} {:?} as `{name}`.",
            if indices.len() == 1 { "" } else { "s" },
            indices,
        );
        if let [index] = indices.as_slice() {
            quote! {
                #[doc = #doc]
                #[inline]
                pub fn #ident(&self) -> T {
                    self[#index]
                }
            }
        } else {
            let len = indices.len();
            let indices = indices.iter();
            quote! {
                #[doc = #doc]
                #[inline]
                pub fn #ident(&self) -> crate::Vector<T, #len> {
                    crate::Vector::from([#(self[#indices]),*])
                }
            }
        }
    });

    Ok(quote! {
        impl<T: Copy> crate::Vector<T, #dim> {
            /// Names of the generated swizzle accessor methods, in generation order.
            pub const SWIZZLE_NAMES: &'static [&'static str] = &[#(#names),*];

            #(#methods)*
        }
    })
}

/// Enumerates `(name, indices)` for every accessor, skipping tables whose names are not
/// identifiers.
///
/// Returns the offending name if two tables produce the same accessor.
fn enumerate_accessors(
    dim: usize,
    tables: &[Vec<char>],
) -> Result<Vec<(String, Vec<usize>)>, String> {
    let mut seen = HashSet::new();
    let mut accessors = Vec::new();
    for table in tables {
        if !table.iter().all(|c| c.is_ascii_alphabetic() || *c == '_') {
            continue;
        }

        for len in 1..=dim {
            for indices in itertools::repeat_n(0..dim, len).multi_cartesian_product() {
                let name = indices.iter().map(|&i| table[i]).collect::<String>();
                if !seen.insert(name.clone()) {
                    return Err(name);
                }
                accessors.push((name, indices));
            }
        }
    }
    Ok(accessors)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tables(tables: &[&str]) -> Vec<Vec<char>> {
        tables.iter().map(|t| t.chars().collect()).collect()
    }

    #[test]
    fn counts() {
        let acc = enumerate_accessors(2, &tables(&["xyzw"])).unwrap();
        let names = acc.iter().map(|(n, _)| n.as_str()).collect::<Vec<_>>();
        assert_eq!(names, ["x", "y", "xx", "xy", "yx", "yy"]);

        let acc = enumerate_accessors(4, &tables(&["xyzw", "rgba", "stpq"])).unwrap();
        assert_eq!(acc.len(), 3 * (4 + 16 + 64 + 256));
    }

    #[test]
    fn skips_numeric_tables() {
        let acc = enumerate_accessors(3, &tables(&["0123", "xyzw"])).unwrap();
        assert!(acc.iter().all(|(name, _)| !name.starts_with(char::is_numeric)));
        assert_eq!(acc.len(), 3 + 9 + 27);
    }

    #[test]
    fn indices() {
        let acc = enumerate_accessors(3, &tables(&["rgba"])).unwrap();
        let (_, indices) = acc.iter().find(|(name, _)| name == "bgr").unwrap();
        assert_eq!(indices, &[2, 1, 0]);
    }

    #[test]
    fn collision() {
        assert_eq!(
            enumerate_accessors(2, &tables(&["xyzw", "yxab"])),
            Err("y".to_string())
        );
    }
}
