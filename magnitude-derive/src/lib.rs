//! Derive macro implementation used by `magnitude-core`.
//!
//! `magnitude-derive` is an implementation detail of this workspace. The `Unit` derive expands in
//! terms of `crate::Unit`, `crate::Ratio`, `crate::Composition`, … so it is intended to be used by
//! `magnitude-core` (or by crates that expose an identical crate-root API).
//!
//! Most users should depend on `magnitude` instead and use the predefined units.
//!
//! # Attributes
//!
//! The derive reads a required `#[unit(...)]` attribute in one of two forms.
//!
//! A **base unit** measures one base dimension:
//!
//! - `symbol = "kg"`: displayed unit symbol
//! - `dimension = Mass`: a `BaseDimension` variant
//! - `ratio = 1000`: exact conversion ratio to the reference unit of the dimension; an integer
//!   expression, or `numerator / denominator` for fractions (`ratio = 1 / 1000`)
//!
//! and gets `crate::Unit` plus `crate::BaseUnit`.
//!
//! A **derived unit** is a product of base units raised to non-zero integer exponents:
//!
//! - `symbol = "N"`: displayed unit symbol
//! - `factors(Kilogram = 1, Meter = 1, Second = -2)`: the constituents, in display order
//!
//! and gets `crate::Unit` with its ratio and dimensions computed from the constituents.

#![deny(missing_docs)]
#![forbid(unsafe_code)]

use proc_macro::TokenStream;
use proc_macro2::{Literal, TokenStream as TokenStream2};
use quote::quote;
use syn::{
    parenthesized,
    parse::{Parse, ParseStream},
    parse_macro_input, Attribute, BinOp, DeriveInput, Expr, ExprBinary, Ident, Lit, LitInt, LitStr,
    Path, Token,
};

/// Derive `crate::Unit` (and `crate::BaseUnit` for base units).
///
/// The derive must be paired with a `#[unit(...)]` attribute providing `symbol` and either
/// `dimension` + `ratio` or `factors(...)`.
///
/// This macro is intended for use by `magnitude-core`.
#[proc_macro_derive(Unit, attributes(unit))]
pub fn derive_unit(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match derive_unit_impl(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn derive_unit_impl(input: DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;

    let unit_attr = parse_unit_attribute(&input.attrs)?;
    let symbol = &unit_attr.symbol;

    let expanded = match &unit_attr.kind {
        UnitKind::Base { dimension, ratio } => {
            let ratio = ratio_tokens(ratio)?;
            quote! {
                impl crate::Unit for #name {
                    const RATIO: crate::Ratio = #ratio;
                    const DIMENSION: crate::Dimensions =
                        crate::Dimensions::base(crate::BaseDimension::#dimension);
                    const COMPOSITION: crate::Composition = crate::Composition::base::<Self>();
                    const SYMBOL: &'static str = #symbol;
                }

                impl crate::BaseUnit for #name {
                    const BASE: crate::BaseDimension = crate::BaseDimension::#dimension;
                }
            }
        }
        UnitKind::Derived { factors } => {
            let factors = factors.iter().map(|(path, exponent)| {
                let sign = if *exponent < 0 { quote!(-) } else { quote!() };
                let magnitude = Literal::u8_unsuffixed(exponent.unsigned_abs());
                quote! { crate::Factor::of::<#path>(#sign #magnitude) }
            });
            quote! {
                impl crate::Unit for #name {
                    const COMPOSITION: crate::Composition =
                        crate::Composition::from_factors(&[#(#factors),*]);
                    const RATIO: crate::Ratio =
                        <Self as crate::Unit>::COMPOSITION.ratio();
                    const DIMENSION: crate::Dimensions =
                        <Self as crate::Unit>::COMPOSITION.dimensions();
                    const SYMBOL: &'static str = #symbol;
                }
            }
        }
    };

    Ok(expanded)
}

/// Maps a `ratio = ...` expression onto a `crate::Ratio` constructor.
///
/// A top-level division becomes `Ratio::new(numerator, denominator)`; any other expression is an
/// integer and becomes `Ratio::integer(expr)`. Float literals are rejected because they cannot be
/// represented exactly.
fn ratio_tokens(expr: &Expr) -> syn::Result<TokenStream2> {
    match strip_groups(expr) {
        Expr::Binary(ExprBinary {
            left,
            op: BinOp::Div(_),
            right,
            ..
        }) => {
            reject_floats(left)?;
            reject_floats(right)?;
            Ok(quote! { crate::Ratio::new(#left, #right) })
        }
        other => {
            reject_floats(other)?;
            Ok(quote! { crate::Ratio::integer(#other) })
        }
    }
}

fn strip_groups(expr: &Expr) -> &Expr {
    match expr {
        Expr::Group(group) => strip_groups(&group.expr),
        Expr::Paren(paren) => strip_groups(&paren.expr),
        other => other,
    }
}

fn reject_floats(expr: &Expr) -> syn::Result<()> {
    match strip_groups(expr) {
        Expr::Lit(lit) if matches!(lit.lit, Lit::Float(_)) => Err(syn::Error::new_spanned(
            lit,
            "unit ratios must be exact: use an integer or `numerator / denominator`",
        )),
        Expr::Binary(binary) => {
            reject_floats(&binary.left)?;
            reject_floats(&binary.right)
        }
        _ => Ok(()),
    }
}

/// Parsed contents of the `#[unit(...)]` attribute.
struct UnitAttribute {
    symbol: LitStr,
    kind: UnitKind,
}

enum UnitKind {
    Base { dimension: Ident, ratio: Expr },
    Derived { factors: Vec<(Path, i8)> },
}

/// One `Unit = exponent` entry of `factors(...)`.
struct FactorEntry {
    path: Path,
    exponent: i8,
}

impl Parse for FactorEntry {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let path: Path = input.parse()?;
        input.parse::<Token![=]>()?;
        let negative = input.peek(Token![-]);
        if negative {
            input.parse::<Token![-]>()?;
        }
        let lit: LitInt = input.parse()?;
        let magnitude: i16 = lit.base10_parse()?;
        let exponent = i8::try_from(if negative { -magnitude } else { magnitude })
            .map_err(|_| syn::Error::new(lit.span(), "exponent out of range"))?;
        if exponent == 0 {
            return Err(syn::Error::new(
                lit.span(),
                "constituent units of a derived magnitude need a non-zero exponent",
            ));
        }
        Ok(FactorEntry { path, exponent })
    }
}

impl Parse for UnitAttribute {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut symbol: Option<LitStr> = None;
        let mut dimension: Option<Ident> = None;
        let mut ratio: Option<Expr> = None;
        let mut factors: Option<Vec<(Path, i8)>> = None;

        while !input.is_empty() {
            let ident: Ident = input.parse()?;

            match ident.to_string().as_str() {
                "symbol" => {
                    input.parse::<Token![=]>()?;
                    symbol = Some(input.parse()?);
                }
                "dimension" => {
                    input.parse::<Token![=]>()?;
                    dimension = Some(input.parse()?);
                }
                "ratio" => {
                    input.parse::<Token![=]>()?;
                    ratio = Some(input.parse()?);
                }
                "factors" => {
                    let content;
                    parenthesized!(content in input);
                    let entries = content.parse_terminated(FactorEntry::parse, Token![,])?;
                    if entries.is_empty() {
                        return Err(syn::Error::new(
                            ident.span(),
                            "a derived magnitude needs at least one constituent unit",
                        ));
                    }
                    factors = Some(
                        entries
                            .into_iter()
                            .map(|entry| (entry.path, entry.exponent))
                            .collect(),
                    );
                }
                other => {
                    return Err(syn::Error::new(
                        ident.span(),
                        format!("unknown attribute `{}`", other),
                    ));
                }
            }

            // Consume trailing comma if present
            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            }
        }

        let symbol = symbol
            .ok_or_else(|| syn::Error::new(input.span(), "missing required attribute `symbol`"))?;

        let kind = match (factors, dimension, ratio) {
            (Some(_), Some(_), _) | (Some(_), _, Some(_)) => {
                return Err(syn::Error::new(
                    input.span(),
                    "`factors` cannot be combined with `dimension` or `ratio`",
                ));
            }
            (Some(factors), None, None) => UnitKind::Derived { factors },
            (None, dimension, ratio) => {
                let dimension = dimension.ok_or_else(|| {
                    syn::Error::new(input.span(), "missing required attribute `dimension`")
                })?;
                let ratio = ratio.ok_or_else(|| {
                    syn::Error::new(input.span(), "missing required attribute `ratio`")
                })?;
                UnitKind::Base { dimension, ratio }
            }
        };

        Ok(UnitAttribute { symbol, kind })
    }
}

fn parse_unit_attribute(attrs: &[Attribute]) -> syn::Result<UnitAttribute> {
    for attr in attrs {
        if attr.path().is_ident("unit") {
            return attr.parse_args::<UnitAttribute>();
        }
    }

    Err(syn::Error::new(
        proc_macro2::Span::call_site(),
        "missing #[unit(...)] attribute",
    ))
}
