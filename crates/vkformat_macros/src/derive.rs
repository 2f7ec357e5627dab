use proc_macro2::*;
use quote::quote;
use syn::*;

struct FieldlessEnum {
    ident: Ident,
    body:  DataEnum,
}

fn parse_fieldless_enum(item: TokenStream, derive_name: &str) -> core::result::Result<FieldlessEnum, TokenStream> {
    let input_parsed = syn::parse2::<DeriveInput>(item).map_err(|err| err.to_compile_error())?;

    let body = match input_parsed.data {
        Data::Enum(body) => body,
        _ => {
            let msg = format!("{derive_name} can only be derived for enums");
            return Err(Error::new_spanned(&input_parsed.ident, msg).to_compile_error());
        },
    };

    if let Some(variant) = body.variants.iter().find(|variant| !matches!(variant.fields, Fields::Unit)) {
        let msg = format!("{derive_name} only supports fieldless variants");
        return Err(Error::new_spanned(variant, msg).to_compile_error());
    }

    Ok(FieldlessEnum { ident: input_parsed.ident, body })
}

/// Get the string passed to `#[attr_name("...")]`, if the attribute is present
fn name_override(attrs: &[Attribute], attr_name: &str) -> syn::Result<Option<String>> {
    match attrs.iter().find(|attr| attr.path().is_ident(attr_name)) {
        Some(attr) => attr.parse_args::<LitStr>().map(|lit| Some(lit.value())),
        None => Ok(None),
    }
}

fn variant_names(body: &DataEnum, attr_name: &str) -> core::result::Result<(Vec<Ident>, Vec<String>), TokenStream> {
    let mut members = Vec::with_capacity(body.variants.len());
    let mut names = Vec::<String>::with_capacity(body.variants.len());

    for variant in &body.variants {
        let name = match name_override(&variant.attrs, attr_name) {
            Ok(name) => name.unwrap_or_else(|| variant.ident.to_string()),
            Err(err) => return Err(err.to_compile_error()),
        };

        if names.contains(&name) {
            let msg = format!("Duplicate name '{name}' for member '{}'", variant.ident);
            return Err(Error::new_spanned(&variant.ident, msg).to_compile_error());
        }

        members.push(variant.ident.clone());
        names.push(name);
    }
    Ok((members, names))
}

fn discriminant_index(expr: &Expr) -> syn::Result<usize> {
    match expr {
        Expr::Lit(ExprLit { lit: Lit::Int(int), .. }) => int.base10_parse::<usize>(),
        _ => Err(Error::new_spanned(expr, "Only non-negative integer literal discriminants are supported by EnumFromIndex")),
    }
}

pub fn enum_count(item: TokenStream) -> TokenStream {
    let FieldlessEnum { ident, body } = match parse_fieldless_enum(item, "EnumCount") {
        Ok(parsed) => parsed,
        Err(err) => return err,
    };

    let count = body.variants.len();

    quote!{
        impl ::vkformat_base::EnumCountT for #ident {
            const COUNT: usize = #count;
        }
    }
}

pub fn enum_from_index(item: TokenStream) -> TokenStream {
    let FieldlessEnum { ident, body } = match parse_fieldless_enum(item, "EnumFromIndex") {
        Ok(parsed) => parsed,
        Err(err) => return err,
    };

    let mut variants = Vec::with_capacity(body.variants.len());
    let mut indices = Vec::with_capacity(body.variants.len());
    let mut next = 0usize;
    for variant in &body.variants {
        let idx = match &variant.discriminant {
            Some((_, expr)) => match discriminant_index(expr) {
                Ok(idx) => idx,
                Err(err) => return err.to_compile_error(),
            },
            None => next,
        };

        variants.push(variant.ident.clone());
        indices.push(idx);

        next = idx + 1;
    }

    quote!{
        impl ::vkformat_base::EnumFromIndexT for #ident {
            fn from_idx(idx: usize) -> Option<Self> {
                match idx {
                    #(#indices => Some(Self::#variants),)*
                    _ => None,
                }
            }
        }
    }
}

pub fn enum_display(item: TokenStream) -> TokenStream {
    let FieldlessEnum { ident, body } = match parse_fieldless_enum(item, "EnumDisplay") {
        Ok(parsed) => parsed,
        Err(err) => return err,
    };

    let (members, names) = match variant_names(&body, "display") {
        Ok(res) => res,
        Err(err) => return err,
    };

    quote!{
        impl ::core::fmt::Display for #ident {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                match self {
                    #(#ident::#members => f.pad(#names),)*
                }
            }
        }
    }
}

pub fn enum_from_name(item: TokenStream) -> TokenStream {
    let FieldlessEnum { ident, body } = match parse_fieldless_enum(item, "EnumFromName") {
        Ok(parsed) => parsed,
        Err(err) => return err,
    };

    let (members, names) = match variant_names(&body, "parse_name") {
        Ok(res) => res,
        Err(err) => return err,
    };

    quote!{
        impl ::vkformat_base::EnumFromNameT for #ident {
            fn parse(s: &str) -> Option<Self> {
                match s {
                    #(#names => Some(Self::#members),)*
                    _ => None,
                }
            }
        }
    }
}
