mod derive;

use proc_macro::TokenStream;

/// Implement `vkformat_base::EnumCountT` for a fieldless enum.
#[proc_macro_derive(EnumCount)]
pub fn enum_count(item: TokenStream) -> TokenStream {
    derive::enum_count(item.into()).into()
}

/// Implement `vkformat_base::EnumFromIndexT` for a fieldless enum with (optional) integer literal discriminants.
#[proc_macro_derive(EnumFromIndex)]
pub fn enum_from_index(item: TokenStream) -> TokenStream {
    derive::enum_from_index(item.into()).into()
}

/// Implement `core::fmt::Display` using the variant name, or the `#[display("...")]` override.
#[proc_macro_derive(EnumDisplay, attributes(display))]
pub fn enum_display(item: TokenStream) -> TokenStream {
    derive::enum_display(item.into()).into()
}

/// Implement `vkformat_base::EnumFromNameT` using the variant name, or the `#[parse_name("...")]` override.
#[proc_macro_derive(EnumFromName, attributes(parse_name))]
pub fn enum_from_name(item: TokenStream) -> TokenStream {
    derive::enum_from_name(item.into()).into()
}
