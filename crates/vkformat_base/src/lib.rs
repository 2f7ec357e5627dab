//! Traits shared between `vkformat` and the code generated by `vkformat_macros`.
//!
//! This crate is `#![no_std]` so the derive output never pulls in more than `core`.
#![no_std]

mod macro_traits;
pub use macro_traits::*;
