//! Procedural macros for keytrig.
//!
//! Use these through the `keytrig` crate, which re-exports them behind the
//! `macros` feature.

use proc_macro::TokenStream;

mod raw_event;

/// Derive macro for implementing `RawEvent` on a plain struct.
///
/// ```rust,ignore
/// #[derive(RawEvent)]
/// struct KeyDown {
///     #[raw_event(code, rename = "keyCode")]
///     key_code: u32,
///     #[raw_event(code)]
///     which: Option<u32>,
///     #[raw_event(prevent_default)]
///     default_prevented: bool,
/// }
/// ```
#[proc_macro_derive(RawEvent, attributes(raw_event))]
pub fn derive_raw_event(input: TokenStream) -> TokenStream {
    raw_event::derive_raw_event_impl(input)
}
