//! # trellis-validator-macros
//!
//! Derive macros for `trellis-validator`. Use them through the re-exports
//! in `trellis_validator` (feature `derive`, on by default).
//!
//! ## Derive Macros
//!
//! | Macro | Description |
//! |-------|-------------|
//! | [`Inspect`](derive@Inspect) | Implements `Inspect` and `Structure` with a declared field table |

#![forbid(unsafe_code)]
#![warn(missing_docs)]

extern crate proc_macro;

use proc_macro::TokenStream;

mod inspect;
mod support;

/// Derive macro for the `Inspect` and `Structure` traits.
///
/// Registers the struct's named fields, in declaration order, so that
/// constraints can address them by identifier and report them by alias.
///
/// # Field attributes (`#[validation(...)]`)
///
/// - `alias = "..."` - Externally visible name used in paths and details
/// - `skip` - Leaves the field out of the table; its type need not
///   implement `Inspect`
///
/// Every field that is not skipped must implement `Inspect`. Generic type
/// parameters receive an `Inspect` bound; lifetime parameters are not
/// supported.
///
/// # Example
///
/// ```ignore
/// use trellis_validator::Inspect;
///
/// #[derive(Inspect)]
/// pub struct Signup {
///     #[validation(alias = "email_address")]
///     email: String,
///     name: Option<String>,
///     #[validation(skip)]
///     raw: std::time::Instant,
/// }
/// ```
#[proc_macro_derive(Inspect, attributes(validation))]
pub fn derive_inspect(input: TokenStream) -> TokenStream {
    inspect::derive(input)
}
