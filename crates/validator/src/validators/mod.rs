//! Built-in validators
//!
//! Every validator here follows the same two rules:
//!
//! - An empty value of an accepted type is absent and passes. Only
//!   [`Required`] reports on absence.
//! - A value of any other type is a type mismatch: a fault in strict mode,
//!   a single violation otherwise.
//!
//! # Categories
//!
//! - **Presence**: [`Required`]
//! - **Struct**: [`ExactlyNRequired`]
//! - **Temporal**: [`TimeAfter`] (feature `temporal`)

pub mod exactly_n_required;
pub mod nullable;
#[cfg(feature = "temporal")]
pub mod time;

pub use exactly_n_required::{ExactlyNRequired, exactly_n_required};
pub use nullable::{Required, required};
#[cfg(feature = "temporal")]
pub use time::{TimeAfter, time_after};
