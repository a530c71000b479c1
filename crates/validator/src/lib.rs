//! # trellis-validator
//!
//! Validation of arbitrary in-memory values by composing small, reusable
//! constraints that report path-addressed violations.
//!
//! ## Quick Start
//!
//! ```rust
//! use trellis_validator::prelude::*;
//!
//! let emails = vec!["ada@example.com".to_owned(), String::new()];
//! let found = validate(&emails, &Elements::new(Required)).unwrap();
//!
//! assert_eq!(found.len(), 1);
//! assert_eq!(found[0].to_string(), ".[1]: is required");
//! ```
//!
//! ## How it fits together
//!
//! - Values opt in through [`Inspect`], which exposes a [`Shape`]. Structs
//!   use `#[derive(Inspect)]` (feature `derive`) to declare their field
//!   table and aliases.
//! - A [`Constraint`] looks at a [`Context`] and returns [`Violation`]s.
//!   Misuse such as a wrong input type in strict mode is a
//!   [`ConstraintError`] instead.
//! - [`combinators`] build trees: [`Constraints`](combinators::Constraints),
//!   [`Elements`](combinators::Elements), [`Fields`](combinators::Fields),
//!   [`Keys`](combinators::Keys), [`Map`](combinators::Map),
//!   [`Lazy`](combinators::Lazy), [`When`](combinators::When) and
//!   [`WhenFn`](combinators::WhenFn).
//! - [`validate`] runs a tree over a root value.
//!
//! ## Built-in Validators
//!
//! - **Presence**: [`Required`](validators::Required)
//! - **Struct**: [`ExactlyNRequired`](validators::ExactlyNRequired)
//! - **Temporal**: [`TimeAfter`](validators::TimeAfter)
//!
//! Custom leaf constraints are one [`constraint!`] invocation away.

// Combinator nesting (Elements<WhenFn<Map<..>, ..>>) produces complex types
// that are inherent to the generic combinator architecture.
#![allow(clippy::type_complexity)]

extern crate self as trellis_validator;

pub mod combinators;
pub mod foundation;
pub mod json;
mod macros;
pub mod prelude;
pub mod validators;

pub use foundation::{
    BoxedConstraint, Constraint, ConstraintError, ConstraintExt, ConstraintFn, ConstraintResult,
    Context, Details, Extract, FieldDef, Inspect, Kind, Mapping, Node, Number, Sequence, Shape,
    Structure, ValidationOptions, Violation, constraint_fn, validate, validate_with,
};

#[cfg(feature = "derive")]
pub use trellis_validator_macros::Inspect;
