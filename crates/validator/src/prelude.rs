//! Prelude module for convenient imports.
//!
//! Provides a single `use trellis_validator::prelude::*;` import that brings
//! in the traits, types, validators and combinators most code needs.
//!
//! # Examples
//!
//! ```rust
//! use trellis_validator::prelude::*;
//!
//! let tags = vec!["a".to_owned(), String::new()];
//! let found = validate(&tags, &Elements::new(Required)).unwrap();
//! assert_eq!(found.len(), 1);
//! ```

// ============================================================================
// FOUNDATION: Core traits, results, entry points
// ============================================================================

pub use crate::foundation::{
    BoxedConstraint, Constraint, ConstraintError, ConstraintExt, ConstraintResult, Context,
    Details, Extract, FieldDef, Inspect, Node, Shape, Structure, ValidationOptions, Violation,
    constraint_fn, validate, validate_with,
};

// ============================================================================
// VALIDATORS: All built-in validators
// ============================================================================

#[allow(clippy::wildcard_imports)]
pub use crate::validators::*;

// ============================================================================
// COMBINATORS: Composition functions and types
// ============================================================================

pub use crate::combinators::{
    Constraints, Elements, Fields, Keys, Lazy, Map, When, WhenFn, elements, keys, lazy, map,
    when, when_fn,
};

// ============================================================================
// MACROS
// ============================================================================

pub use crate::{constraint, constraints};

#[cfg(feature = "derive")]
pub use trellis_validator_macros::Inspect;
