//! Presence validator
//!
//! # Validators
//!
//! - [`Required`] - Validates that a value is present and non-empty
//!
//! # Examples
//!
//! ```rust
//! use trellis_validator::validators::required;
//! use trellis_validator::validate;
//!
//! assert!(validate(&Some("hello".to_owned()), &required()).unwrap().is_empty());
//! assert_eq!(validate(&None::<String>, &required()).unwrap().len(), 1);
//! ```

use crate::foundation::{Constraint, ConstraintResult, Context, Details};

/// Validates that a value is present: neither nil nor the zero value of
/// its type, after unwrapping pointers.
///
/// This is the one validator that reports on absent values, so it accepts
/// every kind and never raises a type mismatch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Required;

impl Constraint for Required {
    fn violations(&self, ctx: &Context<'_>) -> ConstraintResult {
        let node = ctx.node().dereference_all();
        if node.is_nil() || node.is_empty() {
            Ok(vec![ctx.violation("is required", Details::new())])
        } else {
            Ok(Vec::new())
        }
    }

    fn name(&self) -> &str {
        "Required"
    }
}

/// Creates a `Required` validator.
#[must_use]
pub const fn required() -> Required {
    Required
}
