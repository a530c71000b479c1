//! Core validation types and traits
//!
//! This module contains the fundamental building blocks of the validation system:
//!
//! - **Introspection**: [`Inspect`], [`Node`], [`Shape`], [`Extract`]
//! - **Traversal state**: [`Context`]
//! - **Results**: [`Violation`], [`Details`], [`ConstraintError`]
//! - **Traits**: [`Constraint`], [`ConstraintExt`]
//!
//! # Architecture
//!
//! Validation is a depth-first walk. [`validate`] wraps the root value in a
//! [`Context`] and hands it to a constraint. Composite constraints derive a
//! child context per element, entry or field and hand it to their inner
//! constraint; leaf constraints look at the node and return violations.
//! Violations flow back up and are concatenated in traversal order.
//!
//! ```rust
//! use trellis_validator::combinators::Elements;
//! use trellis_validator::validators::Required;
//!
//! let names = vec!["ada".to_owned(), String::new(), "bob".to_owned()];
//! let found = trellis_validator::validate(&names, &Elements::new(Required)).unwrap();
//!
//! assert_eq!(found.len(), 1);
//! assert_eq!(found[0].path(), ".[1]");
//! ```

pub mod context;
pub mod error;
pub mod extract;
pub mod inspect;
pub mod node;
pub mod options;
pub mod traits;
pub mod violation;

pub use context::Context;
pub use error::ConstraintError;
pub use extract::Extract;
pub use inspect::{FieldDef, Inspect, Mapping, Sequence, Structure};
pub use node::{Kind, Node, Number, Shape};
pub use options::ValidationOptions;
pub use traits::{
    BoxedConstraint, Constraint, ConstraintExt, ConstraintFn, ConstraintResult, constraint_fn,
};
pub use violation::{Details, Violation};

// ============================================================================
// ENTRY POINTS
// ============================================================================

/// Validates `value` against `constraint` in strict mode.
///
/// Returns every violation found, in traversal order. An empty vector means
/// the value is valid.
///
/// # Errors
///
/// Returns the first [`ConstraintError`] raised anywhere in the tree.
pub fn validate<C>(value: &dyn Inspect, constraint: &C) -> ConstraintResult
where
    C: Constraint + ?Sized,
{
    validate_with(value, constraint, &ValidationOptions::default())
}

/// Validates `value` against `constraint` with explicit options.
///
/// # Errors
///
/// Returns the first [`ConstraintError`] raised anywhere in the tree.
pub fn validate_with<C>(
    value: &dyn Inspect,
    constraint: &C,
    options: &ValidationOptions,
) -> ConstraintResult
where
    C: Constraint + ?Sized,
{
    let span = tracing::trace_span!(
        "validate",
        constraint = constraint.name(),
        strict_types = options.strict_types,
    );
    let _enter = span.enter();

    let ctx = Context::new(value).with_strict_types(options.strict_types);
    match constraint.violations(&ctx) {
        Ok(violations) => {
            tracing::trace!(count = violations.len(), "validation finished");
            Ok(violations)
        }
        Err(error) => {
            tracing::debug!(%error, "constraint fault");
            Err(error)
        }
    }
}

#[cfg(test)]
mod core_tests {
    use super::*;

    struct AlwaysValid;

    impl Constraint for AlwaysValid {
        fn violations(&self, _ctx: &Context<'_>) -> ConstraintResult {
            Ok(Vec::new())
        }
    }

    struct AlwaysMismatches;

    impl Constraint for AlwaysMismatches {
        fn violations(&self, ctx: &Context<'_>) -> ConstraintResult {
            ctx.type_mismatch("AlwaysMismatches", "nothing")
        }
    }

    #[test]
    fn test_validate_valid() {
        assert!(validate(&"x".to_owned(), &AlwaysValid).unwrap().is_empty());
    }

    #[test]
    fn test_validate_is_strict() {
        let err = validate(&1_u8, &AlwaysMismatches).unwrap_err();
        assert!(matches!(err, ConstraintError::TypeMismatch { .. }));
    }

    #[test]
    fn test_validate_with_lenient() {
        let found = validate_with(&1_u8, &AlwaysMismatches, &ValidationOptions::lenient()).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].path(), "");
    }

    #[test]
    fn test_validate_dyn_constraint() {
        let boxed: BoxedConstraint = Box::new(AlwaysValid);
        assert!(validate(&(), boxed.as_ref()).unwrap().is_empty());
    }
}
