//! Core traits for the validation system
//!
//! This module defines [`Constraint`], the contract every validation unit
//! implements, and [`ConstraintExt`], the fluent helpers layered on top.

use crate::combinators::when::{When, WhenFn};
use crate::foundation::context::Context;
use crate::foundation::error::ConstraintError;
use crate::foundation::violation::Violation;
use std::sync::Arc;

/// Result of running a constraint: every violation found, or a fault.
pub type ConstraintResult = Result<Vec<Violation>, ConstraintError>;

/// A type-erased constraint, as stored by list and field combinators.
pub type BoxedConstraint = Box<dyn Constraint + Send + Sync>;

// ============================================================================
// CORE CONSTRAINT TRAIT
// ============================================================================

/// The trait every validation unit implements.
///
/// A constraint looks at the value in the [`Context`] and returns all
/// violations it finds. An empty vector means the value is valid. Faults
/// (`Err`) are reserved for misuse: a value of the wrong type in strict
/// mode, an invalid parameter, an unknown field.
///
/// Constraints hold no per-call state, so one instance can validate many
/// values, from many threads when its parts allow it.
///
/// # Examples
///
/// ```rust
/// use trellis_validator::{Constraint, ConstraintResult, Context, Details, Shape};
///
/// struct NoSpaces;
///
/// impl Constraint for NoSpaces {
///     fn violations(&self, ctx: &Context<'_>) -> ConstraintResult {
///         let node = ctx.node().dereference_all();
///         match node.shape() {
///             Shape::Nil | Shape::Pointer(None) => Ok(Vec::new()),
///             Shape::String(s) if s.contains(' ') => {
///                 Ok(vec![ctx.violation("must not contain spaces", Details::new())])
///             }
///             Shape::String(_) => Ok(Vec::new()),
///             _ => ctx.type_mismatch("NoSpaces", "a string"),
///         }
///     }
/// }
///
/// let found = trellis_validator::validate(&"a b".to_owned(), &NoSpaces).unwrap();
/// assert_eq!(found.len(), 1);
/// ```
pub trait Constraint {
    /// Validates the value in `ctx`.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] when the constraint is misused.
    fn violations(&self, ctx: &Context<'_>) -> ConstraintResult;

    /// Name used in tracing spans and fault reports.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

impl<C: Constraint + ?Sized> Constraint for &C {
    fn violations(&self, ctx: &Context<'_>) -> ConstraintResult {
        (**self).violations(ctx)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<C: Constraint + ?Sized> Constraint for Box<C> {
    fn violations(&self, ctx: &Context<'_>) -> ConstraintResult {
        (**self).violations(ctx)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<C: Constraint + ?Sized> Constraint for Arc<C> {
    fn violations(&self, ctx: &Context<'_>) -> ConstraintResult {
        (**self).violations(ctx)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

// ============================================================================
// FUNCTION ADAPTER
// ============================================================================

/// Adapts a closure into a [`Constraint`].
#[derive(Clone, Copy)]
pub struct ConstraintFn<F> {
    name: &'static str,
    check: F,
}

impl<F> ConstraintFn<F>
where
    F: Fn(&Context<'_>) -> ConstraintResult,
{
    /// Wraps `check` under `name`.
    pub const fn new(name: &'static str, check: F) -> Self {
        Self { name, check }
    }
}

impl<F> Constraint for ConstraintFn<F>
where
    F: Fn(&Context<'_>) -> ConstraintResult,
{
    fn violations(&self, ctx: &Context<'_>) -> ConstraintResult {
        (self.check)(ctx)
    }

    fn name(&self) -> &str {
        self.name
    }
}

impl<F> std::fmt::Debug for ConstraintFn<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConstraintFn").field("name", &self.name).finish()
    }
}

/// Creates a named constraint from a closure.
///
/// # Examples
///
/// ```rust
/// use trellis_validator::{constraint_fn, validate, Details};
///
/// let never_nil = constraint_fn("NeverNil", |ctx| {
///     Ok(if ctx.node().is_nil() {
///         vec![ctx.violation("must be set", Details::new())]
///     } else {
///         Vec::new()
///     })
/// });
///
/// assert_eq!(validate(&(), &never_nil).unwrap().len(), 1);
/// ```
pub const fn constraint_fn<F>(name: &'static str, check: F) -> ConstraintFn<F>
where
    F: Fn(&Context<'_>) -> ConstraintResult,
{
    ConstraintFn::new(name, check)
}

// ============================================================================
// CONSTRAINT EXTENSION TRAIT
// ============================================================================

/// Fluent helpers available on every sized [`Constraint`].
pub trait ConstraintExt: Constraint + Sized {
    /// Applies this constraint only when `enabled` is true.
    fn when(self, enabled: bool) -> When<Self> {
        When::new(self, enabled)
    }

    /// Applies this constraint only when `predicate` holds for the context.
    fn when_fn<P>(self, predicate: P) -> WhenFn<Self, P>
    where
        P: Fn(&Context<'_>) -> bool,
    {
        WhenFn::new(self, predicate)
    }

    /// Erases the concrete type.
    fn boxed(self) -> BoxedConstraint
    where
        Self: Send + Sync + 'static,
    {
        Box::new(self)
    }
}

impl<T: Constraint> ConstraintExt for T {}
