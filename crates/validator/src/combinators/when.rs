//! WHEN combinators - conditional validation
//!
//! [`When`] gates a constraint on a flag fixed at construction time.
//! [`WhenFn`] gates it on a predicate evaluated against each context.
//! When the condition holds both behave exactly like the wrapped
//! constraint; otherwise they report nothing.

use crate::foundation::{Constraint, ConstraintResult, Context};

/// Applies a constraint only when a static flag is set.
///
/// # Examples
///
/// ```rust
/// use trellis_validator::combinators::When;
/// use trellis_validator::validators::Required;
/// use trellis_validator::validate;
///
/// let strict_mode = false;
/// let check = When::new(Required, strict_mode);
/// assert!(validate(&String::new(), &check).unwrap().is_empty());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct When<C> {
    constraint: C,
    enabled: bool,
}

impl<C> When<C> {
    /// Creates a new `When` combinator.
    pub const fn new(constraint: C, enabled: bool) -> Self {
        Self {
            constraint,
            enabled,
        }
    }

    /// Returns a reference to the inner constraint.
    pub const fn constraint(&self) -> &C {
        &self.constraint
    }

    /// Returns the flag.
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Extracts the constraint and flag.
    pub fn into_parts(self) -> (C, bool) {
        (self.constraint, self.enabled)
    }
}

impl<C: Constraint> Constraint for When<C> {
    fn violations(&self, ctx: &Context<'_>) -> ConstraintResult {
        if self.enabled {
            self.constraint.violations(ctx)
        } else {
            Ok(Vec::new())
        }
    }

    fn name(&self) -> &str {
        "When"
    }
}

/// Applies a constraint only when a predicate holds for the context.
///
/// The predicate sees the full context, so it can look at the node, the
/// path or the strict flag.
#[derive(Clone, Copy)]
pub struct WhenFn<C, P> {
    constraint: C,
    predicate: P,
}

impl<C, P> WhenFn<C, P>
where
    P: Fn(&Context<'_>) -> bool,
{
    /// Creates a new `WhenFn` combinator.
    pub const fn new(constraint: C, predicate: P) -> Self {
        Self {
            constraint,
            predicate,
        }
    }

    /// Returns a reference to the inner constraint.
    pub const fn constraint(&self) -> &C {
        &self.constraint
    }

    /// Extracts the constraint and predicate.
    pub fn into_parts(self) -> (C, P) {
        (self.constraint, self.predicate)
    }
}

impl<C, P> Constraint for WhenFn<C, P>
where
    C: Constraint,
    P: Fn(&Context<'_>) -> bool,
{
    fn violations(&self, ctx: &Context<'_>) -> ConstraintResult {
        if (self.predicate)(ctx) {
            self.constraint.violations(ctx)
        } else {
            Ok(Vec::new())
        }
    }

    fn name(&self) -> &str {
        "WhenFn"
    }
}

impl<C: std::fmt::Debug, P> std::fmt::Debug for WhenFn<C, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WhenFn")
            .field("constraint", &self.constraint)
            .finish_non_exhaustive()
    }
}

/// Creates a `When` combinator.
pub const fn when<C>(constraint: C, enabled: bool) -> When<C> {
    When::new(constraint, enabled)
}

/// Creates a `WhenFn` combinator.
///
/// # Examples
///
/// ```rust
/// use trellis_validator::combinators::when_fn;
/// use trellis_validator::validators::Required;
/// use trellis_validator::validate;
///
/// // Only require values below the top level.
/// let nested_only = when_fn(Required, |ctx| !ctx.path().is_empty());
/// assert!(validate(&String::new(), &nested_only).unwrap().is_empty());
/// ```
pub const fn when_fn<C, P>(constraint: C, predicate: P) -> WhenFn<C, P>
where
    P: Fn(&Context<'_>) -> bool,
{
    WhenFn::new(constraint, predicate)
}
