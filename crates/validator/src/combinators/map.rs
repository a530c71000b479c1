//! MAP combinator - validates a value derived from the current node

use crate::foundation::{Constraint, ConstraintResult, Context, Inspect, Node};

/// Applies a constraint to a value computed from the current node.
///
/// The derived value is validated at the same path. The transform must be
/// pure: it sees only the node and returns an owned value.
///
/// # Examples
///
/// ```rust
/// use trellis_validator::combinators::Map;
/// use trellis_validator::validators::Required;
/// use trellis_validator::validate;
///
/// // Trim before requiring a value.
/// let trimmed = Map::new(
///     |node| node.downcast::<String>().map(|s| s.trim().to_owned()),
///     Required,
/// );
///
/// assert_eq!(validate(&"   ".to_owned(), &trimmed).unwrap().len(), 1);
/// assert!(validate(&" x ".to_owned(), &trimmed).unwrap().is_empty());
/// ```
pub struct Map<F, C> {
    transform: F,
    inner: C,
}

impl<F, C> Map<F, C> {
    /// Creates a new MAP combinator.
    pub fn new<T>(transform: F, inner: C) -> Self
    where
        F: Fn(Node<'_>) -> T,
        T: Inspect,
    {
        Self { transform, inner }
    }

    /// Returns a reference to the inner constraint.
    pub const fn inner(&self) -> &C {
        &self.inner
    }

    /// Extracts the transform and constraint.
    pub fn into_parts(self) -> (F, C) {
        (self.transform, self.inner)
    }
}

impl<F, C, T> Constraint for Map<F, C>
where
    F: Fn(Node<'_>) -> T,
    T: Inspect,
    C: Constraint,
{
    fn violations(&self, ctx: &Context<'_>) -> ConstraintResult {
        let derived = (self.transform)(ctx.node());
        self.inner.violations(&ctx.with_node(Node::new(&derived)))
    }

    fn name(&self) -> &str {
        "Map"
    }
}

impl<F, C: std::fmt::Debug> std::fmt::Debug for Map<F, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Map").field("inner", &self.inner).finish_non_exhaustive()
    }
}

/// Creates a MAP combinator.
pub fn map<F, C, T>(transform: F, inner: C) -> Map<F, C>
where
    F: Fn(Node<'_>) -> T,
    T: Inspect,
{
    Map::new(transform, inner)
}
