//! KEYS combinator - validates the keys of a mapping

use crate::foundation::{Constraint, ConstraintResult, Context, Node, Shape};

/// Applies a constraint to every key of a mapping.
///
/// The key itself becomes the child value, addressed by its own string
/// form, so a bad key `"x y"` is reported at `.x y`.
#[derive(Debug, Clone, Copy)]
pub struct Keys<C> {
    inner: C,
}

impl<C> Keys<C> {
    /// Creates a new KEYS combinator.
    pub const fn new(inner: C) -> Self {
        Self { inner }
    }

    /// Returns a reference to the inner constraint.
    pub const fn inner(&self) -> &C {
        &self.inner
    }

    /// Extracts the inner constraint.
    pub fn into_inner(self) -> C {
        self.inner
    }
}

impl<C: Constraint> Constraint for Keys<C> {
    fn violations(&self, ctx: &Context<'_>) -> ConstraintResult {
        let node = ctx.node().dereference_all();
        let mut violations = Vec::new();

        match node.shape() {
            Shape::Nil | Shape::Pointer(None) => {}
            Shape::Mapping(map) => {
                for (key, _) in map.entries() {
                    let key = Node::new(key);
                    violations.extend(self.inner.violations(&ctx.key(key, key))?);
                }
            }
            _ => return ctx.type_mismatch("Keys", "a mapping"),
        }

        Ok(violations)
    }

    fn name(&self) -> &str {
        "Keys"
    }
}

/// Creates a KEYS combinator.
pub const fn keys<C>(inner: C) -> Keys<C> {
    Keys::new(inner)
}
