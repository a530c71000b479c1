//! ELEMENTS combinator - validates each element of a container

use crate::foundation::{Constraint, ConstraintResult, Context, Node, Shape};

// ============================================================================
// ELEMENTS COMBINATOR
// ============================================================================

/// Applies a constraint to every element of a sequence or mapping.
///
/// Sequence elements are addressed as `.[i]`, mapping values as `.` + key.
/// Pointers around the container are unwrapped first; a nil or empty
/// container yields no violations. Any other value is a type mismatch.
///
/// # Examples
///
/// ```rust
/// use trellis_validator::combinators::Elements;
/// use trellis_validator::validators::Required;
/// use trellis_validator::validate;
///
/// let scores = vec![Some(3_u8), None, Some(0)];
/// let found = validate(&scores, &Elements::new(Required)).unwrap();
///
/// let paths: Vec<&str> = found.iter().map(|v| v.path()).collect();
/// assert_eq!(paths, vec![".[1]", ".[2]"]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Elements<C> {
    inner: C,
}

impl<C> Elements<C> {
    /// Creates a new ELEMENTS combinator.
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

impl<C: Constraint> Constraint for Elements<C> {
    fn violations(&self, ctx: &Context<'_>) -> ConstraintResult {
        let node = ctx.node().dereference_all();
        let mut violations = Vec::new();

        match node.shape() {
            Shape::Nil | Shape::Pointer(None) => {}
            Shape::Sequence(seq) => {
                for (index, element) in seq.elements().enumerate() {
                    let child = ctx.index(index, Node::new(element));
                    violations.extend(self.inner.violations(&child)?);
                }
            }
            Shape::Mapping(map) => {
                for (key, value) in map.entries() {
                    let child = ctx.key(Node::new(key), Node::new(value));
                    violations.extend(self.inner.violations(&child)?);
                }
            }
            _ => return ctx.type_mismatch("Elements", "a sequence or mapping"),
        }

        Ok(violations)
    }

    fn name(&self) -> &str {
        "Elements"
    }
}

/// Creates an ELEMENTS combinator.
pub const fn elements<C>(inner: C) -> Elements<C> {
    Elements::new(inner)
}

// ============================================================================
// TESTS
// ============================================================================
