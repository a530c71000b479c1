//! CONSTRAINTS combinator - runs a list of constraints against one value

use crate::foundation::{BoxedConstraint, Constraint, ConstraintResult, Context};

// ============================================================================
// CONSTRAINTS COMBINATOR
// ============================================================================

/// Runs every member against the same context and concatenates the results.
///
/// Members never short-circuit each other on violations: a list of four
/// failing members reports four violations. A fault from any member aborts
/// the list.
///
/// # Examples
///
/// ```rust
/// use trellis_validator::combinators::Constraints;
/// use trellis_validator::validators::Required;
/// use trellis_validator::validate;
///
/// let both = Constraints::new().with(Required).with(Required);
/// assert_eq!(validate(&String::new(), &both).unwrap().len(), 2);
/// ```
#[derive(Default)]
pub struct Constraints {
    members: Vec<BoxedConstraint>,
}

impl Constraints {
    /// Creates an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a member.
    #[must_use = "builder methods must be chained or built"]
    pub fn with<C>(mut self, constraint: C) -> Self
    where
        C: Constraint + Send + Sync + 'static,
    {
        self.push(constraint);
        self
    }

    /// Appends a member in place.
    pub fn push<C>(&mut self, constraint: C)
    where
        C: Constraint + Send + Sync + 'static,
    {
        self.members.push(Box::new(constraint));
    }

    /// Number of members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns true if there are no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Iterates the members in order.
    pub fn iter(&self) -> impl Iterator<Item = &BoxedConstraint> {
        self.members.iter()
    }
}

impl Constraint for Constraints {
    fn violations(&self, ctx: &Context<'_>) -> ConstraintResult {
        let mut violations = Vec::new();
        for member in &self.members {
            violations.extend(member.violations(ctx)?);
        }
        Ok(violations)
    }

    fn name(&self) -> &str {
        "Constraints"
    }
}

impl From<Vec<BoxedConstraint>> for Constraints {
    fn from(members: Vec<BoxedConstraint>) -> Self {
        Self { members }
    }
}

impl FromIterator<BoxedConstraint> for Constraints {
    fn from_iter<I: IntoIterator<Item = BoxedConstraint>>(iter: I) -> Self {
        Self {
            members: iter.into_iter().collect(),
        }
    }
}

impl Extend<BoxedConstraint> for Constraints {
    fn extend<I: IntoIterator<Item = BoxedConstraint>>(&mut self, iter: I) {
        self.members.extend(iter);
    }
}

impl std::fmt::Debug for Constraints {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.members.iter().map(|member| member.name()))
            .finish()
    }
}

// ============================================================================
// TESTS
// ============================================================================
