//! FIELDS combinator - validates named struct fields
//!
//! Fields are addressed by identifier when configuring the combinator and
//! reported under their alias, so paths match the externally visible names.

use crate::foundation::{
    BoxedConstraint, Constraint, ConstraintError, ConstraintResult, Context, Node, Shape,
    Structure,
};

// ============================================================================
// FIELDS COMBINATOR
// ============================================================================

enum Selection {
    Named(Vec<(String, BoxedConstraint)>),
    /// The shared constraint, plus any names later passed to `field`.
    All(BoxedConstraint, Vec<String>),
}

/// Applies constraints to the fields of a struct.
///
/// Pointers around the struct are unwrapped first and a nil struct yields
/// no violations. Naming a field the struct does not declare is an
/// [`UnknownField`](ConstraintError::UnknownField) fault. Adding a named
/// field to a selection built with [`Fields::all`] is an
/// [`InvalidArgument`](ConstraintError::InvalidArgument) fault.
///
/// # Examples
///
/// ```rust,ignore
/// use trellis_validator::combinators::Fields;
/// use trellis_validator::validators::Required;
///
/// #[derive(Inspect)]
/// struct Signup {
///     #[validation(alias = "email_address")]
///     email: String,
///     name: String,
/// }
///
/// let check = Fields::new()
///     .field("email", Required)
///     .field("name", Required);
///
/// let found = validate(&Signup { email: String::new(), name: "x".into() }, &check)?;
/// assert_eq!(found[0].path(), ".email_address");
/// ```
pub struct Fields {
    selection: Selection,
}

impl Fields {
    /// An empty selection; add fields with [`field`](Self::field).
    #[must_use]
    pub fn new() -> Self {
        Self {
            selection: Selection::Named(Vec::new()),
        }
    }

    /// Applies `constraint` to every declared field.
    pub fn all<C>(constraint: C) -> Self
    where
        C: Constraint + Send + Sync + 'static,
    {
        Self {
            selection: Selection::All(Box::new(constraint), Vec::new()),
        }
    }

    /// Applies `constraint` to the field with identifier `name`.
    ///
    /// On a selection built with [`all`](Self::all) the field is recorded
    /// as a misuse and validation faults.
    #[must_use = "builder methods must be chained or built"]
    pub fn field<C>(mut self, name: impl Into<String>, constraint: C) -> Self
    where
        C: Constraint + Send + Sync + 'static,
    {
        match &mut self.selection {
            Selection::Named(fields) => fields.push((name.into(), Box::new(constraint))),
            Selection::All(_, rejected) => rejected.push(name.into()),
        }
        self
    }

    /// Identifiers of the explicitly selected fields, in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        let names: &[(String, BoxedConstraint)] = match &self.selection {
            Selection::Named(fields) => fields,
            Selection::All(..) => &[],
        };
        names.iter().map(|(name, _)| name.as_str())
    }

    fn visit(
        &self,
        ctx: &Context<'_>,
        structure: &dyn Structure,
        type_name: &'static str,
    ) -> ConstraintResult {
        let mut violations = Vec::new();

        match &self.selection {
            Selection::Named(fields) => {
                for (name, constraint) in fields {
                    let def = structure.field_def(name).ok_or_else(|| {
                        ConstraintError::unknown_field("Fields", type_name, name.as_str())
                    })?;
                    let child = ctx.field(def, Self::field_node(structure, def.name()));
                    violations.extend(constraint.violations(&child)?);
                }
            }
            Selection::All(constraint, _) => {
                for def in structure.fields() {
                    let child = ctx.field(def, Self::field_node(structure, def.name()));
                    violations.extend(constraint.violations(&child)?);
                }
            }
        }

        Ok(violations)
    }

    fn field_node<'s>(structure: &'s dyn Structure, name: &str) -> Node<'s> {
        structure.field(name).map_or_else(Node::nil, Node::new)
    }
}

impl std::fmt::Debug for Fields {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.selection {
            Selection::Named(fields) => f
                .debug_map()
                .entries(fields.iter().map(|(name, c)| (name, c.name())))
                .finish(),
            Selection::All(constraint, _) => f.debug_tuple("All").field(&constraint.name()).finish(),
        }
    }
}

impl Default for Fields {
    fn default() -> Self {
        Self::new()
    }
}

impl Constraint for Fields {
    fn violations(&self, ctx: &Context<'_>) -> ConstraintResult {
        if let Selection::All(_, rejected) = &self.selection
            && let Some(name) = rejected.first()
        {
            return Err(ConstraintError::invalid_argument(
                "Fields",
                format!("field '{name}' cannot be added to a selection of all fields"),
            ));
        }

        let node = ctx.node().dereference_all();
        match node.shape() {
            Shape::Nil | Shape::Pointer(None) => Ok(Vec::new()),
            Shape::Struct(structure) => self.visit(ctx, structure, node.type_name()),
            _ => ctx.type_mismatch("Fields", "a struct"),
        }
    }

    fn name(&self) -> &str {
        "Fields"
    }
}

// ============================================================================
// TESTS
// ============================================================================
