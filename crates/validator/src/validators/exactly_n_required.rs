//! Pick-N field validator.
//!
//! Checks that exactly `n` of a group of struct fields are set, e.g. "give
//! an email or a phone number, not both".

use crate::foundation::{Constraint, ConstraintError, ConstraintResult, Context, Details, Shape};

// ============================================================================
// EXACTLY N REQUIRED VALIDATOR
// ============================================================================

/// Validates that exactly `n` of the named fields are non-empty.
///
/// Fields are named by identifier; violations report them by alias under
/// the `fields` key, in the order they were given, together with the
/// `actual` and `expected` counts. A struct whose fields are all empty is
/// absent and passes.
///
/// # Examples
///
/// ```rust,ignore
/// use trellis_validator::prelude::*;
///
/// #[derive(Inspect)]
/// struct Contact {
///     email: String,
///     #[validation(alias = "phone_number")]
///     phone: String,
/// }
///
/// let one_of = ExactlyNRequired::new(1, ["email", "phone"])?;
/// let both = Contact { email: "a@b.c".into(), phone: "555".into() };
///
/// let found = validate(&both, &one_of)?;
/// assert_eq!(
///     found[0].details().clone().into_value(),
///     json!({"actual": 2, "expected": 1, "fields": ["email", "phone_number"]})
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExactlyNRequired {
    n: usize,
    fields: Vec<String>,
}

impl ExactlyNRequired {
    /// Creates a new `ExactlyNRequired` validator.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError::InvalidArgument`] when `n` is zero or when
    /// there are not more candidate fields than `n`.
    pub fn new<I, S>(n: usize, fields: I) -> Result<Self, ConstraintError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let fields: Vec<String> = fields.into_iter().map(Into::into).collect();
        if n == 0 {
            return Err(ConstraintError::invalid_argument(
                "ExactlyNRequired",
                "n must be greater than zero",
            ));
        }
        if fields.len() <= n {
            return Err(ConstraintError::invalid_argument(
                "ExactlyNRequired",
                format!(
                    "{} candidate fields given, need more than {n}",
                    fields.len()
                ),
            ));
        }
        Ok(Self { n, fields })
    }

    /// Number of fields that must be set.
    #[must_use]
    pub const fn n(&self) -> usize {
        self.n
    }

    /// Candidate field identifiers, in order.
    #[must_use]
    pub fn fields(&self) -> &[String] {
        &self.fields
    }
}

impl Constraint for ExactlyNRequired {
    fn violations(&self, ctx: &Context<'_>) -> ConstraintResult {
        let node = ctx.node().dereference_all();
        let structure = match node.shape() {
            Shape::Nil | Shape::Pointer(None) => return Ok(Vec::new()),
            Shape::Struct(structure) => structure,
            _ => return ctx.type_mismatch("ExactlyNRequired", "a struct"),
        };

        let mut set = 0_usize;
        let mut aliases = Vec::with_capacity(self.fields.len());
        for name in &self.fields {
            let def = structure.field_def(name).ok_or_else(|| {
                ConstraintError::unknown_field("ExactlyNRequired", node.type_name(), name.as_str())
            })?;
            if structure.field(def.name()).is_some_and(|value| !value.is_empty()) {
                set += 1;
            }
            aliases.push(def.alias());
        }

        if node.is_empty() || set == self.n {
            return Ok(Vec::new());
        }

        Ok(vec![ctx.violation(
            format!("exactly {} of {} must be set, found {set}", self.n, aliases.join(", ")),
            Details::new()
                .with("actual", set)
                .with("expected", self.n)
                .with("fields", aliases),
        )])
    }

    fn name(&self) -> &str {
        "ExactlyNRequired"
    }
}

/// Creates an `ExactlyNRequired` validator.
///
/// # Errors
///
/// See [`ExactlyNRequired::new`].
pub fn exactly_n_required<I, S>(n: usize, fields: I) -> Result<ExactlyNRequired, ConstraintError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    ExactlyNRequired::new(n, fields)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{FieldDef, Inspect, Structure, ValidationOptions};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[derive(Default)]
    struct Choice {
        field1: String,
        field2: i64,
        field3: Option<String>,
    }

    impl Inspect for Choice {
        fn shape(&self) -> Shape<'_> {
            Shape::Struct(self)
        }
    }

    impl Structure for Choice {
        fn fields(&self) -> &'static [FieldDef] {
            const FIELDS: &[FieldDef] = &[
                FieldDef::new("field1"),
                FieldDef::new("field2"),
                FieldDef::aliased("field3", "third"),
            ];
            FIELDS
        }

        fn field(&self, name: &str) -> Option<&dyn Inspect> {
            match name {
                "field1" => Some(&self.field1),
                "field2" => Some(&self.field2),
                "field3" => Some(&self.field3),
                _ => None,
            }
        }
    }

    fn one_of_three() -> ExactlyNRequired {
        ExactlyNRequired::new(1, ["field1", "field2", "field3"]).unwrap()
    }

    #[test]
    fn test_exactly_one_set_passes() {
        let value = Choice {
            field1: "x".into(),
            ..Choice::default()
        };
        assert!(crate::validate(&value, &one_of_three()).unwrap().is_empty());
    }

    #[test]
    fn test_two_set_reports_aliases() {
        let value = Choice {
            field1: "x".into(),
            field3: Some(String::new()),
            ..Choice::default()
        };
        let found = crate::validate(&value, &one_of_three()).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(
            found[0].details().clone().into_value(),
            json!({"actual": 2, "expected": 1, "fields": ["field1", "field2", "third"]})
        );
    }

    #[test]
    fn test_all_empty_is_absent() {
        assert!(crate::validate(&Choice::default(), &one_of_three()).unwrap().is_empty());
        assert!(crate::validate(&None::<Choice>, &one_of_three()).unwrap().is_empty());
    }

    #[test]
    fn test_zero_n_is_invalid() {
        let err = ExactlyNRequired::new(0, ["a", "b"]).unwrap_err();
        assert!(matches!(err, ConstraintError::InvalidArgument { .. }));
    }

    #[test]
    fn test_candidates_must_exceed_n() {
        assert!(ExactlyNRequired::new(2, ["a", "b"]).is_err());
        assert!(ExactlyNRequired::new(2, ["a"]).is_err());
        assert!(ExactlyNRequired::new(1, ["a", "b"]).is_ok());
    }

    #[test]
    fn test_unknown_field_faults() {
        let check = exactly_n_required(1, ["field1", "nope"]).unwrap();
        let err = crate::validate(&Choice::default(), &check).unwrap_err();
        assert!(matches!(err, ConstraintError::UnknownField { ref field, .. } if field == "nope"));
    }

    #[test]
    fn test_wrong_type_faults_even_when_empty() {
        let err = crate::validate(&String::new(), &one_of_three()).unwrap_err();
        assert!(matches!(err, ConstraintError::TypeMismatch { .. }));

        let found =
            crate::validate_with(&String::new(), &one_of_three(), &ValidationOptions::lenient())
                .unwrap();
        assert_eq!(found.len(), 1);
    }
}
