//! Configuration faults
//!
//! A [`ConstraintError`] means the constraint tree itself is wrong for the
//! value it was pointed at: the value has a type the constraint never
//! accepts, a parameter is out of range, or a field name does not exist.
//! It is never a business-rule failure; those are [`Violation`]s.
//!
//! [`Violation`]: crate::foundation::Violation

// ============================================================================
// CONSTRAINT ERROR TYPE
// ============================================================================

/// A misuse of a constraint, reported instead of violations.
///
/// Faults abort the traversal: the first one returned by any constraint in
/// the tree becomes the result of [`validate`](crate::validate).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ConstraintError {
    /// The value has a type the constraint does not accept.
    ///
    /// Only produced in strict mode; lenient mode reports a violation.
    #[error("{constraint} at '{path}': expected {expected}, got {actual}")]
    TypeMismatch {
        /// Constraint that rejected the value.
        constraint: &'static str,
        /// Path of the rejected value.
        path: String,
        /// Human description of the accepted types.
        expected: &'static str,
        /// Type name of the rejected value.
        actual: &'static str,
    },

    /// A construction parameter is invalid.
    #[error("{constraint}: {reason}")]
    InvalidArgument {
        /// Constraint that was misconfigured.
        constraint: &'static str,
        /// What is wrong with the parameters.
        reason: String,
    },

    /// A field name is not declared by the struct being validated.
    #[error("{constraint}: type {type_name} has no field '{field}'")]
    UnknownField {
        /// Constraint that named the field.
        constraint: &'static str,
        /// Type name of the struct.
        type_name: &'static str,
        /// The missing field name.
        field: String,
    },
}

impl ConstraintError {
    /// Creates an [`InvalidArgument`](Self::InvalidArgument) fault.
    pub fn invalid_argument(constraint: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            constraint,
            reason: reason.into(),
        }
    }

    /// Creates an [`UnknownField`](Self::UnknownField) fault.
    pub fn unknown_field(
        constraint: &'static str,
        type_name: &'static str,
        field: impl Into<String>,
    ) -> Self {
        Self::UnknownField {
            constraint,
            type_name,
            field: field.into(),
        }
    }

    /// Returns the name of the constraint that raised the fault.
    #[must_use]
    pub const fn constraint(&self) -> &'static str {
        match self {
            Self::TypeMismatch { constraint, .. }
            | Self::InvalidArgument { constraint, .. }
            | Self::UnknownField { constraint, .. } => constraint,
        }
    }
}
