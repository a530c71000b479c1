//! Traversal state passed to every constraint
//!
//! A [`Context`] bundles the current [`Node`], its path from the root and
//! the strict-types flag. Contexts are never mutated: every step into a
//! child value derives a new one with [`index`](Context::index),
//! [`key`](Context::key) or [`field`](Context::field), so the path a
//! violation reports is always the path of the value it describes.
//!
//! # Path format
//!
//! | step              | suffix          |
//! |-------------------|-----------------|
//! | sequence index    | `.[i]`          |
//! | mapping key       | `.` + key       |
//! | struct field      | `.` + alias     |
//!
//! The root path is the empty string.

use crate::foundation::error::ConstraintError;
use crate::foundation::extract::Extract;
use crate::foundation::inspect::{FieldDef, Inspect};
use crate::foundation::node::Node;
use crate::foundation::traits::ConstraintResult;
use crate::foundation::violation::{Details, Violation};
use std::borrow::Borrow;

/// Current position of the traversal.
///
/// # Examples
///
/// ```rust
/// use trellis_validator::{Context, Details, Node};
///
/// let tags = vec!["a".to_owned(), "b".to_owned()];
/// let root = Context::new(&tags);
/// let child = root.index(1, Node::new(&tags[1]));
///
/// assert_eq!(child.path(), ".[1]");
/// assert!(child.strict_types());
///
/// let violation = child.violation("duplicate tag", Details::new());
/// assert_eq!(violation.path(), ".[1]");
/// ```
#[derive(Debug, Clone)]
pub struct Context<'a> {
    node: Node<'a>,
    path: String,
    strict_types: bool,
}

impl<'a> Context<'a> {
    /// Root context for `value`: empty path, strict types.
    #[must_use]
    pub fn new(value: &'a dyn Inspect) -> Self {
        Self::from_node(Node::new(value))
    }

    /// Root context for an already wrapped node.
    #[must_use]
    pub fn from_node(node: Node<'a>) -> Self {
        Self {
            node,
            path: String::new(),
            strict_types: true,
        }
    }

    /// The value under validation.
    #[must_use]
    pub const fn node(&self) -> Node<'a> {
        self.node
    }

    /// Path of the current value from the root.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Whether type mismatches are faults (`true`) or violations.
    #[must_use]
    pub const fn strict_types(&self) -> bool {
        self.strict_types
    }

    // ------------------------------------------------------------------------
    // Derivation
    // ------------------------------------------------------------------------

    /// Same node and path with the strict flag overridden.
    #[must_use]
    pub fn with_strict_types(&self, strict_types: bool) -> Self {
        Self {
            node: self.node,
            path: self.path.clone(),
            strict_types,
        }
    }

    /// Same path and flag, different node.
    #[must_use]
    pub fn with_node<'b>(&self, node: Node<'b>) -> Context<'b>
    where
        'a: 'b,
    {
        Context {
            node,
            path: self.path.clone(),
            strict_types: self.strict_types,
        }
    }

    /// Child context for element `index` of a sequence.
    #[must_use]
    pub fn index<'b>(&self, index: usize, node: Node<'b>) -> Context<'b>
    where
        'a: 'b,
    {
        self.child(&format!("[{index}]"), node)
    }

    /// Child context for the entry under `key` of a mapping.
    #[must_use]
    pub fn key<'b>(&self, key: Node<'_>, node: Node<'b>) -> Context<'b>
    where
        'a: 'b,
    {
        self.child(&key.path_segment(), node)
    }

    /// Child context for a struct field, addressed by its alias.
    #[must_use]
    pub fn field<'b>(&self, def: &FieldDef, node: Node<'b>) -> Context<'b>
    where
        'a: 'b,
    {
        self.child(def.alias(), node)
    }

    fn child<'b>(&self, segment: &str, node: Node<'b>) -> Context<'b>
    where
        'a: 'b,
    {
        let mut path = String::with_capacity(self.path.len() + segment.len() + 1);
        path.push_str(&self.path);
        path.push('.');
        path.push_str(segment);
        Context {
            node,
            path,
            strict_types: self.strict_types,
        }
    }

    // ------------------------------------------------------------------------
    // Reporting
    // ------------------------------------------------------------------------

    /// Builds a violation at the current path.
    #[must_use]
    pub fn violation(&self, message: impl Into<String>, details: Details) -> Violation {
        Violation::new(self.path.clone(), message.into(), details)
    }

    /// Runs `check` against the current value read as a `T`.
    ///
    /// Pointers are unwrapped first. A nil value yields nothing. Acceptance
    /// is decided by [`Extract`], from the value's kind: a value that cannot
    /// be read as `T` goes through [`type_mismatch`](Self::type_mismatch)
    /// before emptiness is considered. An empty value of an accepted kind
    /// is absent and yields nothing without calling `check`.
    ///
    /// # Errors
    ///
    /// Returns the mismatch fault in strict mode, or whatever `check`
    /// returns.
    pub fn typed<T, F>(&self, constraint: &'static str, check: F) -> ConstraintResult
    where
        T: Extract + ?Sized,
        F: FnOnce(&T) -> ConstraintResult,
    {
        let node = self.node.dereference_all();
        if node.is_nil() {
            return Ok(Vec::new());
        }
        let Some(value) = T::extract(node) else {
            return self.type_mismatch(constraint, T::EXPECTED);
        };
        if node.is_empty() {
            return Ok(Vec::new());
        }
        check(Borrow::<T>::borrow(&value))
    }

    /// Reports that the current value has a type `constraint` does not
    /// accept.
    ///
    /// In strict mode this is a [`ConstraintError::TypeMismatch`] fault. In
    /// lenient mode it is exactly one violation with `expected` and `actual`
    /// details.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError::TypeMismatch`] when strict types are on.
    pub fn type_mismatch(&self, constraint: &'static str, expected: &'static str) -> ConstraintResult {
        let actual = self.node.dereference_all().type_name();
        if self.strict_types {
            return Err(ConstraintError::TypeMismatch {
                constraint,
                path: self.path.clone(),
                expected,
                actual,
            });
        }
        Ok(vec![self.violation(
            format!("expected {expected}, got {actual}"),
            Details::new()
                .with("expected", expected)
                .with("actual", actual),
        )])
    }
}
