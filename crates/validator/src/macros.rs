//! Macros for creating constraints with minimal boilerplate.
//!
//! # Available Macros
//!
//! - [`constraint!`] - Create a typed leaf constraint (struct + `Constraint` impl)
//! - [`constraints!`] - Build a [`Constraints`](crate::combinators::Constraints) list
//!
//! # Examples
//!
//! ```rust
//! use trellis_validator::{constraint, constraints, validate};
//!
//! constraint! {
//!     /// Rejects strings made only of whitespace.
//!     pub NotBlank for str;
//!     rule(input) { !input.trim().is_empty() }
//!     message(input) { "must not be blank" }
//! }
//!
//! constraint! {
//!     pub MaxChars { max: usize } for str;
//!     rule(self, input) { input.chars().count() <= self.max }
//!     message(self, input) { format!("must be at most {} characters", self.max) }
//! }
//!
//! let check = constraints![NotBlank, MaxChars::new(3)];
//! assert_eq!(validate(&"    ".to_owned(), &check).unwrap().len(), 2);
//! assert!(validate(&String::new(), &check).unwrap().is_empty());
//! ```

// ============================================================================
// CONSTRAINT MACRO
// ============================================================================

/// Creates a leaf constraint over one concrete type: struct definition,
/// constructor and [`Constraint`](crate::foundation::Constraint) impl.
///
/// The generated constraint goes through
/// [`Context::typed`](crate::foundation::Context::typed): pointers are
/// unwrapped, nil and zero values are skipped, and acceptance is decided by
/// kind through [`Extract`](crate::foundation::Extract). `$input` is any
/// `Extract` type: `str` for every string kind, `bool`, a numeric primitive,
/// `Number`, or `DateTime<Utc>`. The rule sees `&$input`; when it is false
/// one violation is reported with the given message.
///
/// `#[derive(Debug, Clone)]` is always applied.
///
/// # Variants
///
/// **Unit constraint** (zero-sized, no fields):
/// ```rust,ignore
/// constraint! {
///     pub Positive for i64;
///     rule(input) { *input > 0 }
///     message(input) { "must be positive" }
/// }
/// ```
///
/// **Struct with fields** (auto `new` from all fields):
/// ```rust,ignore
/// constraint! {
///     pub AtMost { max: i64 } for i64;
///     rule(self, input) { *input <= self.max }
///     message(self, input) { format!("must be at most {}", self.max) }
/// }
/// ```
#[macro_export]
macro_rules! constraint {
    // ── Variant 1: Unit constraint (no fields) ───────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for $input:ty;
        rule($inp:ident) $rule:block
        message($minp:ident) $msg:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis struct $name;

        impl $crate::foundation::Constraint for $name {
            #[allow(unused_variables)]
            fn violations(
                &self,
                ctx: &$crate::foundation::Context<'_>,
            ) -> $crate::foundation::ConstraintResult {
                ctx.typed::<$input, _>(stringify!($name), |$inp: &$input| {
                    if $rule {
                        Ok(::std::vec::Vec::new())
                    } else {
                        let $minp = $inp;
                        Ok(::std::vec![ctx.violation($msg, $crate::foundation::Details::new())])
                    }
                })
            }

            fn name(&self) -> &str {
                stringify!($name)
            }
        }
    };

    // ── Variant 2: Struct with fields + auto new ─────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        message($self2:ident, $minp:ident) $msg:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        impl $name {
            #[must_use]
            pub fn new($($field: $fty),+) -> Self {
                Self { $($field),+ }
            }
        }

        impl $crate::foundation::Constraint for $name {
            #[allow(unused_variables)]
            fn violations(
                &$self_,
                ctx: &$crate::foundation::Context<'_>,
            ) -> $crate::foundation::ConstraintResult {
                ctx.typed::<$input, _>(stringify!($name), |$inp: &$input| {
                    if $rule {
                        Ok(::std::vec::Vec::new())
                    } else {
                        let $minp = $inp;
                        Ok(::std::vec![ctx.violation($msg, $crate::foundation::Details::new())])
                    }
                })
            }

            fn name(&self) -> &str {
                stringify!($name)
            }
        }
    };
}

// ============================================================================
// CONSTRAINTS MACRO
// ============================================================================

/// Builds a [`Constraints`](crate::combinators::Constraints) list, boxing
/// each member.
///
/// ```rust,ignore
/// let check = constraints![Required, NotBlank, MaxChars::new(64)];
/// ```
#[macro_export]
macro_rules! constraints {
    () => {
        $crate::combinators::Constraints::new()
    };
    ($($member:expr),+ $(,)?) => {
        $crate::combinators::Constraints::new()$(.with($member))+
    };
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use crate::foundation::{Constraint, ConstraintError, Context};

    constraint! {
        /// A test unit constraint.
        TestPositive for i32;
        rule(input) { *input > 0 }
        message(input) { format!("{input} is not positive") }
    }

    constraint! {
        TestMaxLen { max: usize } for str;
        rule(self, input) { input.len() <= self.max }
        message(self, input) { format!("longer than {}", self.max) }
    }

    #[test]
    fn test_unit_constraint() {
        assert!(crate::validate(&5_i32, &TestPositive).unwrap().is_empty());
        let found = crate::validate(&-2_i32, &TestPositive).unwrap();
        assert_eq!(found[0].message(), "-2 is not positive");
        assert_eq!(TestPositive.name(), "TestPositive");
    }

    #[test]
    fn test_zero_is_absent() {
        assert!(crate::validate(&0_i32, &TestPositive).unwrap().is_empty());
        assert!(crate::validate(&None::<i32>, &TestPositive).unwrap().is_empty());
    }

    #[test]
    fn test_struct_constraint() {
        let c = TestMaxLen::new(2);
        assert_eq!(c.max, 2);
        assert!(c.violations(&Context::new(&"ab".to_owned())).unwrap().is_empty());
        assert_eq!(c.violations(&Context::new(&"abc".to_owned())).unwrap().len(), 1);
    }

    #[test]
    fn test_wrong_type_is_mismatch() {
        let err = crate::validate(&1_u8, &TestMaxLen::new(1)).unwrap_err();
        assert!(matches!(
            err,
            ConstraintError::TypeMismatch { constraint: "TestMaxLen", expected: "a string", .. }
        ));
    }

    #[test]
    fn test_str_rule_accepts_every_string_kind() {
        let literal: &'static str = "abc";
        let cow: std::borrow::Cow<'static, str> = "abc".into();
        let doc = serde_json::json!("abc");

        let c = TestMaxLen::new(2);
        assert_eq!(crate::validate(&literal, &c).unwrap().len(), 1);
        assert_eq!(crate::validate(&cow, &c).unwrap().len(), 1);
        assert_eq!(crate::validate(&doc, &c).unwrap().len(), 1);
    }

    #[test]
    fn test_constraints_macro() {
        let list = constraints![TestPositive, TestPositive, TestPositive];
        assert_eq!(list.len(), 3);
        assert_eq!(crate::validate(&-1_i32, &list).unwrap().len(), 3);
        assert!(constraints![].is_empty());
    }
}
