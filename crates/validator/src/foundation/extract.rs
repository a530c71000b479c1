//! Kind-based extraction of typed views from a [`Node`].
//!
//! Typed leaf constraints declare the Rust type they reason about (`str`,
//! `i64`, `bool`, ...) and [`Extract`] decides, from the node's [`Shape`],
//! whether the current value can be read as that type. Acceptance follows
//! the kind, not the concrete Rust type, so a `str` rule accepts `String`,
//! `&'static str`, `Cow<'static, str>` and JSON strings alike.

use crate::foundation::node::{Node, Number, Shape};
use std::borrow::Borrow;

// ============================================================================
// CORE TRAIT: Extract with GAT
// ============================================================================

/// A type a constraint can read out of a node by kind.
///
/// The output is either a borrow of the node (`&str`) or an owned copy
/// (numbers, `bool`), unified through [`Borrow`].
///
/// # Examples
///
/// ```rust
/// use std::borrow::Cow;
/// use trellis_validator::{Extract, Node};
///
/// let owned = "abc".to_owned();
/// let borrowed: Cow<'static, str> = Cow::Borrowed("abc");
///
/// assert_eq!(str::extract(Node::new(&owned)), Some("abc"));
/// assert_eq!(str::extract(Node::new(&borrowed)), Some("abc"));
/// assert_eq!(i64::extract(Node::new(&7_u8)), Some(7));
/// assert_eq!(u8::extract(Node::new(&300_i32)), None);
/// ```
pub trait Extract {
    /// The extracted view, borrowable as `&Self`.
    type Output<'a>: Borrow<Self>;

    /// Human-readable description used in mismatch reports.
    const EXPECTED: &'static str;

    /// Reads the node as `Self`, or `None` if its kind does not fit.
    ///
    /// The node is taken as-is; callers unwrap pointers first.
    fn extract(node: Node<'_>) -> Option<Self::Output<'_>>;
}

// ============================================================================
// STRINGS / BOOLEANS
// ============================================================================

impl Extract for str {
    type Output<'a> = &'a str;

    const EXPECTED: &'static str = "a string";

    #[inline]
    fn extract(node: Node<'_>) -> Option<&str> {
        match node.shape() {
            Shape::String(s) => Some(s),
            _ => None,
        }
    }
}

impl Extract for bool {
    type Output<'a> = bool;

    const EXPECTED: &'static str = "a boolean";

    #[inline]
    fn extract(node: Node<'_>) -> Option<bool> {
        match node.shape() {
            Shape::Bool(b) => Some(b),
            _ => None,
        }
    }
}

// ============================================================================
// NUMBERS
// ============================================================================

impl Extract for Number {
    type Output<'a> = Number;

    const EXPECTED: &'static str = "a number";

    #[inline]
    fn extract(node: Node<'_>) -> Option<Number> {
        match node.shape() {
            Shape::Number(n) => Some(n),
            _ => None,
        }
    }
}

/// Integral floats (as JSON often carries them) convert; fractional ones do
/// not.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn integral(f: f64) -> Option<i128> {
    let in_range = f >= i128::MIN as f64 && f <= i128::MAX as f64;
    (f.fract() == 0.0 && in_range).then_some(f as i128)
}

macro_rules! impl_extract_integer {
    ($($ty:ty),+) => {
        $(
            impl Extract for $ty {
                type Output<'a> = $ty;

                const EXPECTED: &'static str = concat!("an integer fitting ", stringify!($ty));

                #[allow(clippy::unnecessary_fallible_conversions)]
                fn extract(node: Node<'_>) -> Option<$ty> {
                    match node.shape() {
                        Shape::Number(Number::Int(i)) => <$ty>::try_from(i).ok(),
                        Shape::Number(Number::UInt(u)) => <$ty>::try_from(u).ok(),
                        Shape::Number(Number::Float(f)) => {
                            integral(f).and_then(|i| <$ty>::try_from(i).ok())
                        }
                        _ => None,
                    }
                }
            }
        )+
    };
}

impl_extract_integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

macro_rules! impl_extract_float {
    ($($ty:ty),+) => {
        $(
            impl Extract for $ty {
                type Output<'a> = $ty;

                const EXPECTED: &'static str = "a number";

                #[allow(clippy::cast_possible_truncation)]
                fn extract(node: Node<'_>) -> Option<$ty> {
                    match node.shape() {
                        Shape::Number(n) => Some(n.as_f64() as $ty),
                        _ => None,
                    }
                }
            }
        )+
    };
}

impl_extract_float!(f32, f64);

// ============================================================================
// TIMESTAMPS
// ============================================================================

#[cfg(feature = "temporal")]
mod temporal {
    use super::Extract;
    use crate::foundation::node::Node;
    use chrono::{DateTime, Utc};

    /// Timestamps have no kind of their own, so they are matched by type.
    impl Extract for DateTime<Utc> {
        type Output<'a> = &'a DateTime<Utc>;

        const EXPECTED: &'static str = "a UTC timestamp";

        fn extract(node: Node<'_>) -> Option<&DateTime<Utc>> {
            node.downcast::<DateTime<Utc>>()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;
    use std::borrow::Cow;

    #[test]
    fn every_string_kind_reads_as_str() {
        let owned = "a b".to_owned();
        let cow: Cow<'static, str> = Cow::Owned("a b".to_owned());
        let literal: &'static str = "a b";
        let doc = json!("a b");

        assert_eq!(str::extract(Node::new(&owned)), Some("a b"));
        assert_eq!(str::extract(Node::new(&cow)), Some("a b"));
        assert_eq!(str::extract(Node::new(&literal)), Some("a b"));
        assert_eq!(str::extract(Node::new(&doc)), Some("a b"));
        assert_eq!(str::extract(Node::new(&1_u8)), None);
    }

    #[rstest]
    #[case::int_to_u8(json!(255), Some(255))]
    #[case::overflow(json!(256), None)]
    #[case::negative(json!(-1), None)]
    #[case::integral_float(json!(4.0), Some(4))]
    #[case::fractional_float(json!(4.5), None)]
    #[case::string(json!("4"), None)]
    fn integers_convert_by_value(#[case] doc: serde_json::Value, #[case] expected: Option<u8>) {
        assert_eq!(u8::extract(Node::new(&doc)), expected);
    }

    #[test]
    fn floats_accept_any_number() {
        assert_eq!(f64::extract(Node::new(&3_i32)), Some(3.0));
        assert_eq!(f64::extract(Node::new(&json!(u64::MAX))), Some(u64::MAX as f64));
        assert_eq!(f64::extract(Node::new(&true)), None);
    }

    #[test]
    fn booleans_and_numbers() {
        assert_eq!(bool::extract(Node::new(&json!(true))), Some(true));
        assert_eq!(Number::extract(Node::new(&-3_i8)), Some(Number::Int(-3)));
        assert_eq!(Number::extract(Node::new(&"3".to_owned())), None);
    }

    #[test]
    fn expected_descriptions() {
        assert_eq!(<str as Extract>::EXPECTED, "a string");
        assert_eq!(<i32 as Extract>::EXPECTED, "an integer fitting i32");
    }
}
