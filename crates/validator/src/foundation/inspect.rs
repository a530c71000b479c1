//! The `Inspect` trait and its implementations for standard types.
//!
//! Any value that should be walked by a constraint tree implements
//! [`Inspect`]. Primitives, strings, smart pointers and the standard
//! collections are covered here; structs opt in through
//! `#[derive(Inspect)]` or a hand-written [`Structure`] impl.

use crate::foundation::node::{Number, Shape};
use indexmap::IndexMap;
use std::any::Any;
use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::rc::Rc;
use std::sync::Arc;

// ============================================================================
// TRAITS
// ============================================================================

/// A value that exposes its structure to the validation traversal.
///
/// # Examples
///
/// ```rust
/// use trellis_validator::{FieldDef, Inspect, Shape, Structure};
///
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// impl Inspect for Point {
///     fn shape(&self) -> Shape<'_> {
///         Shape::Struct(self)
///     }
/// }
///
/// impl Structure for Point {
///     fn fields(&self) -> &'static [FieldDef] {
///         const FIELDS: &[FieldDef] = &[FieldDef::new("x"), FieldDef::new("y")];
///         FIELDS
///     }
///
///     fn field(&self, name: &str) -> Option<&dyn Inspect> {
///         match name {
///             "x" => Some(&self.x),
///             "y" => Some(&self.y),
///             _ => None,
///         }
///     }
/// }
///
/// assert!(Point { x: 0, y: 0 }.is_empty());
/// assert!(!Point { x: 1, y: 0 }.is_empty());
/// ```
pub trait Inspect: Any {
    /// Returns the structural view of this value.
    fn shape(&self) -> Shape<'_>;

    /// Returns true if this value is the zero value of its type.
    fn is_empty(&self) -> bool {
        self.shape().is_zero()
    }

    /// Returns the Rust type name, used in mismatch reports.
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// An ordered container of inspectable elements.
#[allow(clippy::len_without_is_empty)]
pub trait Sequence {
    /// Number of elements.
    fn len(&self) -> usize;

    /// Elements in iteration order.
    fn elements(&self) -> Box<dyn Iterator<Item = &dyn Inspect> + '_>;
}

/// A keyed container of inspectable entries.
#[allow(clippy::len_without_is_empty)]
pub trait Mapping {
    /// Number of entries.
    fn len(&self) -> usize;

    /// `(key, value)` pairs in iteration order.
    fn entries(&self) -> Box<dyn Iterator<Item = (&dyn Inspect, &dyn Inspect)> + '_>;
}

/// A value with a declared, named field table.
pub trait Structure {
    /// The declared fields, in declaration order.
    fn fields(&self) -> &'static [FieldDef];

    /// Looks up a field value by its identifier.
    fn field(&self, name: &str) -> Option<&dyn Inspect>;

    /// Looks up a field declaration by its identifier.
    fn field_def(&self, name: &str) -> Option<&'static FieldDef> {
        self.fields().iter().find(|def| def.name() == name)
    }
}

// ============================================================================
// FIELD DEFINITIONS
// ============================================================================

/// Declaration of one struct field: its identifier and optional alias.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldDef {
    name: &'static str,
    alias: Option<&'static str>,
}

impl FieldDef {
    /// A field with no alias.
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self { name, alias: None }
    }

    /// A field reported under `alias` instead of its identifier.
    #[must_use]
    pub const fn aliased(name: &'static str, alias: &'static str) -> Self {
        Self {
            name,
            alias: Some(alias),
        }
    }

    /// The Rust identifier.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The externally visible name: the declared alias, else the identifier.
    #[must_use]
    pub const fn alias(&self) -> &'static str {
        match self.alias {
            Some(alias) => alias,
            None => self.name,
        }
    }

    /// Returns true if an alias was declared.
    #[must_use]
    pub const fn has_alias(&self) -> bool {
        self.alias.is_some()
    }
}

// ============================================================================
// PRIMITIVES
// ============================================================================

impl Inspect for () {
    fn shape(&self) -> Shape<'_> {
        Shape::Nil
    }
}

impl Inspect for bool {
    fn shape(&self) -> Shape<'_> {
        Shape::Bool(*self)
    }
}

macro_rules! impl_inspect_number {
    ($variant:ident as $target:ty: $($ty:ty),+) => {
        $(
            impl Inspect for $ty {
                #[allow(
                    clippy::cast_lossless,
                    clippy::cast_possible_wrap,
                    clippy::unnecessary_cast
                )]
                fn shape(&self) -> Shape<'_> {
                    Shape::Number(Number::$variant(*self as $target))
                }
            }
        )+
    };
}

impl_inspect_number!(Int as i64: i8, i16, i32, i64, isize);
impl_inspect_number!(UInt as u64: u8, u16, u32, u64, usize);
impl_inspect_number!(Float as f64: f32, f64);

impl Inspect for char {
    fn shape(&self) -> Shape<'_> {
        Shape::Number(Number::UInt(u64::from(u32::from(*self))))
    }

    fn is_empty(&self) -> bool {
        *self == '\0'
    }
}

// ============================================================================
// STRINGS
// ============================================================================

impl Inspect for String {
    fn shape(&self) -> Shape<'_> {
        Shape::String(self)
    }
}

impl Inspect for &'static str {
    fn shape(&self) -> Shape<'_> {
        Shape::String(self)
    }
}

impl Inspect for Cow<'static, str> {
    fn shape(&self) -> Shape<'_> {
        Shape::String(self)
    }
}

// ============================================================================
// POINTERS
// ============================================================================

impl<T: Inspect> Inspect for Option<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Pointer(self.as_ref().map(|value| value as &dyn Inspect))
    }
}

macro_rules! impl_inspect_pointer {
    ($($ptr:ident),+) => {
        $(
            impl<T: Inspect> Inspect for $ptr<T> {
                fn shape(&self) -> Shape<'_> {
                    let target: &T = self;
                    Shape::Pointer(Some(target as &dyn Inspect))
                }
            }
        )+
    };
}

impl_inspect_pointer!(Box, Rc, Arc);

// ============================================================================
// SEQUENCES
// ============================================================================

macro_rules! impl_inspect_sequence {
    ($($coll:ident),+) => {
        $(
            impl<T: Inspect> Inspect for $coll<T> {
                fn shape(&self) -> Shape<'_> {
                    Shape::Sequence(self)
                }
            }

            impl<T: Inspect> Sequence for $coll<T> {
                fn len(&self) -> usize {
                    $coll::len(self)
                }

                fn elements(&self) -> Box<dyn Iterator<Item = &dyn Inspect> + '_> {
                    Box::new(self.iter().map(|value| value as &dyn Inspect))
                }
            }
        )+
    };
}

impl_inspect_sequence!(Vec, VecDeque, BTreeSet);

impl<T: Inspect, S: 'static> Inspect for HashSet<T, S> {
    fn shape(&self) -> Shape<'_> {
        Shape::Sequence(self)
    }
}

impl<T: Inspect, S> Sequence for HashSet<T, S> {
    fn len(&self) -> usize {
        HashSet::len(self)
    }

    fn elements(&self) -> Box<dyn Iterator<Item = &dyn Inspect> + '_> {
        Box::new(self.iter().map(|value| value as &dyn Inspect))
    }
}

impl<T: Inspect, const N: usize> Inspect for [T; N] {
    fn shape(&self) -> Shape<'_> {
        Shape::Sequence(self)
    }
}

impl<T: Inspect, const N: usize> Sequence for [T; N] {
    fn len(&self) -> usize {
        N
    }

    fn elements(&self) -> Box<dyn Iterator<Item = &dyn Inspect> + '_> {
        Box::new(self.as_slice().iter().map(|value| value as &dyn Inspect))
    }
}

// ============================================================================
// MAPPINGS
// ============================================================================

macro_rules! impl_inspect_mapping {
    ($($map:ident<K, V $(, $hasher:ident)?>),+) => {
        $(
            impl<K: Inspect, V: Inspect $(, $hasher: 'static)?> Inspect for $map<K, V $(, $hasher)?> {
                fn shape(&self) -> Shape<'_> {
                    Shape::Mapping(self)
                }
            }

            impl<K: Inspect, V: Inspect $(, $hasher)?> Mapping for $map<K, V $(, $hasher)?> {
                fn len(&self) -> usize {
                    $map::len(self)
                }

                fn entries(&self) -> Box<dyn Iterator<Item = (&dyn Inspect, &dyn Inspect)> + '_> {
                    Box::new(
                        self.iter()
                            .map(|(key, value)| (key as &dyn Inspect, value as &dyn Inspect)),
                    )
                }
            }
        )+
    };
}

impl_inspect_mapping!(HashMap<K, V, S>, BTreeMap<K, V>, IndexMap<K, V, S>);

// ============================================================================
// TIME
// ============================================================================

#[cfg(feature = "temporal")]
mod temporal {
    use super::{FieldDef, Inspect, Structure};
    use crate::foundation::node::Shape;
    use chrono::{DateTime, Utc};

    /// Timestamps are opaque structs. The zero time is the Unix epoch,
    /// which is what `DateTime::default()` produces.
    impl Inspect for DateTime<Utc> {
        fn shape(&self) -> Shape<'_> {
            Shape::Struct(self)
        }

        fn is_empty(&self) -> bool {
            *self == Self::default()
        }
    }

    impl Structure for DateTime<Utc> {
        fn fields(&self) -> &'static [FieldDef] {
            &[]
        }

        fn field(&self, _name: &str) -> Option<&dyn Inspect> {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::node::{Kind, Node};

    #[test]
    fn field_def_alias_falls_back_to_name() {
        assert_eq!(FieldDef::new("Field1").alias(), "Field1");
        assert_eq!(FieldDef::aliased("Field3", "field3").alias(), "field3");
        assert!(FieldDef::aliased("Field3", "field3").has_alias());
        assert!(!FieldDef::new("Field1").has_alias());
    }

    #[test]
    fn numbers_are_classified() {
        assert_eq!(Node::new(&1_u8).kind(), Kind::Number);
        assert_eq!(Node::new(&-1_isize).kind(), Kind::Number);
        assert_eq!(Node::new(&1.5_f32).kind(), Kind::Number);
        assert!(Node::new(&'\0').is_empty());
        assert!(!Node::new(&'a').is_empty());
    }

    #[test]
    fn strings_are_classified() {
        let s: &'static str = "abc";
        assert_eq!(Node::new(&s).kind(), Kind::String);
        assert_eq!(Node::new(&Cow::Borrowed("")).kind(), Kind::String);
        assert!(Node::new(&Cow::<'static, str>::Borrowed("")).is_empty());
    }

    #[test]
    fn smart_pointers_are_pointers() {
        assert_eq!(Node::new(&Box::new(1_u8)).kind(), Kind::Pointer);
        assert_eq!(Node::new(&Rc::new(1_u8)).kind(), Kind::Pointer);
        assert_eq!(Node::new(&Arc::new(1_u8)).kind(), Kind::Pointer);
    }

    #[test]
    fn sequences_iterate_in_order() {
        let values = [3_u8, 1, 2];
        let Shape::Sequence(seq) = Node::new(&values).shape() else {
            panic!("expected a sequence");
        };
        assert_eq!(seq.len(), 3);
        let collected: Vec<u8> = seq
            .elements()
            .filter_map(|value| Node::new(value).downcast::<u8>().copied())
            .collect();
        assert_eq!(collected, vec![3, 1, 2]);
    }

    #[test]
    fn sets_are_sequences() {
        let set: HashSet<u8> = [1, 2].into_iter().collect();
        assert_eq!(Node::new(&set).kind(), Kind::Sequence);
        assert_eq!(Node::new(&BTreeSet::<u8>::new()).kind(), Kind::Sequence);
    }

    #[test]
    fn mappings_expose_entries() {
        let mut map = IndexMap::new();
        map.insert("b".to_owned(), 2_u8);
        map.insert("a".to_owned(), 1_u8);

        let Shape::Mapping(mapping) = Node::new(&map).shape() else {
            panic!("expected a mapping");
        };
        let keys: Vec<String> = mapping
            .entries()
            .map(|(key, _)| Node::new(key).path_segment())
            .collect();
        assert_eq!(keys, vec!["b", "a"]);
    }

    #[cfg(feature = "temporal")]
    #[test]
    fn epoch_is_the_zero_time() {
        use chrono::{DateTime, TimeZone, Utc};

        assert!(Node::new(&DateTime::<Utc>::default()).is_empty());
        let later = Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).single();
        assert!(later.is_some_and(|t| !t.is_empty()));
        assert_eq!(Node::new(&DateTime::<Utc>::default()).kind(), Kind::Struct);
    }
}
