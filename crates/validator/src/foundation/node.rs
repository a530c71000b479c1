//! Uniform introspection over one runtime value.
//!
//! A [`Node`] wraps a borrowed [`Inspect`] value (or nothing at all) and
//! answers the questions every constraint asks: what kind of value is this,
//! is it nil, is it the zero value for its type, and what does it point to.
//!
//! Nil is a first-class state: every operation on a nil node succeeds.

use crate::foundation::inspect::{Inspect, Mapping, Sequence, Structure};
use std::any::Any;
use std::fmt;

// ============================================================================
// KIND
// ============================================================================

/// Closed classification of the shapes a value can take during traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// No value at all (`()`, a JSON `null`, a missing field).
    Nil,
    /// A boolean.
    Bool,
    /// Any integer or floating point number.
    Number,
    /// A string.
    String,
    /// An ordered container (`Vec`, arrays, sets, JSON arrays).
    Sequence,
    /// A keyed container (`HashMap`, `BTreeMap`, JSON objects).
    Mapping,
    /// A value with named fields.
    Struct,
    /// An optional or boxed indirection (`Option`, `Box`, `Arc`).
    Pointer,
}

impl Kind {
    /// Returns the lowercase name of the kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Nil => "nil",
            Self::Bool => "bool",
            Self::Number => "number",
            Self::String => "string",
            Self::Sequence => "sequence",
            Self::Mapping => "mapping",
            Self::Struct => "struct",
            Self::Pointer => "pointer",
        }
    }

    /// Returns true for kinds that hold child values.
    #[must_use]
    pub const fn is_container(self) -> bool {
        matches!(self, Self::Sequence | Self::Mapping | Self::Struct)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// NUMBER
// ============================================================================

/// A number lifted out of any primitive numeric type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// Signed integers.
    Int(i64),
    /// Unsigned integers.
    UInt(u64),
    /// Floating point numbers.
    Float(f64),
}

impl Number {
    /// Returns true if the number is the zero value of its type.
    #[must_use]
    pub fn is_zero(self) -> bool {
        match self {
            Self::Int(n) => n == 0,
            Self::UInt(n) => n == 0,
            Self::Float(n) => n == 0.0,
        }
    }

    /// Converts the number to `f64`, possibly losing precision.
    #[must_use]
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Int(n) => n as f64,
            Self::UInt(n) => n as f64,
            Self::Float(n) => n,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::UInt(n) => write!(f, "{n}"),
            Self::Float(n) => write!(f, "{n}"),
        }
    }
}

// ============================================================================
// SHAPE
// ============================================================================

/// The structural view an [`Inspect`] value exposes to the traversal.
///
/// Containers are exposed as trait objects so the traversal can walk them
/// without knowing their concrete element types.
#[derive(Clone, Copy)]
pub enum Shape<'a> {
    /// No value.
    Nil,
    /// A boolean.
    Bool(bool),
    /// A number.
    Number(Number),
    /// A borrowed string.
    String(&'a str),
    /// An ordered container.
    Sequence(&'a dyn Sequence),
    /// A keyed container.
    Mapping(&'a dyn Mapping),
    /// A value with a declared field table.
    Struct(&'a dyn Structure),
    /// One level of indirection; `None` is a nil pointer.
    Pointer(Option<&'a dyn Inspect>),
}

impl Shape<'_> {
    /// Returns the kind tag of this shape.
    #[must_use]
    pub const fn kind(&self) -> Kind {
        match self {
            Self::Nil => Kind::Nil,
            Self::Bool(_) => Kind::Bool,
            Self::Number(_) => Kind::Number,
            Self::String(_) => Kind::String,
            Self::Sequence(_) => Kind::Sequence,
            Self::Mapping(_) => Kind::Mapping,
            Self::Struct(_) => Kind::Struct,
            Self::Pointer(_) => Kind::Pointer,
        }
    }

    /// Structural zero test: empty string, zero number, `false`, nil
    /// pointer, zero-length container, or a struct whose fields are all
    /// empty.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        match self {
            Self::Nil => true,
            Self::Bool(b) => !b,
            Self::Number(n) => n.is_zero(),
            Self::String(s) => str::is_empty(s),
            Self::Sequence(seq) => seq.len() == 0,
            Self::Mapping(map) => map.len() == 0,
            Self::Struct(structure) => structure
                .fields()
                .iter()
                .all(|def| structure.field(def.name()).is_none_or(|value| value.is_empty())),
            Self::Pointer(target) => target.is_none(),
        }
    }
}

impl fmt::Debug for Shape<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil => f.write_str("Nil"),
            Self::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Self::Number(n) => f.debug_tuple("Number").field(n).finish(),
            Self::String(s) => f.debug_tuple("String").field(s).finish(),
            Self::Sequence(seq) => f.debug_struct("Sequence").field("len", &seq.len()).finish(),
            Self::Mapping(map) => f.debug_struct("Mapping").field("len", &map.len()).finish(),
            Self::Struct(structure) => f
                .debug_struct("Struct")
                .field("fields", &structure.fields())
                .finish(),
            Self::Pointer(target) => f
                .debug_struct("Pointer")
                .field("nil", &target.is_none())
                .finish(),
        }
    }
}

// ============================================================================
// NODE
// ============================================================================

/// A borrowed, introspectable view of one value in the tree being validated.
///
/// `Node` is `Copy`: deriving a child node never touches the caller's data.
///
/// # Examples
///
/// ```rust
/// use trellis_validator::{Kind, Node};
///
/// let name: Option<String> = None;
/// let node = Node::new(&name);
///
/// assert_eq!(node.kind(), Kind::Pointer);
/// assert!(node.is_nil());
/// assert!(node.dereference().is_nil());
/// ```
#[derive(Clone, Copy)]
pub struct Node<'a> {
    value: Option<&'a dyn Inspect>,
}

impl<'a> Node<'a> {
    /// Wraps a value.
    #[must_use]
    pub fn new(value: &'a dyn Inspect) -> Self {
        Self { value: Some(value) }
    }

    /// A node holding no value.
    #[must_use]
    pub const fn nil() -> Self {
        Self { value: None }
    }

    /// Returns the structural view of the wrapped value.
    #[must_use]
    pub fn shape(&self) -> Shape<'a> {
        match self.value {
            Some(value) => value.shape(),
            None => Shape::Nil,
        }
    }

    /// Returns the kind tag of the wrapped value.
    #[must_use]
    pub fn kind(&self) -> Kind {
        self.shape().kind()
    }

    /// Returns true for nil values and nil pointers.
    #[must_use]
    pub fn is_nil(&self) -> bool {
        matches!(self.shape(), Shape::Nil | Shape::Pointer(None))
    }

    /// Returns true if the value is the zero value for its type.
    ///
    /// This is the single emptiness predicate every constraint relies on to
    /// treat a value as absent.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.value.is_none_or(|value| value.is_empty())
    }

    /// Strips one level of indirection.
    ///
    /// A nil pointer yields a nil node; a non-pointer yields itself.
    #[must_use]
    pub fn dereference(&self) -> Self {
        match self.shape() {
            Shape::Pointer(Some(target)) => Self::new(target),
            Shape::Pointer(None) => Self::nil(),
            _ => *self,
        }
    }

    /// Strips every level of indirection.
    #[must_use]
    pub fn dereference_all(&self) -> Self {
        let mut node = *self;
        while node.kind() == Kind::Pointer {
            node = node.dereference();
        }
        node
    }

    /// Returns the underlying value for a type-specific cast.
    #[must_use]
    pub fn raw(&self) -> Option<&'a dyn Any> {
        self.value.map(|value| value as &dyn Any)
    }

    /// Casts the underlying value to a concrete type.
    #[must_use]
    pub fn downcast<T: Any>(&self) -> Option<&'a T> {
        self.raw()?.downcast_ref::<T>()
    }

    /// Returns the Rust type name of the underlying value, or `"nil"`.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        self.value.map_or("nil", |value| value.type_name())
    }

    /// Renders the value as a path segment, used when the value is a
    /// mapping key.
    ///
    /// Strings are used verbatim, numbers and booleans through `Display`,
    /// nil as `nil`, and anything else as its type name in angle brackets.
    #[must_use]
    pub fn path_segment(&self) -> String {
        match self.dereference_all().shape() {
            Shape::Nil | Shape::Pointer(None) => "nil".to_owned(),
            Shape::Bool(b) => b.to_string(),
            Shape::Number(n) => n.to_string(),
            Shape::String(s) => s.to_owned(),
            _ => format!("<{}>", self.dereference_all().type_name()),
        }
    }
}

impl fmt::Debug for Node<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("kind", &self.kind())
            .field("type", &self.type_name())
            .finish()
    }
}
