//! Introspection for `serde_json` documents.
//!
//! Lets a constraint tree run directly over parsed JSON: `null` is nil,
//! arrays are sequences and objects are mappings keyed by their member
//! names.
//!
//! # Examples
//!
//! ```
//! use trellis_validator::combinators::Elements;
//! use trellis_validator::validators::Required;
//! use trellis_validator::validate;
//! use serde_json::json;
//!
//! let doc = json!({"name": "ada", "email": ""});
//! let found = validate(&doc, &Elements::new(Required)).unwrap();
//!
//! assert_eq!(found.len(), 1);
//! assert_eq!(found[0].path(), ".email");
//! ```

use crate::foundation::{Inspect, Mapping, Number, Shape};
use serde_json::{Map, Value};

impl Inspect for Value {
    fn shape(&self) -> Shape<'_> {
        match self {
            Self::Null => Shape::Nil,
            Self::Bool(b) => Shape::Bool(*b),
            Self::Number(n) => Shape::Number(json_number(n)),
            Self::String(s) => Shape::String(s),
            Self::Array(items) => Shape::Sequence(items),
            Self::Object(members) => Shape::Mapping(members),
        }
    }
}

impl Inspect for Map<String, Value> {
    fn shape(&self) -> Shape<'_> {
        Shape::Mapping(self)
    }
}

impl Mapping for Map<String, Value> {
    fn len(&self) -> usize {
        Map::len(self)
    }

    fn entries(&self) -> Box<dyn Iterator<Item = (&dyn Inspect, &dyn Inspect)> + '_> {
        Box::new(
            self.iter()
                .map(|(key, value)| (key as &dyn Inspect, value as &dyn Inspect)),
        )
    }
}

fn json_number(n: &serde_json::Number) -> Number {
    if let Some(i) = n.as_i64() {
        Number::Int(i)
    } else if let Some(u) = n.as_u64() {
        Number::UInt(u)
    } else {
        Number::Float(n.as_f64().unwrap_or(f64::NAN))
    }
}
