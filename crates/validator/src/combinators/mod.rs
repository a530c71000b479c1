//! Composition constructs
//!
//! Every type here is itself a [`Constraint`](crate::foundation::Constraint),
//! so they nest freely:
//!
//! - [`Constraints`] runs a list against one value.
//! - [`Elements`], [`Fields`] and [`Keys`] descend into containers and
//!   extend the path.
//! - [`Map`] validates a derived value at the same path.
//! - [`Lazy`] defers construction, which is what makes recursion possible.
//! - [`When`] and [`WhenFn`] apply a constraint conditionally.

pub mod constraints;
pub mod elements;
pub mod fields;
pub mod keys;
pub mod lazy;
pub mod map;
pub mod when;

pub use constraints::Constraints;
pub use elements::{Elements, elements};
pub use fields::Fields;
pub use keys::{Keys, keys};
pub use lazy::{Lazy, lazy};
pub use map::{Map, map};
pub use when::{When, WhenFn, when, when_fn};
