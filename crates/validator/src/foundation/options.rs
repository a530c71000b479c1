//! Entry-point configuration

use serde::{Deserialize, Serialize};

/// Settings applied to the root context by [`validate_with`].
///
/// Deserializes from a partial document; missing keys take their defaults.
///
/// ```rust
/// use trellis_validator::ValidationOptions;
///
/// let options: ValidationOptions = serde_json::from_str("{}").unwrap();
/// assert!(options.strict_types);
///
/// let options: ValidationOptions =
///     serde_json::from_str(r#"{"strict_types": false}"#).unwrap();
/// assert_eq!(options, ValidationOptions::lenient());
/// ```
///
/// [`validate_with`]: crate::validate_with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationOptions {
    /// Fault on type mismatches instead of reporting a violation.
    pub strict_types: bool,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self::strict()
    }
}

impl ValidationOptions {
    /// Type mismatches are faults.
    #[must_use]
    pub const fn strict() -> Self {
        Self { strict_types: true }
    }

    /// Type mismatches are single violations.
    #[must_use]
    pub const fn lenient() -> Self {
        Self {
            strict_types: false,
        }
    }

    /// Overrides the strict-types flag.
    #[must_use = "builder methods must be chained or built"]
    pub const fn with_strict_types(mut self, strict_types: bool) -> Self {
        self.strict_types = strict_types;
        self
    }
}
