//! Timestamp ordering validator.
//!
//! Accepts `chrono::DateTime<Utc>` behind any number of `Option`, `Box`,
//! `Rc` or `Arc` layers. The zero time (the Unix epoch, which is what
//! `DateTime::default()` returns) is treated as absent.

use crate::foundation::{Constraint, ConstraintResult, Context, Details};
use chrono::{DateTime, SecondsFormat, Utc};

// ============================================================================
// TIME AFTER VALIDATOR
// ============================================================================

/// Validates that a timestamp is strictly after a fixed instant.
///
/// Violations carry the bound under the `time` key, formatted as RFC 3339
/// with second precision and a `Z` suffix.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use trellis_validator::validators::TimeAfter;
/// use trellis_validator::validate;
///
/// let after = Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap();
/// let check = TimeAfter::new(after);
///
/// let later = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
/// assert!(validate(&later, &check).unwrap().is_empty());
///
/// let earlier = Utc.with_ymd_and_hms(1000, 1, 1, 0, 0, 0).unwrap();
/// let found = validate(&earlier, &check).unwrap();
/// assert_eq!(found[0].details().get("time").unwrap(), "2000-01-01T00:00:00Z");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeAfter {
    after: DateTime<Utc>,
}

impl TimeAfter {
    /// Creates a new `TimeAfter` validator.
    #[must_use]
    pub const fn new(after: DateTime<Utc>) -> Self {
        Self { after }
    }

    /// The exclusive lower bound.
    #[must_use]
    pub const fn after(&self) -> DateTime<Utc> {
        self.after
    }
}

impl Constraint for TimeAfter {
    fn violations(&self, ctx: &Context<'_>) -> ConstraintResult {
        ctx.typed("TimeAfter", |value: &DateTime<Utc>| {
            if *value > self.after {
                return Ok(Vec::new());
            }
            let bound = self.after.to_rfc3339_opts(SecondsFormat::Secs, true);
            Ok(vec![ctx.violation(
                format!("must be after {bound}"),
                Details::new().with("time", bound),
            )])
        })
    }

    fn name(&self) -> &str {
        "TimeAfter"
    }
}

/// Creates a `TimeAfter` validator.
#[must_use]
pub const fn time_after(after: DateTime<Utc>) -> TimeAfter {
    TimeAfter::new(after)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{ConstraintError, ValidationOptions};
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn at(year: i32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, 1, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_later_passes() {
        assert!(crate::validate(&at(2020), &time_after(at(2000))).unwrap().is_empty());
    }

    #[test]
    fn test_earlier_fails_with_details() {
        let found = crate::validate(&at(1000), &time_after(at(2000))).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].details().clone().into_value(), json!({"time": "2000-01-01T00:00:00Z"}));
        assert_eq!(found[0].message(), "must be after 2000-01-01T00:00:00Z");
    }

    #[test]
    fn test_equal_fails() {
        assert_eq!(crate::validate(&at(2000), &time_after(at(2000))).unwrap().len(), 1);
    }

    #[test]
    fn test_zero_time_is_absent() {
        let zero = DateTime::<Utc>::default();
        assert!(crate::validate(&zero, &time_after(at(2000))).unwrap().is_empty());
    }

    #[test]
    fn test_nil_pointer_is_absent() {
        let missing: Option<Box<DateTime<Utc>>> = None;
        assert!(crate::validate(&missing, &time_after(at(2000))).unwrap().is_empty());
        assert!(crate::validate(&(), &time_after(at(2000))).unwrap().is_empty());
    }

    #[test]
    fn test_pointer_is_unwrapped() {
        let value = Some(Box::new(at(1999)));
        assert_eq!(crate::validate(&value, &time_after(at(2000))).unwrap().len(), 1);
    }

    #[test]
    fn test_wrong_type_strict() {
        let err = crate::validate(&"2020-01-01".to_owned(), &time_after(at(2000))).unwrap_err();
        assert!(matches!(err, ConstraintError::TypeMismatch { constraint: "TimeAfter", .. }));
    }

    #[test]
    fn test_wrong_type_lenient() {
        let found = crate::validate_with(&5_u8, &time_after(at(2000)), &ValidationOptions::lenient())
            .unwrap();
        assert_eq!(found.len(), 1);
    }
}
