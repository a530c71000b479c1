//! Integration tests for constraint composition and path building.

mod common;

use std::collections::BTreeMap;
use std::sync::Arc;

use common::{AlwaysViolates, init_tracing, paths};
use pretty_assertions::assert_eq;
use trellis_validator::prelude::*;

// ============================================================================
// CONSTRAINTS
// ============================================================================

#[test]
fn every_member_reports_on_nil() {
    init_tracing();
    let members: Constraints = (0..4)
        .map(|_| AlwaysViolates::default().boxed())
        .collect();

    let found = validate(&(), &members).unwrap();

    assert_eq!(found.len(), 4);
    assert!(found.iter().all(|v| v.path().is_empty()));
}

#[test]
fn members_run_in_order() {
    let first = Arc::new(AlwaysViolates::default());
    let list = constraints![
        Arc::clone(&first),
        constraint_fn("second", |ctx| Ok(vec![ctx.violation("second", Details::new())])),
    ];

    let found = validate(&"x".to_owned(), &list).unwrap();

    let messages: Vec<_> = found.iter().map(Violation::message).collect();
    assert_eq!(messages, vec!["always", "second"]);
    assert_eq!(first.calls(), 1);
}

#[test]
fn empty_constraints_accept_anything() {
    assert!(validate(&42_u32, &Constraints::new()).unwrap().is_empty());
}

// ============================================================================
// ELEMENTS / KEYS
// ============================================================================

#[test]
fn elements_visits_every_item() {
    let counter = Arc::new(AlwaysViolates::default());
    let values = vec![0_u8; 6];

    let found = validate(&values, &Elements::new(Arc::clone(&counter))).unwrap();

    assert_eq!(found.len(), 6);
    assert_eq!(
        paths(&found),
        vec![".[0]", ".[1]", ".[2]", ".[3]", ".[4]", ".[5]"]
    );
    assert_eq!(counter.calls(), 6);
}

#[test]
fn elements_on_mapping_uses_keys() {
    let map = BTreeMap::from([("a".to_owned(), 1_i32), ("b".to_owned(), 2_i32)]);

    let found = validate(&map, &Elements::new(AlwaysViolates::default())).unwrap();

    assert_eq!(paths(&found), vec![".a", ".b"]);
}

#[test]
fn single_entry_mapping_path() {
    let map = BTreeMap::from([("Hello".to_owned(), "World".to_owned())]);

    let found = validate(&map, &Elements::new(AlwaysViolates::default())).unwrap();

    assert_eq!(paths(&found), vec![".Hello"]);
}

#[test]
fn elements_skips_nil_and_rejects_scalars() {
    let none: Option<Vec<u8>> = None;
    assert!(
        validate(&none, &Elements::new(AlwaysViolates::default()))
            .unwrap()
            .is_empty()
    );

    let err = validate(&5_i32, &Elements::new(Required)).unwrap_err();
    assert!(matches!(err, ConstraintError::TypeMismatch { .. }));
}

#[test]
fn keys_validate_the_key_itself() {
    let map = BTreeMap::from([(String::new(), 1_u8), ("ok".to_owned(), 2_u8)]);

    let found = validate(&map, &Keys::new(Required)).unwrap();

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].path(), ".");
}

#[test]
fn nested_elements_build_nested_paths() {
    let grid = vec![vec![String::new(), "x".to_owned()], vec![String::new()]];

    let found = validate(&grid, &Elements::new(Elements::new(Required))).unwrap();

    assert_eq!(paths(&found), vec![".[0].[0]", ".[1].[0]"]);
}

// ============================================================================
// MAP
// ============================================================================

#[test]
fn map_validates_a_derived_value_at_the_same_path() {
    let words = vec!["hello".to_owned(), "   ".to_owned()];
    let trimmed = Map::new(
        |node: Node<'_>| {
            node.downcast::<String>()
                .map(|s| s.trim().to_owned())
                .unwrap_or_default()
        },
        Required,
    );

    let found = validate(&words, &Elements::new(trimmed)).unwrap();

    assert_eq!(paths(&found), vec![".[1]"]);
}

// ============================================================================
// FAULTS
// ============================================================================

#[test]
fn first_fault_aborts_the_walk() {
    let after = Arc::new(AlwaysViolates::default());
    let list = Constraints::new()
        .with(constraint_fn("broken", |_ctx| {
            Err(ConstraintError::invalid_argument("broken", "misconfigured"))
        }))
        .with(Arc::clone(&after));

    let err = validate(&1_u8, &list).unwrap_err();

    assert_eq!(err.to_string(), "broken: misconfigured");
    assert_eq!(after.calls(), 0);
}

// ============================================================================
// LENIENT MODE
// ============================================================================

#[test]
fn keys_on_a_sequence_is_one_violation_when_lenient() {
    let values = vec!["a".to_owned(), "b".to_owned()];
    let lenient = ValidationOptions::lenient();

    let found = validate_with(&values, &Keys::new(Required), &lenient).unwrap();

    assert_eq!(found.len(), 1);
    assert_eq!(
        found[0].details().get("expected"),
        Some(&serde_json::json!("a mapping"))
    );
    assert!(found[0].message().starts_with("expected a mapping, got "));
}

#[test]
fn fields_on_a_mapping_is_one_violation_when_lenient() {
    let map = BTreeMap::from([("a".to_owned(), 1_u8)]);
    let lenient = ValidationOptions::lenient();

    let found = validate_with(&map, &Fields::new().field("a", Required), &lenient).unwrap();

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].path(), "");
    assert_eq!(
        found[0].details().get("expected"),
        Some(&serde_json::json!("a struct"))
    );
}
