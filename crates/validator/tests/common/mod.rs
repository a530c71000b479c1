//! Shared fixtures for the integration suites.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};

use trellis_validator::prelude::*;

/// Emits one violation for every node it sees, and counts its calls.
#[derive(Debug, Default)]
pub struct AlwaysViolates {
    calls: AtomicUsize,
}

impl AlwaysViolates {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Constraint for AlwaysViolates {
    fn violations(&self, ctx: &Context<'_>) -> ConstraintResult {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(vec![ctx.violation("always", Details::new())])
    }

    fn name(&self) -> &str {
        "AlwaysViolates"
    }
}

/// Returns only the paths of the given violations.
pub fn paths(found: &[Violation]) -> Vec<&str> {
    found.iter().map(Violation::path).collect()
}

/// Installs a test-scoped subscriber so traces show up under `--nocapture`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}
