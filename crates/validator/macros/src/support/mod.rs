//! Internal support utilities for proc-macros.
//!
//! This module provides shared functionality for parsing attributes,
//! collecting diagnostics across fields, and guarding the input shape.

pub mod attrs;
pub mod diag;
pub mod utils;
