//! Shared test utilities for longbox integration harnesses.
//!
//! Import everything via `mod common; use common::*;` at the top of each
//! harness file. All helpers are deterministic.

// Not every harness touches every helper.
#![allow(dead_code)]

pub mod builders;
pub mod fixtures;

pub use builders::*;
pub use fixtures::*;
