//! Common test utilities for codegraph-symbols
//!
//! Shared fixtures and assertions for the integration tests.

#![allow(dead_code)]

pub mod assertions;

pub use assertions::*;
pub use fixtures::*;
