//! Query Engine

pub mod engine;

pub use engine::{CaptureRecord, MatchRecord, QueryEngine, QueryOutcome};
