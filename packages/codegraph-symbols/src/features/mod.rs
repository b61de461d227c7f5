//! Extraction stages, in pipeline order
//!
//! grammar → query → classify → imports → symbols (+ signature) → catalog

pub mod catalog;
pub mod classify;
pub mod grammar;
pub mod imports;
pub mod query;
pub mod signature;
pub mod symbols;
