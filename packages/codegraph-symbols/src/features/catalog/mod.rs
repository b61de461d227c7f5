//! Catalog Assembler

pub mod assembler;

pub use assembler::{Assembly, CatalogAssembler};
