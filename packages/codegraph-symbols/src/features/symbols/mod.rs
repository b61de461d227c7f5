//! Symbol Builder

pub mod builder;
pub mod parameters;
pub mod visibility;

pub use builder::{BuildOutput, BuiltSymbol, SymbolBuilder};
pub use parameters::{decompose_generics, decompose_parameters, normalize_annotation};
pub use visibility::visibility_of;
