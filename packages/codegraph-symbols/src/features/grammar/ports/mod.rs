//! Grammar ports

pub mod docstring;

pub use docstring::{DocContext, DocstringStrategy};
