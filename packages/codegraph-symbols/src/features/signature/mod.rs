//! Signature Formatter

pub mod formatter;

pub use formatter::{
    format_generics, format_parameter, format_parameters, format_signature, SignatureParts,
};
