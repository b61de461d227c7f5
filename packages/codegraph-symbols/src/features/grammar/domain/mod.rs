//! Grammar domain types

pub mod language;
pub mod tags;
pub mod taxonomy;

pub use language::LanguageId;
pub use tags::{CaptureRole, DeclarationKind, FragmentRole, ImportPart, TagMap};
pub use taxonomy::{
    GenericShape, ImportShape, NodeTaxonomy, ParameterShape, PlainBinding, PrivacyRule,
    RelativeMarker,
};
