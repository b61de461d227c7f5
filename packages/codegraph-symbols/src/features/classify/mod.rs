//! Node Classifier

pub mod classifier;
pub mod fragment;

pub use classifier::NodeClassifier;
pub use fragment::{
    Anchor, AnchorKind, ClassifiedMatch, Classification, Fragment, ImportFragment,
};
