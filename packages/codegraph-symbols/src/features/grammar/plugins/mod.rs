//! Built-in language grammars
//!
//! Each plugin contributes its query file, tag map, node taxonomy and
//! docstring strategy. Adding a language means adding a plugin here; nothing
//! downstream changes.

pub mod go;
pub mod java;
pub mod python;
pub mod rust_lang;
pub mod typescript;

use super::infrastructure::registry::LanguageGrammar;

/// Every built-in grammar, in `LanguageId` order
pub fn builtin_grammars() -> Vec<LanguageGrammar> {
    vec![
        python::grammar(),
        java::grammar(),
        typescript::grammar(),
        go::grammar(),
        rust_lang::grammar(),
    ]
}
