//! Candidate parsers bundled through arborium grammars.

use crate::{Error, Result};

#[cfg(feature = "lang-kotlin")]
pub fn kotlin() -> tree_sitter::Language {
    arborium_kotlin::language().into()
}

/// Grammar for a source file extension, if one is compiled in.
pub fn language_for_extension(ext: &str) -> Option<tree_sitter::Language> {
    match ext.to_ascii_lowercase().as_str() {
        #[cfg(feature = "lang-kotlin")]
        "kt" | "kts" => Some(kotlin()),
        _ => None,
    }
}

pub fn parse_source(language: &tree_sitter::Language, source: &str) -> Result<tree_sitter::Tree> {
    let mut parser = tree_sitter::Parser::new();
    parser.set_language(language)?;
    parser.parse(source, None).ok_or(Error::ParseAborted)
}
