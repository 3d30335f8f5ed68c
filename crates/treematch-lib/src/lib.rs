//! Treematch: structural equivalence of parse trees from two parsers.
//!
//! A candidate tree (tree-sitter, or a candidate dump) is reconciled against a
//! reference tree read from an indentation-based dump, under an
//! [`EquivalenceConfig`] that maps one rule vocabulary onto the other.
//!
//! # Example
//!
//! ```
//! use treematch_lib::{EquivalenceConfig, Reconciler, parse_candidate_dump, parse_dump};
//!
//! let reference = parse_dump("KtFile: a.kt\n  IMPORT_LIST\n    <empty list>\n").unwrap();
//! let candidate = parse_candidate_dump("kotlinFile\n  importList\n").unwrap();
//!
//! let config = EquivalenceConfig::kotlin();
//! let outcome = Reconciler::new(&config).reconcile(&candidate.root(), &reference.root());
//! assert!(outcome.is_match());
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use std::path::{Path, PathBuf};

pub mod dump;
pub mod normalize;
pub mod reconcile;
pub mod syntax;
pub mod tree;

#[cfg(test)]
mod lib_tests;

pub use dump::{DecodeError, DumpPrinter, parse_candidate_dump, parse_dump};
pub use normalize::Normalizer;
pub use reconcile::{Mismatch, MismatchReason, Outcome, Reconciler};
pub use syntax::{SourceNode, SyntaxNode};
pub use tree::{NodeId, NodeRef, Token, Tree, TreeBuilder};
pub use treematch_core::{EquivalenceConfig, NameCheck};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error("grammar rejected by parser: {0}")]
    Language(#[from] tree_sitter::LanguageError),

    #[error("parser gave up before producing a tree")]
    ParseAborted,
}

pub type Result<T> = std::result::Result<T, Error>;

pub fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Load a JSON configuration file.
pub fn load_config(path: &Path) -> Result<EquivalenceConfig> {
    let json = read_file(path)?;
    let config = EquivalenceConfig::from_json(&json)?;
    log::info!("loaded configuration from {}", path.display());
    Ok(config)
}
