//! Indentation-based tree dump format.
//!
//! ```text
//! KtFile: Sample.kt
//!   PACKAGE_DIRECTIVE
//!     <empty list>
//!   FUN
//!     PsiElement(fun)('fun')
//!     PsiWhiteSpace(' ')
//!     PsiElement(IDENTIFIER)('main')
//! ```
//!
//! Line 0 is the root rule name. Every other line is one node, indented two
//! spaces per level below the root: either a bare rule name or
//! `Rule(KIND)('text')` for a token.

mod error;
mod printer;
mod reader;
mod writer;


pub use error::DecodeError;
pub use printer::DecodeErrorPrinter;
pub use reader::{DumpReader, parse_candidate_dump, parse_dump};
pub use writer::DumpPrinter;

pub const INDENT: &str = "  ";

/// Rule name and token kind of whitespace entries; the payload is kept verbatim.
pub const WHITESPACE: &str = "PsiWhiteSpace";

/// Rule name and token kind of parse error entries; the message is dropped.
pub const ERROR_ELEMENT: &str = "PsiErrorElement";
