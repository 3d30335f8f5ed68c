//! Read-only view of a parse tree node, shared by both sides of a comparison.
//!
//! The reconciler is generic over [`SyntaxNode`]. Two implementations ship
//! with the crate: [`NodeRef`] for trees read from a dump and [`SourceNode`]
//! for tree-sitter trees.

mod lang;
mod source;

#[cfg(test)]
mod syntax_tests;

use std::borrow::Cow;

use crate::tree::NodeRef;

pub use lang::{language_for_extension, parse_source};
#[cfg(feature = "lang-kotlin")]
pub use lang::kotlin;
pub use source::SourceNode;

pub trait SyntaxNode: Clone {
    fn rule_name(&self) -> Cow<'_, str>;

    fn child_count(&self) -> usize;

    fn child(&self, index: usize) -> Option<Self>;

    fn parent(&self) -> Option<Self>;

    /// Source text covered by the node.
    fn text(&self) -> Cow<'_, str>;

    fn token_kind(&self) -> Option<Cow<'_, str>> {
        None
    }

    fn is_terminal(&self) -> bool {
        self.child_count() == 0
    }

    fn children(&self) -> impl Iterator<Item = Self> {
        (0..self.child_count()).filter_map(move |i| self.child(i))
    }
}

impl SyntaxNode for NodeRef<'_> {
    fn rule_name(&self) -> Cow<'_, str> {
        Cow::Borrowed(NodeRef::rule_name(self))
    }

    fn child_count(&self) -> usize {
        NodeRef::child_count(self)
    }

    fn child(&self, index: usize) -> Option<Self> {
        NodeRef::child(self, index)
    }

    fn parent(&self) -> Option<Self> {
        NodeRef::parent(self)
    }

    fn text(&self) -> Cow<'_, str> {
        NodeRef::text(self)
    }

    fn token_kind(&self) -> Option<Cow<'_, str>> {
        self.token().map(|t| Cow::Borrowed(t.kind.as_str()))
    }

    fn is_terminal(&self) -> bool {
        self.is_token()
    }
}
