use std::borrow::Cow;
use std::fmt;

use treematch_core::utils::rule_name_from_kind;

use super::SyntaxNode;

/// Rule name given to anonymous tree-sitter nodes (keywords, punctuation).
pub const ANONYMOUS_RULE: &str = "Token";

/// A tree-sitter node paired with the source it was parsed from.
#[derive(Clone, Copy)]
pub struct SourceNode<'t> {
    node: tree_sitter::Node<'t>,
    source: &'t str,
}

impl<'t> SourceNode<'t> {
    pub fn new(node: tree_sitter::Node<'t>, source: &'t str) -> Self {
        Self { node, source }
    }

    pub fn root(tree: &'t tree_sitter::Tree, source: &'t str) -> Self {
        Self::new(tree.root_node(), source)
    }

    fn wrap(&self, node: tree_sitter::Node<'t>) -> Self {
        Self::new(node, self.source)
    }
}

impl SyntaxNode for SourceNode<'_> {
    fn rule_name(&self) -> Cow<'_, str> {
        if self.node.is_named() {
            Cow::Owned(rule_name_from_kind(self.node.kind()))
        } else {
            Cow::Borrowed(ANONYMOUS_RULE)
        }
    }

    fn child_count(&self) -> usize {
        self.node.child_count()
    }

    fn child(&self, index: usize) -> Option<Self> {
        let index = u32::try_from(index).ok()?;
        self.node.child(index).map(|n| self.wrap(n))
    }

    fn parent(&self) -> Option<Self> {
        self.node.parent().map(|n| self.wrap(n))
    }

    fn text(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.node.utf8_text(self.source.as_bytes()).unwrap_or_default())
    }

    fn token_kind(&self) -> Option<Cow<'_, str>> {
        self.is_terminal().then(|| Cow::Borrowed(self.node.kind()))
    }
}

impl fmt::Debug for SourceNode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SourceNode")
            .field("kind", &self.node.kind())
            .field("start", &self.node.start_byte())
            .field("end", &self.node.end_byte())
            .finish()
    }
}
