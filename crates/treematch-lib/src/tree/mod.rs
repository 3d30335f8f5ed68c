//! Arena-backed labelled tree.
//!
//! Nodes live in a single `Vec` and refer to each other by [`NodeId`]. The
//! root is always at index 0. A node carrying a [`Token`] is a leaf and never
//! gains children.

mod invariants;

#[cfg(test)]
mod tree_tests;

use std::borrow::Cow;
use std::fmt;

/// Index of a node inside its [`Tree`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    pub const ROOT: Self = Self(0);

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Terminal payload: token kind and source text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: String,
    pub text: String,
}

impl Token {
    pub fn new(kind: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            text: text.into(),
        }
    }
}

#[derive(Clone, Debug)]
struct NodeData {
    rule_name: String,
    token: Option<Token>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl NodeData {
    fn new(rule_name: String, token: Option<Token>, parent: Option<NodeId>) -> Self {
        Self {
            rule_name,
            token,
            parent,
            children: Vec::new(),
        }
    }
}

/// Immutable tree. Built once through [`TreeBuilder`].
#[derive(Clone, Debug)]
pub struct Tree {
    nodes: Vec<NodeData>,
}

impl Tree {
    pub fn root(&self) -> NodeRef<'_> {
        NodeRef {
            tree: self,
            id: NodeId::ROOT,
        }
    }

    pub fn get(&self, id: NodeId) -> Option<NodeRef<'_>> {
        (id.index() < self.nodes.len()).then_some(NodeRef { tree: self, id })
    }

    /// Total number of nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn data(&self, id: NodeId) -> &NodeData {
        &self.nodes[id.index()]
    }
}

/// Incremental construction of a [`Tree`].
#[derive(Debug)]
pub struct TreeBuilder {
    nodes: Vec<NodeData>,
}

impl TreeBuilder {
    pub fn new(root_rule: impl Into<String>) -> Self {
        Self {
            nodes: vec![NodeData::new(root_rule.into(), None, None)],
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Append a node as the last child of `parent`.
    ///
    /// # Panics
    /// If `parent` is unknown or carries a token.
    pub fn push(
        &mut self,
        parent: NodeId,
        rule_name: impl Into<String>,
        token: Option<Token>,
    ) -> NodeId {
        self.ensure_branch(parent);
        let id = Self::ensure_id(self.nodes.len());
        self.nodes
            .push(NodeData::new(rule_name.into(), token, Some(parent)));
        self.nodes[parent.index()].children.push(id);
        id
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id.index()).and_then(|n| n.parent)
    }

    pub fn is_token(&self, id: NodeId) -> bool {
        self.nodes
            .get(id.index())
            .is_some_and(|n| n.token.is_some())
    }

    pub fn finish(self) -> Tree {
        Tree { nodes: self.nodes }
    }
}

/// Borrowed handle to a node of a [`Tree`].
#[derive(Clone, Copy)]
pub struct NodeRef<'t> {
    tree: &'t Tree,
    id: NodeId,
}

impl<'t> NodeRef<'t> {
    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn rule_name(&self) -> &'t str {
        &self.tree.data(self.id).rule_name
    }

    pub fn token(&self) -> Option<&'t Token> {
        self.tree.data(self.id).token.as_ref()
    }

    pub fn is_token(&self) -> bool {
        self.token().is_some()
    }

    pub fn parent(&self) -> Option<NodeRef<'t>> {
        self.tree.data(self.id).parent.map(|id| self.with_id(id))
    }

    pub fn child(&self, index: usize) -> Option<NodeRef<'t>> {
        self.tree
            .data(self.id)
            .children
            .get(index)
            .map(|&id| self.with_id(id))
    }

    pub fn child_count(&self) -> usize {
        self.tree.data(self.id).children.len()
    }

    pub fn children(&self) -> impl Iterator<Item = NodeRef<'t>> + use<'t> {
        let tree = self.tree;
        tree.data(self.id)
            .children
            .iter()
            .map(move |&id| NodeRef { tree, id })
    }

    /// Token text for leaves, concatenated leaf texts otherwise.
    pub fn text(&self) -> Cow<'t, str> {
        if let Some(token) = self.token() {
            return Cow::Borrowed(&token.text);
        }
        let mut out = String::new();
        self.collect_text(&mut out);
        Cow::Owned(out)
    }

    fn collect_text(&self, out: &mut String) {
        match self.token() {
            Some(token) => out.push_str(&token.text),
            None => self.children().for_each(|c| c.collect_text(out)),
        }
    }

    fn with_id(&self, id: NodeId) -> NodeRef<'t> {
        NodeRef {
            tree: self.tree,
            id,
        }
    }
}

impl PartialEq for NodeRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tree, other.tree) && self.id == other.id
    }
}

impl Eq for NodeRef<'_> {}

impl fmt::Debug for NodeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", &self.id)
            .field("rule_name", &self.rule_name())
            .field("token", &self.token())
            .finish()
    }
}
