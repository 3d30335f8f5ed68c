//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use super::{NodeId, TreeBuilder};

impl TreeBuilder {
    pub(super) fn ensure_branch(&self, parent: NodeId) {
        let Some(node) = self.nodes.get(parent.index()) else {
            panic!("TreeBuilder: parent {parent:?} not found");
        };
        assert!(
            node.token.is_none(),
            "TreeBuilder: token node {parent:?} (`{}`) cannot have children",
            node.rule_name
        );
    }

    pub(super) fn ensure_id(len: usize) -> NodeId {
        u32::try_from(len)
            .map(NodeId)
            .unwrap_or_else(|_| panic!("TreeBuilder: arena exceeds {} nodes", u32::MAX))
    }

    /// Parent of a node known to be below the root.
    pub(crate) fn ensure_parent(&self, id: NodeId) -> NodeId {
        self.parent(id)
            .unwrap_or_else(|| panic!("TreeBuilder: node {id:?} has no parent"))
    }
}
