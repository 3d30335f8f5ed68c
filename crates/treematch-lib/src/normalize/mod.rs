//! Profile-driven view of a tree: which nodes count and how many.
//!
//! Both sides of a comparison go through the same predicates, each with its
//! own [`Profile`]. Nothing here mutates a tree.

#[cfg(test)]
mod normalize_tests;

use treematch_core::Profile;

use crate::syntax::SyntaxNode;

#[derive(Clone, Copy, Debug)]
pub struct Normalizer<'c> {
    profile: &'c Profile,
}

impl<'c> Normalizer<'c> {
    pub fn new(profile: &'c Profile) -> Self {
        Self { profile }
    }

    pub fn profile(&self) -> &'c Profile {
        self.profile
    }

    /// False for noise (whitespace, comments, terminators) and for
    /// empty-block rules with no relevant descendant.
    pub fn is_relevant<N: SyntaxNode>(&self, node: &N) -> bool {
        let rule = node.rule_name();
        if self.profile.is_irrelevant_rule(&rule) {
            return false;
        }
        if node
            .token_kind()
            .is_some_and(|kind| self.profile.is_irrelevant_token_kind(&kind))
        {
            return false;
        }
        if self.profile.has_irrelevant_texts() && self.profile.is_irrelevant_text(&node.text()) {
            return false;
        }
        if self.profile.is_empty_block_rule(&rule) {
            return self.has_relevant_descendant(node);
        }
        true
    }

    /// A relevant terminal somewhere below `node`, reached only through
    /// relevant nodes.
    fn has_relevant_descendant<N: SyntaxNode>(&self, node: &N) -> bool {
        node.children().any(|c| {
            self.is_relevant(&c) && (c.is_terminal() || self.has_relevant_descendant(&c))
        })
    }

    /// Whether `node` is a transparent wrapper under its current parent.
    pub fn is_redundant<N: SyntaxNode>(&self, node: &N) -> bool {
        if !self.profile.has_redundant_rules() {
            return false;
        }
        let parent = node.parent();
        let parent_rule = parent.as_ref().map(|p| p.rule_name());
        self.profile
            .is_redundant(&node.rule_name(), parent_rule.as_deref())
    }

    /// Number of children the other vocabulary would see under `node`.
    pub fn relevant_child_count<N: SyntaxNode>(&self, node: &N) -> usize {
        let children: Vec<N> = node.children().collect();
        let inspects_text = self.profile.inspects_text();
        let texts: Vec<_> = if inspects_text {
            children.iter().map(|c| c.text()).collect()
        } else {
            Vec::new()
        };

        let mut count = children.len() as isize;
        for (i, child) in children.iter().enumerate() {
            if !self.is_relevant(child) {
                count -= 1;
            }
            if self.is_redundant(child) {
                count += self.relevant_child_count(child) as isize - 1;
            }
            if !inspects_text {
                continue;
            }

            let terminal = child.is_terminal();
            count += self.profile.split_extra(&texts[i], terminal) as isize;
            if let Some(next_text) = texts.get(i + 1) {
                if self.profile.fuses(&texts[i], next_text) {
                    count -= 1;
                }
                if terminal && self.profile.merges_sigil(&texts[i], &children[i + 1].rule_name()) {
                    count -= 1;
                }
            }
        }
        count.max(0) as usize
    }

    /// A node that contributes no structure: always-list rules, nodes with no
    /// relevant child, and single-child chains ending in one of those.
    pub fn is_list<N: SyntaxNode>(&self, node: &N) -> bool {
        if self.profile.is_always_list(&node.rule_name()) {
            return true;
        }
        match self.relevant_child_count(node) {
            0 => true,
            1 => self
                .first_relevant_child(node)
                .is_none_or(|child| self.is_list(&child)),
            _ => false,
        }
    }

    pub fn first_relevant_child<N: SyntaxNode>(&self, node: &N) -> Option<N> {
        node.children().find(|c| self.is_relevant(c))
    }

    /// Index of the first child at or after `from` that is relevant and not
    /// a list; `child_count()` when there is none.
    pub fn next_child<N: SyntaxNode>(&self, node: &N, from: usize) -> usize {
        let count = node.child_count();
        let mut next = from;
        while next < count {
            match node.child(next) {
                Some(child) if self.is_relevant(&child) && !self.is_list(&child) => break,
                _ => next += 1,
            }
        }
        next.min(count)
    }

    /// Descend through single-child chains. Idempotent.
    pub fn collapse<N: SyntaxNode>(&self, node: &N) -> N {
        let mut current = node.clone();
        while self.relevant_child_count(&current) == 1 {
            match self.first_relevant_child(&current) {
                Some(child) => current = child,
                None => break,
            }
        }
        current
    }
}
