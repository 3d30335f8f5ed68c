use crate::normalize::Normalizer;
use crate::syntax::SyntaxNode;

/// Walks the children of one node the way the other vocabulary sees them.
///
/// Lists and irrelevant children are skipped. A redundant wrapper yields its
/// own relevant children one by one instead of itself. Every yielded node is
/// already collapsed.
pub(super) struct ChildCursor<'p, 'c, N> {
    normalizer: Normalizer<'c>,
    parent: &'p N,
    next: usize,
    inner_next: usize,
}

impl<'p, 'c, N: SyntaxNode> ChildCursor<'p, 'c, N> {
    pub(super) fn new(normalizer: Normalizer<'c>, parent: &'p N) -> Self {
        Self {
            normalizer,
            parent,
            next: 0,
            inner_next: 0,
        }
    }

    pub(super) fn advance(&mut self) -> Option<N> {
        loop {
            self.next = self.normalizer.next_child(self.parent, self.next);
            let child = self.parent.child(self.next)?;

            if !self.normalizer.is_redundant(&child) {
                self.next += 1;
                return Some(self.normalizer.collapse(&child));
            }

            self.inner_next = self.normalizer.next_child(&child, self.inner_next);
            match child.child(self.inner_next) {
                Some(inner) => {
                    self.inner_next += 1;
                    return Some(self.normalizer.collapse(&inner));
                }
                None => {
                    self.inner_next = 0;
                    self.next += 1;
                }
            }
        }
    }
}
