//! Lockstep structural comparison of a candidate tree against a reference.
//!
//! At each pair of nodes the reconciler checks, in order:
//! 1. incomparable pairs, which match without descending,
//! 2. rule-name equivalence (per [`NameCheck`] policy),
//! 3. equal relevant child counts,
//!
//! then walks both child lists with independent cursors. Lists and noise are
//! skipped, redundant wrappers are looked through, and single-child chains
//! are collapsed before recursing.

mod cursor;
mod outcome;


use treematch_core::{EquivalenceConfig, NameCheck};

use crate::normalize::Normalizer;
use crate::syntax::SyntaxNode;

use cursor::ChildCursor;

pub use outcome::{Mismatch, MismatchReason, Outcome};

pub struct Reconciler<'c> {
    config: &'c EquivalenceConfig,
    candidate: Normalizer<'c>,
    reference: Normalizer<'c>,
    depth_limit: Option<usize>,
}

/// Rule names of the reference nodes from the root to the current pair.
type Path = Vec<String>;

impl<'c> Reconciler<'c> {
    pub fn new(config: &'c EquivalenceConfig) -> Self {
        Self {
            config,
            candidate: Normalizer::new(config.candidate()),
            reference: Normalizer::new(config.reference()),
            depth_limit: None,
        }
    }

    /// Treat nesting deeper than `limit` as a mismatch.
    pub fn with_depth_limit(mut self, limit: usize) -> Self {
        self.depth_limit = Some(limit);
        self
    }

    pub fn reconcile<C: SyntaxNode, R: SyntaxNode>(&self, candidate: &C, reference: &R) -> Outcome {
        let mut path = Path::new();
        match self.compare(candidate, reference, 0, &mut path) {
            Ok(()) => Outcome::matched(),
            Err(mismatch) => {
                log::debug!("trees differ: {mismatch}");
                Outcome::mismatched(mismatch)
            }
        }
    }

    pub fn matches<C: SyntaxNode, R: SyntaxNode>(&self, candidate: &C, reference: &R) -> bool {
        self.reconcile(candidate, reference).matched
    }

    fn compare<C: SyntaxNode, R: SyntaxNode>(
        &self,
        candidate: &C,
        reference: &R,
        depth: usize,
        path: &mut Path,
    ) -> Result<(), Mismatch> {
        let c_rule = candidate.rule_name();
        let r_rule = reference.rule_name();
        path.push(r_rule.to_string());

        let fail = |reason: MismatchReason, path: &Path| Mismatch {
            reason,
            candidate_rule: c_rule.to_string(),
            reference_rule: r_rule.to_string(),
            path: path.clone(),
        };

        if let Some(limit) = self.depth_limit
            && depth > limit
        {
            return Err(fail(MismatchReason::DepthLimit { limit }, path));
        }

        if self.config.is_incomparable(&c_rule, &r_rule) {
            log::trace!("{c_rule} ~ {r_rule}: incomparable, accepted");
            path.pop();
            return Ok(());
        }

        let check_names = match self.config.name_check() {
            NameCheck::Every => true,
            NameCheck::Root => depth == 0,
        };
        if check_names && !self.names_match(candidate, &c_rule, reference, &r_rule) {
            return Err(fail(MismatchReason::RuleNames, path));
        }

        let c_count = self.candidate.relevant_child_count(candidate);
        let r_count = self.reference.relevant_child_count(reference);
        log::trace!("{c_rule} ~ {r_rule}: {c_count} / {r_count} children");
        if c_count != r_count {
            return Err(fail(
                MismatchReason::ChildCount {
                    candidate: c_count,
                    reference: r_count,
                },
                path,
            ));
        }

        let mut c_cursor = ChildCursor::new(self.candidate, candidate);
        let mut r_cursor = ChildCursor::new(self.reference, reference);
        for _ in 0..c_count {
            match (c_cursor.advance(), r_cursor.advance()) {
                (None, None) => break,
                (None, Some(_)) => return Err(fail(MismatchReason::CandidateExhausted, path)),
                (Some(_), None) => return Err(fail(MismatchReason::ReferenceExhausted, path)),
                (Some(c_child), Some(r_child)) => {
                    self.compare(&c_child, &r_child, depth + 1, path)?;
                }
            }
        }

        path.pop();
        Ok(())
    }

    fn names_match<C: SyntaxNode, R: SyntaxNode>(
        &self,
        candidate: &C,
        c_rule: &str,
        reference: &R,
        r_rule: &str,
    ) -> bool {
        match (candidate.is_terminal(), reference.is_terminal()) {
            (true, true) => true,
            (false, false) => self.config.rules_equivalent(c_rule, r_rule),
            _ => false,
        }
    }
}
