use std::fmt;

/// Result of reconciling two trees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub matched: bool,
    /// First point of divergence, depth-first.
    pub mismatch: Option<Mismatch>,
}

impl Outcome {
    pub fn matched() -> Self {
        Self {
            matched: true,
            mismatch: None,
        }
    }

    pub fn mismatched(mismatch: Mismatch) -> Self {
        Self {
            matched: false,
            mismatch: Some(mismatch),
        }
    }

    pub fn is_match(&self) -> bool {
        self.matched
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MismatchReason {
    RuleNames,
    ChildCount { candidate: usize, reference: usize },
    CandidateExhausted,
    ReferenceExhausted,
    DepthLimit { limit: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    pub reason: MismatchReason,
    pub candidate_rule: String,
    pub reference_rule: String,
    /// Reference rule names from the root down to the mismatching node.
    pub path: Vec<String>,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (c, r) = (&self.candidate_rule, &self.reference_rule);
        match self.reason {
            MismatchReason::RuleNames => write!(f, "rule names differ: `{c}` vs `{r}`")?,
            MismatchReason::ChildCount {
                candidate,
                reference,
            } => write!(
                f,
                "child counts differ: `{c}` has {candidate}, `{r}` has {reference}"
            )?,
            MismatchReason::CandidateExhausted => {
                write!(f, "`{c}` ran out of children before `{r}`")?
            }
            MismatchReason::ReferenceExhausted => {
                write!(f, "`{r}` ran out of children before `{c}`")?
            }
            MismatchReason::DepthLimit { limit } => {
                write!(f, "nesting exceeds {limit} levels at `{c}` / `{r}`")?
            }
        }
        if !self.path.is_empty() {
            write!(f, "\n  at {}", self.path.join(" > "))?;
        }
        Ok(())
    }
}
