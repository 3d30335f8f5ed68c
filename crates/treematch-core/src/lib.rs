#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Equivalence configuration for comparing parse trees built by two parsers.
//!
//! Two layers:
//! - **Deserialization layer**: 1:1 mapping to the JSON configuration file
//! - **Lookup layer**: set-based structures queried while comparing trees
//!
//! Each tree kind (candidate, reference) gets its own [`Profile`] describing
//! which nodes are noise, which wrappers are transparent, and how tokens are
//! counted. Rule-name pairs tie the two vocabularies together.

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

pub mod colors;
mod kotlin;
pub mod utils;

pub use colors::Colors;

#[cfg(test)]
mod utils_tests;

// ============================================================================
// Deserialization Layer
// ============================================================================

/// Raw configuration, as stored in a JSON file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawConfig {
    #[serde(default)]
    pub name_check: NameCheck,
    #[serde(default)]
    pub equivalent_rules: Vec<RawRulePair>,
    /// Pairs that match by construction, without descending.
    #[serde(default)]
    pub incomparable_rules: Vec<RawRulePair>,
    #[serde(default)]
    pub candidate: RawProfile,
    #[serde(default)]
    pub reference: RawProfile,
}

/// A candidate rule name and the reference rule name it corresponds to.
///
/// A trailing `*` on either side matches any name with that prefix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRulePair {
    pub candidate: String,
    pub reference: String,
}

/// Normalization rules for one tree kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawProfile {
    pub irrelevant_rules: Vec<String>,
    /// Substrings that make any rule containing them irrelevant.
    pub irrelevant_rule_fragments: Vec<String>,
    pub irrelevant_texts: Vec<String>,
    pub irrelevant_token_kinds: Vec<String>,
    /// Rules that disappear when none of their children is relevant.
    pub empty_block_rules: Vec<String>,
    pub always_list_rules: Vec<String>,
    pub redundant_rules: Vec<RawRedundantRule>,
    /// Token texts the other vocabulary splits into two tokens.
    pub split_tokens: Vec<String>,
    /// Sigils glued to a name in one token (`@label`, `label@`).
    pub split_sigils: Vec<String>,
    /// Adjacent node texts the other vocabulary fuses into one token.
    pub fused_pairs: Vec<RawTokenPair>,
    /// A sigil token followed by a node the other vocabulary folds into it.
    pub sigil_merges: Vec<RawSigilMerge>,
}

/// A transparent wrapper rule, optionally kept when nested under `unless_parent`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRedundantRule {
    pub rule: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unless_parent: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTokenPair {
    pub first: String,
    pub second: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawSigilMerge {
    pub sigil: String,
    pub next_rule: String,
}

/// Where rule names are checked during reconciliation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NameCheck {
    /// Every compared pair must have equivalent rule names.
    #[default]
    Every,
    /// Only the top-level pair is checked; nested pairs rely on arity.
    Root,
}

impl NameCheck {
    pub fn as_str(self) -> &'static str {
        match self {
            NameCheck::Every => "every",
            NameCheck::Root => "root",
        }
    }

    /// The other policy.
    pub fn flipped(self) -> Self {
        match self {
            NameCheck::Every => NameCheck::Root,
            NameCheck::Root => NameCheck::Every,
        }
    }
}

impl std::fmt::Display for NameCheck {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse configuration JSON into the raw layer.
pub fn parse_config(json: &str) -> Result<RawConfig, serde_json::Error> {
    serde_json::from_str(json)
}

impl RawConfig {
    /// The same configuration with candidate and reference roles exchanged.
    pub fn swapped(&self) -> Self {
        let flip = |pairs: &[RawRulePair]| {
            pairs
                .iter()
                .map(|p| RawRulePair {
                    candidate: p.reference.clone(),
                    reference: p.candidate.clone(),
                })
                .collect()
        };

        Self {
            name_check: self.name_check,
            equivalent_rules: flip(&self.equivalent_rules),
            incomparable_rules: flip(&self.incomparable_rules),
            candidate: self.reference.clone(),
            reference: self.candidate.clone(),
        }
    }
}

// ============================================================================
// Lookup Layer
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
enum RulePattern {
    Exact(String),
    Prefix(String),
}

impl RulePattern {
    fn parse(s: &str) -> Self {
        match s.strip_suffix('*') {
            Some(prefix) => Self::Prefix(prefix.to_owned()),
            None => Self::Exact(s.to_owned()),
        }
    }

    fn matches(&self, name: &str) -> bool {
        match self {
            Self::Exact(exact) => exact == name,
            Self::Prefix(prefix) => name.starts_with(prefix.as_str()),
        }
    }
}

/// Set of (candidate, reference) rule-name pairs.
///
/// Exact pairs are hashed by candidate name; pairs with a prefix pattern on
/// either side are scanned linearly.
#[derive(Debug, Clone, Default)]
pub struct RuleTable {
    exact: IndexMap<String, IndexSet<String>>,
    patterns: Vec<(RulePattern, RulePattern)>,
}

impl RuleTable {
    pub fn build(pairs: &[RawRulePair]) -> Self {
        let mut table = Self::default();
        for pair in pairs {
            let candidate = RulePattern::parse(&pair.candidate);
            let reference = RulePattern::parse(&pair.reference);
            match (candidate, reference) {
                (RulePattern::Exact(c), RulePattern::Exact(r)) => {
                    table.exact.entry(c).or_default().insert(r);
                }
                (c, r) => table.patterns.push((c, r)),
            }
        }
        table
    }

    pub fn contains(&self, candidate: &str, reference: &str) -> bool {
        if self
            .exact
            .get(candidate)
            .is_some_and(|refs| refs.contains(reference))
        {
            return true;
        }
        self.patterns
            .iter()
            .any(|(c, r)| c.matches(candidate) && r.matches(reference))
    }

    pub fn len(&self) -> usize {
        self.exact.values().map(IndexSet::len).sum::<usize>() + self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Normalization lookups for one tree kind.
#[derive(Debug, Clone, Default)]
pub struct Profile {
    irrelevant_rules: IndexSet<String>,
    irrelevant_rule_fragments: Vec<String>,
    irrelevant_texts: IndexSet<String>,
    irrelevant_token_kinds: IndexSet<String>,
    empty_block_rules: IndexSet<String>,
    always_list_rules: IndexSet<String>,
    /// Rule name to the parent rules under which it is *not* redundant.
    redundant_rules: IndexMap<String, Vec<String>>,
    split_tokens: IndexSet<String>,
    split_sigils: Vec<String>,
    fused_pairs: IndexSet<(String, String)>,
    sigil_merges: IndexSet<(String, String)>,
}

impl Profile {
    pub fn build(raw: &RawProfile) -> Self {
        let mut redundant_rules: IndexMap<String, Vec<String>> = IndexMap::new();
        for entry in &raw.redundant_rules {
            let exceptions = redundant_rules.entry(entry.rule.clone()).or_default();
            if let Some(parent) = &entry.unless_parent {
                exceptions.push(parent.clone());
            }
        }

        Self {
            irrelevant_rules: raw.irrelevant_rules.iter().cloned().collect(),
            irrelevant_rule_fragments: raw.irrelevant_rule_fragments.clone(),
            irrelevant_texts: raw.irrelevant_texts.iter().cloned().collect(),
            irrelevant_token_kinds: raw.irrelevant_token_kinds.iter().cloned().collect(),
            empty_block_rules: raw.empty_block_rules.iter().cloned().collect(),
            always_list_rules: raw.always_list_rules.iter().cloned().collect(),
            redundant_rules,
            split_tokens: raw.split_tokens.iter().cloned().collect(),
            split_sigils: raw.split_sigils.clone(),
            fused_pairs: raw
                .fused_pairs
                .iter()
                .map(|p| (p.first.clone(), p.second.clone()))
                .collect(),
            sigil_merges: raw
                .sigil_merges
                .iter()
                .map(|m| (m.sigil.clone(), m.next_rule.clone()))
                .collect(),
        }
    }

    pub fn is_irrelevant_rule(&self, rule: &str) -> bool {
        self.irrelevant_rules.contains(rule)
            || self
                .irrelevant_rule_fragments
                .iter()
                .any(|fragment| rule.contains(fragment.as_str()))
    }

    pub fn is_irrelevant_text(&self, text: &str) -> bool {
        self.irrelevant_texts.contains(text)
    }

    pub fn has_irrelevant_texts(&self) -> bool {
        !self.irrelevant_texts.is_empty()
    }

    pub fn is_irrelevant_token_kind(&self, kind: &str) -> bool {
        self.irrelevant_token_kinds.contains(kind)
    }

    pub fn is_empty_block_rule(&self, rule: &str) -> bool {
        self.empty_block_rules.contains(rule)
    }

    pub fn is_always_list(&self, rule: &str) -> bool {
        self.always_list_rules.contains(rule)
    }

    /// Whether `rule` is a transparent wrapper when nested under `parent_rule`.
    pub fn is_redundant(&self, rule: &str, parent_rule: Option<&str>) -> bool {
        let Some(exceptions) = self.redundant_rules.get(rule) else {
            return false;
        };
        match parent_rule {
            Some(parent) => !exceptions.iter().any(|e| e == parent),
            None => true,
        }
    }

    pub fn has_redundant_rules(&self) -> bool {
        !self.redundant_rules.is_empty()
    }

    /// Extra tokens a single terminal stands for in the other vocabulary.
    pub fn split_extra(&self, text: &str, is_terminal: bool) -> usize {
        let mut extra = usize::from(self.split_tokens.contains(text));
        if is_terminal {
            extra += self
                .split_sigils
                .iter()
                .filter(|sigil| {
                    text != sigil.as_str()
                        && (text.starts_with(sigil.as_str()) || text.ends_with(sigil.as_str()))
                })
                .count();
        }
        extra
    }

    pub fn fuses(&self, first: &str, second: &str) -> bool {
        self.fused_pairs
            .iter()
            .any(|(a, b)| a == first && b == second)
    }

    pub fn merges_sigil(&self, sigil: &str, next_rule: &str) -> bool {
        self.sigil_merges
            .iter()
            .any(|(s, rule)| s == sigil && rule == next_rule)
    }

    /// Whether any lookup needs node text, which may be costly to build.
    pub fn inspects_text(&self) -> bool {
        !self.irrelevant_texts.is_empty()
            || !self.split_tokens.is_empty()
            || !self.split_sigils.is_empty()
            || !self.fused_pairs.is_empty()
            || !self.sigil_merges.is_empty()
    }
}

/// Complete configuration for one candidate/reference grammar pair.
#[derive(Debug, Clone)]
pub struct EquivalenceConfig {
    raw: RawConfig,
    candidate: Profile,
    reference: Profile,
    equivalent: RuleTable,
    incomparable: RuleTable,
}

impl Default for EquivalenceConfig {
    fn default() -> Self {
        Self::from_raw(RawConfig::default())
    }
}

impl EquivalenceConfig {
    pub fn from_raw(raw: RawConfig) -> Self {
        Self {
            candidate: Profile::build(&raw.candidate),
            reference: Profile::build(&raw.reference),
            equivalent: RuleTable::build(&raw.equivalent_rules),
            incomparable: RuleTable::build(&raw.incomparable_rules),
            raw,
        }
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        parse_config(json).map(Self::from_raw)
    }

    /// ANTLR Kotlin grammar (candidate) against Kotlin compiler PSI dumps (reference).
    pub fn kotlin() -> Self {
        Self::from_raw(kotlin::raw_config())
    }

    pub fn raw(&self) -> &RawConfig {
        &self.raw
    }

    pub fn candidate(&self) -> &Profile {
        &self.candidate
    }

    pub fn reference(&self) -> &Profile {
        &self.reference
    }

    pub fn name_check(&self) -> NameCheck {
        self.raw.name_check
    }

    pub fn with_name_check(mut self, name_check: NameCheck) -> Self {
        self.raw.name_check = name_check;
        self
    }

    /// The configuration with candidate and reference roles exchanged.
    pub fn swapped(&self) -> Self {
        Self::from_raw(self.raw.swapped())
    }

    /// Exact match or a configured pair.
    pub fn rules_equivalent(&self, candidate: &str, reference: &str) -> bool {
        candidate == reference || self.equivalent.contains(candidate, reference)
    }

    pub fn is_incomparable(&self, candidate: &str, reference: &str) -> bool {
        self.incomparable.contains(candidate, reference)
    }

    pub fn equivalent_rules(&self) -> &RuleTable {
        &self.equivalent
    }
}
