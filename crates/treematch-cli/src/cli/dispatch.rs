//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! This module contains:
//! - `*Params` structs populated from clap matches
//! - `from_matches()` extractors
//! - `From<*Params>` impls bridging dispatch to the command handlers

use std::path::PathBuf;

use clap::ArgMatches;
use treematch_core::NameCheck;

use super::ColorChoice;
use crate::commands::batch::BatchArgs;
use crate::commands::compare::CompareArgs;
use crate::commands::config::ConfigArgs;
use crate::commands::run_common::ComparisonArgs;
use crate::commands::tree::TreeArgs;

/// Flags every reconciling command accepts.
pub struct ComparisonParams {
    pub config: Option<PathBuf>,
    pub name_check: Option<NameCheck>,
    pub candidate_ext: String,
    pub depth_limit: Option<usize>,
    pub color: ColorChoice,
}

impl ComparisonParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            config: m.get_one::<PathBuf>("config").cloned(),
            name_check: parse_name_check(m),
            candidate_ext: m
                .get_one::<String>("candidate_ext")
                .cloned()
                .unwrap_or_else(|| "kt".to_owned()),
            depth_limit: m.get_one::<usize>("depth_limit").copied(),
            color: parse_color(m),
        }
    }
}

impl From<ComparisonParams> for ComparisonArgs {
    fn from(p: ComparisonParams) -> Self {
        Self {
            config: p.config,
            name_check: p.name_check,
            candidate_ext: p.candidate_ext,
            depth_limit: p.depth_limit,
            color: p.color.should_colorize(),
        }
    }
}

pub struct CompareParams {
    pub name: PathBuf,
    pub candidate_dump: Option<PathBuf>,
    pub reference: Option<PathBuf>,
    pub common: ComparisonParams,
}

impl CompareParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            name: m.get_one::<PathBuf>("name").cloned().unwrap(),
            candidate_dump: m.get_one::<PathBuf>("candidate_dump").cloned(),
            reference: m.get_one::<PathBuf>("reference").cloned(),
            common: ComparisonParams::from_matches(m),
        }
    }
}

impl From<CompareParams> for CompareArgs {
    fn from(p: CompareParams) -> Self {
        Self {
            name: p.name,
            candidate_dump: p.candidate_dump,
            reference: p.reference,
            common: p.common.into(),
        }
    }
}

pub struct BatchParams {
    pub dir: PathBuf,
    pub discover: bool,
    pub policy_diff: bool,
    pub common: ComparisonParams,
}

impl BatchParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            dir: m
                .get_one::<PathBuf>("dir")
                .cloned()
                .unwrap_or_else(|| PathBuf::from(".")),
            discover: m.get_flag("discover"),
            policy_diff: m.get_flag("policy_diff"),
            common: ComparisonParams::from_matches(m),
        }
    }
}

impl From<BatchParams> for BatchArgs {
    fn from(p: BatchParams) -> Self {
        Self {
            dir: p.dir,
            discover: p.discover,
            policy_diff: p.policy_diff,
            common: p.common.into(),
        }
    }
}

pub struct TreeParams {
    pub file: PathBuf,
    pub candidate: bool,
    pub color: ColorChoice,
}

impl TreeParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            file: m.get_one::<PathBuf>("file").cloned().unwrap(),
            candidate: m.get_flag("candidate"),
            color: parse_color(m),
        }
    }
}

impl From<TreeParams> for TreeArgs {
    fn from(p: TreeParams) -> Self {
        Self {
            file: p.file,
            candidate: p.candidate,
            color: p.color.should_colorize(),
        }
    }
}

pub struct ConfigParams {
    pub config: Option<PathBuf>,
    pub name_check: Option<NameCheck>,
}

impl ConfigParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            config: m.get_one::<PathBuf>("config").cloned(),
            name_check: parse_name_check(m),
        }
    }
}

impl From<ConfigParams> for ConfigArgs {
    fn from(p: ConfigParams) -> Self {
        Self {
            config: p.config,
            name_check: p.name_check,
        }
    }
}

/// Parse --color flag into ColorChoice.
fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}

/// Parse --name-check; absent means "keep what the configuration says".
fn parse_name_check(m: &ArgMatches) -> Option<NameCheck> {
    match m.get_one::<String>("name_check").map(|s| s.as_str()) {
        Some("every") => Some(NameCheck::Every),
        Some("root") => Some(NameCheck::Root),
        _ => None,
    }
}
