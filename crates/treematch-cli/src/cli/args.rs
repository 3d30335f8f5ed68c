//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` so the same definition can be reused
//! across commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Fixture name without extension (positional).
pub fn name_arg() -> Arg {
    Arg::new("name")
        .value_name("NAME")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Fixture path without extension (reads NAME.kt and NAME.txt)")
}

/// Fixture directory (positional).
pub fn dir_arg() -> Arg {
    Arg::new("dir")
        .value_name("DIR")
        .default_value(".")
        .value_parser(value_parser!(PathBuf))
        .help("Directory holding the fixtures")
}

/// Dump or source file (positional).
pub fn file_arg() -> Arg {
    Arg::new("file")
        .value_name("FILE")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Dump file, or a source file with a known extension")
}

/// Candidate tree read from a dump instead of parsing source (--candidate-dump).
pub fn candidate_dump_arg() -> Arg {
    Arg::new("candidate_dump")
        .long("candidate-dump")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Read the candidate tree from a dump instead of parsing NAME.kt")
}

/// Reference dump override (--reference).
pub fn reference_arg() -> Arg {
    Arg::new("reference")
        .long("reference")
        .short('r')
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Reference dump (default: NAME.txt)")
}

/// Candidate file extension (--candidate-ext).
pub fn candidate_ext_arg() -> Arg {
    Arg::new("candidate_ext")
        .long("candidate-ext")
        .value_name("EXT")
        .default_value("kt")
        .help("Candidate file extension; unknown extensions are read as dumps")
}

/// Equivalence configuration file (--config).
pub fn config_arg() -> Arg {
    Arg::new("config")
        .long("config")
        .short('c')
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("JSON equivalence configuration (default: built-in Kotlin profile)")
}

/// Rule-name check policy (--name-check).
pub fn name_check_arg() -> Arg {
    Arg::new("name_check")
        .long("name-check")
        .value_name("POLICY")
        .value_parser(["every", "root"])
        .help("Compare rule names at every node or only at the root")
}

/// Maximum nesting depth (--depth-limit).
pub fn depth_limit_arg() -> Arg {
    Arg::new("depth_limit")
        .long("depth-limit")
        .value_name("N")
        .value_parser(value_parser!(usize))
        .help("Report trees nested deeper than N levels as mismatches")
}

/// Discover fixtures instead of using the built-in list (--discover).
pub fn discover_arg() -> Arg {
    Arg::new("discover")
        .long("discover")
        .action(ArgAction::SetTrue)
        .help("Use every *.txt in DIR that has a candidate file next to it")
}

/// Also run the `root` policy and flag disagreements (--policy-diff).
pub fn policy_diff_arg() -> Arg {
    Arg::new("policy_diff")
        .long("policy-diff")
        .action(ArgAction::SetTrue)
        .help("Also check with --name-check root and flag differing verdicts")
}

/// Read the dump with candidate rule-name normalization (--candidate).
pub fn candidate_flag_arg() -> Arg {
    Arg::new("candidate")
        .long("candidate")
        .action(ArgAction::SetTrue)
        .help("Normalize rule names the way candidate dumps are read")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}
