//! Command builders for the CLI.
//!
//! Each command is built from the shared arg builders in `args.rs`.

use clap::Command;

use super::args::*;

/// Flags shared by every command that reconciles trees.
fn with_comparison_args(cmd: Command) -> Command {
    cmd.arg(config_arg())
        .arg(name_check_arg())
        .arg(candidate_ext_arg())
        .arg(depth_limit_arg())
        .arg(color_arg())
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("treematch")
        .about("Check parse trees against reference dumps")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(compare_command())
        .subcommand(batch_command())
        .subcommand(tree_command())
        .subcommand(config_command())
}

/// Reconcile one candidate against its reference dump.
pub fn compare_command() -> Command {
    let cmd = Command::new("compare")
        .about("Compare one candidate tree against its reference dump")
        .override_usage(
            "\
  treematch compare <NAME>
  treematch compare <NAME> --candidate-dump <FILE>
  treematch compare <NAME> --reference <FILE>",
        )
        .after_help(
            r#"EXAMPLES:
  treematch compare psi/Enums                     # psi/Enums.kt vs psi/Enums.txt
  treematch compare Enums --candidate-dump a.ast  # candidate from a dump
  treematch compare Enums --name-check root       # only the root names must agree
  treematch compare Enums -c tree-sitter.json     # custom equivalence table"#,
        )
        .arg(name_arg())
        .arg(candidate_dump_arg())
        .arg(reference_arg());

    with_comparison_args(cmd)
}

/// Reconcile every fixture of a directory.
pub fn batch_command() -> Command {
    let cmd = Command::new("batch")
        .about("Compare every fixture in a directory and count passes")
        .after_help(
            r#"EXAMPLES:
  treematch batch psi/                     # built-in fixture list
  treematch batch psi/ --discover          # every NAME.txt with a NAME.kt
  treematch batch psi/ --candidate-ext ast # candidates are dumps
  treematch batch psi/ --policy-diff       # flag verdicts that depend on --name-check"#,
        )
        .arg(dir_arg())
        .arg(discover_arg())
        .arg(policy_diff_arg());

    with_comparison_args(cmd)
}

/// Show a dump or a parsed source file in the dump format.
pub fn tree_command() -> Command {
    Command::new("tree")
        .about("Print a tree in the dump format")
        .after_help(
            r#"EXAMPLES:
  treematch tree Enums.txt              # re-print a reference dump
  treematch tree Enums.kt               # tree-sitter tree of a source file
  treematch tree Enums.ast --candidate  # candidate dump with normalized names"#,
        )
        .arg(file_arg())
        .arg(candidate_flag_arg())
        .arg(color_arg())
}

/// Print the active configuration.
pub fn config_command() -> Command {
    Command::new("config")
        .about("Print the active equivalence configuration as JSON")
        .after_help(
            r#"EXAMPLES:
  treematch config > kotlin.json     # start a custom table from the built-in one
  treematch config -c kotlin.json    # validate and normalize a configuration"#,
        )
        .arg(config_arg())
        .arg(name_check_arg())
}
