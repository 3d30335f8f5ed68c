use std::io::{self, Write};
use std::path::{Path, PathBuf};

use treematch_core::{Colors, EquivalenceConfig};

use super::fixtures::KOTLIN_PSI_FIXTURES;
use super::run_common::{
    Candidate, ComparisonArgs, Fixture, LABEL_WIDTH, REFERENCE_EXT, reconciler, require_config,
    verdict,
};

pub struct BatchArgs {
    pub dir: PathBuf,
    pub discover: bool,
    pub policy_diff: bool,
    pub common: ComparisonArgs,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BatchSummary {
    pub total: usize,
    pub passed: usize,
    /// Fixtures whose verdict flips under the other name-check policy.
    pub disagreements: Vec<String>,
}

pub fn run(args: BatchArgs) {
    let config = require_config(args.common.config.as_deref(), args.common.name_check);

    let names = if args.discover {
        discover(&args.dir, &args.common.candidate_ext).unwrap_or_else(|e| {
            eprintln!("error: cannot list {}: {}", args.dir.display(), e);
            std::process::exit(1);
        })
    } else {
        KOTLIN_PSI_FIXTURES.iter().map(|&name| name.to_owned()).collect()
    };

    let stdout = io::stdout();
    let summary = match run_batch(&args, &config, &names, &mut stdout.lock()) {
        Ok(summary) => summary,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    if summary.passed != summary.total {
        std::process::exit(1);
    }
}

/// Reconcile every fixture in `names`, one padded verdict line each.
///
/// Unreadable or malformed fixtures fail on their own line and the batch
/// continues; their errors go to stderr.
pub fn run_batch(
    args: &BatchArgs,
    config: &EquivalenceConfig,
    names: &[String],
    out: &mut impl Write,
) -> io::Result<BatchSummary> {
    let colors = Colors::new(args.common.color);
    let ext = &args.common.candidate_ext;
    let primary = reconciler(config, args.common.depth_limit);

    let other_policy = config.name_check().flipped();
    let other_config = config.clone().with_name_check(other_policy);
    let other = reconciler(&other_config, args.common.depth_limit);

    let mut summary = BatchSummary::default();
    for name in names {
        summary.total += 1;
        let label = format!("{name}.{ext}:");
        write!(out, "{label:<LABEL_WIDTH$}")?;

        let candidate = args.dir.join(format!("{name}.{ext}"));
        let reference = args.dir.join(format!("{name}.{REFERENCE_EXT}"));
        let fixture = match Fixture::load(Candidate::detect(&candidate), &reference) {
            Ok(fixture) => fixture,
            Err(e) => {
                writeln!(out, "{}", verdict(false, colors))?;
                eprintln!("{}", e.render(args.common.color));
                continue;
            }
        };

        let outcome = fixture.check(&primary);
        if let Some(mismatch) = &outcome.mismatch {
            log::debug!("{name}: {mismatch}");
        }
        if outcome.matched {
            summary.passed += 1;
        }
        write!(out, "{}", verdict(outcome.matched, colors))?;

        if args.policy_diff {
            let flipped = fixture.check(&other).matched;
            if flipped != outcome.matched {
                summary.disagreements.push(name.clone());
                let word = if flipped { "passes" } else { "fails" };
                write!(
                    out,
                    "  {}[{word} with --name-check {other_policy}]{}",
                    colors.red, colors.reset
                )?;
            }
        }
        writeln!(out)?;
    }

    writeln!(out, "\nNumber of passed tests: {}", summary.passed)?;
    if args.policy_diff {
        writeln!(
            out,
            "Policy disagreements: {}",
            summary.disagreements.len()
        )?;
    }
    Ok(summary)
}

/// Fixture names of every reference dump in `dir` with a candidate next to it.
pub fn discover(dir: &Path, candidate_ext: &str) -> io::Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.extension().and_then(|e| e.to_str()) != Some(REFERENCE_EXT) {
            continue;
        }
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        if dir.join(format!("{stem}.{candidate_ext}")).is_file() {
            names.push(stem.to_owned());
        }
    }
    names.sort();
    Ok(names)
}
