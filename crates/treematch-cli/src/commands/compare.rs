use std::path::PathBuf;

use treematch_core::{Colors, EquivalenceConfig};
use treematch_lib::Outcome;

use super::run_common::{
    Candidate, ComparisonArgs, Fixture, REFERENCE_EXT, RunError, reconciler, require_config,
    verdict, with_extension,
};

pub struct CompareArgs {
    pub name: PathBuf,
    pub candidate_dump: Option<PathBuf>,
    pub reference: Option<PathBuf>,
    pub common: ComparisonArgs,
}

pub fn run(args: CompareArgs) {
    let config = require_config(args.common.config.as_deref(), args.common.name_check);
    let colors = Colors::new(args.common.color);

    match compare(&args, &config) {
        Ok(outcome) => {
            println!("{}", verdict(outcome.matched, colors));
            if let Some(mismatch) = outcome.mismatch {
                println!("{}", mismatch);
                std::process::exit(1);
            }
        }
        Err(e) => {
            println!("{}", verdict(false, colors));
            eprintln!("{}", e.render(args.common.color));
            std::process::exit(1);
        }
    }
}

/// Load both trees named by `args` and reconcile them under `config`.
pub fn compare(args: &CompareArgs, config: &EquivalenceConfig) -> Result<Outcome, RunError> {
    let reference = args
        .reference
        .clone()
        .unwrap_or_else(|| with_extension(&args.name, REFERENCE_EXT));
    let source = with_extension(&args.name, &args.common.candidate_ext);
    let candidate = match &args.candidate_dump {
        Some(path) => Candidate::Dump(path),
        None => Candidate::detect(&source),
    };

    let fixture = Fixture::load(candidate, &reference)?;
    Ok(fixture.check(&reconciler(config, args.common.depth_limit)))
}
