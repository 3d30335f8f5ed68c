use std::path::PathBuf;

use treematch_core::{EquivalenceConfig, NameCheck};

use super::run_common::require_config;

pub struct ConfigArgs {
    pub config: Option<PathBuf>,
    pub name_check: Option<NameCheck>,
}

pub fn run(args: ConfigArgs) {
    let config = require_config(args.config.as_deref(), args.name_check);
    match render_config(&config) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Pretty JSON of the raw layer; reading it back yields the same configuration.
pub fn render_config(config: &EquivalenceConfig) -> serde_json::Result<String> {
    serde_json::to_string_pretty(config.raw())
}
