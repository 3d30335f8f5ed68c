mod cli;
mod commands;

use cli::{BatchParams, CompareParams, ConfigParams, TreeParams, build_cli};

fn main() {
    env_logger::init();

    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("compare", m)) => {
            let params = CompareParams::from_matches(m);
            commands::compare::run(params.into());
        }
        Some(("batch", m)) => {
            let params = BatchParams::from_matches(m);
            commands::batch::run(params.into());
        }
        Some(("tree", m)) => {
            let params = TreeParams::from_matches(m);
            commands::tree::run(params.into());
        }
        Some(("config", m)) => {
            let params = ConfigParams::from_matches(m);
            commands::config::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}
