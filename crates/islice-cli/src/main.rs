mod cli;
mod commands;

use cli::{DemoParams, RunParams, build_cli};

fn main() {
    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("run", m)) => {
            let params = RunParams::from_matches(m);
            commands::run::run(params.into());
        }
        Some(("demo", m)) => {
            let params = DemoParams::from_matches(m);
            commands::demo::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}
