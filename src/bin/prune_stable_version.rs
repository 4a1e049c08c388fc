// SPDX-License-Identifier: Apache-2.0

use clap::{CommandFactory, FromArgMatches};
use std::process::exit;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;

mod cli;

fn main() {
    let cli = match Cli::command()
        .try_get_matches()
        .and_then(|matches| Cli::from_arg_matches(&matches))
    {
        Ok(cli) => cli,
        Err(err) => {
            // the exit status still reports the failure if stderr is gone
            let _ = err.print();
            // --help and --version are not failures
            exit(if err.use_stderr() { 1 } else { 0 });
        }
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_filter())),
        )
        .init();

    if let Err(err) = stable_version_pruner::prune(&cli.project, &cli.layout()) {
        eprintln!("error: {err}");
        exit(1);
    }
}
