// SPDX-License-Identifier: Apache-2.0

use clap::{builder::ValueParser, ArgAction, Parser};
use stable_version_pruner::{layout::DEFAULT_ROOT, Layout, ProjectId};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author = env!("CARGO_PKG_AUTHORS"), version, about = env!("CARGO_PKG_DESCRIPTION"))]
pub struct Cli {
    #[arg(name = "PROJECT", help = "Project identifier, e.g. mylib.1.0.0", required = true, num_args = 1, value_parser = ValueParser::new(parse_project))]
    pub project: ProjectId,

    #[arg(name = "ROOT", help = "Directory holding the packages", long = "root", num_args = 1, value_parser = ValueParser::path_buf(), default_value = DEFAULT_ROOT)]
    pub root: PathBuf,

    #[arg(name = "VERBOSE", help = "Increase log verbosity (-v info, -vv debug, -vvv trace)", short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn layout(&self) -> Layout {
        Layout::with_root(self.root.clone())
    }

    /// Log filter used when `RUST_LOG` is not set.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

fn parse_project(identifier: &str) -> Result<ProjectId, String> {
    ProjectId::new(identifier).map_err(|err| err.to_string())
}
