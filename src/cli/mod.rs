pub mod parse;
pub mod remote;

use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;
use clap_complete::Shell;

use crate::cli::parse::ParseArgs;
use crate::cli::remote::RemoteArgs;

/// vcsurl — normalize VCS repository URLs and render clone remotes.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Cli {
    /// Config file with extra host aliases. Defaults to the platform config
    /// directory.
    #[arg(long, global = true, env = "VCSURL_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Parse repository URLs and print their fields.
    Parse(ParseArgs),
    /// Print a clone URL for a repository.
    Remote(RemoteArgs),
    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}
