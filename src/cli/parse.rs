use clap::Args;

/// Arguments for the `parse` subcommand.
#[derive(Debug, Args)]
pub struct ParseArgs {
    /// URLs to parse. SSH shorthand (`git@host:owner/repo`) and scheme-less
    /// URLs are accepted.
    #[arg(required = true)]
    pub urls: Vec<String>,

    /// Print one JSON object per line instead of a table.
    #[arg(long)]
    pub json: bool,
}
