use clap::Args;

/// Arguments for the `remote` subcommand.
#[derive(Debug, Args)]
pub struct RemoteArgs {
    /// The repository URL to convert.
    pub url: String,

    /// Protocol of the clone URL: `ssh` or `https`.
    #[arg(long, short, default_value = "https")]
    pub protocol: String,
}
