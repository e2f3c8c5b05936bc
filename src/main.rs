mod cli;

use std::io;

use clap::CommandFactory;
use clap::Parser;
use console::style;
use miette::IntoDiagnostic;
use miette::Result;
use miette::WrapErr;
use tracing_subscriber::EnvFilter;
use vcsurl::Protocol;
use vcsurl::RepositoryDescriptor;
use vcsurl::config::Config;

use crate::cli::Cli;
use crate::cli::Commands;
use crate::cli::parse::ParseArgs;
use crate::cli::remote::RemoteArgs;

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Parse(args) => {
            let config = Config::discover(cli.config.as_deref())?;
            parse_urls(&config, &args)?;
        }
        Commands::Remote(args) => {
            let config = Config::discover(cli.config.as_deref())?;
            print_remote(&config, &args)?;
        }
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "vcsurl", &mut io::stdout());
        }
    }

    Ok(())
}

/// Log to stderr, filtered by `VCSURL_LOG` (default `warn`).
fn init_logging() {
    let filter = EnvFilter::try_from_env("VCSURL_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn parse_urls(config: &Config, args: &ParseArgs) -> Result<()> {
    let registry = config.registry();

    for (i, url) in args.urls.iter().enumerate() {
        let repo = registry.parse(url)?;

        if args.json {
            let line = serde_json::to_string(&repo)
                .into_diagnostic()
                .wrap_err("failed to serialize descriptor")?;
            println!("{line}");
            continue;
        }

        if i > 0 {
            println!();
        }
        print_descriptor(&repo);
    }

    Ok(())
}

fn print_descriptor(repo: &RepositoryDescriptor) {
    let kind = if repo.kind().as_str().is_empty() {
        "unknown"
    } else {
        repo.kind().as_str()
    };
    println!("{} {}", style(repo.id()).bold(), style(kind).dim());
    println!("  host:       {}", repo.host());
    if let Some(provider) = repo.provider() {
        println!("  provider:   {provider}");
    }
    if !repo.username().is_empty() {
        println!("  username:   {}", repo.username());
    }
    println!("  name:       {}", repo.name());
    println!("  full name:  {}", repo.full_name());
    if let Some(committish) = repo.committish() {
        println!("  commit-ish: {}", style(committish).cyan());
    }
}

fn print_remote(config: &Config, args: &RemoteArgs) -> Result<()> {
    let protocol: Protocol = args.protocol.parse()?;
    let repo = config.registry().parse(&args.url)?;
    let remote = repo.remote(protocol)?;
    println!("{remote}");
    Ok(())
}
