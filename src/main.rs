//! etcpwd binary entry point.
//!
//! Loads the configured passwd file and prints the result of a single lookup.
//!
use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use etcpwd::PasswdCache;
use etcpwd::cli::{CliArgs, Command};

/// Install a stderr `fmt` subscriber; `RUST_LOG` overrides the default level.
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("etcpwd=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: CliArgs) -> Result<()> {
    let config = args.to_cache_config()?;
    tracing::debug!(?config, "resolved configuration");
    let cache = PasswdCache::from_config(&config)
        .with_context(|| format!("loading {}", config.path.display()))?;

    match args.command {
        Command::User { name } => match cache.lookup_by_name(&name) {
            Some(entry) => println!("{entry}"),
            None => bail!("no such user with username '{name}'"),
        },
        Command::Uid { uid } => match cache.lookup_by_uid(uid) {
            Some(entry) => println!("{entry}"),
            None => bail!("no such user with uid {uid}"),
        },
        Command::Home { name } => println!("{}", cache.home_dir_for_username(&name)?),
        Command::List { query } => {
            for entry in cache.search(query.as_deref().unwrap_or("")) {
                println!("{entry}");
            }
        }
    }
    Ok(())
}

/// Program entry point: run one command and report any error to stderr.
fn main() {
    init_tracing();
    if let Err(err) = run(CliArgs::parse()) {
        eprintln!("etcpwd: {err:#}");
        std::process::exit(1);
    }
}
