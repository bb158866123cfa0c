//! CLI for the linkwise hyperlink classifier.

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use linkwise_core::config::{self, LinkwiseConfig};
use linkwise_core::StrategyRegistry;
use std::path::{Path, PathBuf};

use commands::{
    run_classify, run_completions, run_modifier, run_origin, run_same_domain, run_sites,
    run_timer,
};

/// Top-level CLI for linkwise.
#[derive(Debug, Parser)]
#[command(name = "linkwise")]
#[command(about = "linkwise: classify page links as ignored, relative or absolute", long_about = None)]
pub struct Cli {
    /// Config file to use instead of ~/.config/linkwise/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

/// Arguments of `linkwise classify`.
#[derive(Debug, Args)]
pub struct ClassifyArgs {
    /// URL of the page the links appear on.
    #[arg(long, value_name = "URL")]
    pub page: String,

    /// Treat every link as carrying an onclick handler.
    #[arg(long)]
    pub onclick: bool,

    /// Do not apply the page's site strategy.
    #[arg(long)]
    pub no_strategy: bool,

    /// Print one JSON array instead of tab-separated lines.
    #[arg(long)]
    pub json: bool,

    /// Raw href attribute values, as written in the page.
    #[arg(required = true, value_name = "HREF")]
    pub hrefs: Vec<String>,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Classify hrefs found on a page.
    Classify(ClassifyArgs),

    /// Check whether two URLs share a base domain.
    SameDomain {
        /// First URL.
        a: String,
        /// Second URL.
        b: String,
    },

    /// Print the origin (scheme://host) of a URL.
    Origin {
        /// Absolute URL.
        url: String,
    },

    /// Print the modifier a click with these keys maps to.
    Modifier {
        /// Meta (command) key held.
        #[arg(long)]
        meta: bool,
        /// Alt key held.
        #[arg(long)]
        alt: bool,
    },

    /// Check a sleep timer, or compute the expiration of a new one.
    Timer {
        /// Expiration timestamp in epoch milliseconds. Omit to start a new sleep.
        expiration: Option<u64>,
        /// Current time in epoch milliseconds (default: wall clock).
        #[arg(long, value_name = "MS")]
        now: Option<u64>,
        /// Length of a new sleep in minutes (default: config `sleep_minutes`).
        #[arg(long, value_name = "N", conflicts_with = "expiration")]
        minutes: Option<u64>,
    },

    /// List sites with a registered strategy.
    Sites,

    /// Print shell completions.
    Completions {
        /// Target shell.
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

fn load_config(path: Option<&Path>) -> Result<LinkwiseConfig> {
    match path {
        Some(path) => config::load_from_path(path),
        None => config::load_or_init(),
    }
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        // Commands that need neither config nor strategies.
        match &cli.command {
            CliCommand::SameDomain { a, b } => return run_same_domain(a, b),
            CliCommand::Origin { url } => return run_origin(url),
            CliCommand::Modifier { meta, alt } => return run_modifier(*meta, *alt),
            CliCommand::Completions { shell } => return run_completions(*shell),
            _ => {}
        }

        let cfg = load_config(cli.config.as_deref())?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Classify(args) => {
                let registry = StrategyRegistry::from_config(&cfg)?;
                run_classify(&registry, &args)?;
            }
            CliCommand::Timer {
                expiration,
                now,
                minutes,
            } => run_timer(expiration, now, minutes.unwrap_or(cfg.sleep_minutes))?,
            CliCommand::Sites => {
                let registry = StrategyRegistry::from_config(&cfg)?;
                run_sites(&registry)?;
            }
            CliCommand::SameDomain { .. }
            | CliCommand::Origin { .. }
            | CliCommand::Modifier { .. }
            | CliCommand::Completions { .. } => {}
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
