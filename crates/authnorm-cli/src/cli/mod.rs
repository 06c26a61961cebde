//! CLI for the authnorm payload helpers.

mod commands;
mod input;

use anyhow::Result;
use authnorm_core::config::{self, AuthnormConfig};
use authnorm_core::AssignStrategy;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use commands::{
    run_blacklist, run_camel, run_location, run_merge, run_origin, run_pick, run_snake,
    run_trim_user, CaseArgs,
};

/// Top-level CLI for authnorm.
#[derive(Debug, Parser)]
#[command(name = "authnorm")]
#[command(about = "Normalize authentication client payloads (JSON in, JSON out)", long_about = None)]
pub struct Cli {
    /// Read configuration from this file instead of ~/.config/authnorm/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Rename every object key to snake_case.
    Snake {
        #[command(flatten)]
        args: CaseArgs,
    },

    /// Rename every object key to camelCase.
    Camel {
        #[command(flatten)]
        args: CaseArgs,
    },

    /// Keep only the listed keys of a JSON object.
    Pick {
        /// Keys to keep.
        #[arg(required = true)]
        keys: Vec<String>,
        /// JSON file (stdin when omitted).
        #[arg(long, short)]
        file: Option<PathBuf>,
    },

    /// Drop the listed keys of a JSON object.
    Blacklist {
        /// Keys to drop.
        #[arg(required = true)]
        keys: Vec<String>,
        /// JSON file (stdin when omitted).
        #[arg(long, short)]
        file: Option<PathBuf>,
    },

    /// Shallow-merge two JSON objects; the second wins on conflicts.
    Merge {
        /// JSON file holding the base object.
        base: PathBuf,
        /// JSON file holding the object merged on top.
        other: PathBuf,
        /// Take only these keys from the base object.
        #[arg(long = "pick-base", value_name = "KEY")]
        pick_base: Vec<String>,
        /// Take only these keys from the other object.
        #[arg(long = "pick-other", value_name = "KEY")]
        pick_other: Vec<String>,
    },

    /// Print the origin (scheme://host[:port]) of a URL.
    Origin {
        url: String,
    },

    /// Print a URL decomposed into location fields.
    Location {
        url: String,
    },

    /// Trim whitespace around email, phoneNumber and username.
    TrimUser {
        /// JSON file (stdin when omitted).
        file: Option<PathBuf>,
    },
}

fn load_config(path: Option<&PathBuf>) -> Result<AuthnormConfig> {
    match path {
        Some(p) => config::load_from(p),
        None => config::load_or_init(),
    }
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = load_config(cli.config.as_ref())?;
        tracing::debug!("loaded config: {:?}", cfg);
        AssignStrategy::set_override(cfg.assign_strategy);

        match cli.command {
            CliCommand::Snake { args } => run_snake(&cfg, &args)?,
            CliCommand::Camel { args } => run_camel(&cfg, &args)?,
            CliCommand::Pick { keys, file } => run_pick(&keys, file.as_deref())?,
            CliCommand::Blacklist { keys, file } => run_blacklist(&keys, file.as_deref())?,
            CliCommand::Merge {
                base,
                other,
                pick_base,
                pick_other,
            } => run_merge(&base, &other, &pick_base, &pick_other)?,
            CliCommand::Origin { url } => run_origin(&url)?,
            CliCommand::Location { url } => run_location(&url)?,
            CliCommand::TrimUser { file } => run_trim_user(file.as_deref())?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
