//! `authnorm snake` / `authnorm camel` – recursive key renaming.

use anyhow::Result;
use authnorm_core::config::AuthnormConfig;
use authnorm_core::{to_camel_case, to_snake_case, CaseOptions};
use clap::Args;
use std::path::PathBuf;

use crate::cli::input::{print_json, read_json};

#[derive(Debug, Clone, Args)]
pub struct CaseArgs {
    /// Key left untouched (repeatable); added to the configured excludes.
    #[arg(long, short = 'x', value_name = "KEY")]
    pub exclude: Vec<String>,
    /// Keep each original key next to the renamed one.
    #[arg(long)]
    pub keep_original: bool,
    /// JSON file (stdin when omitted).
    pub file: Option<PathBuf>,
}

impl CaseArgs {
    /// Command-line excludes and flags layered over the `[case]` config section.
    pub fn resolve(&self, cfg: &AuthnormConfig) -> (Vec<String>, CaseOptions) {
        let case = cfg.case_config();
        let mut exclude = case.exclude.clone();
        exclude.extend(self.exclude.iter().cloned());
        let options = CaseOptions {
            keep_original: self.keep_original || case.keep_original,
        };
        (exclude, options)
    }
}

pub fn run_snake(cfg: &AuthnormConfig, args: &CaseArgs) -> Result<()> {
    let input = read_json(args.file.as_deref())?;
    let (exclude, options) = args.resolve(cfg);
    print_json(&to_snake_case(&input, &exclude, options))
}

pub fn run_camel(cfg: &AuthnormConfig, args: &CaseArgs) -> Result<()> {
    let input = read_json(args.file.as_deref())?;
    let (exclude, options) = args.resolve(cfg);
    print_json(&to_camel_case(&input, &exclude, options))
}
