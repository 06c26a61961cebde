//! `authnorm pick` / `authnorm blacklist` – key filtering.

use anyhow::Result;
use authnorm_core::{blacklist, pick};
use std::path::Path;

use crate::cli::input::{print_json, read_record};

pub fn run_pick(keys: &[String], file: Option<&Path>) -> Result<()> {
    let record = read_record(file)?;
    print_json(&pick(&record, keys))
}

pub fn run_blacklist(keys: &[String], file: Option<&Path>) -> Result<()> {
    let record = read_record(file)?;
    print_json(&blacklist(&record, keys))
}
