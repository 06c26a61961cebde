//! `authnorm origin <url>` / `authnorm location <url>`.

use anyhow::Result;
use authnorm_core::{origin_from_url, parse_location};

use crate::cli::input::print_json;

pub fn run_origin(url: &str) -> Result<()> {
    match origin_from_url(url) {
        Some(origin) => {
            println!("{origin}");
            Ok(())
        }
        None => anyhow::bail!("no origin for URL: {url:?}"),
    }
}

pub fn run_location(url: &str) -> Result<()> {
    let location = parse_location(url)?;
    print_json(&location)
}
