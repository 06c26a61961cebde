//! `authnorm trim-user` – trim email, phoneNumber and username.

use anyhow::Result;
use authnorm_core::trim_user_details;
use std::path::Path;

use crate::cli::input::{print_json, read_record};

pub fn run_trim_user(file: Option<&Path>) -> Result<()> {
    let options = read_record(file)?;
    print_json(&trim_user_details(&options))
}
