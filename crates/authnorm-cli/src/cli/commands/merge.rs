//! `authnorm merge <base> <other>` – shallow merge of two JSON objects.

use anyhow::Result;
use authnorm_core::{merge, merge_picked, MergeBuilder};
use std::path::Path;

use crate::cli::input::{print_json, read_record};

/// An empty pick list means "all keys".
pub fn run_merge(
    base: &Path,
    other: &Path,
    pick_base: &[String],
    pick_other: &[String],
) -> Result<()> {
    let base = read_record(Some(base))?;
    let other = read_record(Some(other))?;

    let builder: MergeBuilder = if pick_base.is_empty() {
        merge(&base)
    } else {
        merge_picked(&base, pick_base)
    };
    let merged = if pick_other.is_empty() {
        builder.with(&other)
    } else {
        builder.with_picked(&other, pick_other)
    };

    tracing::debug!(keys = merged.len(), "merged records");
    print_json(&merged)
}
