//! Normalization helpers for authentication client payloads: key selection,
//! shallow merging, snake/camel key casing, URL decomposition and trimming of
//! user-identifying fields.

pub mod config;
pub mod error;
pub mod logging;

pub mod assign;
pub mod case;
pub mod keys;
pub mod location;
pub mod merge;
pub mod trim;

pub use assign::{copy_own_enumerable, AssignStrategy};
pub use case::{to_camel_case, to_snake_case, CaseOptions};
pub use error::LocationError;
pub use keys::{blacklist, keys_not_in, pick};
pub use location::{location_from_url, origin_from_url, parse_location, Location};
pub use merge::{extend, merge, merge_picked, MergeBuilder};
pub use trim::trim_user_details;

/// A plain record: string keys to JSON values, in insertion order.
pub type Record = serde_json::Map<String, serde_json::Value>;
