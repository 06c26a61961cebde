//! URL decomposition into location records and origin extraction.
//!
//! Custom schemes (`file:`, `capacitor:`, `com.example.app:`) are handled the
//! same way as `http(s):`: the authority after `//` becomes `host`.

mod origin;
mod parse;

pub use origin::origin_from_url;
pub use parse::{location_from_url, parse_location};

use serde::{Deserialize, Serialize};

/// A URL split into the fields a browser location exposes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub href: String,
    /// Scheme including the trailing `:`.
    pub protocol: String,
    /// `hostname[:port]`.
    pub host: String,
    pub hostname: String,
    /// Explicit port, if the URL carries one.
    pub port: Option<String>,
    /// Path; empty when the URL has none (distinct from `/`).
    pub pathname: String,
    /// Query including the leading `?`, or empty.
    pub search: String,
    /// Fragment including the leading `#`, or empty.
    pub hash: String,
}
