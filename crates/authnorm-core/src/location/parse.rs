//! Pattern-based URL decomposition.

use once_cell::sync::Lazy;
use regex::Regex;

use super::Location;
use crate::error::LocationError;

/// `scheme://[userinfo@]hostname[:port][/path][?query][#fragment]`.
///
/// Userinfo is matched but not captured. The path is empty or starts with `/`,
/// so anything left in the authority fails the match.
static URL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^([A-Za-z][-+.A-Za-z0-9]*:)//(?:[^/?#@]*@)?([^:/?#@]*)(?::([0-9]*))?(/[^?#]*|)(\?[^#]*|)(#.*|)$",
    )
    .expect("URL pattern compiles")
});

/// Splits `url` into a [`Location`].
pub fn parse_location(url: &str) -> Result<Location, LocationError> {
    if url.is_empty() {
        return Err(LocationError::Empty);
    }

    let caps = URL_PATTERN
        .captures(url)
        .ok_or_else(|| LocationError::Malformed {
            url: url.to_string(),
        })?;
    let group = |i: usize| caps.get(i).map_or("", |m| m.as_str()).to_string();

    let hostname = group(2);
    // `host:` with nothing after the colon carries no port.
    let port = caps
        .get(3)
        .map(|m| m.as_str())
        .filter(|p| !p.is_empty())
        .map(String::from);
    let host = match &port {
        Some(port) => format!("{hostname}:{port}"),
        None => hostname.clone(),
    };

    Ok(Location {
        href: url.to_string(),
        protocol: group(1),
        host,
        hostname,
        port,
        pathname: group(4),
        search: group(5),
        hash: group(6),
    })
}

/// Like [`parse_location`], but yields `None` for empty or malformed input.
pub fn location_from_url(url: &str) -> Option<Location> {
    match parse_location(url) {
        Ok(location) => Some(location),
        Err(err) => {
            tracing::debug!("cannot decompose URL: {err}");
            None
        }
    }
}
