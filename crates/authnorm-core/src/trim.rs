//! Whitespace trimming of user-identifying fields before they leave the client.

use serde_json::Value;

use crate::Record;

/// Fields whose string values are trimmed by [`trim_user_details`].
pub const USER_DETAIL_FIELDS: [&str; 3] = ["email", "phoneNumber", "username"];

/// Returns a copy of `options` with `email`, `phoneNumber` and `username` trimmed.
///
/// Absent fields stay absent and non-string values are left as they are.
pub fn trim_user_details(options: &Record) -> Record {
    let mut out = options.clone();
    for field in USER_DETAIL_FIELDS {
        if let Some(Value::String(s)) = out.get_mut(field) {
            let trimmed = s.trim();
            if trimmed.len() != s.len() {
                *s = trimmed.to_string();
            }
        }
    }
    out
}
