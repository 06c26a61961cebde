//! camelCase → snake_case key transform.

/// Converts an identifier to snake_case.
///
/// An underscore is inserted before an uppercase letter that does not follow
/// another uppercase letter, and before a digit that does not follow another
/// digit, unless the previous character is already `_` or it is the first
/// character. Everything is lowercased.
///
/// `attrName22` → `attr_name_22`, `attrNAME3` → `attr_name_3`.
pub fn snake_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    let mut prev: Option<char> = None;

    for c in key.chars() {
        let boundary = match prev {
            None | Some('_') => false,
            Some(p) if c.is_ascii_uppercase() => !p.is_ascii_uppercase(),
            Some(p) if c.is_ascii_digit() => !p.is_ascii_digit(),
            Some(_) => false,
        };
        if boundary {
            out.push('_');
        }
        out.push(c.to_ascii_lowercase());
        prev = Some(c);
    }

    out
}
