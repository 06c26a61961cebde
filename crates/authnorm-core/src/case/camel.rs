//! snake_case → camelCase key transform.

/// Converts an identifier to camelCase.
///
/// The key is split on `_`. The first segment is kept verbatim; each later
/// non-empty segment starting with a letter gets an uppercase first letter and
/// a lowercase remainder, other segments are kept as they are. Empty segments
/// from repeated underscores vanish.
///
/// `attr__name_3` → `attrName3`.
pub fn camel_key(key: &str) -> String {
    let mut segments = key.split('_');
    let mut out = String::with_capacity(key.len());
    if let Some(first) = segments.next() {
        out.push_str(first);
    }

    for segment in segments {
        let mut chars = segment.chars();
        match chars.next() {
            None => {}
            Some(c) if c.is_ascii_alphabetic() => {
                out.push(c.to_ascii_uppercase());
                out.extend(chars.map(|c| c.to_ascii_lowercase()));
            }
            Some(_) => out.push_str(segment),
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snake_words_and_digits() {
        assert_eq!(camel_key("attr_name_1"), "attrName1");
        assert_eq!(camel_key("attr_name_22"), "attrName22");
        assert_eq!(camel_key("attr_null"), "attrNull");
    }

    #[test]
    fn repeated_underscores_collapse() {
        assert_eq!(camel_key("attr__name_3"), "attrName3");
        assert_eq!(camel_key("trailing_"), "trailing");
    }

    #[test]
    fn first_segment_kept_verbatim() {
        assert_eq!(camel_key("HTTP_status"), "HTTPStatus");
        assert_eq!(camel_key("attrName1"), "attrName1");
    }

    #[test]
    fn later_segments_lowercased_after_first_letter() {
        assert_eq!(camel_key("user_ID"), "userId");
    }
}
