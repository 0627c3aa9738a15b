//! `data-*` attribute codec
//!
//! Metadata keys are camel-case in memory (`userAuthor`) and hyphenated,
//! `data-`-prefixed attributes on the page (`data-user-author`), the same
//! mapping browsers apply between `dataset` keys and attribute names.
//!
//! Values are written verbatim. A value containing `"` produces an
//! attribute list that cannot be read back; the page format has never
//! escaped values and readers of existing pages depend on that.

use crate::models::Attributes;
use regex::Regex;
use std::sync::LazyLock;

/// Prefix of every metadata attribute
pub const DATA_PREFIX: &str = "data-";

/// Matches `name="value"` pairs inside an opening tag
static ATTRIBUTE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"([A-Za-z_:][A-Za-z0-9_:.-]*)="([^"]*)""#).unwrap());

/// Convert a camel-case key to its attribute name
///
/// # Examples
///
/// ```
/// use wikiforum_core::utils::to_attribute_name;
///
/// assert_eq!(to_attribute_name("userAuthor"), "data-user-author");
/// assert_eq!(to_attribute_name("id"), "data-id");
/// ```
pub fn to_attribute_name(key: &str) -> String {
    let mut name = String::with_capacity(DATA_PREFIX.len() + key.len() + 4);
    name.push_str(DATA_PREFIX);

    for c in key.chars() {
        if c.is_uppercase() {
            name.push('-');
            name.extend(c.to_lowercase());
        } else {
            name.push(c);
        }
    }

    name
}

/// Convert an attribute name back to its camel-case key
///
/// Returns `None` for attributes outside the `data-` namespace.
///
/// # Examples
///
/// ```
/// use wikiforum_core::utils::from_attribute_name;
///
/// assert_eq!(from_attribute_name("data-time-publish").as_deref(), Some("timePublish"));
/// assert_eq!(from_attribute_name("class"), None);
/// ```
pub fn from_attribute_name(name: &str) -> Option<String> {
    let stripped = name.strip_prefix(DATA_PREFIX)?;

    let mut key = String::with_capacity(stripped.len());
    let mut upper_next = false;
    for c in stripped.chars() {
        if c == '-' {
            upper_next = true;
        } else if upper_next {
            key.extend(c.to_uppercase());
            upper_next = false;
        } else {
            key.push(c);
        }
    }

    Some(key)
}

/// Encode metadata as a space-separated `data-*` attribute list
///
/// Order follows the map's iteration order. An empty map yields an empty
/// string.
///
/// # Examples
///
/// ```
/// use wikiforum_core::models::Attributes;
/// use wikiforum_core::utils::encode_attributes;
///
/// let meta: Attributes = [("userAuthor", "Alice"), ("timePublish", "2024-01-01")]
///     .into_iter()
///     .collect();
/// assert_eq!(
///     encode_attributes(&meta),
///     r#"data-user-author="Alice" data-time-publish="2024-01-01""#
/// );
/// ```
pub fn encode_attributes(meta: &Attributes) -> String {
    meta.iter()
        .map(|(key, value)| format!("{}=\"{}\"", to_attribute_name(key), value))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Decode the `data-*` attributes of an opening tag into metadata
///
/// Attributes outside the `data-` namespace (such as `class`) are skipped.
pub fn decode_attributes(tag: &str) -> Attributes {
    ATTRIBUTE_RE
        .captures_iter(tag)
        .filter_map(|caps| {
            let key = from_attribute_name(&caps[1])?;
            Some((key, caps[2].to_string()))
        })
        .collect()
}
