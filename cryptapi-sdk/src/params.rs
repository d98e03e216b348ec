//! Parameter maps and callback URL preparation.
//!
//! The callback URL handed to the gateway is the merchant's URL with the
//! custom parameters appended, then percent-encoded everywhere except the
//! URL-structural characters in [`RESERVED`]. A parameter value that itself
//! contains one of those characters passes through unescaped.

use indexmap::IndexMap;

/// Ordered `key -> value` parameters. Values are already rendered scalars.
pub type Params = IndexMap<String, String>;

/// Characters [`prepare_url`] never escapes.
pub const RESERVED: &[char] = &[':', '/', '?', '=', '&'];

/// Merge `overrides` into `base`, left to right.
///
/// A later map wins on key collisions; a key keeps the position of its first
/// occurrence.
pub fn merge_params<'a>(base: &Params, overrides: impl IntoIterator<Item = &'a Params>) -> Params {
    let mut merged = base.clone();
    for map in overrides {
        for (key, value) in map {
            merged.insert(key.clone(), value.clone());
        }
    }
    merged
}

/// Append `params` to `base_url` as a query string and percent-encode the
/// result, preserving [`RESERVED`].
///
/// Works for absolute and relative URLs alike. Empty `params` return
/// `base_url` untouched. The output is meant to be prepared exactly once:
/// feeding it back in re-escapes every `%`.
pub fn prepare_url(base_url: &str, params: &Params) -> String {
    if params.is_empty() {
        return base_url.to_owned();
    }

    let separator = match base_url.find('?') {
        None => "?",
        Some(_) if base_url.ends_with(&['?', '&'][..]) => "",
        Some(_) => "&",
    };
    let query = params
        .iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join("&");

    encode_preserving_reserved(&format!("{base_url}{separator}{query}"))
}

/// Percent-encode `raw`, leaving [`RESERVED`] characters as they are.
pub fn encode_preserving_reserved(raw: &str) -> String {
    let mut encoded = String::with_capacity(raw.len());
    let mut start = 0;
    for (idx, reserved) in raw.match_indices(RESERVED) {
        encoded.push_str(&urlencoding::encode(&raw[start..idx]));
        encoded.push_str(reserved);
        start = idx + reserved.len();
    }
    encoded.push_str(&urlencoding::encode(&raw[start..]));
    encoded
}

/// Loose truthiness used for gateway flags such as `post=1`.
pub fn is_truthy(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "" | "0" | "false" | "no" | "off"
    )
}
