use std::borrow::Cow;

use indexmap::IndexMap;

use crate::vnode::StyleValue;

/// Rewrites a camelCase CSS property name (`backgroundColor`) to its
/// kebab-case form (`background-color`), leaving custom properties
/// (`--my-var`) untouched.
fn kebab_case(name: &str) -> String {
    if name.starts_with("--") {
        return name.to_string();
    }
    let mut out = String::with_capacity(name.len() + 4);
    for ch in name.chars() {
        if ch.is_ascii_uppercase() {
            out.push('-');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

/// Serializes a style map into a `key: value; key2: value2` string
/// suitable for the `style=""` attribute, or `None` if the map is empty.
///
/// Numeric values are stringified as-is, with no unit injected: the
/// caller owns units, the same way it owns everything else about the
/// value it put in the map.
pub fn serialize_style(map: &IndexMap<Cow<'static, str>, StyleValue>) -> Option<String> {
    if map.is_empty() {
        return None;
    }
    let mut out = String::new();
    for (name, value) in map {
        let prop = kebab_case(name);
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(&prop);
        out.push(':');
        out.push(' ');
        match value {
            StyleValue::Str(s) => out.push_str(s),
            StyleValue::Number(n) => out.push_str(&n.to_string()),
        }
        out.push(';');
    }
    Some(out)
}
