use std::borrow::Cow;
use std::fmt::Write as _;

use indexmap::IndexMap;

use crate::class::resolve_class;
use crate::entity::{encode, encode_number, Mode};
use crate::options::Options;
use crate::style::serialize_style;
use crate::vnode::AttrValue;

/// Props that are never serialized as attributes: they're either consumed
/// by the walker directly (`children`, `dangerously_set_inner_html`) or are
/// React/JSX conventions with no HTML counterpart (`key`, `ref`).
fn is_reserved(name: &str) -> bool {
    matches!(name, "key" | "ref" | "children" | "dangerously_set_inner_html")
}

/// Rewrites `xlink_href` into `xlink:href`. Only meaningful inside an SVG
/// subtree; the walker only calls this when `svg_depth > 0`.
fn xlink_name(name: &str) -> Option<String> {
    name.strip_prefix("xlink_").map(|rest| format!("xlink:{rest}"))
}

/// Serializes an attribute map into the space-led string that should be
/// spliced directly after an element's tag name, e.g. ` id="x" disabled`.
pub fn serialize_attrs(
    attrs: &IndexMap<Cow<'static, str>, AttrValue>,
    options: &Options,
    svg_depth: u32,
) -> String {
    let mut entries: Vec<(&str, &AttrValue)> =
        attrs.iter().map(|(k, v)| (k.as_ref(), v)).collect();
    if options.sort_attributes {
        entries.sort_by_key(|(name, _)| *name);
    }

    let mut out = String::new();
    for (name, value) in entries {
        if is_reserved(name) {
            continue;
        }
        let rendered_name = if svg_depth > 0 {
            xlink_name(name).unwrap_or_else(|| name.to_string())
        } else {
            name.to_string()
        };
        write_attr(&mut out, &rendered_name, value, options);
    }
    out
}

fn write_attr(out: &mut String, name: &str, value: &AttrValue, options: &Options) {
    match value {
        AttrValue::Null | AttrValue::Function => {}
        AttrValue::Bool(false) => {}
        AttrValue::Bool(true) => {
            if options.xml {
                let _ = write!(out, r#" {name}="{name}""#);
            } else {
                let _ = write!(out, " {name}");
            }
        }
        AttrValue::Number(n) => {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            encode_number(*n, out);
            out.push('"');
        }
        AttrValue::Text(s) => write_text_attr(out, name, s, options),
        AttrValue::Class(class) => {
            if let Some(resolved) = resolve_class(class) {
                write_text_attr(out, "class", &resolved, options);
            }
        }
        AttrValue::Style(map) => {
            if let Some(resolved) = serialize_style(map) {
                write_text_attr(out, "style", &resolved, options);
            }
        }
        AttrValue::InnerHtml(_) => {}
    }
}

fn write_text_attr(out: &mut String, name: &str, value: &str, options: &Options) {
    if !options.xml && (value.is_empty() || value == name) {
        let _ = write!(out, " {name}");
        return;
    }
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    encode(value, Mode::Attr, out);
    out.push('"');
}
