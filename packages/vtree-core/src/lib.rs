//! # `vtree-core`
//!
//! Rendering engine for `vtree`: walks an immutable virtual node tree and emits
//! a well-formed HTML (or XML) byte stream in document order.
//!
//! This crate only contains the engine (data model, serializers, the
//! traversal, and the error type). The friendly public API
//! (`render_to_string`, `render_to_stream`, `shallow_render`) lives in the
//! `vtree-ssr` crate, which most callers should depend on directly.
//!
//! ## Feature flags
//!
//! - `trace` - Emits `tracing` spans/events around component instantiation
//!   and chunk emission. Disabled by default to keep the dependency tree
//!   small for callers who don't use `tracing`.
//!
//! - `serde` - Implements `serde::Deserialize` for [`Options`] so it can be
//!   built from a plain configuration map.

#![warn(rust_2018_idioms)]
#![deny(missing_debug_implementations)]

mod attr;
mod class;
mod component;
mod context;
mod entity;
mod error;
mod options;
mod style;
mod vnode;
mod walker;

pub use attr::serialize_attrs;
pub use class::resolve_class;
pub use component::{ClassfulComponent, Component, ComponentInstance, FunctionalComponent};
pub use context::{Context, RenderCtx};
pub use entity::{encode, Mode};
pub use error::RenderError;
pub use options::Options;
pub use style::serialize_style;
pub use vnode::{el, fragment, text, AttrValue, ClassValue, ComponentNode, Element, Props, StyleValue, VNode};
pub use walker::walk;

/// The HTML void elements: they never have a closing tag and may not have
/// children (e.g. `br`, `img`, `input`). Encoded as a static set keyed by
/// lowercased tag name.
pub(crate) static VOID_ELEMENTS: once_cell::sync::Lazy<std::collections::HashSet<&'static str>> =
    once_cell::sync::Lazy::new(|| {
        [
            "area", "base", "br", "col", "embed", "hr", "img", "input", "keygen", "link", "meta",
            "param", "source", "track", "wbr",
        ]
        .into_iter()
        .collect()
    });
