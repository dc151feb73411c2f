//! # `vtree-ssr`
//!
//! Streaming server-side renderer for a virtual node tree.
//!
//! This crate is the thin public surface over [`vtree_core`]: it wires up
//! the tree walker and exposes three entry points.
//!
//! - [`render_to_string`] walks the whole tree and returns the finished
//!   markup.
//! - [`render_to_stream`] walks the tree eagerly but exposes the result as
//!   a pull-based [`futures::Stream`], so a caller can write each chunk to
//!   a socket as it becomes available rather than buffering everything
//!   up front themselves.
//! - [`shallow_render`] expands the root component in full, but collapses
//!   any component it delegates into to a pseudo-element instead of
//!   actually rendering it.
//!
//! ## Feature flags
//!
//! - `trace` - forwards to `vtree-core`'s `trace` feature.
//! - `serde` - forwards to `vtree-core`'s `serde` feature, so `Options`
//!   can be built from a deserialized configuration value.

#![warn(rust_2018_idioms)]
#![deny(missing_debug_implementations)]

pub use vtree_core::{
    el, encode, fragment, resolve_class, serialize_attrs, serialize_style, text, AttrValue,
    ClassValue, ClassfulComponent, Component, ComponentInstance, ComponentNode, Context, Element,
    FunctionalComponent, Mode, Options, Props, RenderCtx, RenderError, StyleValue, VNode,
};

use std::rc::Rc;

use futures::stream::{self, Stream};
use indexmap::IndexMap;

/// Renders `vnode` to a single `String`, walking the whole tree.
pub fn render_to_string(vnode: &VNode, options: &Options) -> Result<String, RenderError> {
    let chunks = render_chunks(vnode, options)?;
    Ok(chunks.concat())
}

/// Renders `vnode` into a pull-based stream of chunks. Each item is a
/// piece of markup that was complete the moment it was produced; nothing
/// in a later chunk ever needs to be appended to an earlier one.
///
/// The tree is walked eagerly, before the stream is returned: the engine
/// has no `.await` points of its own (there's nothing asynchronous to
/// wait on while serializing an in-memory tree), so there's nothing to
/// gain by deferring the walk itself. What streaming buys the caller is
/// the ability to poll chunks one at a time - to interleave writing them
/// to a slow socket with other work - rather than forcing them to hold
/// the whole rendered string in memory before sending the first byte.
pub fn render_to_stream(
    vnode: &VNode,
    options: &Options,
) -> Result<impl Stream<Item = Result<String, RenderError>>, RenderError> {
    let chunks = render_chunks(vnode, options)?;
    Ok(stream::iter(chunks.into_iter().map(Ok)))
}

/// Renders `vnode` as the root of a shallow render: `vnode` itself always
/// expands in full, but any component its output delegates into is
/// serialized as a pseudo-element (`<Name ...>children</Name>`) rather
/// than actually rendered.
pub fn shallow_render(vnode: &VNode) -> Result<String, RenderError> {
    let options = Options {
        shallow: true,
        ..Options::default()
    };
    render_to_string(vnode, &options)
}

/// Walks `vnode` into its raw chunk list. A chunk boundary is opened
/// before every component delegation and before every element's open
/// tag, so the chunk count itself is part of this engine's observable
/// behavior (see [`render_to_stream`]) - nothing here is filtered out,
/// even an empty chunk left by a component whose own render produced no
/// markup of its own before delegating further.
fn render_chunks(vnode: &VNode, options: &Options) -> Result<Vec<String>, RenderError> {
    let ctx = RenderCtx::new(options);
    let context: Context = Rc::new(IndexMap::new());
    let mut chunks = Vec::new();
    vtree_core::walk(vnode, ctx, &context, &mut chunks)?;
    Ok(chunks)
}
