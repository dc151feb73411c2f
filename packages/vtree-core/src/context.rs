use std::borrow::Cow;
use std::rc::Rc;

use indexmap::IndexMap;

use crate::options::Options;
use crate::vnode::AttrValue;

/// An immutable, copy-on-write context map threaded down through
/// components. A component's `get_child_context` only ever produces a new
/// `Context` that layers on top of the one it received; it never mutates
/// its own view and its ancestors never see what it produced.
pub type Context = Rc<IndexMap<Cow<'static, str>, AttrValue>>;

/// Per-call state carried through the walk. Borrowed, never cloned wholesale.
#[derive(Debug, Clone, Copy)]
pub struct RenderCtx<'a> {
    pub options: &'a Options,
    pub svg_depth: u32,
    /// How many component delegations deep the walk currently is. `0`
    /// means no component has been expanded yet on this path: the next
    /// component encountered is the root, and the root always expands in
    /// full regardless of `Options::shallow`. Only components seen once
    /// `depth > 0` are candidates for shallow collapsing.
    pub depth: u32,
}

impl<'a> RenderCtx<'a> {
    pub fn new(options: &'a Options) -> Self {
        RenderCtx {
            options,
            svg_depth: 0,
            depth: 0,
        }
    }

    /// Returns a copy of self with `svg_depth` incremented, used when
    /// descending into an `<svg>` element or one of its descendants.
    pub fn entering_svg(self) -> Self {
        RenderCtx {
            svg_depth: self.svg_depth + 1,
            ..self
        }
    }

    /// Returns a copy of self with `depth` incremented, used when walking
    /// the output a component's `render` produced.
    pub fn entering_component(self) -> Self {
        RenderCtx {
            depth: self.depth + 1,
            ..self
        }
    }

    pub fn is_root(self) -> bool {
        self.depth == 0
    }
}

/// Layers `child` on top of `parent`, with `child`'s entries taking
/// precedence on key collision. Used to merge a component's
/// `get_child_context` output into what it received from its own parent.
pub fn merge_context(parent: &Context, child: IndexMap<Cow<'static, str>, AttrValue>) -> Context {
    if child.is_empty() {
        return Rc::clone(parent);
    }
    let mut merged = (**parent).clone();
    for (k, v) in child {
        merged.insert(k, v);
    }
    Rc::new(merged)
}
