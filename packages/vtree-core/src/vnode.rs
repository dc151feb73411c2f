use std::borrow::Cow;
use std::rc::Rc;

use indexmap::IndexMap;

use crate::component::Component;

/// Properties passed to an element or component. Keys are attribute/prop
/// names; `children` is injected by the walker before a component is run,
/// it is never set by callers directly.
pub type Props = Rc<IndexMap<Cow<'static, str>, AttrValue>>;

/// A node in the virtual tree. Trees are immutable: nothing here is ever
/// mutated in place once built, the walker only ever reads.
#[derive(Debug, Clone)]
pub enum VNode {
    Element(Element),
    Component(ComponentNode),
    Text(Cow<'static, str>),
    Number(f64),
    Bool(bool),
    Null,
    /// A list of siblings with no wrapping element of their own.
    Fragment(Vec<VNode>),
}

#[derive(Debug, Clone)]
pub struct Element {
    pub tag: Cow<'static, str>,
    pub attrs: Rc<IndexMap<Cow<'static, str>, AttrValue>>,
    pub children: Vec<VNode>,
}

#[derive(Debug, Clone)]
pub struct ComponentNode {
    pub component: Component,
    pub props: Props,
    pub children: Vec<VNode>,
}

/// The value side of an attribute map entry.
#[derive(Debug, Clone)]
pub enum AttrValue {
    Null,
    Bool(bool),
    Number(f64),
    Text(Cow<'static, str>),
    Class(ClassValue),
    Style(IndexMap<Cow<'static, str>, StyleValue>),
    /// The raw contents of `dangerously_set_inner_html`.
    InnerHtml(Cow<'static, str>),
    /// An event handler or other callback; never serialized, present only
    /// so callers can stash one in a props map without a type error.
    Function,
}

#[derive(Debug, Clone)]
pub enum ClassValue {
    Str(Cow<'static, str>),
    /// Maps a class name to whether it should be included.
    Map(IndexMap<Cow<'static, str>, bool>),
}

#[derive(Debug, Clone)]
pub enum StyleValue {
    Str(Cow<'static, str>),
    Number(f64),
}

/// Builds an [`Element`] node.
pub fn el(
    tag: impl Into<Cow<'static, str>>,
    attrs: IndexMap<Cow<'static, str>, AttrValue>,
    children: Vec<VNode>,
) -> VNode {
    VNode::Element(Element {
        tag: tag.into(),
        attrs: Rc::new(attrs),
        children,
    })
}

/// Builds a text leaf.
pub fn text(s: impl Into<Cow<'static, str>>) -> VNode {
    VNode::Text(s.into())
}

/// Builds a fragment from a list of children.
pub fn fragment(children: Vec<VNode>) -> VNode {
    VNode::Fragment(children)
}
