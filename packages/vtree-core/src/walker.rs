use std::borrow::Cow;
use std::rc::Rc;

use indexmap::IndexMap;

use crate::attr::serialize_attrs;
use crate::component::{build_props, run_component};
use crate::context::{Context, RenderCtx};
use crate::entity::{encode, encode_number, Mode};
use crate::error::RenderError;
use crate::vnode::{AttrValue, ComponentNode, Element, VNode};
use crate::VOID_ELEMENTS;

/// Walks `node` and appends its markup to `out` as a sequence of chunks.
/// A new chunk begins before each component delegation and before each
/// element's open tag, so a caller streaming `out` can flush everything
/// produced so far right before the (potentially slow) work of rendering
/// the next component.
pub fn walk(node: &VNode, ctx: RenderCtx<'_>, context: &Context, out: &mut Vec<String>) -> Result<(), RenderError> {
    match node {
        VNode::Null | VNode::Bool(_) => {}
        VNode::Text(s) => push_text(out, |buf| encode(s, Mode::Text, buf)),
        VNode::Number(n) => push_text(out, |buf| encode_number(*n, buf)),
        VNode::Fragment(children) => walk_children(children, ctx, context, out)?,
        VNode::Component(component_node) => walk_component(component_node, ctx, context, out)?,
        VNode::Element(element) => walk_element(element, ctx, context, out)?,
    }
    Ok(())
}

fn push_text(out: &mut Vec<String>, write: impl FnOnce(&mut String)) {
    let mut buf = String::new();
    write(&mut buf);
    if let Some(last) = out.last_mut() {
        last.push_str(&buf);
    } else {
        out.push(buf);
    }
}

/// Flattens fragments and skips `Null`/`false` the same way a single
/// child would, then joins what's left with no separator: adjacent text
/// nodes are never given a delimiter of their own.
fn walk_children(
    children: &[VNode],
    ctx: RenderCtx<'_>,
    context: &Context,
    out: &mut Vec<String>,
) -> Result<(), RenderError> {
    for child in children {
        walk(child, ctx, context, out)?;
    }
    Ok(())
}

fn walk_component(
    node: &ComponentNode,
    ctx: RenderCtx<'_>,
    context: &Context,
    out: &mut Vec<String>,
) -> Result<(), RenderError> {
    // The root component always expands in full: shallow rendering only
    // ever stops one level deep, at the components *a render produces*,
    // never at the component you asked to render in the first place.
    let collapses = !ctx.is_root()
        && ctx.options.shallow
        && (!ctx.options.shallow_high_order || node.component.looks_higher_order());

    if collapses {
        // No delegation happens here: the component's own `render` is
        // never called, so this isn't a "component delegation" boundary,
        // it's serialized as a pseudo-element instead, with the same
        // single chunk boundary an element's open tag gets.
        return write_tag(
            node.component.pseudo_tag().as_ref(),
            &node.props,
            &node.children,
            ctx,
            context,
            out,
        );
    }

    // A fresh chunk begins before every real component delegation.
    out.push(String::new());
    let props = build_props(node.component.default_props(), &node.props);
    let (rendered, child_context) =
        run_component(&node.component, &props, node.children.clone(), context)?;
    walk(&rendered, ctx.entering_component(), &child_context, out)
}

fn walk_element(
    element: &Element,
    ctx: RenderCtx<'_>,
    context: &Context,
    out: &mut Vec<String>,
) -> Result<(), RenderError> {
    if element.tag.is_empty() {
        return Err(RenderError::InvalidNode(
            "node has an empty tag name".to_string(),
        ));
    }

    // A fresh chunk begins before every element's open tag.
    out.push(String::new());
    write_tag(&element.tag, &element.attrs, &element.children, ctx, context, out)
}

/// Writes an open tag, its attributes, its children and its closing tag
/// (or nothing, if `tag` is a void element) into the current chunk. Shared
/// between plain elements and the pseudo-element a shallow-collapsed,
/// non-root component serializes as.
fn write_tag(
    tag: &str,
    attrs: &IndexMap<Cow<'static, str>, AttrValue>,
    children: &[VNode],
    ctx: RenderCtx<'_>,
    context: &Context,
    out: &mut Vec<String>,
) -> Result<(), RenderError> {
    let entering_svg = tag == "svg";
    let element_ctx = if entering_svg { ctx.entering_svg() } else { ctx };

    let attrs_str = serialize_attrs(attrs, element_ctx.options, element_ctx.svg_depth);
    // A void element never gets a closing tag, even if it was constructed
    // with children: that's a quirk callers have historically depended on
    // (the children still render, just as if they were trailing siblings
    // rather than nested inside the void element) and it's preserved here
    // rather than "fixed".
    let is_void = VOID_ELEMENTS.contains(tag);

    {
        let buf = out.last_mut().expect("chunk just pushed");
        buf.push('<');
        buf.push_str(tag);
        buf.push_str(&attrs_str);
        if is_void && element_ctx.options.xml {
            buf.push_str(" />");
        } else {
            buf.push('>');
        }
    }

    if is_void {
        // Per the quirk noted above, children (if any) still render, just
        // with nothing to close them into this element.
        walk_children(children, element_ctx, context, out)?;
        return Ok(());
    }

    if let Some(AttrValue::InnerHtml(html)) = attrs.get("dangerously_set_inner_html") {
        let buf = out.last_mut().expect("chunk just pushed");
        buf.push_str(html);
    } else {
        walk_children(children, element_ctx, context, out)?;
    }

    {
        let buf = match out.last_mut() {
            Some(buf) => buf,
            None => {
                out.push(String::new());
                out.last_mut().expect("chunk just pushed")
            }
        };
        buf.push_str("</");
        buf.push_str(tag);
        buf.push('>');
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::{Component, FunctionalComponent};
    use crate::options::Options;
    use crate::vnode::{el, fragment, text, Props};
    use indexmap::IndexMap;
    use std::borrow::Cow;

    fn render(node: &VNode) -> String {
        let options = Options::default();
        let ctx = RenderCtx::new(&options);
        let context: Context = Rc::new(IndexMap::new());
        let mut out = Vec::new();
        walk(node, ctx, &context, &mut out).unwrap();
        out.concat()
    }

    #[test]
    fn renders_a_simple_element_with_text() {
        let node = el("div", IndexMap::new(), vec![text("hello")]);
        assert_eq!(render(&node), "<div>hello</div>");
    }

    #[test]
    fn escapes_text_content() {
        let node = el("div", IndexMap::new(), vec![text("<script>")]);
        assert_eq!(render(&node), "<div>&lt;script&gt;</div>");
    }

    #[test]
    fn void_element_has_no_closing_tag() {
        let node = el("br", IndexMap::new(), vec![]);
        assert_eq!(render(&node), "<br>");
    }

    #[test]
    fn void_element_self_closes_under_xml() {
        let options = Options {
            xml: true,
            ..Options::default()
        };
        let ctx = RenderCtx::new(&options);
        let context: Context = Rc::new(IndexMap::new());
        let mut out = Vec::new();
        let node = el("br", IndexMap::new(), vec![]);
        walk(&node, ctx, &context, &mut out).unwrap();
        assert_eq!(out.concat(), "<br />");
    }

    #[test]
    fn fragment_flattens_without_separators() {
        let node = fragment(vec![text("a"), text("b")]);
        assert_eq!(render(&node), "ab");
    }

    #[test]
    fn null_and_bool_children_are_skipped() {
        let node = el(
            "div",
            IndexMap::new(),
            vec![VNode::Null, VNode::Bool(true), text("x")],
        );
        assert_eq!(render(&node), "<div>x</div>");
    }

    #[test]
    fn dangerously_set_inner_html_bypasses_escaping() {
        let mut attrs = IndexMap::new();
        attrs.insert(
            Cow::Borrowed("dangerously_set_inner_html"),
            AttrValue::InnerHtml(Cow::Borrowed("<b>raw</b>")),
        );
        let node = el("div", attrs, vec![text("ignored")]);
        assert_eq!(render(&node), "<div><b>raw</b></div>");
    }

    #[test]
    fn empty_tag_is_an_error() {
        let node = el("", IndexMap::new(), vec![]);
        let options = Options::default();
        let ctx = RenderCtx::new(&options);
        let context: Context = Rc::new(IndexMap::new());
        let mut out = Vec::new();
        assert!(walk(&node, ctx, &context, &mut out).is_err());
    }

    #[test]
    fn each_element_starts_a_new_chunk() {
        let node = el("div", IndexMap::new(), vec![el("span", IndexMap::new(), vec![])]);
        let options = Options::default();
        let ctx = RenderCtx::new(&options);
        let context: Context = Rc::new(IndexMap::new());
        let mut out = Vec::new();
        walk(&node, ctx, &context, &mut out).unwrap();
        assert_eq!(out.len(), 2);
        assert_eq!(out[0], "<div>");
        assert_eq!(out[1], "<span></span></div>");
    }

    fn render_shallow(node: &VNode) -> String {
        let options = Options {
            shallow: true,
            ..Options::default()
        };
        let ctx = RenderCtx::new(&options);
        let context: Context = Rc::new(IndexMap::new());
        let mut out = Vec::new();
        walk(node, ctx, &context, &mut out).unwrap();
        out.concat()
    }

    fn functional(name: &'static str, render: impl Fn(&Props, &Context, &[VNode]) -> VNode + 'static) -> Component {
        Component::Functional(FunctionalComponent {
            display_name: Cow::Borrowed(name),
            default_props: Rc::new(IndexMap::new()),
            render: Rc::new(render),
        })
    }

    #[test]
    fn root_component_expands_in_full_under_shallow() {
        let root = functional("Outer", |_, _, _| text("outer output"));
        let node = VNode::Component(ComponentNode {
            component: root,
            props: Rc::new(IndexMap::new()),
            children: vec![],
        });
        assert_eq!(render_shallow(&node), "outer output");
    }

    #[test]
    fn non_root_component_collapses_to_a_pseudo_tag_under_shallow() {
        let mut inner_props = IndexMap::new();
        inner_props.insert(Cow::Borrowed("a"), AttrValue::Text(Cow::Borrowed("b")));
        let inner_props = Rc::new(inner_props);

        let root = functional("Outer", move |_, _, _| {
            VNode::Component(ComponentNode {
                component: functional("Inner", |_, _, _| text("should not appear")),
                props: Rc::clone(&inner_props),
                children: vec![text("child")],
            })
        });
        let node = VNode::Component(ComponentNode {
            component: root,
            props: Rc::new(IndexMap::new()),
            children: vec![],
        });

        assert_eq!(render_shallow(&node), r#"<Inner a="b">child</Inner>"#);
    }
}
