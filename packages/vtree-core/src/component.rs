use std::borrow::Cow;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::rc::Rc;

use indexmap::IndexMap;

use crate::context::{merge_context, Context};
use crate::error::{describe_panic, RenderError};
use crate::vnode::{AttrValue, Props, VNode};

/// A component that renders from a plain function of props, context and
/// children, with no instance state and no lifecycle hooks.
#[derive(Clone)]
pub struct FunctionalComponent {
    pub display_name: Cow<'static, str>,
    pub default_props: Props,
    pub render: Rc<dyn Fn(&Props, &Context, &[VNode]) -> VNode>,
}

impl std::fmt::Debug for FunctionalComponent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FunctionalComponent")
            .field("display_name", &self.display_name)
            .finish_non_exhaustive()
    }
}

/// A component with instance lifecycle: `new_instance` is called once per
/// render with the merged props, the children it was invoked with, and the
/// context inherited from its parent, producing a boxed
/// [`ComponentInstance`].
#[derive(Clone)]
pub struct ClassfulComponent {
    pub display_name: Cow<'static, str>,
    pub default_props: Props,
    pub new_instance: Rc<dyn Fn(Props, Vec<VNode>, Context) -> Box<dyn ComponentInstance>>,
}

impl std::fmt::Debug for ClassfulComponent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClassfulComponent")
            .field("display_name", &self.display_name)
            .finish_non_exhaustive()
    }
}

/// The lifecycle surface a classful component instance exposes to the
/// walker. Only `render` is required; the rest default to no-ops, which
/// replaces runtime "does this instance have an X method" checks with
/// ordinary trait dispatch.
pub trait ComponentInstance {
    fn render(&mut self) -> VNode;

    /// Called once, before the first (and only, in this engine) render.
    fn component_will_mount(&mut self) {}

    /// Returns context entries this component wants visible to its
    /// descendants, but not to itself or its siblings.
    fn get_child_context(&self) -> IndexMap<Cow<'static, str>, AttrValue> {
        IndexMap::new()
    }

    /// Classful components may call this from `component_will_mount` to
    /// request a second render pass. Since there is no asynchronous
    /// scheduler here, a call made before the instance's first render
    /// completes is folded into that same render rather than triggering a
    /// second one: there is nothing yet to re-render.
    fn force_update(&mut self) {}
}

#[derive(Debug, Clone)]
pub enum Component {
    Functional(FunctionalComponent),
    Classful(ClassfulComponent),
}

impl Component {
    pub fn display_name(&self) -> &str {
        match self {
            Component::Functional(f) => &f.display_name,
            Component::Classful(c) => &c.display_name,
        }
    }

    pub fn default_props(&self) -> &Props {
        match self {
            Component::Functional(f) => &f.default_props,
            Component::Classful(c) => &c.default_props,
        }
    }

    /// The tag name a shallow-collapsed, non-root instance of this
    /// component is serialized under (`<DisplayName ...>`). A clone of
    /// the display name, since `Element::tag` needs an owned-or-static
    /// `Cow`.
    pub fn pseudo_tag(&self) -> Cow<'static, str> {
        match self {
            Component::Functional(f) => f.display_name.clone(),
            Component::Classful(c) => c.display_name.clone(),
        }
    }

    /// Returns true for components whose display name looks like a
    /// higher-order wrapper (`Connect(Foo)`, `React.memo(Foo)`), the
    /// convention `Options::shallow_high_order` keys off of.
    pub fn looks_higher_order(&self) -> bool {
        let name = self.display_name();
        let mut chars = name.chars();
        match (chars.next(), chars.next()) {
            (Some(a), Some(b)) => a.is_ascii_uppercase() && (b.is_ascii_uppercase() || b == '.'),
            _ => false,
        }
    }
}

/// Merges `overrides` on top of `defaults`. `children` is threaded through
/// separately (see [`run_component`]) rather than stuffed into the props
/// map, since `AttrValue` has no variant that can hold a `Vec<VNode>`; the
/// `children` key is still reserved so a stray entry under that name in
/// `overrides` never leaks into the serialized attributes.
pub fn build_props(defaults: &Props, overrides: &Props) -> Props {
    let mut merged = (**defaults).clone();
    for (k, v) in overrides.iter() {
        merged.insert(k.clone(), v.clone());
    }
    Rc::new(merged)
}

/// Instantiates and runs a component, catching any panic and turning it
/// into a [`RenderError::Component`].
pub fn run_component(
    component: &Component,
    props: &Props,
    children: Vec<VNode>,
    context: &Context,
) -> Result<(VNode, Context), RenderError> {
    let name = component.display_name().to_string();
    let result = catch_unwind(AssertUnwindSafe(|| match component {
        Component::Functional(f) => (
            (f.render)(props, context, &children),
            Rc::clone(context),
        ),
        Component::Classful(c) => {
            let mut instance = (c.new_instance)(Rc::clone(props), children, Rc::clone(context));
            instance.component_will_mount();
            let child_ctx = merge_context(context, instance.get_child_context());
            let output = instance.render();
            (output, child_ctx)
        }
    }));

    result.map_err(|payload| {
        #[cfg(feature = "trace")]
        tracing::error!(component = %name, "component panicked while rendering");
        RenderError::Component {
            name,
            source: Box::new(describe_panic(payload)),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vnode::text;

    fn empty_props() -> Props {
        Rc::new(IndexMap::new())
    }

    #[test]
    fn functional_component_runs_and_reuses_parent_context() {
        let comp = Component::Functional(FunctionalComponent {
            display_name: Cow::Borrowed("Greeting"),
            default_props: empty_props(),
            render: Rc::new(|_props, _ctx, _children| text("hi")),
        });
        let ctx: Context = Rc::new(IndexMap::new());
        let (node, out_ctx) = run_component(&comp, &empty_props(), vec![], &ctx).unwrap();
        assert!(matches!(node, VNode::Text(t) if t == "hi"));
        assert!(Rc::ptr_eq(&ctx, &out_ctx));
    }

    #[test]
    fn classful_component_panic_is_caught() {
        struct Boom;
        impl ComponentInstance for Boom {
            fn render(&mut self) -> VNode {
                panic!("kaboom");
            }
        }
        let comp = Component::Classful(ClassfulComponent {
            display_name: Cow::Borrowed("Boom"),
            default_props: empty_props(),
            new_instance: Rc::new(|_props, _children, _ctx| Box::new(Boom)),
        });
        let ctx: Context = Rc::new(IndexMap::new());
        let err = run_component(&comp, &empty_props(), vec![], &ctx).unwrap_err();
        match err {
            RenderError::Component { name, .. } => assert_eq!(name, "Boom"),
            _ => panic!("expected a Component error"),
        }
    }

    #[test]
    fn higher_order_display_name_is_detected() {
        let comp = Component::Functional(FunctionalComponent {
            display_name: Cow::Borrowed("Connect(Foo)"),
            default_props: empty_props(),
            render: Rc::new(|_, _, _| VNode::Null),
        });
        assert!(comp.looks_higher_order());
    }
}
