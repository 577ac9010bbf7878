use crate::factory::Shared;
use dioxus_core::{DynamicNode, Element, Properties, Template, TemplateNode, VComponent, VNode};
use std::sync::Arc;

/// A single dynamic root. Used both for the outer node and for the keyed node holding the component.
static PROVIDER_TEMPLATE: Template = Template {
    roots: &[TemplateNode::Dynamic { id: 0 }],
    node_paths: &[&[0]],
    attr_paths: &[],
};

/// The provider half of a [`SharedState`](crate::SharedState).
///
/// Each mounted provider runs the state hook once per render with its own arguments and shares the
/// result with every [`SharedStateHook`](crate::SharedStateHook) call from the same factory below it.
pub struct SharedStateProvider<T, P = ()> {
    shared: Arc<Shared<T, P>>,
}

impl<T, P> SharedStateProvider<T, P> {
    pub(crate) fn new(shared: Arc<Shared<T, P>>) -> Self {
        Self { shared }
    }

    /// The component name Dioxus reports for this provider.
    pub fn name(&self) -> &'static str {
        self.shared.names.provider
    }
}

impl<T: Clone + 'static, P: Clone + 'static> SharedStateProvider<T, P> {
    /// Mount the provider around `children`.
    ///
    /// `init_args` is passed to the state hook on every render of the provider.
    ///
    /// ```rust, no_run
    /// # use dioxus::prelude::*;
    /// # use dioxus_shared_state::shared_state_factory;
    /// # let theme = shared_state_factory(|dark: Option<bool>| dark.unwrap_or(false), None);
    /// let app = theme.provider.render(Some(true), rsx! { "children see a dark theme" });
    /// ```
    pub fn render(&self, init_args: Option<P>, children: Element) -> Element {
        let props = SharedStateProviderProps {
            provider: self.clone(),
            init_args,
            children,
        };
        let component = VComponent::new(provider_component::<T, P>, props, self.name());

        // Every provider shares one render function, so Dioxus would otherwise reuse the scope when a
        // provider from another factory takes this position. Keying on the factory remounts it.
        let keyed = VNode::new(
            Some(self.key()),
            PROVIDER_TEMPLATE,
            Box::new([DynamicNode::Component(component)]),
            Box::new([]),
        );

        Ok(VNode::new(
            None,
            PROVIDER_TEMPLATE,
            Box::new([DynamicNode::Fragment(vec![keyed])]),
            Box::new([]),
        ))
    }

    fn key(&self) -> String {
        format!("{}-{}", self.name(), self.shared.data.id())
    }
}

impl<T, P> Clone for SharedStateProvider<T, P> {
    fn clone(&self) -> Self {
        Self {
            shared: self.shared.clone(),
        }
    }
}

impl<T, P> PartialEq for SharedStateProvider<T, P> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.shared, &other.shared)
    }
}

impl<T, P> std::fmt::Debug for SharedStateProvider<T, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedStateProvider")
            .field("name", &self.name())
            .field("context", &self.shared.data.id())
            .finish()
    }
}

struct SharedStateProviderProps<T, P> {
    provider: SharedStateProvider<T, P>,
    init_args: Option<P>,
    children: Element,
}

impl<T, P: Clone> Clone for SharedStateProviderProps<T, P> {
    fn clone(&self) -> Self {
        Self {
            provider: self.provider.clone(),
            init_args: self.init_args.clone(),
            children: self.children.clone(),
        }
    }
}

impl<T: 'static, P: Clone + 'static> Properties for SharedStateProviderProps<T, P> {
    // Props are only built by `SharedStateProvider::render`.
    type Builder = ();

    fn builder() -> Self::Builder {}

    // `children` is rebuilt on every render of the parent, so the provider always reruns with it.
    fn memoize(&mut self, new: &Self) -> bool {
        debug_assert!(self.provider == new.provider, "keyed providers never diff across factories");
        *self = new.clone();
        false
    }
}

fn provider_component<T: Clone + 'static, P: Clone + 'static>(props: SharedStateProviderProps<T, P>) -> Element {
    let shared = &props.provider.shared;

    let value = (shared.state_hook)(props.init_args);
    shared.ancestor.provide(true);
    shared.data.provide(Some(value));

    props.children
}
