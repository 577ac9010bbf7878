use crate::{
    context::ScopedContext,
    names::{CustomNames, DisplayNames},
    SharedStateHook, SharedStateProvider,
};
use std::sync::Arc;

/// A provider component and hook that share the result of one state hook.
///
/// Created by [`shared_state_factory`].
pub struct SharedState<T, P = ()> {
    /// Mounts a component that runs the state hook and shares its result with its children.
    pub provider: SharedStateProvider<T, P>,
    /// Returns the nearest provider's result, or runs the state hook locally outside of a provider.
    pub hook: SharedStateHook<T, P>,
}

impl<T, P> Clone for SharedState<T, P> {
    fn clone(&self) -> Self {
        Self {
            provider: self.provider.clone(),
            hook: self.hook.clone(),
        }
    }
}

impl<T, P> std::fmt::Debug for SharedState<T, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedState")
            .field("provider", &self.provider)
            .field("hook", &self.hook)
            .finish()
    }
}

/// Everything a provider and hook pair has in common.
pub(crate) struct Shared<T, P> {
    pub(crate) state_hook: Box<dyn Fn(Option<P>) -> T + Send + Sync>,
    /// `true` inside any provider from this factory call.
    pub(crate) ancestor: ScopedContext<bool>,
    /// The result published by the nearest provider from this factory call.
    pub(crate) data: ScopedContext<Option<T>>,
    pub(crate) names: DisplayNames,
}

/// Create a provider component and a hook from a state hook.
///
/// The returned [`SharedStateHook`] behaves exactly like `state_hook` when it is called outside of a
/// [`SharedStateProvider`]. Inside a provider, it ignores its own arguments and returns the value the
/// nearest provider computed with the provider's arguments, so every component under that provider
/// shares the same state.
///
/// Every call creates a new, independent pair. A provider from one call is invisible to the hook of
/// another, even if both share the same state type.
///
/// ```rust, no_run
/// use dioxus::prelude::*;
/// use dioxus_shared_state::{shared_state_factory, CustomNames, SharedState};
/// use std::sync::LazyLock;
///
/// fn use_counter(start: Option<i32>) -> Signal<i32> {
///     use_signal(|| start.unwrap_or_default())
/// }
///
/// static COUNTER: LazyLock<SharedState<Signal<i32>, i32>> = LazyLock::new(|| {
///     shared_state_factory(use_counter, Some(CustomNames::default().provider("CounterProvider")))
/// });
///
/// fn app() -> Element {
///     COUNTER.provider.render(Some(10), rsx! { Increment {} Count {} })
/// }
///
/// #[component]
/// fn Increment() -> Element {
///     let mut count = COUNTER.hook.call(None);
///     rsx! { button { onclick: move |_| count += 1, "+" } }
/// }
///
/// #[component]
/// fn Count() -> Element {
///     let count = COUNTER.hook.call(None);
///     rsx! { "{count}" }
/// }
/// ```
pub fn shared_state_factory<T, P, F>(state_hook: F, custom_names: Option<CustomNames>) -> SharedState<T, P>
where
    T: Clone + 'static,
    P: Clone + 'static,
    F: Fn(Option<P>) -> T + Send + Sync + 'static,
{
    let shared = Arc::new(Shared {
        state_hook: Box::new(state_hook),
        ancestor: ScopedContext::new(|| false),
        data: ScopedContext::new(|| None),
        names: DisplayNames::resolve(custom_names),
    });

    tracing::trace!(
        "created {} and {} for {}",
        shared.names.provider,
        shared.names.hook,
        std::any::type_name::<T>()
    );

    SharedState {
        provider: SharedStateProvider::new(shared.clone()),
        hook: SharedStateHook::new(shared),
    }
}
