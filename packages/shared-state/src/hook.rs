use crate::factory::Shared;
use std::sync::Arc;

/// Where a [`SharedStateHook`] call gets its value from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HookMode {
    /// No provider from the same factory encloses the caller. The state hook runs locally.
    Standalone,
    /// A provider from the same factory encloses the caller. Its value is returned.
    Shared,
}

/// The hook half of a [`SharedState`](crate::SharedState).
pub struct SharedStateHook<T, P = ()> {
    shared: Arc<Shared<T, P>>,
}

impl<T, P> SharedStateHook<T, P> {
    pub(crate) fn new(shared: Arc<Shared<T, P>>) -> Self {
        Self { shared }
    }

    /// The name used for this hook in diagnostics.
    pub fn name(&self) -> &'static str {
        self.shared.names.hook
    }
}

impl<T: Clone + 'static, P: 'static> SharedStateHook<T, P> {
    /// Get the state for the calling component.
    ///
    /// Outside of a matching provider this is `state_hook(props)`, computed fresh on every call.
    /// Inside one, `props` is ignored and the value published by the nearest provider is returned.
    ///
    /// The mode is decided by the caller's position in the tree, which does not change while the
    /// component is mounted. That keeps the state hook's own hooks in a stable order, but the rules
    /// of hooks still apply to this call: make it on every render, at the top level of the component.
    pub fn call(&self, props: Option<P>) -> T {
        if let Some(value) = self.try_shared() {
            return value;
        }

        tracing::trace!("{} is running standalone", self.name());
        (self.shared.state_hook)(props)
    }

    /// Get the value of the nearest enclosing provider, without ever running the state hook.
    ///
    /// The calling component is re-rendered when that provider publishes a new value.
    pub fn try_shared(&self) -> Option<T> {
        if !self.shared.ancestor.peek() {
            return None;
        }

        tracing::trace!("{} is reading shared state", self.name());
        self.shared.data.read()
    }

    /// Check whether [`call`](Self::call) would return shared or locally computed state at the
    /// caller's position.
    pub fn mode(&self) -> HookMode {
        match self.shared.ancestor.peek() {
            true => HookMode::Shared,
            false => HookMode::Standalone,
        }
    }
}

impl<T, P> Clone for SharedStateHook<T, P> {
    fn clone(&self) -> Self {
        Self {
            shared: self.shared.clone(),
        }
    }
}

impl<T, P> std::fmt::Debug for SharedStateHook<T, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedStateHook")
            .field("name", &self.name())
            .field("context", &self.shared.data.id())
            .finish()
    }
}
