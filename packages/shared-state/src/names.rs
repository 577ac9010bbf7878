/// Display names for a provider and hook pair created by [`shared_state_factory`](crate::shared_state_factory).
///
/// Names only affect diagnostics. The provider name is the component name Dioxus reports when the
/// provider panics while rendering, and the hook name shows up in tracing events and `Debug` output.
/// Missing or empty names fall back to the defaults.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CustomNames {
    /// The name of the generated provider component.
    pub provider: Option<&'static str>,
    /// The name of the generated hook.
    pub hook: Option<&'static str>,
}

impl CustomNames {
    /// Set the name of the generated provider component.
    pub fn provider(mut self, name: &'static str) -> Self {
        self.provider = Some(name);
        self
    }

    /// Set the name of the generated hook.
    pub fn hook(mut self, name: &'static str) -> Self {
        self.hook = Some(name);
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct DisplayNames {
    pub(crate) provider: &'static str,
    pub(crate) hook: &'static str,
}

impl DisplayNames {
    pub(crate) const DEFAULT_PROVIDER: &'static str = "SharedStateProvider";
    pub(crate) const DEFAULT_HOOK: &'static str = "SharedStateHook";

    pub(crate) fn resolve(custom: Option<CustomNames>) -> Self {
        let custom = custom.unwrap_or_default();
        let pick = |name: Option<&'static str>, fallback| name.filter(|name| !name.is_empty()).unwrap_or(fallback);

        Self {
            provider: pick(custom.provider, Self::DEFAULT_PROVIDER),
            hook: pick(custom.hook, Self::DEFAULT_HOOK),
        }
    }
}
