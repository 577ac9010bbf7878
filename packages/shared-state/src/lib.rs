#![doc = include_str!("../README.md")]
#![doc(html_logo_url = "https://avatars.githubusercontent.com/u/79236386")]
#![doc(html_favicon_url = "https://avatars.githubusercontent.com/u/79236386")]
#![warn(missing_docs)]

pub mod context;

mod factory;
mod hook;
mod names;
mod provider;

pub use factory::{shared_state_factory, SharedState};
pub use hook::{HookMode, SharedStateHook};
pub use names::CustomNames;
pub use provider::SharedStateProvider;
