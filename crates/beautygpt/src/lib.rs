//! BeautyGPT, a skincare advisor you chat with in the terminal.
//!
//! The crate wires the core session to the HTTP assistant provider and
//! draws the conversation in a terminal. You can also use it as a library
//! and plug in a different [`AssistantProvider`](beautygpt_model::AssistantProvider)
//! or a different renderer.

#![deny(missing_docs)]

#[macro_use]
extern crate tracing;

mod config;
pub mod input;
pub mod render;

pub use beautygpt_core::{Action, PendingReply, Reply, Session, SessionBuilder};
pub use config::{API_URL_VAR, Config, ConfigError, TIMEOUT_VAR};

/// Re-exports of [`beautygpt_core`] crate.
pub mod core {
    pub use beautygpt_core::*;
}

/// Re-exports of [`beautygpt_model`] crate.
pub mod model {
    pub use beautygpt_model::*;
}

/// Creates a session builder that talks to the remote service described
/// by `config`.
#[inline]
pub fn session_builder(config: &Config) -> SessionBuilder {
    let provider =
        beautygpt_http_model::HttpProvider::new(config.http_config().clone());
    SessionBuilder::with_provider(provider)
}
