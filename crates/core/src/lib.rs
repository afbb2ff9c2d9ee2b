//! Core logic of the chat client: the conversation store, the assistant
//! client and the render model.

#![deny(missing_docs)]

#[macro_use]
extern crate tracing;

mod assistant_client;
pub mod conversation;
pub mod outcome;
mod session;
pub mod view;

pub use session::{Action, PendingReply, Reply, Session, SessionBuilder};
