//! The contract between the chat client and the remote assistant.
//!
//! This crate establishes the wire types the assistant service speaks and
//! the trait a service implementation has to provide, so that the client
//! can talk to the real service or a scripted fake without modifying the
//! core codebase.
//!
//! Types in this crate don't define any behavior, instead they are the
//! constraints that the implementors should adhere to.

#![deny(missing_docs)]

mod error;
mod product;
mod provider;
mod request;
mod response;

pub use error::*;
pub use product::*;
pub use provider::*;
pub use request::*;
pub use response::*;
