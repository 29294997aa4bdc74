//! Shared types and text helpers for udbot components.
//!
//! Everything in this crate is pure: no I/O, no async, no global state.
//! The daemon crate layers the HTTP client and the handler on top.

pub mod args;
pub mod command;
pub mod definition;
pub mod error;
pub mod render;
pub mod reply;

pub use args::{parse_args, LookupRequest};
pub use command::CommandSpec;
pub use definition::{DefineResponse, Definition};
pub use error::LookupError;
pub use render::{normalize_whitespace, render_reply, truncate, MAX_DEFINITION_CHARS};
pub use reply::{Reply, ReplySink};
