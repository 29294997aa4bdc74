//! Udbot daemon library - exposes modules for testing.

pub mod client;
pub mod config;
pub mod handler;

pub use client::DictClient;
pub use config::BotConfig;
pub use handler::LookupHandler;
