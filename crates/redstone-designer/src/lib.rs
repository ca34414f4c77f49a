//! Redstone Designer -- command-line front end over the asset pack.
//!
//! The binary in `main.rs` only parses arguments and installs logging; the
//! commands themselves live here so they can be driven from tests with an
//! in-memory writer.

#![deny(unsafe_code)]

pub mod commands;
pub mod config;

pub use config::DesignerConfig;
