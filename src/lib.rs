//! Launch command resolution for Gas Town agent runtimes.
//!
//! Callers describe a launch with [`LaunchOptions`] and hand it to an
//! [`AgentRegistry`]; the registry picks an adapter by provider name or
//! runtime command and renders a single shell command string. Spawning that
//! command is left to the caller.
//!
//! Environment values are exported verbatim without shell escaping. Only the
//! prompt argument is quoted.

#![deny(dead_code)]

pub mod cli;
pub mod domains;
pub mod infrastructure;

pub use domains::agents::{
    build_launch_command, AgentRegistry, LaunchAdapter, LaunchError, LaunchOptions,
    RuntimeSettings,
};
