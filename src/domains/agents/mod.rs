pub mod adapter;
pub mod claude;
pub mod launch_spec;
pub mod manifest;
pub mod openhands;
pub mod registry;
pub mod shell;

pub use adapter::{LaunchAdapter, LaunchError};
pub use claude::ClaudeAdapter;
pub use launch_spec::{LaunchOptions, RuntimeSettings};
pub use openhands::OpenHandsAdapter;
pub use registry::{build_launch_command, canonical_name, AgentRegistry};
pub use shell::{compose_shell_command, quote_for_shell, ShellAdapter};
