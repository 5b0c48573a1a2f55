use super::adapter::{LaunchAdapter, LaunchError};
use super::launch_spec::LaunchOptions;
use super::shell::ShellAdapter;

/// Default adapter for Claude Code. Behaves exactly like the shell adapter;
/// it exists so `claude` resolves to a named registry entry.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClaudeAdapter {
    shell: ShellAdapter,
}

impl ClaudeAdapter {
    pub fn new() -> Self {
        Self {
            shell: ShellAdapter::new(),
        }
    }
}

impl LaunchAdapter for ClaudeAdapter {
    fn build_launch_command(&self, options: &LaunchOptions) -> Result<String, LaunchError> {
        self.shell.build_launch_command(options)
    }
}
