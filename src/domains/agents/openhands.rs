use super::adapter::{LaunchAdapter, LaunchError};
use super::launch_spec::LaunchOptions;
use super::shell::ShellAdapter;
use std::collections::HashMap;
use std::sync::Arc;

pub const OPENHANDS_BINARY: &str = "openhands";
pub const OPENHANDS_REQUIRED_FLAG: &str = "--exp";

pub const ENV_AGENT_ROLE: &str = "OPENHANDS_AGENT_ROLE";
pub const ENV_AGENT_NAME: &str = "OPENHANDS_AGENT_NAME";
pub const ENV_RIG_NAME: &str = "OPENHANDS_RIG_NAME";
pub const ENV_MODEL: &str = "OPENHANDS_MODEL";
pub const ENV_PROVIDER: &str = "OPENHANDS_PROVIDER";

/// Configures the OpenHands CLI while carrying Gas Town identity through
/// `OPENHANDS_*` environment variables.
///
/// The caller's options are never touched: a rewritten copy is built and
/// handed to the wrapped adapter, whose output is returned unchanged.
pub struct OpenHandsAdapter {
    inner: Arc<dyn LaunchAdapter>,
}

impl OpenHandsAdapter {
    pub fn new() -> Self {
        Self::wrapping(Arc::new(ShellAdapter::new()))
    }

    pub fn wrapping(inner: Arc<dyn LaunchAdapter>) -> Self {
        Self { inner }
    }

    /// Returns the options the wrapped adapter will see.
    pub fn decorate(&self, options: &LaunchOptions) -> LaunchOptions {
        let mut env = clone_env(&options.env);
        if !options.role.is_empty() {
            env.insert(ENV_AGENT_ROLE.to_string(), options.role.clone());
        }
        if !options.actor.is_empty() {
            env.insert(ENV_AGENT_NAME.to_string(), options.actor.clone());
        }
        if !options.rig_name.is_empty() {
            env.insert(ENV_RIG_NAME.to_string(), options.rig_name.clone());
        }
        if !options.runtime.model.is_empty() {
            env.insert(ENV_MODEL.to_string(), options.runtime.model.clone());
        }
        env.insert(ENV_PROVIDER.to_string(), OPENHANDS_BINARY.to_string());

        let mut runtime = options.runtime.clone();
        if runtime.command.is_empty() {
            runtime.command = OPENHANDS_BINARY.to_string();
        }
        runtime.args = Some(ensure_arg(
            runtime.args.as_deref().unwrap_or_default(),
            OPENHANDS_REQUIRED_FLAG,
        ));

        LaunchOptions {
            env,
            runtime,
            ..options.clone()
        }
    }
}

impl Default for OpenHandsAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl LaunchAdapter for OpenHandsAdapter {
    fn build_launch_command(&self, options: &LaunchOptions) -> Result<String, LaunchError> {
        let next = self.decorate(options);
        self.inner.build_launch_command(&next)
    }
}

fn clone_env(src: &HashMap<String, String>) -> HashMap<String, String> {
    if src.is_empty() {
        return HashMap::new();
    }
    src.clone()
}

/// Appends `flag` unless an identical argument is already present.
fn ensure_arg(args: &[String], flag: &str) -> Vec<String> {
    if args.is_empty() {
        return vec![flag.to_string()];
    }
    let mut out = args.to_vec();
    if !out.iter().any(|arg| arg == flag) {
        out.push(flag.to_string());
    }
    out
}
