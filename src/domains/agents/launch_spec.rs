use std::collections::HashMap;

/// Resolved runtime configuration for a rig.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuntimeSettings {
    /// Executable name or path. Empty means "use the adapter default".
    pub command: String,
    /// `None` selects the adapter's default arguments. `Some(vec![])` means
    /// "no arguments" and is passed through as-is.
    pub args: Option<Vec<String>>,
    /// Used only when the launch options carry no explicit prompt.
    pub initial_prompt: String,
    pub model: String,
}

impl RuntimeSettings {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            ..Self::default()
        }
    }

    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = Some(args.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_initial_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.initial_prompt = prompt.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}

/// Everything an adapter needs to render a launch command.
///
/// The identifying strings (`rig_path`, `role`, `rig_name`, `actor`) come from
/// workspace detection and session naming and are consumed verbatim. An empty
/// string means "absent".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LaunchOptions {
    /// Inline exports applied before the runtime command. Rendering order is
    /// always lexicographic by key, never insertion order.
    pub env: HashMap<String, String>,
    /// Overrides `runtime.initial_prompt` when non-empty.
    pub prompt: String,
    pub runtime: RuntimeSettings,
    pub rig_path: String,
    pub role: String,
    pub rig_name: String,
    pub actor: String,
    /// Explicit adapter name. When empty the runtime command selects the
    /// adapter instead.
    pub provider: String,
}

impl LaunchOptions {
    pub fn new(runtime: RuntimeSettings) -> Self {
        Self {
            runtime,
            ..Self::default()
        }
    }

    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.insert(key.into(), value.into());
        self
    }

    pub fn with_env_vars(mut self, env_vars: HashMap<String, String>) -> Self {
        self.env = env_vars;
        self
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    pub fn with_provider(mut self, provider: impl Into<String>) -> Self {
        self.provider = provider.into();
        self
    }

    pub fn with_identity(
        mut self,
        role: impl Into<String>,
        rig_name: impl Into<String>,
        actor: impl Into<String>,
    ) -> Self {
        self.role = role.into();
        self.rig_name = rig_name.into();
        self.actor = actor.into();
        self
    }

    pub fn with_rig_path(mut self, rig_path: impl Into<String>) -> Self {
        self.rig_path = rig_path.into();
        self
    }

    /// Explicit prompt if set, otherwise the runtime's initial prompt.
    pub fn effective_prompt(&self) -> &str {
        if self.prompt.is_empty() {
            &self.runtime.initial_prompt
        } else {
            &self.prompt
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options_are_empty() {
        let opts = LaunchOptions::default();
        assert!(opts.env.is_empty());
        assert!(opts.runtime.command.is_empty());
        assert!(opts.runtime.args.is_none());
        assert!(opts.provider.is_empty());
    }

    #[test]
    fn test_explicit_empty_args_differ_from_absent() {
        let absent = RuntimeSettings::new("codex");
        let empty = RuntimeSettings::new("codex").with_args(Vec::<String>::new());

        assert_eq!(absent.args, None);
        assert_eq!(empty.args, Some(vec![]));
        assert_ne!(absent, empty);
    }

    #[test]
    fn test_effective_prompt_prefers_explicit_prompt() {
        let runtime = RuntimeSettings::default().with_initial_prompt("from runtime");
        let opts = LaunchOptions::new(runtime.clone()).with_prompt("explicit");
        assert_eq!(opts.effective_prompt(), "explicit");

        let opts = LaunchOptions::new(runtime);
        assert_eq!(opts.effective_prompt(), "from runtime");
    }

    #[test]
    fn test_with_identity_sets_collaborator_fields() {
        let opts = LaunchOptions::default()
            .with_identity("witness", "gastown", "gastown/witness")
            .with_rig_path("/town/gastown");

        assert_eq!(opts.role, "witness");
        assert_eq!(opts.rig_name, "gastown");
        assert_eq!(opts.actor, "gastown/witness");
        assert_eq!(opts.rig_path, "/town/gastown");
    }
}
