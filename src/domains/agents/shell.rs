use super::adapter::{LaunchAdapter, LaunchError};
use super::launch_spec::{LaunchOptions, RuntimeSettings};
use std::collections::HashMap;

pub const DEFAULT_COMMAND: &str = "claude";
pub const DEFAULT_ARG: &str = "--dangerously-skip-permissions";

/// Base adapter: renders options straight through the shell composer.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellAdapter;

impl ShellAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl LaunchAdapter for ShellAdapter {
    fn build_launch_command(&self, options: &LaunchOptions) -> Result<String, LaunchError> {
        Ok(compose_shell_command(
            &options.env,
            &options.runtime,
            &options.prompt,
        ))
    }
}

/// Renders `export K=V ... && <command> <args> "<prompt>"`.
///
/// Exports are sorted by key so the output is stable regardless of map
/// iteration order. Values are written verbatim; only the prompt is quoted.
pub fn compose_shell_command(
    env: &HashMap<String, String>,
    runtime: &RuntimeSettings,
    prompt: &str,
) -> String {
    let mut cmd = String::new();

    if !env.is_empty() {
        let mut keys: Vec<&String> = env.keys().collect();
        keys.sort();
        let exports: Vec<String> = keys
            .into_iter()
            .map(|key| format!("{key}={}", env[key]))
            .collect();
        cmd.push_str("export ");
        cmd.push_str(&exports.join(" "));
        cmd.push_str(" && ");
    }

    cmd.push_str(&build_runtime_command(runtime, prompt));
    cmd
}

fn build_runtime_command(settings: &RuntimeSettings, prompt: &str) -> String {
    let binary = if settings.command.is_empty() {
        DEFAULT_COMMAND
    } else {
        settings.command.as_str()
    };

    let mut parts: Vec<&str> = vec![binary];
    match settings.args.as_deref() {
        Some(args) => parts.extend(args.iter().map(String::as_str)),
        None => parts.push(DEFAULT_ARG),
    }
    let command = parts.join(" ");

    let effective_prompt = if prompt.is_empty() {
        settings.initial_prompt.as_str()
    } else {
        prompt
    };

    if effective_prompt.is_empty() {
        return command;
    }

    format!("{command} {}", quote_for_shell(effective_prompt))
}

/// Double-quotes `s`. Backslashes are doubled before quotes are escaped so the
/// backslashes introduced for quotes are not escaped a second time.
pub fn quote_for_shell(s: &str) -> String {
    let escaped = s.replace('\\', r"\\").replace('"', r#"\""#);
    format!(r#""{escaped}""#)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults_when_runtime_empty() {
        let cmd = compose_shell_command(&HashMap::new(), &RuntimeSettings::default(), "");
        assert_eq!(cmd, "claude --dangerously-skip-permissions");
    }

    #[test]
    fn test_exports_sorted_by_key() {
        let vars = env(&[("ZED", "1"), ("ALPHA", "2"), ("MIDDLE", "3"), ("BETA", "4")]);
        let cmd = compose_shell_command(&vars, &RuntimeSettings::new("codex"), "");
        assert_eq!(
            cmd,
            "export ALPHA=2 BETA=4 MIDDLE=3 ZED=1 && codex --dangerously-skip-permissions"
        );
    }

    #[test]
    fn test_export_order_independent_of_insertion() {
        let runtime = RuntimeSettings::new("x").with_args(Vec::<String>::new());
        let mut forward = HashMap::new();
        let mut backward = HashMap::new();
        let keys = ["GT_ROLE", "BD_ACTOR", "GT_RIG", "A", "gt_lower"];
        for key in keys {
            forward.insert(key.to_string(), "v".to_string());
        }
        for key in keys.iter().rev() {
            backward.insert(key.to_string(), "v".to_string());
        }

        let a = compose_shell_command(&forward, &runtime, "");
        let b = compose_shell_command(&backward, &runtime, "");
        assert_eq!(a, b);
        assert_eq!(
            a,
            "export A=v BD_ACTOR=v GT_RIG=v GT_ROLE=v gt_lower=v && x"
        );
    }

    #[test]
    fn test_no_export_prefix_for_empty_env() {
        let cmd = compose_shell_command(&HashMap::new(), &RuntimeSettings::new("gemini"), "");
        assert!(!cmd.contains("export"));
        assert!(!cmd.contains("&&"));
    }

    #[test]
    fn test_env_values_are_not_escaped() {
        let vars = env(&[("NOTE", "hello world;rm")]);
        let runtime = RuntimeSettings::new("claude").with_args(Vec::<String>::new());
        let cmd = compose_shell_command(&vars, &runtime, "");
        assert_eq!(cmd, "export NOTE=hello world;rm && claude");
    }

    #[test]
    fn test_explicit_empty_args_respected() {
        let runtime = RuntimeSettings::new("codex").with_args(Vec::<String>::new());
        let cmd = compose_shell_command(&HashMap::new(), &runtime, "");
        assert_eq!(cmd, "codex");
    }

    #[test]
    fn test_args_joined_in_order() {
        let runtime = RuntimeSettings::new("/opt/bin/agent").with_args(["--one", "--two", "3"]);
        let cmd = compose_shell_command(&HashMap::new(), &runtime, "");
        assert_eq!(cmd, "/opt/bin/agent --one --two 3");
    }

    #[test]
    fn test_prompt_overrides_initial_prompt() {
        let runtime = RuntimeSettings::default().with_initial_prompt("from config");
        let cmd = compose_shell_command(&HashMap::new(), &runtime, "explicit");
        assert_eq!(cmd, r#"claude --dangerously-skip-permissions "explicit""#);
    }

    #[test]
    fn test_initial_prompt_used_as_fallback() {
        let runtime = RuntimeSettings::default().with_initial_prompt("from config");
        let cmd = compose_shell_command(&HashMap::new(), &runtime, "");
        assert_eq!(cmd, r#"claude --dangerously-skip-permissions "from config""#);
    }

    #[test]
    fn test_quote_escapes_backslash_before_quote() {
        assert_eq!(quote_for_shell(r#"a\b"c"#), r#""a\\b\"c""#);
    }

    #[test]
    fn test_quote_plain_and_empty() {
        assert_eq!(quote_for_shell("implement feature"), r#""implement feature""#);
        assert_eq!(quote_for_shell(""), r#""""#);
    }

    #[test]
    fn test_quote_escaped_quote_in_input() {
        // An already-escaped quote gets its backslash doubled, then the quote escaped.
        assert_eq!(quote_for_shell(r#"say \"hi\""#), r#""say \\\"hi\\\"""#);
    }

    #[test]
    fn test_prompt_with_quotes_in_full_command() {
        let runtime = RuntimeSettings::new("claude").with_args(Vec::<String>::new());
        let cmd = compose_shell_command(
            &HashMap::new(),
            &runtime,
            r#"implement "feature" with quotes"#,
        );
        assert_eq!(cmd, r#"claude "implement \"feature\" with quotes""#);
    }

    #[test]
    fn test_shell_adapter_uses_composer() {
        let options = LaunchOptions::new(RuntimeSettings::new("custom-cli").with_args(["--flag"]))
            .with_env("GT_ROLE", "witness")
            .with_env("BD_ACTOR", "gastown/witness");

        let cmd = ShellAdapter::new().build_launch_command(&options).unwrap();
        assert_eq!(
            cmd,
            "export BD_ACTOR=gastown/witness GT_ROLE=witness && custom-cli --flag"
        );
    }
}
