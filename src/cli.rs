use crate::domains::agents::LaunchOptions;
use crate::domains::workspace;
use crate::infrastructure::config::{FileRuntimeConfigRepository, RuntimeConfigRepository};
use anyhow::{bail, Context, Result};
use clap::Parser;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Print the shell command that would launch an agent runtime
#[derive(Debug, Default, Parser)]
#[command(
    name = "gt-launch",
    about = "Print the shell command that would launch an agent runtime",
    version = VERSION,
    help_template = "\
{before-help}{name} {version}
{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}

EXAMPLES:
    gt-launch --role witness --rig gastown
    gt-launch --provider openhands --role polecat --rig gastown --actor gastown/polecats/toast
    gt-launch --command /usr/local/bin/custom --arg=--flag --env FOO=bar
"
)]
pub struct Cli {
    /// Agent role, exported as GT_ROLE
    #[arg(long)]
    pub role: Option<String>,

    /// Rig name, exported as GT_RIG
    #[arg(long)]
    pub rig: Option<String>,

    /// Agent identity, exported as BD_ACTOR
    #[arg(long)]
    pub actor: Option<String>,

    /// Worker name used for crew and polecat session names
    #[arg(long)]
    pub name: Option<String>,

    /// Adapter to use; defaults to the one matching the runtime command
    #[arg(long)]
    pub provider: Option<String>,

    /// Runtime executable name or path
    #[arg(long)]
    pub command: Option<String>,

    /// Runtime argument (repeatable)
    #[arg(long = "arg", value_name = "ARG", allow_hyphen_values = true)]
    pub args: Vec<String>,

    /// Launch the runtime with no arguments at all
    #[arg(long, conflicts_with = "args")]
    pub no_args: bool,

    /// Extra export as KEY=VALUE (repeatable)
    #[arg(long = "env", value_name = "KEY=VALUE")]
    pub env: Vec<String>,

    /// Prompt passed to the runtime
    #[arg(long)]
    pub prompt: Option<String>,

    /// Model identifier for adapters that use one
    #[arg(long)]
    pub model: Option<String>,

    /// Directory to start workspace discovery from. Defaults to the current directory.
    #[arg(long, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Runtime config file. Defaults to <rig>/settings/runtime.json
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Also print the session name to stderr
    #[arg(long)]
    pub show_session: bool,
}

impl Cli {
    pub fn role(&self) -> &str {
        self.role.as_deref().unwrap_or_default()
    }

    pub fn rig(&self) -> &str {
        self.rig.as_deref().unwrap_or_default()
    }
}

/// Turns parsed flags into launch options.
///
/// The rig path is `<town>/<rig>` when a town root is found above the start
/// directory, otherwise the start directory itself. Flags override values from
/// the rig's runtime config.
pub fn build_launch_options(cli: &Cli) -> Result<LaunchOptions> {
    let start_dir = match &cli.dir {
        Some(dir) => dir.clone(),
        None => std::env::current_dir().context("getting current directory")?,
    };
    let rig_path = resolve_rig_path(&start_dir, cli.rig())?;

    let repository = match &cli.config {
        Some(path) => FileRuntimeConfigRepository::new(path),
        None => FileRuntimeConfigRepository::for_rig(&rig_path),
    };
    let config = repository.load()?;

    let mut runtime = config.to_settings();
    if let Some(command) = &cli.command {
        runtime.command = command.clone();
    }
    if cli.no_args {
        runtime.args = Some(Vec::new());
    } else if !cli.args.is_empty() {
        runtime.args = Some(cli.args.clone());
    }
    if let Some(model) = &cli.model {
        runtime.model = model.clone();
    }

    let mut env = HashMap::new();
    for (key, value) in [
        ("GT_ROLE", cli.role()),
        ("GT_RIG", cli.rig()),
        ("BD_ACTOR", cli.actor.as_deref().unwrap_or_default()),
    ] {
        if !value.is_empty() {
            env.insert(key.to_string(), value.to_string());
        }
    }
    for pair in &cli.env {
        let (key, value) = parse_env_pair(pair)?;
        env.insert(key, value);
    }

    let provider = cli.provider.clone().unwrap_or(config.provider);

    Ok(LaunchOptions::new(runtime)
        .with_env_vars(env)
        .with_prompt(cli.prompt.clone().unwrap_or_default())
        .with_provider(provider)
        .with_identity(
            cli.role(),
            cli.rig(),
            cli.actor.clone().unwrap_or_default(),
        )
        .with_rig_path(rig_path.to_string_lossy()))
}

fn resolve_rig_path(start_dir: &Path, rig: &str) -> Result<PathBuf> {
    match workspace::find(start_dir)? {
        Some(town_root) if !rig.is_empty() => Ok(town_root.join(rig)),
        Some(town_root) => Ok(town_root),
        None => {
            log::debug!(
                "No town root above {}, using it as the rig path",
                start_dir.display()
            );
            Ok(start_dir.to_path_buf())
        }
    }
}

fn parse_env_pair(pair: &str) -> Result<(String, String)> {
    let Some((key, value)) = pair.split_once('=') else {
        bail!("Invalid --env value '{pair}': expected KEY=VALUE");
    };
    let key = key.trim();
    if key.is_empty() {
        bail!("Invalid --env value '{pair}': empty variable name");
    }
    Ok((key.to_string(), value.to_string()))
}
