use anyhow::Result;
use clap::Parser;
use gastown_launch::cli::{build_launch_options, Cli};
use gastown_launch::domains::agents::{build_launch_command, AgentRegistry};
use gastown_launch::domains::sessions::session_name_for_role;
use gastown_launch::infrastructure::logging;

fn main() -> Result<()> {
    logging::init_logging();

    let cli = Cli::parse();
    let options = build_launch_options(&cli)?;

    let registry = AgentRegistry::with_builtins();
    let command = build_launch_command(&registry, &options)?;
    log::info!("Launch command for role '{}': {command}", cli.role());

    if cli.show_session {
        let name = cli.name.as_deref().unwrap_or_default();
        eprintln!(
            "session: {}",
            session_name_for_role(cli.role(), cli.rig(), name)
        );
    }

    println!("{command}");
    Ok(())
}
