//! Session names for Gas Town agent processes.

/// Common prefix for all Gas Town session names.
pub const PREFIX: &str = "gt-";

pub fn mayor_session_name() -> String {
    format!("{PREFIX}mayor")
}

pub fn deacon_session_name() -> String {
    format!("{PREFIX}deacon")
}

pub fn witness_session_name(rig: &str) -> String {
    format!("{PREFIX}{rig}-witness")
}

pub fn refinery_session_name(rig: &str) -> String {
    format!("{PREFIX}{rig}-refinery")
}

pub fn crew_session_name(rig: &str, name: &str) -> String {
    format!("{PREFIX}{rig}-crew-{name}")
}

pub fn polecat_session_name(rig: &str, name: &str) -> String {
    format!("{PREFIX}{rig}-{name}")
}

/// Nudge sent after the startup beacon so the agent checks its hook and
/// starts working without waiting for further input.
pub fn propulsion_nudge() -> &'static str {
    "Run `gt hook` to check your hook and begin work."
}
