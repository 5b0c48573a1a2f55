pub mod names;

pub use names::{
    crew_session_name, deacon_session_name, mayor_session_name, polecat_session_name,
    propulsion_nudge, refinery_session_name, witness_session_name,
};

/// Session name for an agent, derived from its role.
///
/// Town-level roles ignore `rig` and `name`. Unknown roles are treated as
/// polecats, which are named after the worker itself.
pub fn session_name_for_role(role: &str, rig: &str, name: &str) -> String {
    match role {
        "mayor" => mayor_session_name(),
        "deacon" => deacon_session_name(),
        "witness" => witness_session_name(rig),
        "refinery" => refinery_session_name(rig),
        "crew" => crew_session_name(rig, name),
        _ => polecat_session_name(rig, name),
    }
}
