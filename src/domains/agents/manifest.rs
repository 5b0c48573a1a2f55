use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::LazyLock;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AdapterKind {
    Shell,
    Alias,
    OpenHands,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AgentDefinition {
    pub id: String,
    pub display_name: String,
    pub binary_name: String,
    pub kind: AdapterKind,
}

#[derive(Debug, Deserialize)]
struct ManifestRoot {
    agents: HashMap<String, AgentDefinition>,
}

static AGENT_MANIFEST: LazyLock<HashMap<String, AgentDefinition>> = LazyLock::new(|| {
    let manifest_content = include_str!("../../../agents_manifest.toml");
    let root: ManifestRoot = toml::from_str(manifest_content)
        .expect("Failed to parse agents_manifest.toml - this is a fatal build error");
    root.agents
});

pub struct AgentManifest;

impl AgentManifest {
    pub fn get(agent_id: &str) -> Option<&'static AgentDefinition> {
        AGENT_MANIFEST.get(agent_id)
    }

    pub fn all() -> &'static HashMap<String, AgentDefinition> {
        &AGENT_MANIFEST
    }

    pub fn supported_agents() -> Vec<String> {
        let mut agents: Vec<_> = AGENT_MANIFEST.keys().cloned().collect();
        agents.sort();
        agents
    }
}
