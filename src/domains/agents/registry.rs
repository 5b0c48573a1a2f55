//! Adapter registry and launch command resolution.
//!
//! The registry maps canonical names to adapters behind a reader/writer lock.
//! Lookups clone the `Arc` out of the map and release the lock before the
//! adapter runs, so a slow adapter never blocks registration or other
//! resolutions.

use super::adapter::{LaunchAdapter, LaunchError};
use super::claude::ClaudeAdapter;
use super::launch_spec::LaunchOptions;
use super::manifest::{AdapterKind, AgentManifest};
use super::openhands::OpenHandsAdapter;
use super::shell::ShellAdapter;
use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock};

pub struct AgentRegistry {
    adapters: RwLock<HashMap<String, Arc<dyn LaunchAdapter>>>,
    fallback: RwLock<Option<Arc<dyn LaunchAdapter>>>,
}

impl AgentRegistry {
    /// Empty registry with the shell adapter as fallback.
    pub fn new() -> Self {
        Self {
            adapters: RwLock::new(HashMap::new()),
            fallback: RwLock::new(Some(Arc::new(ShellAdapter::new()))),
        }
    }

    /// Registry populated from the embedded agent manifest.
    pub fn with_builtins() -> Self {
        let registry = Self::new();
        for id in AgentManifest::supported_agents() {
            let Some(definition) = AgentManifest::get(&id) else {
                continue;
            };
            let adapter: Arc<dyn LaunchAdapter> = match definition.kind {
                AdapterKind::Shell => Arc::new(ShellAdapter::new()),
                AdapterKind::Alias => Arc::new(ClaudeAdapter::new()),
                AdapterKind::OpenHands => Arc::new(OpenHandsAdapter::new()),
            };
            registry.register(&definition.id, Some(adapter));
        }
        registry
    }

    /// Inserts, replaces or (with `None`) removes the adapter for `name`.
    ///
    /// Names that canonicalize to the empty string are ignored; they could
    /// never be matched by a lookup.
    pub fn register(&self, name: &str, adapter: Option<Arc<dyn LaunchAdapter>>) {
        let key = canonical_name(name);
        if key.is_empty() {
            log::debug!("Ignoring adapter registration with empty name");
            return;
        }

        let mut adapters = self
            .adapters
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        match adapter {
            Some(adapter) => {
                log::debug!("Registering launch adapter '{key}'");
                adapters.insert(key, adapter);
            }
            None => {
                log::debug!("Removing launch adapter '{key}'");
                adapters.remove(&key);
            }
        }
    }

    /// Replaces the adapter used when no entry matches. `None` clears it,
    /// after which unmatched resolutions fail with `LaunchError::NoAdapter`.
    pub fn set_fallback(&self, adapter: Option<Arc<dyn LaunchAdapter>>) {
        *self
            .fallback
            .write()
            .unwrap_or_else(PoisonError::into_inner) = adapter;
    }

    pub fn has_fallback(&self) -> bool {
        self.fallback
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn LaunchAdapter>> {
        let key = canonical_name(name);
        if key.is_empty() {
            return None;
        }
        self.adapters
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key)
            .cloned()
    }

    pub fn registered_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .adapters
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect();
        names.sort();
        names
    }

    /// Picks the adapter for `options`: explicit provider first, then the
    /// runtime command's final path segment, then the fallback.
    pub fn resolve(&self, options: &LaunchOptions) -> Option<Arc<dyn LaunchAdapter>> {
        let mut key = canonical_name(&options.provider);
        if key.is_empty() {
            key = canonical_name(&options.runtime.command);
        }

        if let Some(adapter) = self.get(&key) {
            log::debug!("Resolved launch adapter '{key}'");
            return Some(adapter);
        }

        log::debug!("No launch adapter registered for '{key}', using fallback");
        self.fallback
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn build_launch_command(&self, options: &LaunchOptions) -> Result<String, LaunchError> {
        build_launch_command(self, options)
    }
}

impl Default for AgentRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolves the adapter for `options` and renders the launch command.
///
/// Adapter errors are returned unchanged. `LaunchError::NoAdapter` is only
/// produced when the registry's fallback has been cleared.
pub fn build_launch_command(
    registry: &AgentRegistry,
    options: &LaunchOptions,
) -> Result<String, LaunchError> {
    let adapter = registry.resolve(options).ok_or(LaunchError::NoAdapter)?;
    adapter.build_launch_command(options)
}

/// Registry key for a provider name or command path: trimmed, final path
/// segment, lower-cased. Blank input yields the empty string.
pub fn canonical_name(name: &str) -> String {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    let base = Path::new(trimmed)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| trimmed.to_string());
    base.to_lowercase()
}
