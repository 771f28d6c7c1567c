//! Selector set: ordered CSS candidates per provider and role.
//!
//! Loaded once at startup from `selectors.json`:
//!
//! ```json
//! { "gemini": { "input": ["rich-textarea", ".ql-editor"], "submit": "button.send" } }
//! ```
//!
//! A role may be a single string or a list. Missing providers or roles
//! leave that capability empty; they never fail the load.

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

use polygpt_common::{ConfigError, ProviderKey};
use serde::{Deserialize, Deserializer, Serialize};
use tracing::{info, warn};

use crate::toml_loader;

/// File name looked up next to the working directory and in the config dir.
pub const SELECTORS_FILE: &str = "selectors.json";

/// What a selector list is used to find.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectorRole {
    Input,
    Submit,
    NewChat,
}

impl SelectorRole {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Input => "input",
            Self::Submit => "submit",
            Self::NewChat => "newChat",
        }
    }
}

impl fmt::Display for SelectorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Candidate selectors for one provider, tried in order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProviderSelectors {
    #[serde(deserialize_with = "one_or_many")]
    pub input: Vec<String>,
    #[serde(deserialize_with = "one_or_many")]
    pub submit: Vec<String>,
    #[serde(deserialize_with = "one_or_many")]
    pub new_chat: Vec<String>,
}

impl ProviderSelectors {
    pub fn role(&self, role: SelectorRole) -> &[String] {
        match role {
            SelectorRole::Input => &self.input,
            SelectorRole::Submit => &self.submit,
            SelectorRole::NewChat => &self.new_chat,
        }
    }
}

fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(s) => vec![s],
        OneOrMany::Many(v) => v,
    })
}

/// Read-only selector set for every provider.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectorConfig {
    providers: HashMap<ProviderKey, ProviderSelectors>,
}

impl SelectorConfig {
    /// Parse the JSON document, skipping unknown providers and malformed
    /// entries with a warning.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let raw: HashMap<String, serde_json::Value> = serde_json::from_str(json)
            .map_err(|e| ConfigError::ParseError(format!("failed to parse selectors: {e}")))?;

        let mut providers = HashMap::new();
        for (name, value) in raw {
            let key: ProviderKey = match name.parse() {
                Ok(key) => key,
                Err(_) => {
                    warn!(provider = %name, "ignoring selectors for unknown provider");
                    continue;
                }
            };
            match serde_json::from_value::<ProviderSelectors>(value) {
                Ok(selectors) => {
                    providers.insert(key, selectors);
                }
                Err(e) => warn!(provider = %key, "ignoring malformed selectors: {e}"),
            }
        }
        Ok(Self { providers })
    }

    pub fn insert(&mut self, key: ProviderKey, selectors: ProviderSelectors) {
        self.providers.insert(key, selectors);
    }

    /// Selectors for a provider; empty when the provider is not configured.
    pub fn provider(&self, key: ProviderKey) -> ProviderSelectors {
        self.providers.get(&key).cloned().unwrap_or_default()
    }

    /// Providers with at least one entry.
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

/// Load a selector file.
pub fn load_selectors(path: &Path) -> Result<SelectorConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| match source.kind() {
        std::io::ErrorKind::NotFound => ConfigError::FileNotFound(path.to_path_buf()),
        _ => ConfigError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;
    let config = SelectorConfig::from_json(&content)?;
    info!(
        "loaded selectors for {} providers from {}",
        config.providers.len(),
        path.display()
    );
    Ok(config)
}

/// Lookup order: explicit path, `config/selectors.json` under the working
/// directory, then the platform config dir.
pub fn selector_search_paths(explicit: Option<&Path>) -> Vec<PathBuf> {
    if let Some(path) = explicit {
        return vec![path.to_path_buf()];
    }
    let mut paths = vec![PathBuf::from("config").join(SELECTORS_FILE)];
    if let Ok(dir) = toml_loader::config_dir() {
        paths.push(dir.join(SELECTORS_FILE));
    }
    paths
}

/// Load the first selector file that exists. Any failure yields an empty
/// set so every provider capability degrades instead of aborting startup.
pub fn load_selectors_or_empty(explicit: Option<&Path>) -> SelectorConfig {
    for path in selector_search_paths(explicit) {
        match load_selectors(&path) {
            Ok(config) => return config,
            Err(ConfigError::FileNotFound(_)) => continue,
            Err(e) => {
                warn!("failed to load selectors config: {e}");
                return SelectorConfig::default();
            }
        }
    }
    warn!("no selectors file found; provider input will be unavailable");
    SelectorConfig::default()
}
