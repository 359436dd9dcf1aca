use crate::data::{Actor, Organization};
use crate::error::{ActionsError, Result};
use crate::paths;
use crate::store::{FeatureFlags, INCIDENTS_FLAG, KNOWN_FLAGS};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

// ---------------------------------------------------------------------------
// ConfigWarning / WarnLevel
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigWarning {
    pub level: WarnLevel,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarnLevel {
    Warning,
    Error,
}

// ---------------------------------------------------------------------------
// ServerConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_port() -> u16 {
    3141
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
        }
    }
}

// ---------------------------------------------------------------------------
// FeatureRule
// ---------------------------------------------------------------------------

/// Who a feature flag is enabled for.
///
/// A rule matches when the organization is covered (`all` or listed by slug)
/// and, if `actors` is non-empty, the actor is listed too.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureRule {
    #[serde(default)]
    pub all: bool,
    #[serde(default)]
    pub organizations: Vec<String>,
    #[serde(default)]
    pub actors: Vec<String>,
}

impl FeatureRule {
    pub fn enabled_for_all() -> Self {
        Self {
            all: true,
            ..Default::default()
        }
    }

    pub fn matches(&self, organization: &Organization, actor: &Actor) -> bool {
        let org_ok = self.all || self.organizations.iter().any(|s| *s == organization.slug);
        let actor_ok = self.actors.is_empty() || self.actors.iter().any(|a| *a == actor.id);
        org_ok && actor_ok
    }
}

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub features: BTreeMap<String, FeatureRule>,
}

fn default_version() -> u32 {
    1
}

impl Config {
    /// Config written by `alert-actions init`: incidents on for everyone.
    pub fn new() -> Self {
        let mut features = BTreeMap::new();
        features.insert(INCIDENTS_FLAG.to_string(), FeatureRule::enabled_for_all());
        Self {
            version: default_version(),
            server: ServerConfig::default(),
            features,
        }
    }

    pub fn load(root: &Path) -> Result<Self> {
        let path = paths::config_path(root);
        if !path.exists() {
            return Err(ActionsError::NotInitialized);
        }
        let data = std::fs::read_to_string(&path)?;
        let cfg: Config = serde_yaml::from_str(&data)?;
        Ok(cfg)
    }

    pub fn save(&self, root: &Path) -> Result<()> {
        let path = paths::config_path(root);
        let data = serde_yaml::to_string(self)?;
        crate::io::atomic_write(&path, data.as_bytes())
    }

    pub fn enable(&mut self, flag: &str, rule: FeatureRule) {
        self.features.insert(flag.to_string(), rule);
    }

    // -----------------------------------------------------------------------
    // Validation
    // -----------------------------------------------------------------------

    pub fn validate(&self) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();

        for (flag, rule) in &self.features {
            if !KNOWN_FLAGS.contains(&flag.as_str()) {
                warnings.push(ConfigWarning {
                    level: WarnLevel::Warning,
                    message: format!("unknown feature flag '{flag}'"),
                });
            }
            if !rule.all && rule.organizations.is_empty() {
                warnings.push(ConfigWarning {
                    level: WarnLevel::Warning,
                    message: format!("feature '{flag}' is not enabled for any organization"),
                });
            }
            for slug in &rule.organizations {
                if paths::validate_slug(slug).is_err() {
                    warnings.push(ConfigWarning {
                        level: WarnLevel::Error,
                        message: format!("feature '{flag}' lists invalid organization slug '{slug}'"),
                    });
                }
            }
        }

        if !self.features.contains_key(INCIDENTS_FLAG) {
            warnings.push(ConfigWarning {
                level: WarnLevel::Warning,
                message: format!("'{INCIDENTS_FLAG}' is not configured; every request will 404"),
            });
        }

        warnings
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl FeatureFlags for Config {
    fn has(&self, flag: &str, organization: &Organization, actor: &Actor) -> bool {
        self.features
            .get(flag)
            .is_some_and(|rule| rule.matches(organization, actor))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
