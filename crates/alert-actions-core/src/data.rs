//! File-backed records for organizations and their installed integrations.
//!
//! `.alert-actions/data.yaml` is read fresh on every request. A missing file
//! is an empty data set, not an error.

use crate::error::Result;
use crate::paths;
use crate::store::{AppStore, IntegrationStore, OrganizationStore, PagerDutyStore};
use crate::types::{ActionKind, AppStatus, IntegrationStatus};
use serde::{Deserialize, Serialize};
use std::path::Path;

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    pub id: u64,
    pub slug: String,
}

/// The authenticated requester, as identified by the surrounding framework.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    pub id: String,
}

impl Actor {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Integration {
    pub id: u64,
    pub provider: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub status: IntegrationStatus,
    /// Organizations the integration is installed on.
    #[serde(default)]
    pub organization_ids: Vec<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstalledApp {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub status: AppStatus,
    #[serde(default)]
    pub is_alertable: bool,
    pub organization_id: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PagerDutyService {
    pub id: u64,
    pub service_name: String,
    pub organization_id: u64,
    pub integration_id: u64,
}

// ---------------------------------------------------------------------------
// DataSet
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DataSet {
    #[serde(default)]
    pub organizations: Vec<Organization>,
    #[serde(default)]
    pub integrations: Vec<Integration>,
    #[serde(default)]
    pub apps: Vec<InstalledApp>,
    #[serde(default)]
    pub pagerduty_services: Vec<PagerDutyService>,
}

impl DataSet {
    pub fn load(root: &Path) -> Result<Self> {
        let path = paths::data_path(root);
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no data file, using empty data set");
            return Ok(Self::default());
        }
        let data = std::fs::read_to_string(&path)?;
        let set: DataSet = serde_yaml::from_str(&data)?;
        Ok(set)
    }

    pub fn save(&self, root: &Path) -> Result<()> {
        let path = paths::data_path(root);
        let data = serde_yaml::to_string(self)?;
        crate::io::atomic_write(&path, data.as_bytes())
    }
}

impl OrganizationStore for DataSet {
    fn get_by_slug(&self, slug: &str) -> Result<Option<Organization>> {
        Ok(self.organizations.iter().find(|o| o.slug == slug).cloned())
    }
}

impl IntegrationStore for DataSet {
    fn list_available_integrations(&self, organization: &Organization) -> Result<Vec<Integration>> {
        let available: Vec<Integration> = self
            .integrations
            .iter()
            .filter(|i| i.status == IntegrationStatus::Active)
            .filter(|i| i.organization_ids.contains(&organization.id))
            .filter(|i| ActionKind::is_action_provider(&i.provider))
            .cloned()
            .collect();
        Ok(available)
    }
}

impl AppStore for DataSet {
    fn list_alertable_installed_apps(&self, organization_id: u64) -> Result<Vec<InstalledApp>> {
        Ok(self
            .apps
            .iter()
            .filter(|a| a.organization_id == organization_id)
            .filter(|a| a.is_alertable && a.status != AppStatus::DeletionInProgress)
            .cloned()
            .collect())
    }
}

impl PagerDutyStore for DataSet {
    fn list_services(
        &self,
        organization: &Organization,
        integration_id: u64,
    ) -> Result<Vec<PagerDutyService>> {
        Ok(self
            .pagerduty_services
            .iter()
            .filter(|s| s.organization_id == organization.id && s.integration_id == integration_id)
            .cloned()
            .collect())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn org(id: u64, slug: &str) -> Organization {
        Organization {
            id,
            slug: slug.to_string(),
        }
    }

    fn integration(id: u64, provider: &str, org_ids: &[u64]) -> Integration {
        Integration {
            id,
            provider: provider.to_string(),
            name: format!("{provider} {id}"),
            status: IntegrationStatus::Active,
            organization_ids: org_ids.to_vec(),
        }
    }

    #[test]
    fn missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let set = DataSet::load(dir.path()).unwrap();
        assert!(set.organizations.is_empty());
        assert!(set.integrations.is_empty());
    }

    #[test]
    fn save_then_load() {
        let dir = TempDir::new().unwrap();
        let set = DataSet {
            organizations: vec![org(1, "acme")],
            integrations: vec![integration(7, "slack", &[1])],
            ..Default::default()
        };
        set.save(dir.path()).unwrap();

        let loaded = DataSet::load(dir.path()).unwrap();
        assert_eq!(loaded.organizations, set.organizations);
        assert_eq!(loaded.integrations, set.integrations);
    }

    #[test]
    fn yaml_defaults_fill_optional_fields() {
        let yaml = r#"
organizations:
  - id: 1
    slug: acme
integrations:
  - id: 3
    provider: slack
    organization_ids: [1]
"#;
        let set: DataSet = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(set.integrations[0].status, IntegrationStatus::Active);
        assert_eq!(set.integrations[0].name, "");
        assert!(set.apps.is_empty());
    }

    #[test]
    fn get_by_slug() {
        let set = DataSet {
            organizations: vec![org(1, "acme"), org(2, "globex")],
            ..Default::default()
        };
        assert_eq!(set.get_by_slug("globex").unwrap(), Some(org(2, "globex")));
        assert_eq!(set.get_by_slug("initech").unwrap(), None);
    }

    #[test]
    fn available_integrations_are_scoped_in_store_order() {
        let mut disabled = integration(4, "slack", &[1]);
        disabled.status = IntegrationStatus::Disabled;
        let set = DataSet {
            integrations: vec![
                integration(9, "slack", &[1]),
                integration(2, "pagerduty", &[1, 2]),
                integration(5, "github", &[1]),
                integration(6, "slack", &[2]),
                disabled,
            ],
            ..Default::default()
        };

        let ids: Vec<u64> = set
            .list_available_integrations(&org(1, "acme"))
            .unwrap()
            .iter()
            .map(|i| i.id)
            .collect();
        assert_eq!(ids, vec![9, 2]);
    }

    #[test]
    fn alertable_apps_only() {
        let app = |id: u64, alertable: bool, status: AppStatus, org_id: u64| InstalledApp {
            id,
            name: format!("app {id}"),
            status,
            is_alertable: alertable,
            organization_id: org_id,
        };
        let set = DataSet {
            apps: vec![
                app(1, true, AppStatus::Published, 1),
                app(2, false, AppStatus::Published, 1),
                app(3, true, AppStatus::DeletionInProgress, 1),
                app(4, true, AppStatus::Internal, 2),
                app(5, true, AppStatus::Unpublished, 1),
            ],
            ..Default::default()
        };
        let ids: Vec<u64> = set
            .list_alertable_installed_apps(1)
            .unwrap()
            .iter()
            .map(|a| a.id)
            .collect();
        assert_eq!(ids, vec![1, 5]);
    }

    #[test]
    fn services_scoped_to_org_and_integration() {
        let svc = |id: u64, org_id: u64, integration_id: u64| PagerDutyService {
            id,
            service_name: format!("svc {id}"),
            organization_id: org_id,
            integration_id,
        };
        let set = DataSet {
            pagerduty_services: vec![svc(3, 1, 10), svc(1, 1, 10), svc(2, 1, 11), svc(4, 2, 10)],
            ..Default::default()
        };
        let ids: Vec<u64> = set
            .list_services(&org(1, "acme"), 10)
            .unwrap()
            .iter()
            .map(|s| s.id)
            .collect();
        assert_eq!(ids, vec![3, 1]);
    }
}
