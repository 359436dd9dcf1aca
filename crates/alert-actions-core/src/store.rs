//! Read-only collaborators the resolver depends on.

use crate::data::{Actor, InstalledApp, Integration, Organization, PagerDutyService};
use crate::error::Result;

/// Feature flag that gates the whole endpoint.
pub const INCIDENTS_FLAG: &str = "organizations:incidents";

/// Feature flag that gates third-party app actions.
pub const SENTRY_APP_METRIC_ALERTS_FLAG: &str =
    "organizations:integrations-sentry-app-metric-alerts";

pub const KNOWN_FLAGS: &[&str] = &[INCIDENTS_FLAG, SENTRY_APP_METRIC_ALERTS_FLAG];

pub trait FeatureFlags {
    fn has(&self, flag: &str, organization: &Organization, actor: &Actor) -> bool;
}

pub trait OrganizationStore {
    fn get_by_slug(&self, slug: &str) -> Result<Option<Organization>>;
}

pub trait IntegrationStore {
    /// Active integrations installed on `organization` whose provider backs a
    /// registered action type.
    fn list_available_integrations(&self, organization: &Organization) -> Result<Vec<Integration>>;
}

pub trait AppStore {
    /// Alertable apps installed on the organization, in store order.
    fn list_alertable_installed_apps(&self, organization_id: u64) -> Result<Vec<InstalledApp>>;
}

pub trait PagerDutyStore {
    fn list_services(
        &self,
        organization: &Organization,
        integration_id: u64,
    ) -> Result<Vec<PagerDutyService>>;
}
