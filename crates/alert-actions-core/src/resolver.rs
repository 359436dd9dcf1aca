//! Resolves which alert rule actions an organization can use right now.
//!
//! The static registry says which action types exist; the stores say which
//! integrations and apps the organization has installed. Each registered type
//! yields one response per matching integration or app, or exactly one
//! response when the type has no per-instance variants.

use crate::config::Config;
use crate::data::{Actor, DataSet, InstalledApp, Integration, Organization};
use crate::error::{ActionsError, Result};
use crate::paths;
use crate::registry::{self, ActionTypeDescriptor};
use crate::store::{
    AppStore, FeatureFlags, IntegrationStore, OrganizationStore, PagerDutyStore, INCIDENTS_FLAG,
    SENTRY_APP_METRIC_ALERTS_FLAG,
};
use crate::types::{ActionKind, InputType};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

// ---------------------------------------------------------------------------
// Response shape
// ---------------------------------------------------------------------------

/// One selectable sub-target of an action (e.g. a PagerDuty service).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionOption {
    pub value: u64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionResponse {
    #[serde(rename = "type")]
    pub action_type: String,
    pub allowed_target_types: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_type: Option<InputType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub integration_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub integration_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<ActionOption>>,
}

/// The installed integration or app a response is built for.
#[derive(Debug, Clone, Copy)]
pub enum ActionContext<'a> {
    Integration(&'a Integration),
    App(&'a InstalledApp),
}

impl ActionContext<'_> {
    pub fn id(&self) -> u64 {
        match self {
            ActionContext::Integration(i) => i.id,
            ActionContext::App(a) => a.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            ActionContext::Integration(i) => &i.name,
            ActionContext::App(a) => &a.name,
        }
    }
}

// ---------------------------------------------------------------------------
// AvailableActionsResolver
// ---------------------------------------------------------------------------

pub struct AvailableActionsResolver<'a> {
    flags: &'a dyn FeatureFlags,
    integrations: &'a dyn IntegrationStore,
    apps: &'a dyn AppStore,
    pagerduty: &'a dyn PagerDutyStore,
}

impl<'a> AvailableActionsResolver<'a> {
    pub fn new(
        flags: &'a dyn FeatureFlags,
        integrations: &'a dyn IntegrationStore,
        apps: &'a dyn AppStore,
        pagerduty: &'a dyn PagerDutyStore,
    ) -> Self {
        Self {
            flags,
            integrations,
            apps,
            pagerduty,
        }
    }

    /// Resolver over a single backing store that implements every read.
    pub fn with_store<S>(flags: &'a dyn FeatureFlags, store: &'a S) -> Self
    where
        S: IntegrationStore + AppStore + PagerDutyStore,
    {
        Self::new(flags, store, store, store)
    }

    /// Every action the organization can attach to an alert rule, in
    /// registry order (slug), integrations by id within each type.
    ///
    /// Fails with [`ActionsError::FeatureDisabled`] when incidents are not
    /// enabled; callers must report it as a plain not-found.
    pub fn list_available_actions(
        &self,
        organization: &Organization,
        actor: &Actor,
    ) -> Result<Vec<ActionResponse>> {
        if !self.flags.has(INCIDENTS_FLAG, organization, actor) {
            tracing::warn!(
                organization = %organization.slug,
                actor = %actor.id,
                "incidents feature disabled, rejecting available actions request"
            );
            return Err(ActionsError::FeatureDisabled {
                flag: INCIDENTS_FLAG.to_string(),
                organization: organization.slug.clone(),
            });
        }

        // Grouped once so each registered type reads its provider's list
        // without another store call.
        let mut by_provider: HashMap<String, Vec<Integration>> = HashMap::new();
        for integration in self.integrations.list_available_integrations(organization)? {
            by_provider
                .entry(integration.provider.clone())
                .or_default()
                .push(integration);
        }
        for group in by_provider.values_mut() {
            group.sort_by_key(|i| i.id);
        }
        tracing::debug!(
            organization = %organization.slug,
            providers = by_provider.len(),
            "grouped available integrations"
        );

        let mut actions = Vec::new();
        for registered in registry::registered_types() {
            if let Some(provider) = registered.integration_provider {
                for integration in by_provider.get(provider).into_iter().flatten() {
                    actions.push(self.build_action_response(
                        organization,
                        registered,
                        Some(ActionContext::Integration(integration)),
                    )?);
                }
            } else if registered.kind.is_app() {
                if self
                    .flags
                    .has(SENTRY_APP_METRIC_ALERTS_FLAG, organization, actor)
                {
                    for app in self.apps.list_alertable_installed_apps(organization.id)? {
                        actions.push(self.build_action_response(
                            organization,
                            registered,
                            Some(ActionContext::App(&app)),
                        )?);
                    }
                }
            } else {
                actions.push(self.build_action_response(organization, registered, None)?);
            }
        }

        tracing::debug!(
            organization = %organization.slug,
            count = actions.len(),
            "resolved available actions"
        );
        Ok(actions)
    }

    /// Shape one registered type (optionally bound to an installed
    /// integration or app) into its response.
    pub fn build_action_response(
        &self,
        organization: &Organization,
        registered: &ActionTypeDescriptor,
        context: Option<ActionContext<'_>>,
    ) -> Result<ActionResponse> {
        let mut response = ActionResponse {
            action_type: registered.slug.to_string(),
            allowed_target_types: registered
                .supported_target_types
                .iter()
                .map(|t| t.as_str().to_string())
                .collect(),
            input_type: registered.input_type(),
            integration_name: None,
            integration_id: None,
            status: None,
            options: None,
        };

        let Some(ctx) = context else {
            return Ok(response);
        };
        response.integration_name = Some(ctx.name().to_string());
        response.integration_id = Some(ctx.id());

        match (registered.kind, ctx) {
            (ActionKind::PagerDuty, _) => {
                response.options = Some(self.fetch_pagerduty_services(organization, ctx.id())?);
            }
            (ActionKind::SentryApp, ActionContext::App(app)) => {
                response.status = Some(app.status.as_str().to_string());
            }
            _ => {}
        }

        Ok(response)
    }

    /// PagerDuty services linked to one integration, in store order.
    pub fn fetch_pagerduty_services(
        &self,
        organization: &Organization,
        integration_id: u64,
    ) -> Result<Vec<ActionOption>> {
        let services = self.pagerduty.list_services(organization, integration_id)?;
        Ok(services
            .into_iter()
            .map(|s| ActionOption {
                value: s.id,
                label: s.service_name,
            })
            .collect())
    }
}

// ---------------------------------------------------------------------------
// File-backed entry point
// ---------------------------------------------------------------------------

/// Load config and data from `root` and resolve actions for the organization
/// named by `organization_slug`.
pub fn list_for_organization(
    root: &Path,
    organization_slug: &str,
    actor: &Actor,
) -> Result<Vec<ActionResponse>> {
    paths::validate_slug(organization_slug)?;
    let config = Config::load(root)?;
    let data = DataSet::load(root)?;
    let organization = data
        .get_by_slug(organization_slug)?
        .ok_or_else(|| ActionsError::OrganizationNotFound(organization_slug.to_string()))?;
    AvailableActionsResolver::with_store(&config, &data).list_available_actions(&organization, actor)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
