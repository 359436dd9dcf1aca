use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// TargetType
// ---------------------------------------------------------------------------

/// Addressing mode for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetType {
    User,
    Team,
    Specific,
    SentryApp,
}

impl TargetType {
    pub fn as_str(self) -> &'static str {
        match self {
            TargetType::User => "user",
            TargetType::Team => "team",
            TargetType::Specific => "specific",
            TargetType::SentryApp => "sentry_app",
        }
    }
}

// ---------------------------------------------------------------------------
// InputType
// ---------------------------------------------------------------------------

/// How the alert rule editor should ask for an action's target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputType {
    Select,
    Text,
}

impl InputType {
    pub fn as_str(self) -> &'static str {
        match self {
            InputType::Select => "select",
            InputType::Text => "text",
        }
    }
}

impl fmt::Display for InputType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// IntegrationStatus
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntegrationStatus {
    #[default]
    Active,
    Disabled,
    PendingDeletion,
}

// ---------------------------------------------------------------------------
// AppStatus
// ---------------------------------------------------------------------------

/// Lifecycle state of a third-party app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppStatus {
    #[default]
    Unpublished,
    Published,
    Internal,
    PublishRequestInprogress,
    DeletionInProgress,
}

impl AppStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            AppStatus::Unpublished => "unpublished",
            AppStatus::Published => "published",
            AppStatus::Internal => "internal",
            AppStatus::PublishRequestInprogress => "publish_request_inprogress",
            AppStatus::DeletionInProgress => "deletion_in_progress",
        }
    }
}

// ---------------------------------------------------------------------------
// ActionKind
// ---------------------------------------------------------------------------

/// Every kind of notification an alert rule trigger can fire.
///
/// Per-kind behavior (input hint, provider key, target types) lives here so
/// adding a kind touches a single enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    Email,
    #[serde(rename = "pagerduty")]
    PagerDuty,
    Slack,
    #[serde(rename = "msteams")]
    MsTeams,
    SentryApp,
}

impl ActionKind {
    pub fn all() -> &'static [ActionKind] {
        &[
            ActionKind::Email,
            ActionKind::PagerDuty,
            ActionKind::Slack,
            ActionKind::MsTeams,
            ActionKind::SentryApp,
        ]
    }

    pub fn slug(self) -> &'static str {
        match self {
            ActionKind::Email => "email",
            ActionKind::PagerDuty => "pagerduty",
            ActionKind::Slack => "slack",
            ActionKind::MsTeams => "msteams",
            ActionKind::SentryApp => "sentry_app",
        }
    }

    /// Integration provider whose installations each yield one action.
    pub fn integration_provider(self) -> Option<&'static str> {
        match self {
            ActionKind::PagerDuty => Some("pagerduty"),
            ActionKind::Slack => Some("slack"),
            ActionKind::MsTeams => Some("msteams"),
            ActionKind::Email | ActionKind::SentryApp => None,
        }
    }

    pub fn supported_target_types(self) -> &'static [TargetType] {
        match self {
            ActionKind::Email => &[TargetType::User, TargetType::Team],
            ActionKind::PagerDuty | ActionKind::Slack | ActionKind::MsTeams => {
                &[TargetType::Specific]
            }
            ActionKind::SentryApp => &[TargetType::SentryApp],
        }
    }

    pub fn input_type(self) -> Option<InputType> {
        match self {
            ActionKind::Email | ActionKind::PagerDuty => Some(InputType::Select),
            ActionKind::Slack | ActionKind::MsTeams => Some(InputType::Text),
            ActionKind::SentryApp => None,
        }
    }

    /// True for the kind whose instances are installed apps rather than
    /// integrations.
    pub fn is_app(self) -> bool {
        matches!(self, ActionKind::SentryApp)
    }

    /// True if any registered kind uses `provider` as its integration provider.
    pub fn is_action_provider(provider: &str) -> bool {
        Self::all()
            .iter()
            .any(|k| k.integration_provider() == Some(provider))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_type_strings_match_serde() {
        for t in [
            TargetType::User,
            TargetType::Team,
            TargetType::Specific,
            TargetType::SentryApp,
        ] {
            let json = serde_json::to_string(&t).unwrap();
            assert_eq!(json, format!("\"{}\"", t.as_str()));
        }
    }

    #[test]
    fn action_kind_slugs_match_serde() {
        for k in ActionKind::all() {
            let json = serde_json::to_string(k).unwrap();
            assert_eq!(json, format!("\"{}\"", k.slug()));
        }
    }

    #[test]
    fn input_hints() {
        assert_eq!(ActionKind::Email.input_type(), Some(InputType::Select));
        assert_eq!(ActionKind::PagerDuty.input_type(), Some(InputType::Select));
        assert_eq!(ActionKind::Slack.input_type(), Some(InputType::Text));
        assert_eq!(ActionKind::MsTeams.input_type(), Some(InputType::Text));
        assert_eq!(ActionKind::SentryApp.input_type(), None);
    }

    #[test]
    fn only_integration_kinds_have_providers() {
        assert!(ActionKind::is_action_provider("slack"));
        assert!(ActionKind::is_action_provider("pagerduty"));
        assert!(ActionKind::is_action_provider("msteams"));
        assert!(!ActionKind::is_action_provider("github"));
        assert_eq!(ActionKind::Email.integration_provider(), None);
        assert_eq!(ActionKind::SentryApp.integration_provider(), None);
    }

    #[test]
    fn app_status_strings() {
        assert_eq!(AppStatus::Published.as_str(), "published");
        assert_eq!(
            AppStatus::PublishRequestInprogress.as_str(),
            "publish_request_inprogress"
        );
        let parsed: AppStatus = serde_yaml::from_str("deletion_in_progress").unwrap();
        assert_eq!(parsed, AppStatus::DeletionInProgress);
    }
}
