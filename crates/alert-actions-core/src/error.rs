use thiserror::Error;

#[derive(Debug, Error)]
pub enum ActionsError {
    #[error("not initialized: run 'alert-actions init'")]
    NotInitialized,

    #[error("organization not found: {0}")]
    OrganizationNotFound(String),

    #[error("feature '{flag}' is not enabled for organization '{organization}'")]
    FeatureDisabled { flag: String, organization: String },

    #[error("invalid slug '{0}': must be lowercase alphanumeric with hyphens")]
    InvalidSlug(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

impl ActionsError {
    /// Errors that must surface to callers as a plain "resource not found".
    ///
    /// A disabled capability is reported the same way as a missing
    /// organization so the response does not reveal feature gating.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ActionsError::OrganizationNotFound(_)
                | ActionsError::FeatureDisabled { .. }
                | ActionsError::InvalidSlug(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, ActionsError>;
