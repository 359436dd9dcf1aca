//! Process-wide catalog of action types an alert rule trigger can use.
//!
//! Built once on first access and never mutated afterwards. Entries are kept
//! sorted by slug so iteration order does not depend on declaration order.

use crate::types::{ActionKind, InputType, TargetType};
use serde::Serialize;
use std::sync::OnceLock;

/// Static registration metadata for one action type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionTypeDescriptor {
    pub kind: ActionKind,
    pub slug: &'static str,
    pub supported_target_types: &'static [TargetType],
    pub integration_provider: Option<&'static str>,
}

impl ActionTypeDescriptor {
    fn for_kind(kind: ActionKind) -> Self {
        Self {
            kind,
            slug: kind.slug(),
            supported_target_types: kind.supported_target_types(),
            integration_provider: kind.integration_provider(),
        }
    }

    pub fn input_type(&self) -> Option<InputType> {
        self.kind.input_type()
    }
}

static REGISTRY: OnceLock<Vec<ActionTypeDescriptor>> = OnceLock::new();

/// All registered action types, sorted by slug.
pub fn registered_types() -> &'static [ActionTypeDescriptor] {
    REGISTRY.get_or_init(|| {
        let mut types: Vec<ActionTypeDescriptor> = ActionKind::all()
            .iter()
            .copied()
            .map(ActionTypeDescriptor::for_kind)
            .collect();
        types.sort_by(|a, b| a.slug.cmp(b.slug));
        types
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_is_sorted_by_slug() {
        let slugs: Vec<&str> = registered_types().iter().map(|t| t.slug).collect();
        assert_eq!(
            slugs,
            vec!["email", "msteams", "pagerduty", "sentry_app", "slack"]
        );
    }

    #[test]
    fn registry_is_initialized_once() {
        let first = registered_types().as_ptr();
        let second = registered_types().as_ptr();
        assert_eq!(first, second);
    }

    #[test]
    fn descriptors_mirror_their_kind() {
        for t in registered_types() {
            assert_eq!(t.slug, t.kind.slug());
            assert_eq!(t.integration_provider, t.kind.integration_provider());
            assert_eq!(t.supported_target_types, t.kind.supported_target_types());
        }
        let slack = &registered_types()[4];
        assert_eq!(slack.kind, ActionKind::Slack);
        assert_eq!(slack.supported_target_types, &[TargetType::Specific]);
    }
}
