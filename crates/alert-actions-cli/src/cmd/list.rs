use crate::output::{print_json, print_table};
use alert_actions_core::{data::Actor, resolver};
use anyhow::Context;
use std::path::Path;

pub fn run(root: &Path, organization: &str, actor: &str, json: bool) -> anyhow::Result<()> {
    let actor = Actor::new(actor);
    let actions = resolver::list_for_organization(root, organization, &actor)
        .with_context(|| format!("failed to list actions for '{organization}'"))?;

    if json {
        return print_json(&actions);
    }

    if actions.is_empty() {
        println!("No actions available.");
        return Ok(());
    }

    let rows = actions
        .iter()
        .map(|a| {
            let integration = match (&a.integration_name, a.integration_id) {
                (Some(name), Some(id)) => format!("{name} (#{id})"),
                _ => "-".to_string(),
            };
            let options = a
                .options
                .as_ref()
                .map(|opts| {
                    opts.iter()
                        .map(|o| o.label.as_str())
                        .collect::<Vec<_>>()
                        .join(", ")
                })
                .unwrap_or_else(|| "-".to_string());
            vec![
                a.action_type.clone(),
                a.allowed_target_types.join(","),
                a.input_type
                    .map(|t| t.to_string())
                    .unwrap_or_else(|| "-".to_string()),
                integration,
                a.status.clone().unwrap_or_else(|| "-".to_string()),
                options,
            ]
        })
        .collect();

    print_table(
        &["TYPE", "TARGETS", "INPUT", "INTEGRATION", "STATUS", "OPTIONS"],
        rows,
    );
    Ok(())
}
