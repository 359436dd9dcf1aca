use alert_actions_core::resolver::{self, ActionResponse};
use axum::extract::{Path, State};
use axum::Json;

use crate::auth::RequestActor;
use crate::error::AppError;
use crate::state::AppState;

/// GET /api/0/organizations/:organization_slug/alert-rules/available-actions
///
/// Actions an alert rule trigger can perform for the organization. 404 when
/// the organization is unknown or incidents are not enabled for the actor.
pub async fn list_available_actions(
    State(app): State<AppState>,
    Path(organization_slug): Path<String>,
    RequestActor(actor): RequestActor,
) -> Result<Json<Vec<ActionResponse>>, AppError> {
    let root = app.root.clone();
    let actions = tokio::task::spawn_blocking(move || {
        resolver::list_for_organization(&root, &organization_slug, &actor)
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    Ok(Json(actions))
}
