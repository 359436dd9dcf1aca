use alert_actions_core::data::Actor;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::error::AppError;

/// Header carrying the authenticated actor, set by the fronting auth layer.
pub const ACTOR_HEADER: &str = "x-actor-id";

/// Extractor for the requesting actor. Missing or blank header → 401.
pub struct RequestActor(pub Actor);

impl<S> FromRequestParts<S> for RequestActor
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let id = parts
            .headers
            .get(ACTOR_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .ok_or_else(|| AppError::unauthorized("authentication required"))?;
        Ok(RequestActor(Actor::new(id)))
    }
}
