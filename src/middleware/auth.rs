//! Bearer-token authentication.
//!
//! A protected request moves through four stages: extract the bearer token
//! from the `Authorization` header, verify it, resolve the subject against
//! the credential store, and attach the resolved identity to the request.
//! Each stage has exactly one failure exit:
//!
//! | stage | failure | response |
//! |---|---|---|
//! | extract | header missing or not `Bearer <token>` | 401 "No token, authorization denied" |
//! | verify | bad signature, malformed or expired | 401 "Headers authorization failed" |
//! | resolve | subject id not in the store | 404 "CurrentUser not found" |
//! | resolve | store slower than the configured timeout | 504 |
//!
//! Verification failures share one message so the response does not reveal
//! which check rejected the token. There are no retries; the client must
//! re-authenticate.
//!
//! The chain is available two ways: as the [`protect`] layer for
//! `middleware::from_fn_with_state`, which attaches [`CurrentUser`] to the
//! request extensions, and as the [`CurrentUser`] extractor for handlers,
//! which reuses an already-attached identity or runs the chain itself.

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{HeaderMap, header, request::Parts},
    middleware::Next,
    response::Response,
};
use tokio::time::timeout;
use uuid::Uuid;

use crate::state::AppState;
use crate::modules::users::model::User;
use crate::utils::errors::AppError;
use crate::utils::jwt::verify_token;

/// The identity resolved for this request. At most one is attached per
/// request; it is always a full store record, never a partial one.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

/// Middleware layer that runs the authentication chain and attaches the
/// resolved [`CurrentUser`] to the request.
pub async fn protect(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let user = resolve_identity(request.headers(), &state).await?;
    request.extensions_mut().insert(CurrentUser(user));
    Ok(next.run(request).await)
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if let Some(current) = parts.extensions.get::<CurrentUser>() {
            return Ok(current.clone());
        }

        let user = resolve_identity(&parts.headers, state).await?;
        Ok(CurrentUser(user))
    }
}

async fn resolve_identity(headers: &HeaderMap, state: &AppState) -> Result<User, AppError> {
    let token = extract_bearer_token(headers)?;

    let claims = verify_token(token, &state.jwt_config)
        .map_err(|_| AppError::unauthorized("Headers authorization failed"))?;

    // The subject is minted from a Uuid at login; anything else means the
    // token did not come from us.
    let subject_id = Uuid::parse_str(&claims.sub)
        .map_err(|_| AppError::unauthorized("Headers authorization failed"))?;

    let lookup = timeout(
        state.store_config.lookup_timeout,
        state.store.read(subject_id),
    )
    .await
    .map_err(|_| {
        tracing::warn!(subject = %subject_id, "credential store lookup timed out");
        AppError::gateway_timeout("Credential store timed out")
    })?;

    let record = lookup
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found("CurrentUser not found"))?;

    Ok(record.into_public())
}

fn extract_bearer_token(headers: &HeaderMap) -> Result<&str, AppError> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .filter(|token| !token.trim().is_empty())
        .ok_or_else(|| AppError::unauthorized("No token, authorization denied"))
}
