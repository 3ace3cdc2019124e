use axum::{
    Json,
    extract::{Path, Query, State},
};
use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

use crate::middleware::auth::CurrentUser;
use crate::modules::auth::controller::ErrorResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

use super::model::{MessageResponse, SearchUsersParams, User};
use super::service::UserService;

/// Current user's profile, resolved from the bearer token
#[utoipa::path(
    get,
    path = "/api/v1/users/profile",
    responses(
        (status = 200, description = "The authenticated user", body = User),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Token subject no longer exists", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
#[instrument(skip_all)]
pub async fn get_profile(CurrentUser(user): CurrentUser) -> Json<User> {
    Json(user)
}

/// List all users (admin only)
#[utoipa::path(
    get,
    path = "/api/v1/users",
    responses(
        (status = 200, description = "All users", body = Vec<User>),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Caller is not an admin", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
#[instrument(skip_all)]
pub async fn get_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, AppError> {
    let users = UserService::get_users(state.store.as_ref()).await?;
    Ok(Json(users))
}

/// Search users by username or email (admin only)
#[utoipa::path(
    get,
    path = "/api/v1/users/search",
    params(("q" = String, Query, description = "Substring to match against username or email")),
    responses(
        (status = 200, description = "Matching users", body = Vec<User>),
        (status = 400, description = "Missing search query", body = ErrorResponse),
        (status = 403, description = "Caller is not an admin", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
#[instrument(skip_all)]
pub async fn search_users(
    State(state): State<AppState>,
    params: Result<Query<SearchUsersParams>, axum::extract::rejection::QueryRejection>,
) -> Result<Json<Vec<User>>, AppError> {
    // A missing `q` is a Query rejection, not a validation error; both
    // collapse into the same 400.
    let Ok(Query(params)) = params else {
        return Err(AppError::bad_request("Please provide a search query"));
    };

    params
        .validate()
        .map_err(|_| AppError::bad_request("Please provide a search query"))?;

    let users = UserService::search_users(state.store.as_ref(), &params.q).await?;
    Ok(Json(users))
}

/// Delete a user by id (admin only)
#[utoipa::path(
    delete,
    path = "/api/v1/users/{user_id}",
    params(("user_id" = Uuid, Path, description = "Id of the user to delete")),
    responses(
        (status = 200, description = "User deleted", body = MessageResponse),
        (status = 403, description = "Caller is not an admin", body = ErrorResponse),
        (status = 404, description = "No user with that id", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
#[instrument(skip_all)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<MessageResponse>, AppError> {
    UserService::delete_user(state.store.as_ref(), user_id).await?;

    Ok(Json(MessageResponse {
        message: "User deleted successfully".to_string(),
    }))
}
