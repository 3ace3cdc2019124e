use axum::http::{HeaderValue, Method, Uri};
use axum::response::IntoResponse;
use axum::{Json, Router, middleware, routing::get};
use serde_json::json;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use crate::docs::ApiDoc;
use crate::logging::logging_middleware;
use crate::modules::auth::router::init_auth_router;
use crate::modules::users::router::{init_admin_users_router, init_users_router};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn init_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route(
            "/api-docs/openapi.json",
            get(|| async { Json(ApiDoc::openapi()) }),
        )
        .nest(
            "/api/v1/users",
            init_auth_router()
                .merge(init_users_router(state.clone()))
                .merge(init_admin_users_router(state.clone())),
        )
        .fallback(fallback)
        .method_not_allowed_fallback(fallback)
        .with_state(state.clone())
        .layer({
            let allowed_origins: Vec<HeaderValue> = state
                .cors_config
                .allowed_origins
                .iter()
                .filter_map(|origin| origin.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(allowed_origins)
                .allow_methods([
                    Method::GET,
                    Method::POST,
                    Method::PUT,
                    Method::PATCH,
                    Method::DELETE,
                    Method::OPTIONS,
                ])
                .allow_headers([
                    axum::http::header::AUTHORIZATION,
                    axum::http::header::CONTENT_TYPE,
                    axum::http::header::ACCEPT,
                ])
                .allow_credentials(true)
        })
        .layer(middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
        // A handler panic must still produce the uniform error shape, with
        // no internals in the body.
        .layer(CatchPanicLayer::custom(handle_panic))
}

async fn root() -> Json<serde_json::Value> {
    Json(json!({
        "message": "Welcome to the Taskhive API"
    }))
}

async fn fallback(method: Method, uri: Uri) -> AppError {
    AppError::not_found(format!("Cannot find {method} {uri} on this server"))
}

fn handle_panic(err: Box<dyn std::any::Any + Send + 'static>) -> axum::response::Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");

    tracing::error!(panic = %detail, "handler panicked");

    AppError::internal("Internal Server Error").into_response()
}
