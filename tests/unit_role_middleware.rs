//! The role guard in isolation, with identities attached directly to the
//! request rather than going through the full authentication chain.

use axum::http::StatusCode;
use axum::routing::get;
use axum::{Extension, Router, middleware};
use chrono::Utc;
use http_body_util::BodyExt;
use tower::ServiceExt;
use uuid::Uuid;

use taskhive::middleware::auth::CurrentUser;
use taskhive::middleware::role::{require_admin, require_roles};
use taskhive::modules::users::model::{User, UserRole};

fn user_with_role(role: UserRole) -> User {
    User {
        id: Uuid::new_v4(),
        username: "test".to_string(),
        email: "test@example.com".to_string(),
        role,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

/// Router whose single route is gated by `require_admin`, with `identity`
/// (if any) pre-attached the way the auth middleware would attach it.
fn admin_gated_app(identity: Option<User>) -> Router {
    let router = Router::new()
        .route("/admin-only", get(|| async { "ok" }))
        .layer(middleware::from_fn(require_admin));

    // The Extension layer is added after the guard so it runs first.
    match identity {
        Some(user) => router.layer(Extension(CurrentUser(user))),
        None => router,
    }
}

async fn send(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(
            axum::http::Request::builder()
                .uri(uri)
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, body)
}

#[tokio::test]
async fn admin_identity_passes() {
    let app = admin_gated_app(Some(user_with_role(UserRole::Admin)));

    let (status, _body) = send(app, "/admin-only").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn user_identity_is_forbidden() {
    let app = admin_gated_app(Some(user_with_role(UserRole::User)));

    let (status, body) = send(app, "/admin-only").await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["status"], "Fail");
    assert_eq!(
        body["message"],
        "You do not have permission to access this route"
    );
}

#[tokio::test]
async fn missing_identity_is_forbidden() {
    let app = admin_gated_app(None);

    let (status, body) = send(app, "/admin-only").await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(
        body["message"],
        "You do not have permission to access this route"
    );
}

#[tokio::test]
async fn multi_role_list_admits_each_listed_role() {
    for role in [UserRole::User, UserRole::Admin] {
        let app = Router::new()
            .route("/either", get(|| async { "ok" }))
            .layer(middleware::from_fn(
                |req: axum::extract::Request, next: axum::middleware::Next| {
                    require_roles(req, next, vec![UserRole::User, UserRole::Admin])
                },
            ))
            .layer(Extension(CurrentUser(user_with_role(role))));

        let (status, _body) = send(app, "/either").await;
        assert_eq!(status, StatusCode::OK);
    }
}

#[tokio::test]
async fn empty_allowed_list_denies_even_admins() {
    let app = Router::new()
        .route("/nobody", get(|| async { "ok" }))
        .layer(middleware::from_fn(
            |req: axum::extract::Request, next: axum::middleware::Next| {
                require_roles(req, next, vec![])
            },
        ))
        .layer(Extension(CurrentUser(user_with_role(UserRole::Admin))));

    let (status, body) = send(app, "/nobody").await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(
        body["message"],
        "You do not have permission to access this route"
    );
}
