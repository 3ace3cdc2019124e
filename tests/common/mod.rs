use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::body::Body;
use axum::http::Request;
use chrono::Utc;
use http_body_util::BodyExt;
use jsonwebtoken::{EncodingKey, Header, encode};
use uuid::Uuid;

use taskhive::config::cors::CorsConfig;
use taskhive::config::jwt::JwtConfig;
use taskhive::config::store::StoreConfig;
use taskhive::modules::auth::model::Claims;
use taskhive::modules::users::model::{UserRecord, UserRole};
use taskhive::router::init_router;
use taskhive::state::AppState;
use taskhive::store::memory::MemoryUserStore;
use taskhive::utils::jwt::create_access_token;
use taskhive::utils::password::hash_password;

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "test_secret_key_for_testing_purposes".to_string(),
        access_token_expiry: 3600,
    }
}

#[allow(dead_code)]
pub fn test_state(store: Arc<MemoryUserStore>) -> AppState {
    AppState {
        store,
        jwt_config: test_jwt_config(),
        cors_config: CorsConfig {
            allowed_origins: vec!["http://localhost:5173".to_string()],
        },
        store_config: StoreConfig {
            lookup_timeout: Duration::from_secs(5),
        },
    }
}

/// App wired against a fresh in-memory store. The store handle is returned
/// so tests can seed and mutate records behind the API's back.
pub fn setup_test_app() -> (Router, Arc<MemoryUserStore>) {
    let store = Arc::new(MemoryUserStore::new());
    let app = init_router(test_state(store.clone()));
    (app, store)
}

pub async fn seed_user(
    store: &MemoryUserStore,
    username: &str,
    email: &str,
    password: &str,
    role: UserRole,
) -> UserRecord {
    let now = Utc::now();
    let record = UserRecord {
        id: Uuid::new_v4(),
        username: username.to_string(),
        email: email.to_string(),
        password: hash_password(password).unwrap(),
        role,
        created_at: now,
        updated_at: now,
    };
    store.insert(record.clone()).await;
    record
}

#[allow(dead_code)]
pub fn mint_token(user: &UserRecord) -> String {
    create_access_token(user.id, &user.email, &user.role, &test_jwt_config()).unwrap()
}

/// A structurally valid token whose expiry is an hour in the past.
#[allow(dead_code)]
pub fn mint_expired_token(user: &UserRecord) -> String {
    let now = Utc::now().timestamp() as usize;
    let claims = Claims {
        sub: user.id.to_string(),
        email: user.email.clone(),
        role: user.role.clone(),
        exp: now - 3600,
        iat: now - 7200,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(test_jwt_config().secret.as_bytes()),
    )
    .unwrap()
}

/// A token signed with a key the server does not know.
#[allow(dead_code)]
pub fn mint_foreign_token(user: &UserRecord) -> String {
    let now = Utc::now().timestamp() as usize;
    let claims = Claims {
        sub: user.id.to_string(),
        email: user.email.clone(),
        role: user.role.clone(),
        exp: now + 3600,
        iat: now,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(b"some-other-secret"),
    )
    .unwrap()
}

#[allow(dead_code)]
pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn authed_get(uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .header("Authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap()
}

#[allow(dead_code)]
pub fn authed_delete(uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .header("Authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap()
}

#[allow(dead_code)]
pub fn post_json(uri: &str, body: &serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(body).unwrap()))
        .unwrap()
}

pub async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[allow(dead_code)]
pub fn generate_unique_email() -> String {
    format!("test-{}@test.com", Uuid::new_v4())
}
