use std::sync::Arc;

use crate::config::cors::CorsConfig;
use crate::config::database::init_db_pool;
use crate::config::jwt::JwtConfig;
use crate::config::store::StoreConfig;
use crate::store::UserStore;
use crate::store::postgres::PgUserStore;

/// Shared application state. The credential store is held as a trait
/// object so tests can substitute an in-memory double.
#[derive(Clone, Debug)]
pub struct AppState {
    pub store: Arc<dyn UserStore>,
    pub jwt_config: JwtConfig,
    pub cors_config: CorsConfig,
    pub store_config: StoreConfig,
}

pub async fn init_app_state() -> AppState {
    AppState {
        store: Arc::new(PgUserStore::new(init_db_pool().await)),
        jwt_config: JwtConfig::from_env(),
        cors_config: CorsConfig::from_env(),
        store_config: StoreConfig::from_env(),
    }
}
