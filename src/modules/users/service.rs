use tracing::instrument;
use uuid::Uuid;

use crate::modules::users::model::User;
use crate::store::UserStore;
use crate::utils::errors::AppError;

pub struct UserService;

impl UserService {
    #[instrument(skip_all)]
    pub async fn get_users(store: &dyn UserStore) -> Result<Vec<User>, AppError> {
        let users = store.list().await.map_err(AppError::database)?;
        Ok(users.into_iter().map(|u| u.into_public()).collect())
    }

    #[instrument(skip_all, fields(query = %query))]
    pub async fn search_users(store: &dyn UserStore, query: &str) -> Result<Vec<User>, AppError> {
        let users = store.search(query).await.map_err(AppError::database)?;
        Ok(users.into_iter().map(|u| u.into_public()).collect())
    }

    #[instrument(skip_all, fields(user_id = %user_id))]
    pub async fn delete_user(store: &dyn UserStore, user_id: Uuid) -> Result<(), AppError> {
        let deleted = store.delete(user_id).await.map_err(AppError::database)?;

        if !deleted {
            return Err(AppError::not_found("User not found"));
        }

        tracing::info!(user_id = %user_id, "user deleted");
        Ok(())
    }
}
