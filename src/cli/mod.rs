//! Bootstrap commands that run against the store directly.
//!
//! Admin accounts cannot be created through the API; `create-admin` is the
//! only way to mint one.

use crate::modules::users::model::{NewUser, UserRole};
use crate::store::UserStore;
use crate::utils::errors::AppError;
use crate::utils::password::hash_password;

pub async fn create_admin(
    store: &dyn UserStore,
    username: &str,
    email: &str,
    password: &str,
) -> Result<(), AppError> {
    let existing = store
        .find_by_email(email)
        .await
        .map_err(AppError::database)?;

    if existing.is_some() {
        return Err(AppError::bad_request("Email already exists"));
    }

    let hashed_password = hash_password(password)?;

    store
        .create(NewUser {
            username: username.to_string(),
            email: email.to_string(),
            password: hashed_password,
            role: UserRole::Admin,
        })
        .await
        .map_err(AppError::database)?;

    Ok(())
}
