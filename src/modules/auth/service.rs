use tracing::instrument;

use crate::config::jwt::JwtConfig;
use crate::modules::users::model::{NewUser, UserRole};
use crate::store::UserStore;
use crate::utils::errors::AppError;
use crate::utils::jwt::create_access_token;
use crate::utils::password::{hash_password, verify_password};

use super::model::{AuthResponse, LoginRequest, RegisterRequest};

pub struct AuthService;

impl AuthService {
    #[instrument(skip_all, fields(email = %dto.email))]
    pub async fn register_user(
        store: &dyn UserStore,
        dto: RegisterRequest,
        jwt_config: &JwtConfig,
    ) -> Result<AuthResponse, AppError> {
        if dto.password != dto.password_confirm {
            return Err(AppError::bad_request("Passwords do not match"));
        }

        let existing = store
            .find_by_email(&dto.email)
            .await
            .map_err(AppError::database)?;

        if existing.is_some() {
            return Err(AppError::bad_request("Email already exists"));
        }

        let hashed_password = hash_password(&dto.password)?;

        let record = store
            .create(NewUser {
                username: dto.username,
                email: dto.email,
                password: hashed_password,
                // Admins are created through the bootstrap CLI, never via
                // the public registration endpoint.
                role: UserRole::User,
            })
            .await
            .map_err(AppError::database)?;

        let token = create_access_token(record.id, &record.email, &record.role, jwt_config)?;
        let user = record.into_public();

        tracing::info!(user_id = %user.id, "user registered");

        Ok(AuthResponse { token, user })
    }

    #[instrument(skip_all, fields(email = %dto.email))]
    pub async fn login_user(
        store: &dyn UserStore,
        dto: LoginRequest,
        jwt_config: &JwtConfig,
    ) -> Result<AuthResponse, AppError> {
        let record = store
            .find_by_email(&dto.email)
            .await
            .map_err(AppError::database)?
            .ok_or_else(|| AppError::unauthorized("Invalid email or password"))?;

        let is_valid = verify_password(&dto.password, &record.password)?;

        if !is_valid {
            return Err(AppError::unauthorized("Invalid email or password"));
        }

        let token = create_access_token(record.id, &record.email, &record.role, jwt_config)?;
        let user = record.into_public();

        Ok(AuthResponse { token, user })
    }
}
