//! Role-based authorization middleware.
//!
//! Composed after [`protect`](super::auth::protect) on routes that need a
//! specific role. The check is a set-membership test with no hierarchy: an
//! admin does not satisfy a user-only requirement unless `admin` is in the
//! allowed list. A request with no attached identity fails the same way as
//! one with the wrong role.

use axum::{extract::Request, middleware::Next, response::Response};

use crate::middleware::auth::CurrentUser;
use crate::modules::users::model::{User, UserRole};
use crate::utils::errors::AppError;

const PERMISSION_DENIED: &str = "You do not have permission to access this route";

/// Middleware that passes the request through only when the attached
/// identity's role is in `allowed`.
pub async fn require_roles(
    request: Request,
    next: Next,
    allowed: Vec<UserRole>,
) -> Result<Response, AppError> {
    let permitted = request
        .extensions()
        .get::<CurrentUser>()
        .is_some_and(|CurrentUser(user)| check_any_role(user, &allowed));

    if !permitted {
        return Err(AppError::forbidden(PERMISSION_DENIED));
    }

    Ok(next.run(request).await)
}

/// Admin-only guard for `middleware::from_fn`.
pub async fn require_admin(request: Request, next: Next) -> Result<Response, AppError> {
    require_roles(request, next, vec![UserRole::Admin]).await
}

/// Pure membership predicate, for in-handler checks.
pub fn check_any_role(user: &User, allowed: &[UserRole]) -> bool {
    allowed.contains(&user.role)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

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

    #[test]
    fn membership_is_exact() {
        let admin = user_with_role(UserRole::Admin);
        let user = user_with_role(UserRole::User);

        assert!(check_any_role(&admin, &[UserRole::Admin]));
        assert!(check_any_role(&user, &[UserRole::User]));
        assert!(check_any_role(&user, &[UserRole::User, UserRole::Admin]));
    }

    #[test]
    fn no_hierarchy_between_roles() {
        // Admin does not implicitly satisfy a user-only route.
        let admin = user_with_role(UserRole::Admin);
        assert!(!check_any_role(&admin, &[UserRole::User]));

        let user = user_with_role(UserRole::User);
        assert!(!check_any_role(&user, &[UserRole::Admin]));
    }

    #[test]
    fn empty_allowed_list_denies_everyone() {
        let admin = user_with_role(UserRole::Admin);
        assert!(!check_any_role(&admin, &[]));
    }
}
