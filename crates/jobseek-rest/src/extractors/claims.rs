//! Caller identity extractor.

use crate::responses::AppError;
use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use jobseek_core::{Identity, JobseekError, JobseekResult, UserId};

/// Extractor for the authenticated caller.
///
/// The identity is placed in the request extensions by
/// [`auth_middleware`](crate::middleware::auth_middleware); a request without
/// one is rejected with 401.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub Identity);

impl std::ops::Deref for AuthenticatedUser {
    type Target = Identity;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AuthenticatedUser {
    /// Allows admins and the user themselves.
    pub fn require_self_or_admin(&self, user_id: UserId) -> JobseekResult<()> {
        if self.user_id == user_id || self.role.is_admin() {
            Ok(())
        } else {
            Err(JobseekError::forbidden("Not allowed to access another user's data"))
        }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Identity>()
            .cloned()
            .map(AuthenticatedUser)
            .ok_or_else(|| {
                AppError(JobseekError::unauthorized("Missing or invalid bearer token"))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jobseek_core::UserRole;

    #[test]
    fn test_require_self_or_admin() {
        let freelancer = AuthenticatedUser(Identity::new(UserId(1), "a@b.c", UserRole::Freelancer));
        assert!(freelancer.require_self_or_admin(UserId(1)).is_ok());
        let err = freelancer.require_self_or_admin(UserId(2)).unwrap_err();
        assert_eq!(err.status_code(), 403);

        let admin = AuthenticatedUser(Identity::new(UserId(9), "root@b.c", UserRole::Admin));
        assert!(admin.require_self_or_admin(UserId(2)).is_ok());
    }
}
