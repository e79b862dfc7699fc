//! JWT claims structure.

use jobseek_core::{Identity, JobseekError, JobseekResult, UserId, UserRole};
use serde::{Deserialize, Serialize};

/// Claims carried by an access token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Numeric user id.
    pub user_id: u64,

    /// User's email.
    pub email: String,

    /// User's role as issued, e.g. `freelancer` or `perusahaan`.
    pub role: String,

    /// Expiration timestamp.
    pub exp: i64,

    /// Issued at timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,

    /// Issuer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iss: Option<String>,

    /// Audience.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aud: Option<String>,
}

impl Claims {
    /// Converts verified claims into the caller identity.
    pub fn into_identity(self) -> JobseekResult<Identity> {
        let role = UserRole::parse(&self.role)
            .ok_or_else(|| JobseekError::InvalidToken(format!("unknown role '{}'", self.role)))?;

        Ok(Identity::new(UserId(self.user_id), self.email, role))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims(role: &str) -> Claims {
        Claims {
            user_id: 3,
            email: "a@example.com".to_string(),
            role: role.to_string(),
            exp: 0,
            iat: None,
            iss: None,
            aud: None,
        }
    }

    #[test]
    fn test_into_identity() {
        let identity = claims("perusahaan").into_identity().unwrap();
        assert_eq!(identity.user_id, UserId(3));
        assert_eq!(identity.role, UserRole::Company);
    }

    #[test]
    fn test_unknown_role_is_invalid_token() {
        let err = claims("root").into_identity().unwrap_err();
        assert_eq!(err.error_code(), "INVALID_TOKEN");
    }

    #[test]
    fn test_deserializes_minimal_payload() {
        let parsed: Claims = serde_json::from_str(
            r#"{"user_id": 9, "email": "b@example.com", "role": "admin", "exp": 1}"#,
        )
        .unwrap();
        assert_eq!(parsed.user_id, 9);
        assert!(parsed.iss.is_none());
    }
}
