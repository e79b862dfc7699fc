//! Caller identity attached by the authentication layer.

use crate::UserId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Marketplace roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Platform administrator.
    Admin,
    /// Independent worker looking for jobs.
    #[default]
    Freelancer,
    /// Company posting jobs.
    #[serde(alias = "perusahaan")]
    Company,
}

impl UserRole {
    /// Parses a role from a string.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "admin" => Some(Self::Admin),
            "freelancer" => Some(Self::Freelancer),
            "company" | "perusahaan" => Some(Self::Company),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_admin(self) -> bool {
        matches!(self, Self::Admin)
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Admin => write!(f, "admin"),
            Self::Freelancer => write!(f, "freelancer"),
            Self::Company => write!(f, "company"),
        }
    }
}

/// A verified caller. The core trusts this value and never authenticates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub user_id: UserId,
    pub email: String,
    pub role: UserRole,
}

impl Identity {
    #[must_use]
    pub fn new(user_id: UserId, email: impl Into<String>, role: UserRole) -> Self {
        Self {
            user_id,
            email: email.into(),
            role,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parse() {
        assert_eq!(UserRole::parse("Admin"), Some(UserRole::Admin));
        assert_eq!(UserRole::parse("freelancer"), Some(UserRole::Freelancer));
        assert_eq!(UserRole::parse("perusahaan"), Some(UserRole::Company));
        assert_eq!(UserRole::parse("guest"), None);
    }

    #[test]
    fn test_role_serde_accepts_legacy_alias() {
        let role: UserRole = serde_json::from_str("\"perusahaan\"").unwrap();
        assert_eq!(role, UserRole::Company);
        assert_eq!(serde_json::to_string(&role).unwrap(), "\"company\"");
    }

    #[test]
    fn test_role_display_round_trips_parse() {
        for role in [UserRole::Admin, UserRole::Freelancer, UserRole::Company] {
            assert_eq!(UserRole::parse(&role.to_string()), Some(role));
        }
        assert!(UserRole::Admin.is_admin());
        assert!(!UserRole::Company.is_admin());
    }
}
