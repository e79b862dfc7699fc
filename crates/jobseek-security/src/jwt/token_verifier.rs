//! Bearer token verification.

use super::Claims;
use jobseek_config::SecurityConfig;
use jobseek_core::{Identity, JobseekError, JobseekResult};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use tracing::{debug, warn};

/// Verifies HS256 access tokens.
#[derive(Clone)]
pub struct TokenVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenVerifier {
    /// Creates a verifier for tokens signed with the configured secret.
    #[must_use]
    pub fn new(config: &SecurityConfig) -> Self {
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = config.leeway_secs;
        validation.validate_exp = true;
        if let Some(issuer) = &config.jwt_issuer {
            validation.set_issuer(&[issuer]);
        }
        match &config.jwt_audience {
            Some(audience) => validation.set_audience(&[audience]),
            None => validation.validate_aud = false,
        }

        Self {
            decoding_key,
            validation,
        }
    }

    /// Decodes and validates a token, returning its claims.
    pub fn decode_claims(&self, token: &str) -> JobseekResult<Claims> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                debug!("Token validation failed: {}", e);
                match e.kind() {
                    ErrorKind::ExpiredSignature => JobseekError::TokenExpired,
                    ErrorKind::InvalidIssuer => {
                        JobseekError::InvalidToken("Invalid issuer".to_string())
                    }
                    ErrorKind::InvalidAudience => {
                        JobseekError::InvalidToken("Invalid audience".to_string())
                    }
                    ErrorKind::InvalidSignature => {
                        JobseekError::InvalidToken("Invalid signature".to_string())
                    }
                    _ => JobseekError::InvalidToken(e.to_string()),
                }
            })?;

        Ok(token_data.claims)
    }

    /// Verifies a token and returns the caller identity it carries.
    pub fn verify(&self, token: &str) -> JobseekResult<Identity> {
        self.decode_claims(token)?.into_identity().map_err(|e| {
            warn!("Token carries unusable claims: {}", e);
            e
        })
    }
}

impl std::fmt::Debug for TokenVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenVerifier")
            .field("iss", &self.validation.iss)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use jobseek_core::{UserId, UserRole};
    use jsonwebtoken::{encode, EncodingKey, Header};

    const SECRET: &str = "test-secret-key-for-testing-only";

    fn config() -> SecurityConfig {
        SecurityConfig {
            jwt_secret: SECRET.to_string(),
            leeway_secs: 0,
            ..Default::default()
        }
    }

    fn sign(claims: &Claims, secret: &str) -> String {
        encode(
            &Header::default(),
            claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    fn claims(expires_in: Duration) -> Claims {
        Claims {
            user_id: 42,
            email: "dewi@example.com".to_string(),
            role: "freelancer".to_string(),
            exp: (Utc::now() + expires_in).timestamp(),
            iat: Some(Utc::now().timestamp()),
            iss: None,
            aud: None,
        }
    }

    #[test]
    fn test_verify_valid_token() {
        let verifier = TokenVerifier::new(&config());
        let token = sign(&claims(Duration::hours(1)), SECRET);

        let identity = verifier.verify(&token).unwrap();
        assert_eq!(identity.user_id, UserId(42));
        assert_eq!(identity.email, "dewi@example.com");
        assert_eq!(identity.role, UserRole::Freelancer);
    }

    #[test]
    fn test_expired_token() {
        let verifier = TokenVerifier::new(&config());
        let token = sign(&claims(Duration::hours(-1)), SECRET);

        assert!(matches!(
            verifier.verify(&token),
            Err(JobseekError::TokenExpired)
        ));
    }

    #[test]
    fn test_wrong_secret() {
        let verifier = TokenVerifier::new(&config());
        let token = sign(&claims(Duration::hours(1)), "some-other-secret");

        let err = verifier.verify(&token).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_TOKEN");
    }

    #[test]
    fn test_garbage_token() {
        let verifier = TokenVerifier::new(&config());
        assert!(verifier.verify("not.a.token").is_err());
    }

    #[test]
    fn test_issuer_checked_when_configured() {
        let verifier = TokenVerifier::new(&SecurityConfig {
            jwt_issuer: Some("jobseek-auth".to_string()),
            ..config()
        });

        let mut wrong = claims(Duration::hours(1));
        wrong.iss = Some("someone-else".to_string());
        assert!(verifier.verify(&sign(&wrong, SECRET)).is_err());

        let mut right = claims(Duration::hours(1));
        right.iss = Some("jobseek-auth".to_string());
        assert!(verifier.verify(&sign(&right, SECRET)).is_ok());
    }
}
