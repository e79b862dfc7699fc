//! # Jobseek Security
//!
//! Verifies the HS256 bearer tokens issued by the account service and turns
//! them into an [`Identity`](jobseek_core::Identity). Token issuance lives
//! elsewhere.

pub mod jwt;

pub use jwt::*;
