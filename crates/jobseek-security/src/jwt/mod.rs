//! JWT verification.

mod claims;
mod token_verifier;

pub use claims::*;
pub use token_verifier::*;
