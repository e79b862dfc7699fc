//! # Jobseek Core
//!
//! Core types and error definitions shared by every layer of the Jobseek
//! backend: typed identifiers, the chat and notification entities, the
//! caller identity, and the unified error type.

pub mod domain;
pub mod error;
pub mod id;
pub mod result;
pub mod validation;

pub use domain::*;
pub use error::*;
pub use id::*;
pub use result::*;
pub use validation::*;
