//! # Jobseek REST
//!
//! HTTP surface of the messaging core, built on Axum.
//!
//! Chat and notification endpoints live under `/api/v1` behind bearer-token
//! authentication. `/api/v1/chat/ws` upgrades into a live chat session.
//! Health probes, Prometheus metrics and Swagger UI are served unauthenticated.

pub mod controllers;
pub mod extractors;
pub mod middleware;
pub mod openapi;
pub mod responses;
pub mod router;
pub mod state;

pub use router::*;
pub use state::*;
