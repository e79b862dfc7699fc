//! # Jobseek Server Library
//!
//! Wiring and startup utilities for the Jobseek server binary.

pub mod app;
pub mod startup;
