//! # HTTP Request Handlers
//!
//! ## Submodules
//! - `health`: Health check endpoint (for monitoring)
//! - `auth`: Session status and logout under `/api/auth`
//!
//! Pages themselves are static files served by the router's fallback.

pub mod auth;
pub mod health;
