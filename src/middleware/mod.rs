//! # Middleware Module
//!
//! Request interceptors that run before the route handlers.
//!
//! ## Our Middleware
//! - `guard`: Redirects based on the route and whether the caller is signed in

pub mod guard;
