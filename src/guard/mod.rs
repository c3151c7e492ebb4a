//! # Route Guard
//!
//! Decides, from a request path and whether the caller is signed in, if the
//! request should be sent to the login page, sent home, or let through.
//!
//! ## Route categories
//! - **Protected**: the chat pages and their API endpoints. Signed-out
//!   callers are redirected to `/login`.
//! - **Auth pages**: `/login` and `/register`. Signed-in callers are
//!   redirected to `/`.
//! - **Auth API**: `/api/auth/*`, the auth provider's own endpoints. Always
//!   reachable.
//!
//! The categories are not exclusive; [`evaluate`] resolves them in a fixed
//! order.

pub mod matcher;

/// Where signed-out callers of a protected route are sent.
pub const LOGIN_PATH: &str = "/login";

/// Where signed-in callers of an auth page are sent.
pub const HOME_PATH: &str = "/";

/// Prefixes of routes that require a signed-in caller.
/// `/` is protected too, but only as an exact match.
const PROTECTED_PREFIXES: &[&str] = &[
    "/chat",
    "/api/chat",
    "/api/vote",
    "/api/suggestions",
    "/api/history",
    "/api/document",
];

const AUTH_PAGE_PREFIXES: &[&str] = &["/login", "/register"];

const AUTH_API_PREFIX: &str = "/api/auth";

/// Outcome of guarding a single request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Send the caller to this path instead.
    Redirect(&'static str),
    /// Hand the request to the next service.
    Continue,
}

/// Categories a path falls into. Computed fresh for every request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RouteClass {
    pub protected: bool,
    pub auth_page: bool,
    pub auth_api: bool,
}

impl RouteClass {
    pub fn of(path: &str) -> Self {
        Self {
            protected: path == HOME_PATH
                || PROTECTED_PREFIXES.iter().any(|p| path.starts_with(p)),
            auth_page: AUTH_PAGE_PREFIXES.iter().any(|p| path.starts_with(p)),
            auth_api: path.starts_with(AUTH_API_PREFIX),
        }
    }

    /// Whether the decision for this class can change with sign-in state.
    /// When false the caller's session need not be read at all.
    pub fn depends_on_auth(self) -> bool {
        self.protected || self.auth_page
    }

    /// Rules, first match wins:
    /// 1. Protected, signed out and not an auth API route: redirect to `/login`.
    /// 2. Auth page and signed in: redirect to `/`.
    /// 3. Anything else continues.
    ///
    /// No protected prefix overlaps `/api/auth`, so the auth API check in rule 1
    /// never changes the outcome today.
    pub fn decide(self, is_authenticated: bool) -> Decision {
        if self.protected && !is_authenticated && !self.auth_api {
            return Decision::Redirect(LOGIN_PATH);
        }

        if self.auth_page && is_authenticated {
            return Decision::Redirect(HOME_PATH);
        }

        Decision::Continue
    }
}

/// Decide what to do with a request for `path`. See [`RouteClass::decide`].
pub fn evaluate(path: &str, is_authenticated: bool) -> Decision {
    RouteClass::of(path).decide(is_authenticated)
}
