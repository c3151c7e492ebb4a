//! Reads the sign-in state the auth provider leaves in the session.
//!
//! The provider stores the signed-in user's id under [`SESSION_USER_KEY`].
//! This crate never writes it; it only reads it and deletes the whole session
//! on logout. The id is taken as opaque JSON: a string, a number or any other
//! non-null value counts as signed in.

use crate::error::AppResult;
use serde_json::Value;
use tower_sessions::Session;

pub const SESSION_USER_KEY: &str = "user_id";

/// The signed-in user's id, if any.
pub async fn current_user(session: &Session) -> AppResult<Option<Value>> {
    let id = session.get::<Value>(SESSION_USER_KEY).await?;
    Ok(id.filter(|id| !id.is_null()))
}

pub async fn is_authenticated(session: &Session) -> AppResult<bool> {
    Ok(current_user(session).await?.is_some())
}
