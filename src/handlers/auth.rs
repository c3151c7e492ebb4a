//! Auth API endpoints backed by the shared session.
//!
//! Both live under `/api/auth`, so the route guard never redirects them.

use crate::error::AppResult;
use crate::session;
use axum::Json;
use serde_json::{json, Value};
use tower_sessions::Session;

/// GET /api/auth/session
///
/// ```json
/// { "authenticated": true, "user_id": "550e8400-e29b-41d4-a716-446655440000" }
/// ```
/// or `{ "authenticated": false }`.
pub async fn session_info(session: Session) -> AppResult<Json<Value>> {
    match session::current_user(&session).await? {
        Some(id) => Ok(Json(json!({
            "authenticated": true,
            "user_id": id
        }))),
        None => Ok(Json(json!({
            "authenticated": false
        }))),
    }
}

/// POST /api/auth/logout
pub async fn logout(session: Session) -> AppResult<Json<Value>> {
    session.delete().await?;

    Ok(Json(json!({
        "success": true,
        "message": "Logged out successfully"
    })))
}
