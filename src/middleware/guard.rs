use crate::error::AppResult;
use crate::guard::{self, matcher, Decision, RouteClass};
use crate::session;
use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;

/// Redirects signed-out callers away from protected routes and signed-in
/// callers away from the login and register pages.
///
/// Requests the matcher excludes (auth API, framework assets, anything with
/// a file extension) pass through without touching the session, as do routes
/// whose outcome doesn't depend on sign-in state. A session that can't be
/// read only fails the requests that need it.
pub async fn route_guard(session: Session, request: Request, next: Next) -> AppResult<Response> {
    let path = request.uri().path().to_owned();
    if !matcher::is_guarded(&path) || !RouteClass::of(&path).depends_on_auth() {
        return Ok(next.run(request).await);
    }

    let authenticated = session::is_authenticated(&session).await?;

    match guard::evaluate(&path, authenticated) {
        Decision::Redirect(target) => {
            tracing::debug!(%path, location = target, authenticated, "route guard redirect");
            Ok(Redirect::temporary(target).into_response())
        }
        Decision::Continue => Ok(next.run(request).await),
    }
}
