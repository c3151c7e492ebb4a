//! # Chat Route Guard
//!
//! Front server for the chat application. Every page and API request passes
//! through a route guard that sends signed-out callers to `/login` and
//! signed-in callers away from the login and register pages.
//!
//! Sign-in state is read from a session shared with the auth provider, which
//! stores the signed-in user's id in a SQLite-backed session table.

mod app;
mod config;
mod error;
mod guard;
mod handlers;
mod middleware;
mod session;
mod state;

use crate::config::Config;
use crate::state::AppState;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Default: info level for most crates, debug level for our app
    // Can be overridden with RUST_LOG environment variable
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,chat_route_guard=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    tracing::info!("Configuration loaded: {:?}", config);

    let app_state = AppState::new(&config).await?;
    tracing::info!("Session store ready");

    let _cleanup = app_state.spawn_session_cleanup(&config);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Layers wrap what came before: the session layer must sit outside the guard
    let app = app::router(&config.static_dir)
        .layer(app_state.session_layer(&config))
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    let bind_addr = config.bind_address();
    tracing::info!("Starting server on {}", bind_addr);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
