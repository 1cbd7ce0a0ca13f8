//! Taxon API
//!
//! REST service providing signup/login with bearer-token authentication
//! and category CRUD.
//!
//! ## Endpoints
//!
//! - `GET /` - Hello (no auth)
//! - `POST /signup` - Register a user (no auth)
//! - `POST /login` - Exchange credentials for a token (no auth)
//! - `GET /me` - Resolve the caller's identity
//! - `GET /categories` - List categories with pagination
//! - `POST /categories` - Create a category
//! - `GET /categories/{id}` - Get a category
//! - `PUT /categories/{id}` - Rename a category
//! - `DELETE /categories/{id}` - Delete a category
//!
//! ## Health Endpoints
//!
//! - `GET /health` - Liveness probe
//! - `GET /ready` - Readiness probe

mod config;
mod error;
mod handlers;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use taxon_auth_core::AuthService;
use taxon_axum::AuthGateLayer;
use taxon_db::pg::Repositories;
use tokio::signal;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::handlers::{health, ready};
use crate::state::AppState;

/// Paths served without authentication. Matched exactly, never by prefix.
const PUBLIC_PATHS: [&str; 3] = ["/", "/signup", "/login"];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive("taxon_api=debug".parse()?))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Taxon API");

    // Load configuration
    let config = Config::from_env()?;
    tracing::info!(port = config.port, "Configuration loaded");

    // Create database pool and run migrations
    let pool = taxon_db::create_pool(&config.database_url).await?;
    taxon_db::run_migrations(&pool).await?;
    tracing::info!("Database pool created");

    // Create repositories
    let repos = Repositories::new(pool.clone());

    // Create auth service; the user store is injected here and nowhere else
    let auth = AuthService::new(config.auth.clone(), Arc::new(repos.users.clone()));

    // Create application state
    let state = AppState::new(auth, repos, pool, config.clone());

    // Build HTTP router
    let app = build_router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("HTTP server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

fn build_router(state: AppState) -> Router {
    let request_timeout = state.request_timeout();

    // The gate verifies with the same token service the auth service
    // signs with
    let gate = AuthGateLayer::new(state.auth.tokens().clone(), PUBLIC_PATHS);

    let api = Router::new()
        .route("/", get(handlers::home))
        .route("/signup", axum::routing::post(handlers::signup))
        .route("/login", axum::routing::post(handlers::login))
        .route("/me", get(handlers::me))
        .route(
            "/categories",
            get(handlers::list_categories).post(handlers::insert_category),
        )
        .route(
            "/categories/{id}",
            get(handlers::get_category_by_id)
                .put(handlers::update_category)
                .delete(handlers::delete_category),
        );

    // Build middleware stack (order matters - outermost first)
    let middleware = ServiceBuilder::new()
        // Request ID propagation (outermost)
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(PropagateRequestIdLayer::x_request_id())
        // Tracing with request details
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // CORS
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        // Authentication gate
        .layer(gate)
        // Request timeout (innermost - closest to handler)
        .layer(TimeoutLayer::new(request_timeout));

    // Health routes sit outside the middleware stack: probes must answer
    // quickly and without credentials
    let health_routes = Router::new()
        .route("/health", get(health))
        .route("/ready", get(ready));

    Router::new()
        .merge(api)
        .layer(middleware)
        .merge(health_routes)
        .with_state(state)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
