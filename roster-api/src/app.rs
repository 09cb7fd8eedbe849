/// Application state and router builder
///
/// This module defines the shared application state and provides
/// a function to build the Axum router with all routes and middleware.
///
/// # Example
///
/// ```no_run
/// use roster_api::{app::AppState, config::Config};
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = Config::from_env()?;
/// let state = AppState::from_config(config);
/// let app = roster_api::app::build_router(state);
/// # Ok(())
/// # }
/// ```

use crate::{config::Config, middleware::security::security_headers, routes};
use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use roster_shared::models::user::UserStore;
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Shared application state
///
/// This is cloned for each request handler via Axum's `State` extractor.
/// The user store belongs to the running server instance; the lock
/// serialises writers so ids are assigned without races.
#[derive(Clone)]
pub struct AppState {
    /// In-memory user directory
    pub users: Arc<RwLock<UserStore>>,

    /// Application configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Creates new application state around an existing store
    pub fn new(users: UserStore, config: Config) -> Self {
        Self {
            users: Arc::new(RwLock::new(users)),
            config: Arc::new(config),
        }
    }

    /// Creates application state with a store prepared per configuration
    ///
    /// The store is seeded with the demo users unless
    /// `store.seed_users` is disabled.
    pub fn from_config(config: Config) -> Self {
        let users = if config.store.seed_users {
            UserStore::seeded()
        } else {
            UserStore::new()
        };
        Self::new(users, config)
    }
}

/// Builds the complete Axum router with all routes and middleware
///
/// # Routes
///
/// ```text
/// GET  /                    landing page
/// GET  /users               user listing
/// GET  /users/new           creation form
/// POST /users/new           create, redirect to /users
/// GET  /users/:id           user details (404 if unknown)
/// GET  /users/:id/edit      edit form (404 if unknown)
/// POST /users/:id/edit      update, redirect to /users
/// POST /users/:id/delete    delete, redirect to /users
/// ```
///
/// Unmatched paths, including non-numeric ids, fall through to a plain-text
/// 404.
///
/// # Middleware Stack
///
/// Applied in order (bottom to top):
/// 1. Logging (tower-http TraceLayer)
/// 2. Security headers
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::pages::index))
        .route("/users", get(routes::users::list_users))
        .route(
            "/users/new",
            get(routes::users::new_user_form).post(routes::users::create_user),
        )
        .route("/users/:id", get(routes::users::show_user))
        .route(
            "/users/:id/edit",
            get(routes::users::edit_user_form).post(routes::users::update_user),
        )
        .route("/users/:id/delete", post(routes::users::delete_user))
        .fallback(routes::pages::not_found)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(middleware::from_fn_with_state(
            state.config.api.production,
            security_headers,
        ))
        .with_state(state)
}
