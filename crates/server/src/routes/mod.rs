//! HTTP route handlers for the admin API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health               - Liveness check
//! GET  /health/ready         - Readiness check (degraded => 503)
//!
//! # Products (resilient facade: mock fallback on DB failure)
//! GET    /products           - List catalog
//! POST   /products           - Create product
//! GET    /products/{id}      - Product detail
//! PUT    /products/{id}      - Partial update
//! DELETE /products/{id}      - Delete
//!
//! # Orders (read fallback only; writes surface store failures)
//! GET  /orders               - List orders
//! GET  /orders/{id}          - Order detail (by id or reference)
//! PUT  /orders/{id}/status   - Status transition
//!
//! # Dashboard
//! GET  /dashboard/stats      - Aggregates (requires admin session)
//!
//! # Auth
//! POST /auth/login           - Credential login (bootstrap admin works DB-down)
//! POST /auth/logout          - Clear session
//! GET  /auth/me              - Current session identity
//!
//! # Admin
//! POST /admin/onboard        - Create admin account (requires admin session)
//!
//! # Upload
//! POST /upload               - Forward multipart file to the media host
//! ```

pub mod admin;
pub mod auth;
pub mod dashboard;
pub mod orders;
pub mod products;
pub mod upload;

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::state::AppState;

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::list).post(products::create))
        .route(
            "/{id}",
            get(products::show)
                .put(products::update)
                .delete(products::delete),
        )
}

/// Create the order routes router.
pub fn order_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(orders::list))
        .route("/{id}", get(orders::show))
        .route("/{id}/status", put(orders::update_status))
}

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout))
        .route("/me", get(auth::me))
}

/// Create all routes for the admin API.
pub fn routes() -> Router<AppState> {
    Router::new()
        .nest("/products", product_routes())
        .nest("/orders", order_routes())
        .nest("/auth", auth_routes())
        .route("/dashboard/stats", get(dashboard::stats))
        .route("/admin/onboard", post(admin::onboard))
        .route("/upload", post(upload::upload))
}
