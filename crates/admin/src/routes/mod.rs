//! HTTP route handlers for the back office.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                        - Redirect to dashboard
//! GET  /auth/login              - Login page
//! POST /auth/login              - Login action
//! POST /auth/logout             - Logout action
//!
//! # Dashboard (requires auth)
//! GET  /dashboard               - Products/brands listing (?tab=, ?q=)
//!
//! # Products
//! GET  /products/new            - Blank product form
//! POST /products                - Create product
//! POST /products/upload         - Image upload fragment
//! GET  /products/{id}/edit      - Prefilled product form
//! POST /products/{id}           - Update product
//! POST /products/{id}/delete    - Delete product
//!
//! # Brands
//! GET  /brands/new              - Blank brand form
//! POST /brands                  - Create brand
//! POST /brands/upload           - Logo upload fragment
//! GET  /brands/{id}/edit        - Prefilled brand form
//! POST /brands/{id}             - Update brand
//! POST /brands/{id}/delete      - Delete brand
//!
//! # Gallery
//! GET  /gallery                 - Photo listing
//! POST /gallery/upload          - Bulk upload (per-file results)
//! POST /gallery/seed            - Insert the bundled photo list
//! POST /gallery/{id}/delete     - Delete photo (+ best-effort blob)
//!
//! # Settings
//! GET  /settings                - Hero + contact form
//! POST /settings                - Upsert both documents
//!
//! # Users
//! GET  /users                   - Operator profiles
//! POST /users/create            - Create via auth sign-up
//! POST /users/{id}/delete       - Refusal (hosted console only)
//! ```

pub mod auth;
pub mod brands;
pub mod dashboard;
pub mod gallery;
pub mod products;
pub mod settings;
pub mod users;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create all routes for the back office.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(dashboard::root))
        .route("/auth/login", get(auth::login_page).post(auth::login))
        .route("/auth/logout", post(auth::logout))
        .route("/dashboard", get(dashboard::index))
        .route("/products/new", get(products::new_form))
        .route("/products", post(products::create))
        .route("/products/upload", post(products::upload_image))
        .route("/products/{id}/edit", get(products::edit_form))
        .route("/products/{id}", post(products::update))
        .route("/products/{id}/delete", post(products::delete))
        .route("/brands/new", get(brands::new_form))
        .route("/brands", post(brands::create))
        .route("/brands/upload", post(brands::upload_logo))
        .route("/brands/{id}/edit", get(brands::edit_form))
        .route("/brands/{id}", post(brands::update))
        .route("/brands/{id}/delete", post(brands::delete))
        .route("/gallery", get(gallery::index))
        .route("/gallery/upload", post(gallery::upload))
        .route("/gallery/seed", post(gallery::seed_photos))
        .route("/gallery/{id}/delete", post(gallery::delete))
        .route("/settings", get(settings::form).post(settings::save))
        .route("/users", get(users::index))
        .route("/users/create", post(users::create))
        .route("/users/{id}/delete", post(users::delete))
}
