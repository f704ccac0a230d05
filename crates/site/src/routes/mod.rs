//! HTTP route handlers for the public site.
//!
//! # Route Structure
//!
//! ```text
//! GET  /            - Home page (hero, workshop gallery)
//! GET  /rental      - Rental catalog with filter sidebar
//! GET  /assistance  - Authorized-service brand grid
//! GET  /contact     - Contact details
//! GET  /health      - Health check
//! ```

pub mod assistance;
pub mod contact;
pub mod home;
pub mod rental;

use axum::{Router, routing::get};

use crate::state::AppState;

/// Create all routes for the public site.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .route("/rental", get(rental::rental))
        .route("/assistance", get(assistance::assistance))
        .route("/contact", get(contact::contact))
}
