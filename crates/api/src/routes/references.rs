//! Route definitions for the reference-entity listings.
//!
//! ```text
//! GET /categories    list_categories
//! GET /tags          list_tags
//! GET /sellers       list_sellers
//! GET /brands        list_brands
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::references;
use crate::state::AppState;

/// Reference-entity routes -- merged at the `/api/v1` root.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/categories", get(references::list_categories))
        .route("/tags", get(references::list_tags))
        .route("/sellers", get(references::list_sellers))
        .route("/brands", get(references::list_brands))
}
