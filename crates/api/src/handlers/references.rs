//! Read-only listings of the reference entities the product aggregate
//! links to. These are externally owned; the API exposes no mutation
//! surface for them.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use catalog_db::repositories::{BrandRepo, CategoryRepo, SellerRepo, TagRepo};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /categories
pub async fn list_categories(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let items = CategoryRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: items }))
}

/// GET /tags
pub async fn list_tags(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let items = TagRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: items }))
}

/// GET /sellers
pub async fn list_sellers(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let items = SellerRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: items }))
}

/// GET /brands
pub async fn list_brands(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let items = BrandRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: items }))
}
