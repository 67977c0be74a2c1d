//! Handlers for the product aggregate: create, get, update, soft delete,
//! and listing.
//!
//! Orchestration is resolve-then-persist: foreign references named by id
//! (seller, brand) are resolved up front and fail with 404 before any row
//! is written; the aggregate write itself runs in one transaction inside
//! the repository.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use serde::Deserialize;

use catalog_core::error::CoreError;
use catalog_core::product;
use catalog_core::types::DbId;
use catalog_db::models::product::{CreateProduct, Product, ProductAggregate, UpdateProduct};
use catalog_db::repositories::{BrandRepo, ProductRepo, SellerRepo};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Query parameters
// ---------------------------------------------------------------------------

/// Query parameters for the product listing endpoint.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub status: Option<String>,
    pub page: Option<i32>,
    pub per_page: Option<i32>,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Verify that a product exists, returning the root row.
pub async fn ensure_product_exists(pool: &sqlx::PgPool, id: DbId) -> AppResult<Product> {
    ProductRepo::find_by_id(pool, id).await?.ok_or_else(|| {
        AppError::Core(CoreError::NotFound {
            entity: "Product",
            id,
        })
    })
}

/// Resolve the seller/brand references named in a request, failing with 404
/// if either id has no matching row. `None` ids are skipped.
async fn ensure_references_exist(
    pool: &sqlx::PgPool,
    seller_id: Option<DbId>,
    brand_id: Option<DbId>,
) -> AppResult<()> {
    if let Some(id) = seller_id {
        SellerRepo::find_by_id(pool, id)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound {
                entity: "Seller",
                id,
            }))?;
    }
    if let Some(id) = brand_id {
        BrandRepo::find_by_id(pool, id)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound { entity: "Brand", id }))?;
    }
    Ok(())
}

/// Load the full aggregate view for a product that is known to exist.
async fn load_aggregate(pool: &sqlx::PgPool, id: DbId) -> AppResult<ProductAggregate> {
    ProductRepo::find_aggregate(pool, id).await?.ok_or_else(|| {
        AppError::InternalError(format!("Product {id} disappeared during request"))
    })
}

// ---------------------------------------------------------------------------
// POST /products
// ---------------------------------------------------------------------------

/// Create a product with its full graph.
///
/// Category/tag ids that do not resolve are silently dropped; an image's
/// `option_id` is kept only when it resolves within this product. Seller
/// and brand ids are strict: a missing row fails before anything persists.
pub async fn create_product(
    State(state): State<AppState>,
    Json(input): Json<CreateProduct>,
) -> AppResult<impl IntoResponse> {
    product::validate_name(&input.name)?;
    if let Some(ref status) = input.status {
        product::validate_status(status)?;
    }
    ensure_references_exist(&state.pool, input.seller_id, input.brand_id).await?;

    let created = ProductRepo::create(&state.pool, &input).await?;
    tracing::info!(id = created.id, slug = %created.slug, "Product created");

    let aggregate = load_aggregate(&state.pool, created.id).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: aggregate })))
}

// ---------------------------------------------------------------------------
// GET /products
// ---------------------------------------------------------------------------

/// List products, optionally filtered by status.
pub async fn list_products(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<impl IntoResponse> {
    if let Some(ref status) = params.status {
        product::validate_status(status)?;
    }
    let per_page = params
        .per_page
        .unwrap_or(product::DEFAULT_PAGE_SIZE)
        .min(product::MAX_PAGE_SIZE);
    let page = params.page.unwrap_or(1).max(1);
    let offset = (page - 1) * per_page;

    let items =
        ProductRepo::list(&state.pool, params.status.as_deref(), per_page, offset).await?;
    tracing::debug!(count = items.len(), "Listed products");
    Ok(Json(DataResponse { data: items }))
}

// ---------------------------------------------------------------------------
// GET /products/{id}
// ---------------------------------------------------------------------------

/// Get a product with its full graph. Soft-deleted products are returned,
/// not hidden.
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let aggregate = ProductRepo::find_aggregate(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Product",
            id,
        }))?;
    Ok(Json(DataResponse { data: aggregate }))
}

// ---------------------------------------------------------------------------
// PUT /products/{id}
// ---------------------------------------------------------------------------

/// Partially update a product and its graph.
///
/// Absent fields are left unchanged. A present category/tag list (even
/// empty) replaces the whole association set. A present detail/price
/// payload merges into the existing sub-entity, creating it if missing.
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProduct>,
) -> AppResult<impl IntoResponse> {
    ensure_product_exists(&state.pool, id).await?;

    if let Some(ref name) = input.name {
        product::validate_name(name)?;
    }
    if let Some(ref status) = input.status {
        product::validate_status(status)?;
    }
    ensure_references_exist(&state.pool, input.seller_id, input.brand_id).await?;

    ProductRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Product",
            id,
        }))?;
    tracing::info!(id, "Product updated");

    let aggregate = load_aggregate(&state.pool, id).await?;
    Ok(Json(DataResponse { data: aggregate }))
}

// ---------------------------------------------------------------------------
// DELETE /products/{id}
// ---------------------------------------------------------------------------

/// Soft-delete a product (status becomes `DELETED`; the row stays readable).
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = ProductRepo::soft_delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(id, "Product soft-deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Product",
            id,
        }))
    }
}
