//! Handlers for product options: add, update, delete.
//!
//! Every operation loads its immediate entity by id, then verifies the
//! ownership chain leads to the product named in the request path via
//! `catalog_core::product::ensure_belongs_to`. A mismatch is a 400
//! `INVALID_REFERENCE`, distinct from 404: the entity exists but does not
//! belong here.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use catalog_core::error::CoreError;
use catalog_core::product::ensure_belongs_to;
use catalog_core::types::DbId;
use catalog_db::models::option::{CreateOption, OptionWithProduct, UpdateOption};
use catalog_db::repositories::{OptionRepo, ProductRepo};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Load an option with its owning product id and verify it belongs to the
/// product named in the request path.
async fn find_owned_option(
    pool: &sqlx::PgPool,
    product_id: DbId,
    option_id: DbId,
) -> AppResult<OptionWithProduct> {
    let option = OptionRepo::find_with_product(pool, option_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Option",
            id: option_id,
        }))?;
    ensure_belongs_to("Option", option_id, option.product_id, product_id)?;
    Ok(option)
}

// ---------------------------------------------------------------------------
// POST /products/{product_id}/option-groups/{group_id}/options
// ---------------------------------------------------------------------------

/// Add an option to an existing group of the product.
pub async fn add_option(
    State(state): State<AppState>,
    Path((product_id, group_id)): Path<(DbId, DbId)>,
    Json(input): Json<CreateOption>,
) -> AppResult<impl IntoResponse> {
    let group = ProductRepo::find_option_group(&state.pool, group_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "OptionGroup",
            id: group_id,
        }))?;
    ensure_belongs_to("OptionGroup", group_id, group.product_id, product_id)?;

    let option = OptionRepo::create(&state.pool, group_id, &input).await?;
    tracing::info!(id = option.id, product_id, group_id, "Option created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: option })))
}

// ---------------------------------------------------------------------------
// PUT /products/{product_id}/options/{option_id}
// ---------------------------------------------------------------------------

/// Partially update an option. Absent fields are left unchanged.
pub async fn update_option(
    State(state): State<AppState>,
    Path((product_id, option_id)): Path<(DbId, DbId)>,
    Json(input): Json<UpdateOption>,
) -> AppResult<impl IntoResponse> {
    find_owned_option(&state.pool, product_id, option_id).await?;

    let updated = OptionRepo::update(&state.pool, option_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Option",
            id: option_id,
        }))?;
    tracing::info!(id = updated.id, product_id, "Option updated");
    Ok(Json(DataResponse { data: updated }))
}

// ---------------------------------------------------------------------------
// DELETE /products/{product_id}/options/{option_id}
// ---------------------------------------------------------------------------

/// Hard-delete an option. Images referencing it are detached, not removed.
pub async fn delete_option(
    State(state): State<AppState>,
    Path((product_id, option_id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    find_owned_option(&state.pool, product_id, option_id).await?;

    let deleted = OptionRepo::delete(&state.pool, option_id).await?;
    if deleted {
        tracing::info!(id = option_id, product_id, "Option deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Option",
            id: option_id,
        }))
    }
}
