//! Handler for adding a product image.
//!
//! Unlike creation-time graph assembly (where an unresolved image option id
//! degrades to a NULL link), the standalone operation is strict: the option
//! must exist and belong to the product in the request path.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use catalog_core::error::CoreError;
use catalog_core::product::ensure_belongs_to;
use catalog_core::types::DbId;
use catalog_db::models::image::CreateImage;
use catalog_db::repositories::{ImageRepo, OptionRepo};

use crate::error::{AppError, AppResult};
use crate::handlers::products::ensure_product_exists;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// POST /products/{product_id}/images
// ---------------------------------------------------------------------------

/// Add an image to a product, optionally linked to one of its options.
pub async fn add_image(
    State(state): State<AppState>,
    Path(product_id): Path<DbId>,
    Json(input): Json<CreateImage>,
) -> AppResult<impl IntoResponse> {
    ensure_product_exists(&state.pool, product_id).await?;

    if let Some(option_id) = input.option_id {
        let option = OptionRepo::find_with_product(&state.pool, option_id)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound {
                entity: "Option",
                id: option_id,
            }))?;
        ensure_belongs_to("Option", option_id, option.product_id, product_id)?;
    }

    let image = ImageRepo::create(&state.pool, product_id, &input).await?;
    tracing::info!(id = image.id, product_id, "Image created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: image })))
}
