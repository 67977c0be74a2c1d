//! Product image models (`product_images` table).

use catalog_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `product_images` table.
///
/// `option_id` is an association, not ownership: the image belongs to the
/// product and optionally points at one of its options.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProductImage {
    pub id: DbId,
    pub product_id: DbId,
    pub option_id: Option<DbId>,
    pub url: String,
    pub alt_text: Option<String>,
    pub is_primary: bool,
    pub display_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating an image, nested in product creation or standalone via
/// the add-image endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateImage {
    pub url: String,
    pub alt_text: Option<String>,
    pub is_primary: Option<bool>,
    pub display_order: Option<i32>,
    /// Optional link to an already-persisted option of the same product.
    pub option_id: Option<DbId>,
}
