//! Repository for the `product_images` table.

use sqlx::PgPool;

use catalog_core::types::DbId;

use crate::models::image::{CreateImage, ProductImage};

const COLUMNS: &str =
    "id, product_id, option_id, url, alt_text, is_primary, display_order, created_at, updated_at";

/// Provides CRUD operations for product images.
pub struct ImageRepo;

impl ImageRepo {
    /// Insert a new image for a product, returning the created row.
    ///
    /// `input.option_id` is bound as-is; the standalone add-image operation
    /// validates it (existence + ownership) before calling this.
    pub async fn create(
        pool: &PgPool,
        product_id: DbId,
        input: &CreateImage,
    ) -> Result<ProductImage, sqlx::Error> {
        let query = format!(
            "INSERT INTO product_images \
                (product_id, option_id, url, alt_text, is_primary, display_order) \
             VALUES ($1, $2, $3, $4, COALESCE($5, false), COALESCE($6, 0)) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProductImage>(&query)
            .bind(product_id)
            .bind(input.option_id)
            .bind(&input.url)
            .bind(&input.alt_text)
            .bind(input.is_primary)
            .bind(input.display_order)
            .fetch_one(pool)
            .await
    }

    /// Find an image by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<ProductImage>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM product_images WHERE id = $1");
        sqlx::query_as::<_, ProductImage>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a product's images in display order.
    pub async fn list_by_product(
        pool: &PgPool,
        product_id: DbId,
    ) -> Result<Vec<ProductImage>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM product_images \
             WHERE product_id = $1 \
             ORDER BY display_order, id"
        );
        sqlx::query_as::<_, ProductImage>(&query)
            .bind(product_id)
            .fetch_all(pool)
            .await
    }
}
