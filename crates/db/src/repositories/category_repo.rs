//! Repository for the `categories` table.

use sqlx::PgPool;

use catalog_core::types::DbId;

use crate::models::category::{Category, CreateCategory};

const COLUMNS: &str = "id, name, slug, created_at, updated_at";

/// Column list qualified for JOIN queries.
const JOINED_COLUMNS: &str = "c.id, c.name, c.slug, c.created_at, c.updated_at";

/// Lookup operations for the externally-owned category reference entity.
pub struct CategoryRepo;

impl CategoryRepo {
    /// Insert a new category (seeding and tests).
    pub async fn create(pool: &PgPool, input: &CreateCategory) -> Result<Category, sqlx::Error> {
        let query = format!(
            "INSERT INTO categories (name, slug) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(&input.name)
            .bind(&input.slug)
            .fetch_one(pool)
            .await
    }

    /// List all categories by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories ORDER BY name");
        sqlx::query_as::<_, Category>(&query).fetch_all(pool).await
    }

    /// List the categories linked to a product.
    pub async fn list_for_product(
        pool: &PgPool,
        product_id: DbId,
    ) -> Result<Vec<Category>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} \
             FROM categories c \
             JOIN product_categories pc ON pc.category_id = c.id \
             WHERE pc.product_id = $1 \
             ORDER BY c.name"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(product_id)
            .fetch_all(pool)
            .await
    }
}
