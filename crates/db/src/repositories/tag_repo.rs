//! Repository for the `tags` table.

use sqlx::PgPool;

use catalog_core::types::DbId;

use crate::models::tag::{CreateTag, Tag};

const COLUMNS: &str = "id, name, slug, created_at, updated_at";

/// Column list qualified for JOIN queries.
const JOINED_COLUMNS: &str = "t.id, t.name, t.slug, t.created_at, t.updated_at";

/// Lookup operations for the externally-owned tag reference entity.
pub struct TagRepo;

impl TagRepo {
    /// Insert a new tag (seeding and tests).
    pub async fn create(pool: &PgPool, input: &CreateTag) -> Result<Tag, sqlx::Error> {
        let query = format!("INSERT INTO tags (name, slug) VALUES ($1, $2) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Tag>(&query)
            .bind(&input.name)
            .bind(&input.slug)
            .fetch_one(pool)
            .await
    }

    /// List all tags by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Tag>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tags ORDER BY name");
        sqlx::query_as::<_, Tag>(&query).fetch_all(pool).await
    }

    /// List the tags linked to a product.
    pub async fn list_for_product(pool: &PgPool, product_id: DbId) -> Result<Vec<Tag>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} \
             FROM tags t \
             JOIN product_tags pt ON pt.tag_id = t.id \
             WHERE pt.product_id = $1 \
             ORDER BY t.name"
        );
        sqlx::query_as::<_, Tag>(&query)
            .bind(product_id)
            .fetch_all(pool)
            .await
    }
}
