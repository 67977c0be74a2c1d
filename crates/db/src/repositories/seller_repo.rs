//! Repository for the `sellers` table.

use sqlx::PgPool;

use catalog_core::types::DbId;

use crate::models::seller::{CreateSeller, Seller};

const COLUMNS: &str = "id, name, contact_email, description, created_at, updated_at";

/// Lookup operations for the externally-owned seller reference entity.
pub struct SellerRepo;

impl SellerRepo {
    /// Insert a new seller (seeding and tests).
    pub async fn create(pool: &PgPool, input: &CreateSeller) -> Result<Seller, sqlx::Error> {
        let query = format!(
            "INSERT INTO sellers (name, contact_email, description) \
             VALUES ($1, $2, $3) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Seller>(&query)
            .bind(&input.name)
            .bind(&input.contact_email)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// Find a seller by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Seller>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM sellers WHERE id = $1");
        sqlx::query_as::<_, Seller>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all sellers by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Seller>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM sellers ORDER BY name");
        sqlx::query_as::<_, Seller>(&query).fetch_all(pool).await
    }
}
