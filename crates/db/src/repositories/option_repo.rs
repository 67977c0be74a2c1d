//! Repository for the `product_options` table.

use sqlx::PgPool;

use catalog_core::types::DbId;

use crate::models::option::{CreateOption, OptionWithProduct, ProductOption, UpdateOption};

const COLUMNS: &str = "id, option_group_id, name, additional_price, sku, stock, \
     display_order, created_at, updated_at";

/// Provides CRUD operations for product options.
pub struct OptionRepo;

impl OptionRepo {
    /// Insert a new option into an existing group, returning the created row.
    pub async fn create(
        pool: &PgPool,
        option_group_id: DbId,
        input: &CreateOption,
    ) -> Result<ProductOption, sqlx::Error> {
        let query = format!(
            "INSERT INTO product_options \
                (option_group_id, name, additional_price, sku, stock, display_order) \
             VALUES ($1, $2, COALESCE($3, 0), $4, COALESCE($5, 0), COALESCE($6, 0)) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProductOption>(&query)
            .bind(option_group_id)
            .bind(&input.name)
            .bind(input.additional_price)
            .bind(&input.sku)
            .bind(input.stock)
            .bind(input.display_order)
            .fetch_one(pool)
            .await
    }

    /// Find an option by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<ProductOption>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM product_options WHERE id = $1");
        sqlx::query_as::<_, ProductOption>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find an option by ID, joined with the id of the product owning it
    /// through its group. Used for the ownership check in sub-resource
    /// operations.
    pub async fn find_with_product(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<OptionWithProduct>, sqlx::Error> {
        sqlx::query_as::<_, OptionWithProduct>(
            "SELECT o.id, o.option_group_id, g.product_id, o.name, o.additional_price, \
                    o.sku, o.stock, o.display_order, o.created_at, o.updated_at \
             FROM product_options o \
             JOIN product_option_groups g ON g.id = o.option_group_id \
             WHERE o.id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// List the options of a group in display order.
    pub async fn list_by_group(
        pool: &PgPool,
        option_group_id: DbId,
    ) -> Result<Vec<ProductOption>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM product_options \
             WHERE option_group_id = $1 \
             ORDER BY display_order, id"
        );
        sqlx::query_as::<_, ProductOption>(&query)
            .bind(option_group_id)
            .fetch_all(pool)
            .await
    }

    /// Update an option. Only non-`None` fields are applied.
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateOption,
    ) -> Result<Option<ProductOption>, sqlx::Error> {
        let query = format!(
            "UPDATE product_options SET \
                name = COALESCE($2, name), \
                additional_price = COALESCE($3, additional_price), \
                sku = COALESCE($4, sku), \
                stock = COALESCE($5, stock), \
                display_order = COALESCE($6, display_order) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProductOption>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.additional_price)
            .bind(&input.sku)
            .bind(input.stock)
            .bind(input.display_order)
            .fetch_optional(pool)
            .await
    }

    /// Hard-delete an option by ID. Returns `true` if a row was removed.
    /// Images pointing at the option are detached by the FK action.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM product_options WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
