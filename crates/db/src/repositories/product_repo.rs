//! Repository for the `products` table and its owned graph.
//!
//! Aggregate writes (create, update) run inside a single transaction so a
//! failure anywhere in the graph rolls the whole operation back.

use sqlx::{PgPool, Postgres, Transaction};

use catalog_core::product::STATUS_DELETED;
use catalog_core::types::DbId;

use crate::models::option::{OptionGroupWithOptions, ProductOptionGroup};
use crate::models::product::{
    CreateProduct, Product, ProductAggregate, ProductDetail, ProductDetailInput, ProductPrice,
    ProductPriceInput, UpdateProduct,
};
use crate::repositories::{BrandRepo, CategoryRepo, ImageRepo, OptionRepo, SellerRepo, TagRepo};

const COLUMNS: &str = "id, name, slug, short_description, full_description, status, \
     seller_id, brand_id, created_at, updated_at";

const DETAIL_COLUMNS: &str = "id, product_id, weight_grams, width_mm, height_mm, depth_mm, \
     materials, country_of_origin, warranty_info, care_instructions, created_at, updated_at";

const PRICE_COLUMNS: &str = "id, product_id, base_price, sale_price, cost_price, \
     currency_code, tax_rate, created_at, updated_at";

const OPTION_GROUP_COLUMNS: &str = "id, product_id, name, display_order, created_at, updated_at";

/// Provides CRUD operations for the product aggregate.
pub struct ProductRepo;

impl ProductRepo {
    /// Insert a new product with its full graph, returning the root row.
    ///
    /// Category/tag ids that do not resolve are silently dropped. An image's
    /// `option_id` is kept only when it resolves to an option of this
    /// product; otherwise the image is stored without an option link.
    pub async fn create(pool: &PgPool, input: &CreateProduct) -> Result<Product, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let insert_query = format!(
            "INSERT INTO products \
                (name, slug, short_description, full_description, status, seller_id, brand_id) \
             VALUES ($1, $2, $3, $4, COALESCE($5, 'ACTIVE'), $6, $7) \
             RETURNING {COLUMNS}"
        );
        let product = sqlx::query_as::<_, Product>(&insert_query)
            .bind(&input.name)
            .bind(&input.slug)
            .bind(&input.short_description)
            .bind(&input.full_description)
            .bind(&input.status)
            .bind(input.seller_id)
            .bind(input.brand_id)
            .fetch_one(&mut *tx)
            .await?;

        if let Some(ref detail) = input.detail {
            Self::upsert_detail_inner(&mut tx, product.id, detail).await?;
        }
        if let Some(ref price) = input.price {
            Self::upsert_price_inner(&mut tx, product.id, price).await?;
        }

        if !input.category_ids.is_empty() {
            Self::set_categories_inner(&mut tx, product.id, &input.category_ids).await?;
        }
        if !input.tag_ids.is_empty() {
            Self::set_tags_inner(&mut tx, product.id, &input.tag_ids).await?;
        }

        for group_input in &input.option_groups {
            let group_query = format!(
                "INSERT INTO product_option_groups (product_id, name, display_order) \
                 VALUES ($1, $2, COALESCE($3, 0)) \
                 RETURNING {OPTION_GROUP_COLUMNS}"
            );
            let group = sqlx::query_as::<_, ProductOptionGroup>(&group_query)
                .bind(product.id)
                .bind(&group_input.name)
                .bind(group_input.display_order)
                .fetch_one(&mut *tx)
                .await?;

            for option_input in &group_input.options {
                sqlx::query(
                    "INSERT INTO product_options \
                        (option_group_id, name, additional_price, sku, stock, display_order) \
                     VALUES ($1, $2, COALESCE($3, 0), $4, COALESCE($5, 0), COALESCE($6, 0))",
                )
                .bind(group.id)
                .bind(&option_input.name)
                .bind(option_input.additional_price)
                .bind(&option_input.sku)
                .bind(option_input.stock)
                .bind(option_input.display_order)
                .execute(&mut *tx)
                .await?;
            }
        }

        for image_input in &input.images {
            // Keep the option link only when it resolves within this product.
            let option_id = match image_input.option_id {
                Some(oid) => sqlx::query_scalar::<_, DbId>(
                    "SELECT o.id FROM product_options o \
                     JOIN product_option_groups g ON g.id = o.option_group_id \
                     WHERE o.id = $1 AND g.product_id = $2",
                )
                .bind(oid)
                .bind(product.id)
                .fetch_optional(&mut *tx)
                .await?,
                None => None,
            };

            sqlx::query(
                "INSERT INTO product_images \
                    (product_id, option_id, url, alt_text, is_primary, display_order) \
                 VALUES ($1, $2, $3, $4, COALESCE($5, false), COALESCE($6, 0))",
            )
            .bind(product.id)
            .bind(option_id)
            .bind(&image_input.url)
            .bind(&image_input.alt_text)
            .bind(image_input.is_primary)
            .bind(image_input.display_order)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(product)
    }

    /// Find a product by ID. Soft-deleted rows are returned like any other.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Product>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products WHERE id = $1");
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a product by ID with its full graph.
    pub async fn find_aggregate(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ProductAggregate>, sqlx::Error> {
        let Some(product) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };

        let detail_query = format!("SELECT {DETAIL_COLUMNS} FROM product_details WHERE product_id = $1");
        let detail = sqlx::query_as::<_, ProductDetail>(&detail_query)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        let price_query = format!("SELECT {PRICE_COLUMNS} FROM product_prices WHERE product_id = $1");
        let price = sqlx::query_as::<_, ProductPrice>(&price_query)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        let seller = match product.seller_id {
            Some(seller_id) => SellerRepo::find_by_id(pool, seller_id).await?,
            None => None,
        };
        let brand = match product.brand_id {
            Some(brand_id) => BrandRepo::find_by_id(pool, brand_id).await?,
            None => None,
        };

        let categories = CategoryRepo::list_for_product(pool, id).await?;
        let tags = TagRepo::list_for_product(pool, id).await?;

        let groups = Self::list_option_groups(pool, id).await?;
        let mut option_groups = Vec::with_capacity(groups.len());
        for group in groups {
            let options = OptionRepo::list_by_group(pool, group.id).await?;
            option_groups.push(OptionGroupWithOptions { group, options });
        }

        let images = ImageRepo::list_by_product(pool, id).await?;

        Ok(Some(ProductAggregate {
            product,
            detail,
            price,
            seller,
            brand,
            categories,
            tags,
            option_groups,
            images,
        }))
    }

    /// List products, optionally filtered by status, newest first.
    pub async fn list(
        pool: &PgPool,
        status: Option<&str>,
        limit: i32,
        offset: i32,
    ) -> Result<Vec<Product>, sqlx::Error> {
        let query = if status.is_some() {
            format!(
                "SELECT {COLUMNS} FROM products WHERE status = $3 \
                 ORDER BY created_at DESC, id DESC \
                 LIMIT $1 OFFSET $2"
            )
        } else {
            format!(
                "SELECT {COLUMNS} FROM products \
                 ORDER BY created_at DESC, id DESC \
                 LIMIT $1 OFFSET $2"
            )
        };
        let mut q = sqlx::query_as::<_, Product>(&query).bind(limit).bind(offset);
        if let Some(status) = status {
            q = q.bind(status);
        }
        q.fetch_all(pool).await
    }

    /// Update a product and its graph. Only non-`None` fields are applied;
    /// a present category/tag list replaces the whole association set.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProduct,
    ) -> Result<Option<Product>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let update_query = format!(
            "UPDATE products SET \
                name = COALESCE($2, name), \
                slug = COALESCE($3, slug), \
                short_description = COALESCE($4, short_description), \
                full_description = COALESCE($5, full_description), \
                status = COALESCE($6, status), \
                seller_id = COALESCE($7, seller_id), \
                brand_id = COALESCE($8, brand_id) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        let product = sqlx::query_as::<_, Product>(&update_query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.slug)
            .bind(&input.short_description)
            .bind(&input.full_description)
            .bind(&input.status)
            .bind(input.seller_id)
            .bind(input.brand_id)
            .fetch_optional(&mut *tx)
            .await?;

        let Some(product) = product else {
            return Ok(None);
        };

        if let Some(ref detail) = input.detail {
            Self::upsert_detail_inner(&mut tx, id, detail).await?;
        }
        if let Some(ref price) = input.price {
            Self::upsert_price_inner(&mut tx, id, price).await?;
        }

        if let Some(ref category_ids) = input.category_ids {
            Self::set_categories_inner(&mut tx, id, category_ids).await?;
        }
        if let Some(ref tag_ids) = input.tag_ids {
            Self::set_tags_inner(&mut tx, id, tag_ids).await?;
        }

        tx.commit().await?;
        Ok(Some(product))
    }

    /// Set the product status. Returns `true` if a row was updated.
    ///
    /// Deletion through the API is `set_status(.., STATUS_DELETED)`; there
    /// is no physical delete path.
    pub async fn set_status(pool: &PgPool, id: DbId, status: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE products SET status = $2 WHERE id = $1")
            .bind(id)
            .bind(status)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Soft-delete a product. Returns `true` if a row was updated.
    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        Self::set_status(pool, id, STATUS_DELETED).await
    }

    /// List a product's option groups in display order.
    pub async fn list_option_groups(
        pool: &PgPool,
        product_id: DbId,
    ) -> Result<Vec<ProductOptionGroup>, sqlx::Error> {
        let query = format!(
            "SELECT {OPTION_GROUP_COLUMNS} FROM product_option_groups \
             WHERE product_id = $1 \
             ORDER BY display_order, id"
        );
        sqlx::query_as::<_, ProductOptionGroup>(&query)
            .bind(product_id)
            .fetch_all(pool)
            .await
    }

    /// Find an option group by ID.
    pub async fn find_option_group(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ProductOptionGroup>, sqlx::Error> {
        let query = format!("SELECT {OPTION_GROUP_COLUMNS} FROM product_option_groups WHERE id = $1");
        sqlx::query_as::<_, ProductOptionGroup>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    // -----------------------------------------------------------------------
    // Internal helpers
    // -----------------------------------------------------------------------

    /// Insert or merge the 1:1 detail row within an existing transaction.
    /// Absent input fields keep the stored value.
    async fn upsert_detail_inner(
        tx: &mut Transaction<'_, Postgres>,
        product_id: DbId,
        input: &ProductDetailInput,
    ) -> Result<ProductDetail, sqlx::Error> {
        let query = format!(
            "INSERT INTO product_details \
                (product_id, weight_grams, width_mm, height_mm, depth_mm, \
                 materials, country_of_origin, warranty_info, care_instructions) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
             ON CONFLICT (product_id) DO UPDATE SET \
                weight_grams = COALESCE($2, product_details.weight_grams), \
                width_mm = COALESCE($3, product_details.width_mm), \
                height_mm = COALESCE($4, product_details.height_mm), \
                depth_mm = COALESCE($5, product_details.depth_mm), \
                materials = COALESCE($6, product_details.materials), \
                country_of_origin = COALESCE($7, product_details.country_of_origin), \
                warranty_info = COALESCE($8, product_details.warranty_info), \
                care_instructions = COALESCE($9, product_details.care_instructions) \
             RETURNING {DETAIL_COLUMNS}"
        );
        sqlx::query_as::<_, ProductDetail>(&query)
            .bind(product_id)
            .bind(input.weight_grams)
            .bind(input.width_mm)
            .bind(input.height_mm)
            .bind(input.depth_mm)
            .bind(&input.materials)
            .bind(&input.country_of_origin)
            .bind(&input.warranty_info)
            .bind(&input.care_instructions)
            .fetch_one(&mut **tx)
            .await
    }

    /// Insert or merge the 1:1 price row within an existing transaction.
    async fn upsert_price_inner(
        tx: &mut Transaction<'_, Postgres>,
        product_id: DbId,
        input: &ProductPriceInput,
    ) -> Result<ProductPrice, sqlx::Error> {
        let query = format!(
            "INSERT INTO product_prices \
                (product_id, base_price, sale_price, cost_price, currency_code, tax_rate) \
             VALUES ($1, COALESCE($2, 0), $3, $4, COALESCE($5, 'USD'), $6) \
             ON CONFLICT (product_id) DO UPDATE SET \
                base_price = COALESCE($2, product_prices.base_price), \
                sale_price = COALESCE($3, product_prices.sale_price), \
                cost_price = COALESCE($4, product_prices.cost_price), \
                currency_code = COALESCE($5, product_prices.currency_code), \
                tax_rate = COALESCE($6, product_prices.tax_rate) \
             RETURNING {PRICE_COLUMNS}"
        );
        sqlx::query_as::<_, ProductPrice>(&query)
            .bind(product_id)
            .bind(input.base_price)
            .bind(input.sale_price)
            .bind(input.cost_price)
            .bind(&input.currency_code)
            .bind(input.tax_rate)
            .fetch_one(&mut **tx)
            .await
    }

    /// Replace category associations within an existing transaction.
    ///
    /// Only ids with a matching `categories` row are inserted; the rest are
    /// dropped without error (bulk lookup returns matches only).
    async fn set_categories_inner(
        tx: &mut Transaction<'_, Postgres>,
        product_id: DbId,
        category_ids: &[DbId],
    ) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM product_categories WHERE product_id = $1")
            .bind(product_id)
            .execute(&mut **tx)
            .await?;

        if !category_ids.is_empty() {
            sqlx::query(
                "INSERT INTO product_categories (product_id, category_id) \
                 SELECT $1, c.id FROM categories c WHERE c.id = ANY($2) \
                 ON CONFLICT DO NOTHING",
            )
            .bind(product_id)
            .bind(category_ids)
            .execute(&mut **tx)
            .await?;
        }

        Ok(())
    }

    /// Replace tag associations within an existing transaction.
    async fn set_tags_inner(
        tx: &mut Transaction<'_, Postgres>,
        product_id: DbId,
        tag_ids: &[DbId],
    ) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM product_tags WHERE product_id = $1")
            .bind(product_id)
            .execute(&mut **tx)
            .await?;

        if !tag_ids.is_empty() {
            sqlx::query(
                "INSERT INTO product_tags (product_id, tag_id) \
                 SELECT $1, t.id FROM tags t WHERE t.id = ANY($2) \
                 ON CONFLICT DO NOTHING",
            )
            .bind(product_id)
            .bind(tag_ids)
            .execute(&mut **tx)
            .await?;
        }

        Ok(())
    }
}
