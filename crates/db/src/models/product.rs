//! Product root entity, its 1:1 sub-entities, and the aggregate view.
//!
//! Covers three related tables:
//! - `products` -- the aggregate root
//! - `product_details` -- at most one per product, descriptive attributes
//! - `product_prices` -- at most one per product, monetary attributes

use catalog_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::brand::Brand;
use crate::models::category::Category;
use crate::models::image::{CreateImage, ProductImage};
use crate::models::option::{CreateOptionGroup, OptionGroupWithOptions};
use crate::models::seller::Seller;
use crate::models::tag::Tag;

// ---------------------------------------------------------------------------
// Product
// ---------------------------------------------------------------------------

/// A row from the `products` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Product {
    pub id: DbId,
    pub name: String,
    pub slug: String,
    pub short_description: Option<String>,
    pub full_description: Option<String>,
    /// One of the `catalog_core::product` status constants.
    pub status: String,
    pub seller_id: Option<DbId>,
    pub brand_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a product with its full graph.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProduct {
    pub name: String,
    pub slug: String,
    pub short_description: Option<String>,
    pub full_description: Option<String>,
    /// Defaults to `ACTIVE` if omitted.
    pub status: Option<String>,
    pub seller_id: Option<DbId>,
    pub brand_id: Option<DbId>,
    pub detail: Option<ProductDetailInput>,
    pub price: Option<ProductPriceInput>,
    /// Ids that do not resolve are silently dropped.
    #[serde(default)]
    pub category_ids: Vec<DbId>,
    /// Ids that do not resolve are silently dropped.
    #[serde(default)]
    pub tag_ids: Vec<DbId>,
    #[serde(default)]
    pub option_groups: Vec<CreateOptionGroup>,
    #[serde(default)]
    pub images: Vec<CreateImage>,
}

/// DTO for updating a product. Absent fields are left unchanged; an empty
/// `category_ids` / `tag_ids` list (present but `[]`) clears the set.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProduct {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub short_description: Option<String>,
    pub full_description: Option<String>,
    pub status: Option<String>,
    pub seller_id: Option<DbId>,
    pub brand_id: Option<DbId>,
    /// Merged field-by-field into the existing detail (created if missing).
    pub detail: Option<ProductDetailInput>,
    /// Merged field-by-field into the existing price (created if missing).
    pub price: Option<ProductPriceInput>,
    /// `None` leaves associations untouched; `Some` replaces the whole set.
    pub category_ids: Option<Vec<DbId>>,
    /// `None` leaves associations untouched; `Some` replaces the whole set.
    pub tag_ids: Option<Vec<DbId>>,
}

// ---------------------------------------------------------------------------
// ProductDetail
// ---------------------------------------------------------------------------

/// A row from the `product_details` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProductDetail {
    pub id: DbId,
    pub product_id: DbId,
    pub weight_grams: Option<i32>,
    pub width_mm: Option<i32>,
    pub height_mm: Option<i32>,
    pub depth_mm: Option<i32>,
    pub materials: Option<String>,
    pub country_of_origin: Option<String>,
    pub warranty_info: Option<String>,
    pub care_instructions: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Detail payload for create and partial update. On update, absent fields
/// leave the stored value unchanged.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductDetailInput {
    pub weight_grams: Option<i32>,
    pub width_mm: Option<i32>,
    pub height_mm: Option<i32>,
    pub depth_mm: Option<i32>,
    pub materials: Option<String>,
    pub country_of_origin: Option<String>,
    pub warranty_info: Option<String>,
    pub care_instructions: Option<String>,
}

// ---------------------------------------------------------------------------
// ProductPrice
// ---------------------------------------------------------------------------

/// A row from the `product_prices` table. Amounts are in the smallest
/// currency unit (e.g. cents).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProductPrice {
    pub id: DbId,
    pub product_id: DbId,
    pub base_price: i64,
    pub sale_price: Option<i64>,
    pub cost_price: Option<i64>,
    pub currency_code: String,
    pub tax_rate: Option<f64>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Price payload for create and partial update. On insert, a missing
/// `base_price` defaults to 0 and `currency_code` to `USD`.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductPriceInput {
    pub base_price: Option<i64>,
    pub sale_price: Option<i64>,
    pub cost_price: Option<i64>,
    pub currency_code: Option<String>,
    pub tax_rate: Option<f64>,
}

// ---------------------------------------------------------------------------
// Aggregate view
// ---------------------------------------------------------------------------

/// A product with its full graph, as returned by the detail endpoints.
#[derive(Debug, Serialize)]
pub struct ProductAggregate {
    pub product: Product,
    pub detail: Option<ProductDetail>,
    pub price: Option<ProductPrice>,
    pub seller: Option<Seller>,
    pub brand: Option<Brand>,
    pub categories: Vec<Category>,
    pub tags: Vec<Tag>,
    pub option_groups: Vec<OptionGroupWithOptions>,
    pub images: Vec<ProductImage>,
}
