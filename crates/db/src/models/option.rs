//! Option group and option models.
//!
//! Covers two related tables:
//! - `product_option_groups` -- named, ordered groups owned by a product
//! - `product_options` -- the selectable options within a group
//!
//! Option groups are created only as part of product creation; options have
//! their own add/update/delete operations.

use catalog_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// ProductOptionGroup
// ---------------------------------------------------------------------------

/// A row from the `product_option_groups` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProductOptionGroup {
    pub id: DbId,
    pub product_id: DbId,
    pub name: String,
    pub display_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating an option group (nested in product creation).
#[derive(Debug, Clone, Deserialize)]
pub struct CreateOptionGroup {
    pub name: String,
    pub display_order: Option<i32>,
    /// Options created together with the group, in request order.
    #[serde(default)]
    pub options: Vec<CreateOption>,
}

// ---------------------------------------------------------------------------
// ProductOption
// ---------------------------------------------------------------------------

/// A row from the `product_options` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProductOption {
    pub id: DbId,
    pub option_group_id: DbId,
    pub name: String,
    /// Surcharge over the product base price, in the smallest currency unit.
    pub additional_price: i64,
    pub sku: Option<String>,
    pub stock: i32,
    pub display_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating an option, nested in product creation or standalone via
/// the add-option endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateOption {
    pub name: String,
    pub additional_price: Option<i64>,
    pub sku: Option<String>,
    pub stock: Option<i32>,
    pub display_order: Option<i32>,
}

/// DTO for updating an option. Absent fields are left unchanged.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateOption {
    pub name: Option<String>,
    pub additional_price: Option<i64>,
    pub sku: Option<String>,
    pub stock: Option<i32>,
    pub display_order: Option<i32>,
}

/// An option joined with the id of the product that owns it (through its
/// group). Used by the sub-resource operations for the ownership check.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct OptionWithProduct {
    pub id: DbId,
    pub option_group_id: DbId,
    pub product_id: DbId,
    pub name: String,
    pub additional_price: i64,
    pub sku: Option<String>,
    pub stock: i32,
    pub display_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// An option group together with its options, for the aggregate view.
#[derive(Debug, Serialize)]
pub struct OptionGroupWithOptions {
    pub group: ProductOptionGroup,
    pub options: Vec<ProductOption>,
}
