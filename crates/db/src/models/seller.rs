//! Seller reference entity (`sellers` table).

use catalog_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `sellers` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Seller {
    pub id: DbId,
    pub name: String,
    pub contact_email: Option<String>,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a seller (seeding and tests; no HTTP surface).
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSeller {
    pub name: String,
    pub contact_email: Option<String>,
    pub description: Option<String>,
}
