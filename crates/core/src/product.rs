//! Product domain constants, validation helpers, and the ownership check
//! shared by all sub-resource operations.

use crate::error::CoreError;
use crate::types::DbId;

/* --------------------------------------------------------------------------
   Status constants
   -------------------------------------------------------------------------- */

/// Product is live and visible in the catalog.
pub const STATUS_ACTIVE: &str = "ACTIVE";

/// Product is hidden from the catalog but not deleted.
pub const STATUS_INACTIVE: &str = "INACTIVE";

/// Product is soft-deleted. The row remains readable; delete never removes
/// it physically through the API.
pub const STATUS_DELETED: &str = "DELETED";

/// All valid product status values.
pub const VALID_STATUSES: &[&str] = &[STATUS_ACTIVE, STATUS_INACTIVE, STATUS_DELETED];

/* --------------------------------------------------------------------------
   Listing limits
   -------------------------------------------------------------------------- */

/// Default page size for product listings.
pub const DEFAULT_PAGE_SIZE: i32 = 25;

/// Maximum page size for product listings.
pub const MAX_PAGE_SIZE: i32 = 100;

/* --------------------------------------------------------------------------
   Validation functions
   -------------------------------------------------------------------------- */

/// Validate that `status` is one of the allowed values.
pub fn validate_status(status: &str) -> Result<(), CoreError> {
    if VALID_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid status '{status}'. Must be one of: {}",
            VALID_STATUSES.join(", ")
        )))
    }
}

/// Validate a product name: non-empty after trimming.
pub fn validate_name(name: &str) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation(
            "Product name must not be empty".to_string(),
        ));
    }
    Ok(())
}

/* --------------------------------------------------------------------------
   Ownership check
   -------------------------------------------------------------------------- */

/// Verify that an entity whose ownership chain resolves to
/// `owner_product_id` belongs to the product named in the request path.
///
/// Every sub-resource operation (option add/update/delete, image add) goes
/// through this single check rather than re-deriving the comparison, so a
/// mismatch is always reported as the same `InvalidReference` error.
pub fn ensure_belongs_to(
    entity: &'static str,
    id: DbId,
    owner_product_id: DbId,
    product_id: DbId,
) -> Result<(), CoreError> {
    if owner_product_id == product_id {
        Ok(())
    } else {
        Err(CoreError::InvalidReference {
            entity,
            id,
            product_id,
        })
    }
}
