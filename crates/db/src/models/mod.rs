//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches
//!
//! `product` additionally holds the nested aggregate view returned by the
//! detail endpoints.

pub mod brand;
pub mod category;
pub mod image;
pub mod option;
pub mod product;
pub mod seller;
pub mod tag;
