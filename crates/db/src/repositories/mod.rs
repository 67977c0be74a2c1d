//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Aggregate writes open a
//! transaction internally and commit once.

pub mod brand_repo;
pub mod category_repo;
pub mod image_repo;
pub mod option_repo;
pub mod product_repo;
pub mod seller_repo;
pub mod tag_repo;

pub use brand_repo::BrandRepo;
pub use category_repo::CategoryRepo;
pub use image_repo::ImageRepo;
pub use option_repo::OptionRepo;
pub use product_repo::ProductRepo;
pub use seller_repo::SellerRepo;
pub use tag_repo::TagRepo;
