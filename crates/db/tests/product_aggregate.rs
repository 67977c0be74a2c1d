//! Integration tests for product aggregate creation, retrieval, update,
//! and soft delete.
//!
//! Exercises the full repository layer against a real database:
//! - Graph creation (detail, price, groups, options, images, links)
//! - Silent dropping of unresolved category/tag ids
//! - Lenient image->option resolution during graph assembly
//! - COALESCE partial updates and association replacement
//! - Detail/price upsert-on-update
//! - Soft delete visibility

use sqlx::PgPool;

use catalog_core::product::{STATUS_DELETED, STATUS_INACTIVE};
use catalog_db::models::brand::CreateBrand;
use catalog_db::models::category::CreateCategory;
use catalog_db::models::image::CreateImage;
use catalog_db::models::option::{CreateOption, CreateOptionGroup};
use catalog_db::models::product::{
    CreateProduct, ProductDetailInput, ProductPriceInput, UpdateProduct,
};
use catalog_db::models::seller::CreateSeller;
use catalog_db::models::tag::CreateTag;
use catalog_db::repositories::{BrandRepo, CategoryRepo, ProductRepo, SellerRepo, TagRepo};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_product(name: &str, slug: &str) -> CreateProduct {
    CreateProduct {
        name: name.to_string(),
        slug: slug.to_string(),
        short_description: None,
        full_description: None,
        status: None,
        seller_id: None,
        brand_id: None,
        detail: None,
        price: None,
        category_ids: vec![],
        tag_ids: vec![],
        option_groups: vec![],
        images: vec![],
    }
}

fn no_update() -> UpdateProduct {
    UpdateProduct {
        name: None,
        slug: None,
        short_description: None,
        full_description: None,
        status: None,
        seller_id: None,
        brand_id: None,
        detail: None,
        price: None,
        category_ids: None,
        tag_ids: None,
    }
}

fn new_option(name: &str, stock: i32) -> CreateOption {
    CreateOption {
        name: name.to_string(),
        additional_price: None,
        sku: None,
        stock: Some(stock),
        display_order: None,
    }
}

fn new_image(url: &str, option_id: Option<i64>) -> CreateImage {
    CreateImage {
        url: url.to_string(),
        alt_text: None,
        is_primary: None,
        display_order: None,
        option_id,
    }
}

async fn seed_category(pool: &PgPool, name: &str, slug: &str) -> i64 {
    CategoryRepo::create(
        pool,
        &CreateCategory {
            name: name.to_string(),
            slug: slug.to_string(),
        },
    )
    .await
    .unwrap()
    .id
}

async fn seed_tag(pool: &PgPool, name: &str, slug: &str) -> i64 {
    TagRepo::create(
        pool,
        &CreateTag {
            name: name.to_string(),
            slug: slug.to_string(),
        },
    )
    .await
    .unwrap()
    .id
}

// ---------------------------------------------------------------------------
// Test: Full graph creation and round-trip
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_full_aggregate(pool: PgPool) {
    let seller = SellerRepo::create(
        &pool,
        &CreateSeller {
            name: "Acme Goods".to_string(),
            contact_email: None,
            description: None,
        },
    )
    .await
    .unwrap();
    let brand = BrandRepo::create(
        &pool,
        &CreateBrand {
            name: "Northwind".to_string(),
            slug: "northwind".to_string(),
            description: None,
        },
    )
    .await
    .unwrap();
    let cat_knitwear = seed_category(&pool, "Knitwear", "knitwear").await;
    let cat_sale = seed_category(&pool, "Sale", "sale").await;
    let tag_wool = seed_tag(&pool, "Wool", "wool").await;

    let mut input = new_product("Wool Sweater", "wool-sweater");
    input.seller_id = Some(seller.id);
    input.brand_id = Some(brand.id);
    input.detail = Some(ProductDetailInput {
        weight_grams: Some(450),
        width_mm: None,
        height_mm: None,
        depth_mm: None,
        materials: Some("100% merino wool".to_string()),
        country_of_origin: Some("NZ".to_string()),
        warranty_info: None,
        care_instructions: None,
    });
    input.price = Some(ProductPriceInput {
        base_price: Some(12900),
        sale_price: Some(9900),
        cost_price: None,
        currency_code: None,
        tax_rate: Some(0.2),
    });
    // 999999 does not exist and must be dropped without error.
    input.category_ids = vec![cat_knitwear, cat_sale, 999_999];
    input.tag_ids = vec![tag_wool];
    input.option_groups = vec![CreateOptionGroup {
        name: "Size".to_string(),
        display_order: Some(0),
        options: vec![new_option("S", 10), new_option("M", 20)],
    }];
    input.images = vec![new_image("/img/sweater.png", None)];

    let product = ProductRepo::create(&pool, &input).await.unwrap();
    assert_eq!(product.name, "Wool Sweater");
    assert_eq!(product.status, "ACTIVE"); // default
    assert_eq!(product.seller_id, Some(seller.id));
    assert_eq!(product.brand_id, Some(brand.id));

    let aggregate = ProductRepo::find_aggregate(&pool, product.id)
        .await
        .unwrap()
        .unwrap();

    let detail = aggregate.detail.unwrap();
    assert_eq!(detail.weight_grams, Some(450));
    assert_eq!(detail.materials.as_deref(), Some("100% merino wool"));

    let price = aggregate.price.unwrap();
    assert_eq!(price.base_price, 12900);
    assert_eq!(price.sale_price, Some(9900));
    assert_eq!(price.currency_code, "USD"); // default

    assert_eq!(aggregate.seller.unwrap().id, seller.id);
    assert_eq!(aggregate.brand.unwrap().id, brand.id);

    // Unresolved category id silently dropped.
    assert_eq!(aggregate.categories.len(), 2);
    assert_eq!(aggregate.tags.len(), 1);

    assert_eq!(aggregate.option_groups.len(), 1);
    let group = &aggregate.option_groups[0];
    assert_eq!(group.group.name, "Size");
    assert_eq!(group.options.len(), 2);
    assert_eq!(group.options[0].name, "S");
    assert_eq!(group.options[1].name, "M");

    assert_eq!(aggregate.images.len(), 1);
    assert_eq!(aggregate.images[0].url, "/img/sweater.png");
}

// ---------------------------------------------------------------------------
// Test: Lenient image option resolution during graph assembly
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_image_with_unresolved_option_is_detached(pool: PgPool) {
    let mut input = new_product("Mug", "mug");
    input.images = vec![new_image("/img/mug.png", Some(999_999))];

    let product = ProductRepo::create(&pool, &input).await.unwrap();
    let aggregate = ProductRepo::find_aggregate(&pool, product.id)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(aggregate.images.len(), 1);
    assert_eq!(aggregate.images[0].option_id, None);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_image_with_foreign_option_is_detached(pool: PgPool) {
    // Product A owns an option.
    let mut first = new_product("Shirt", "shirt");
    first.option_groups = vec![CreateOptionGroup {
        name: "Size".to_string(),
        display_order: None,
        options: vec![new_option("L", 5)],
    }];
    let first = ProductRepo::create(&pool, &first).await.unwrap();
    let first_aggregate = ProductRepo::find_aggregate(&pool, first.id)
        .await
        .unwrap()
        .unwrap();
    let foreign_option_id = first_aggregate.option_groups[0].options[0].id;

    // Product B references A's option: the link must not survive.
    let mut second = new_product("Scarf", "scarf");
    second.images = vec![new_image("/img/scarf.png", Some(foreign_option_id))];
    let second = ProductRepo::create(&pool, &second).await.unwrap();

    let aggregate = ProductRepo::find_aggregate(&pool, second.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(aggregate.images[0].option_id, None);
}

// ---------------------------------------------------------------------------
// Test: Partial update semantics
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_only_touches_present_fields(pool: PgPool) {
    let product = ProductRepo::create(&pool, &new_product("Original", "original"))
        .await
        .unwrap();

    let mut update = no_update();
    update.name = Some("Renamed".to_string());
    update.status = Some(STATUS_INACTIVE.to_string());

    let updated = ProductRepo::update(&pool, product.id, &update)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.slug, "original"); // untouched
    assert_eq!(updated.status, "INACTIVE");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_nonexistent_product_returns_none(pool: PgPool) {
    let result = ProductRepo::update(&pool, 999_999, &no_update()).await.unwrap();
    assert!(result.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_category_replace_and_clear(pool: PgPool) {
    let cat_a = seed_category(&pool, "A", "a").await;
    let cat_b = seed_category(&pool, "B", "b").await;
    let cat_c = seed_category(&pool, "C", "c").await;

    let mut input = new_product("Linked", "linked");
    input.category_ids = vec![cat_a, cat_b];
    let product = ProductRepo::create(&pool, &input).await.unwrap();

    // Present list replaces the whole set (unresolved ids dropped).
    let mut update = no_update();
    update.category_ids = Some(vec![cat_b, cat_c, 999_999]);
    ProductRepo::update(&pool, product.id, &update).await.unwrap();

    let categories = CategoryRepo::list_for_product(&pool, product.id).await.unwrap();
    let ids: Vec<i64> = categories.iter().map(|c| c.id).collect();
    assert_eq!(ids.len(), 2);
    assert!(ids.contains(&cat_b));
    assert!(ids.contains(&cat_c));

    // Absent list leaves associations untouched.
    ProductRepo::update(&pool, product.id, &no_update()).await.unwrap();
    let categories = CategoryRepo::list_for_product(&pool, product.id).await.unwrap();
    assert_eq!(categories.len(), 2);

    // Present-but-empty list clears the set.
    let mut update = no_update();
    update.category_ids = Some(vec![]);
    ProductRepo::update(&pool, product.id, &update).await.unwrap();
    let categories = CategoryRepo::list_for_product(&pool, product.id).await.unwrap();
    assert!(categories.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_creates_missing_detail_then_merges(pool: PgPool) {
    let product = ProductRepo::create(&pool, &new_product("Bare", "bare"))
        .await
        .unwrap();

    // No detail row yet: the update creates one.
    let mut update = no_update();
    update.detail = Some(ProductDetailInput {
        weight_grams: Some(300),
        width_mm: None,
        height_mm: None,
        depth_mm: None,
        materials: None,
        country_of_origin: None,
        warranty_info: None,
        care_instructions: None,
    });
    ProductRepo::update(&pool, product.id, &update).await.unwrap();

    let aggregate = ProductRepo::find_aggregate(&pool, product.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(aggregate.detail.as_ref().unwrap().weight_grams, Some(300));

    // A second partial payload merges without clobbering existing fields.
    let mut update = no_update();
    update.detail = Some(ProductDetailInput {
        weight_grams: None,
        width_mm: None,
        height_mm: None,
        depth_mm: None,
        materials: Some("ceramic".to_string()),
        country_of_origin: None,
        warranty_info: None,
        care_instructions: None,
    });
    ProductRepo::update(&pool, product.id, &update).await.unwrap();

    let aggregate = ProductRepo::find_aggregate(&pool, product.id)
        .await
        .unwrap()
        .unwrap();
    let detail = aggregate.detail.unwrap();
    assert_eq!(detail.weight_grams, Some(300)); // preserved
    assert_eq!(detail.materials.as_deref(), Some("ceramic"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_price_merges_into_existing(pool: PgPool) {
    let mut input = new_product("Priced", "priced");
    input.price = Some(ProductPriceInput {
        base_price: Some(5000),
        sale_price: None,
        cost_price: None,
        currency_code: Some("EUR".to_string()),
        tax_rate: None,
    });
    let product = ProductRepo::create(&pool, &input).await.unwrap();

    let mut update = no_update();
    update.price = Some(ProductPriceInput {
        base_price: None,
        sale_price: Some(4500),
        cost_price: None,
        currency_code: None,
        tax_rate: None,
    });
    ProductRepo::update(&pool, product.id, &update).await.unwrap();

    let aggregate = ProductRepo::find_aggregate(&pool, product.id)
        .await
        .unwrap()
        .unwrap();
    let price = aggregate.price.unwrap();
    assert_eq!(price.base_price, 5000); // preserved
    assert_eq!(price.sale_price, Some(4500));
    assert_eq!(price.currency_code, "EUR"); // preserved
}

// ---------------------------------------------------------------------------
// Test: Soft delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_soft_delete_keeps_row_readable(pool: PgPool) {
    let product = ProductRepo::create(&pool, &new_product("Doomed", "doomed"))
        .await
        .unwrap();

    let deleted = ProductRepo::soft_delete(&pool, product.id).await.unwrap();
    assert!(deleted);

    // Still readable, with the DELETED status visible.
    let found = ProductRepo::find_by_id(&pool, product.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.status, STATUS_DELETED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_soft_delete_nonexistent_returns_false(pool: PgPool) {
    let deleted = ProductRepo::soft_delete(&pool, 999_999).await.unwrap();
    assert!(!deleted);
}

// ---------------------------------------------------------------------------
// Test: Listing
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_filters_by_status(pool: PgPool) {
    let first = ProductRepo::create(&pool, &new_product("One", "one")).await.unwrap();
    ProductRepo::create(&pool, &new_product("Two", "two")).await.unwrap();
    ProductRepo::soft_delete(&pool, first.id).await.unwrap();

    let active = ProductRepo::list(&pool, Some("ACTIVE"), 50, 0).await.unwrap();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].name, "Two");

    let all = ProductRepo::list(&pool, None, 50, 0).await.unwrap();
    assert_eq!(all.len(), 2);
}
