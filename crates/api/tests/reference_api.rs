//! HTTP-level tests for the read-only reference-entity listings.

mod common;

use axum::http::StatusCode;
use common::{body_json, get};
use sqlx::PgPool;

use catalog_db::models::brand::CreateBrand;
use catalog_db::models::category::CreateCategory;
use catalog_db::models::seller::CreateSeller;
use catalog_db::models::tag::CreateTag;
use catalog_db::repositories::{BrandRepo, CategoryRepo, SellerRepo, TagRepo};

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_categories_sorted_by_name(pool: PgPool) {
    CategoryRepo::create(
        &pool,
        &CreateCategory {
            name: "Outdoor".to_string(),
            slug: "outdoor".to_string(),
        },
    )
    .await
    .unwrap();
    CategoryRepo::create(
        &pool,
        &CreateCategory {
            name: "Indoor".to_string(),
            slug: "indoor".to_string(),
        },
    )
    .await
    .unwrap();

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/categories").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let items = json["data"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["name"], "Indoor");
    assert_eq!(items[1]["name"], "Outdoor");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_tags_sellers_brands(pool: PgPool) {
    TagRepo::create(
        &pool,
        &CreateTag {
            name: "Wool".to_string(),
            slug: "wool".to_string(),
        },
    )
    .await
    .unwrap();
    SellerRepo::create(
        &pool,
        &CreateSeller {
            name: "Acme".to_string(),
            contact_email: Some("sales@acme.test".to_string()),
            description: None,
        },
    )
    .await
    .unwrap();
    BrandRepo::create(
        &pool,
        &CreateBrand {
            name: "Northwind".to_string(),
            slug: "northwind".to_string(),
            description: None,
        },
    )
    .await
    .unwrap();

    let app = common::build_test_app(pool.clone());
    let response = get(app, "/api/v1/tags").await;
    let json = body_json(response).await;
    assert_eq!(json["data"][0]["slug"], "wool");

    let app = common::build_test_app(pool.clone());
    let response = get(app, "/api/v1/sellers").await;
    let json = body_json(response).await;
    assert_eq!(json["data"][0]["contact_email"], "sales@acme.test");

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/brands").await;
    let json = body_json(response).await;
    assert_eq!(json["data"][0]["name"], "Northwind");
}
