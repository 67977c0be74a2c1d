//! Route definitions for the product aggregate -- mounted at `/products`.
//!
//! ```text
//! GET    /                                            list_products
//! POST   /                                            create_product
//! GET    /{id}                                        get_product
//! PUT    /{id}                                        update_product
//! DELETE /{id}                                        delete_product (soft)
//! POST   /{product_id}/option-groups/{group_id}/options   add_option
//! PUT    /{product_id}/options/{option_id}            update_option
//! DELETE /{product_id}/options/{option_id}            delete_option
//! POST   /{product_id}/images                         add_image
//! ```

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::{images, options, products};
use crate::state::AppState;

/// Product routes -- mounted at `/products`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(products::list_products).post(products::create_product),
        )
        .route(
            "/{id}",
            get(products::get_product)
                .put(products::update_product)
                .delete(products::delete_product),
        )
        .route(
            "/{product_id}/option-groups/{group_id}/options",
            post(options::add_option),
        )
        .route(
            "/{product_id}/options/{option_id}",
            put(options::update_option).delete(options::delete_option),
        )
        .route("/{product_id}/images", post(images::add_image))
}
