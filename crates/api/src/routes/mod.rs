pub mod health;
pub mod products;
pub mod references;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /products                                              list, create
/// /products/{id}                                         get, update, delete (soft)
/// /products/{product_id}/option-groups/{group_id}/options  add option
/// /products/{product_id}/options/{option_id}             update, delete option
/// /products/{product_id}/images                          add image
///
/// /categories                                            list
/// /tags                                                  list
/// /sellers                                               list
/// /brands                                                list
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/products", products::router())
        .merge(references::router())
}
