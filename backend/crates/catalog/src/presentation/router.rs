//! Catalog Router

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::domain::repository::{ProductRepository, ReviewRepository};
use crate::infra::mongo::MongoCatalogRepository;
use crate::presentation::handlers::{self, CatalogAppState};

/// Create the catalog router with MongoDB repository
pub fn catalog_router(repo: MongoCatalogRepository) -> Router {
    catalog_router_generic(repo)
}

/// Create a generic catalog router for any repository implementation
pub fn catalog_router_generic<R>(repo: R) -> Router
where
    R: ProductRepository + ReviewRepository + Clone + Send + Sync + 'static,
{
    let state = CatalogAppState {
        repo: Arc::new(repo),
    };

    Router::new()
        .route(
            "/products",
            get(handlers::list_products::<R>).post(handlers::create_product::<R>),
        )
        .route(
            "/products/{id}",
            get(handlers::get_product::<R>)
                .patch(handlers::update_product::<R>)
                .delete(handlers::delete_product::<R>),
        )
        .route(
            "/products/{id}/reviews",
            get(handlers::list_product_reviews::<R>),
        )
        .route("/reviews", post(handlers::create_review::<R>))
        .with_state(state)
}
