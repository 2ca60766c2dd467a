//! HTTP Handlers
//!
//! Path ids are validated syntactically here, before any use case (and
//! therefore any storage call) runs.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use std::sync::Arc;

use kernel::id::ProductId;
use kernel::response::Data;

use crate::application::{
    CreateProductInput, CreateProductUseCase, CreateReviewInput, CreateReviewUseCase,
    DeleteProductUseCase, GetProductUseCase, ListProductsUseCase, ListReviewsUseCase,
    UpdateProductUseCase,
};
use crate::domain::entity::product::ProductPatch;
use crate::domain::repository::{ProductRepository, ReviewRepository};
use crate::error::{CatalogError, CatalogResult};
use crate::presentation::dto::{
    CreateProductRequest, CreateReviewRequest, ProductResponse, ReviewResponse,
    UpdateProductRequest,
};

/// Shared state for catalog handlers
#[derive(Clone)]
pub struct CatalogAppState<R>
where
    R: ProductRepository + ReviewRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

fn parse_product_id(raw: &str) -> CatalogResult<ProductId> {
    ProductId::parse(raw).map_err(|_| CatalogError::InvalidId(raw.to_string()))
}

// ============================================================================
// Products
// ============================================================================

/// GET /products
pub async fn list_products<R>(
    State(state): State<CatalogAppState<R>>,
) -> CatalogResult<Json<Data<Vec<ProductResponse>>>>
where
    R: ProductRepository + ReviewRepository + Clone + Send + Sync + 'static,
{
    let use_case = ListProductsUseCase::new(state.repo.clone());

    let products = use_case.execute().await?;

    Ok(Json(Data::new(
        products.into_iter().map(ProductResponse::from).collect(),
    )))
}

/// POST /products
pub async fn create_product<R>(
    State(state): State<CatalogAppState<R>>,
    Json(req): Json<CreateProductRequest>,
) -> CatalogResult<(StatusCode, Json<Data<ProductResponse>>)>
where
    R: ProductRepository + ReviewRepository + Clone + Send + Sync + 'static,
{
    let use_case = CreateProductUseCase::new(state.repo.clone());

    let input = CreateProductInput {
        name: req.name,
        price: req.price,
        options: req.options,
    };

    let product = use_case.execute(input).await?;

    Ok((
        StatusCode::CREATED,
        Json(Data::new(ProductResponse::from(product))),
    ))
}

/// GET /products/{id}
pub async fn get_product<R>(
    State(state): State<CatalogAppState<R>>,
    Path(product_id): Path<String>,
) -> CatalogResult<Json<Data<ProductResponse>>>
where
    R: ProductRepository + ReviewRepository + Clone + Send + Sync + 'static,
{
    let product_id = parse_product_id(&product_id)?;

    let use_case = GetProductUseCase::new(state.repo.clone());

    let product = use_case.execute(&product_id).await?;

    Ok(Json(Data::new(ProductResponse::from(product))))
}

/// PATCH /products/{id}
pub async fn update_product<R>(
    State(state): State<CatalogAppState<R>>,
    Path(product_id): Path<String>,
    Json(req): Json<UpdateProductRequest>,
) -> CatalogResult<Json<Data<ProductResponse>>>
where
    R: ProductRepository + ReviewRepository + Clone + Send + Sync + 'static,
{
    let product_id = parse_product_id(&product_id)?;

    let use_case = UpdateProductUseCase::new(state.repo.clone());

    let patch = ProductPatch {
        name: req.name,
        price: req.price,
        options: req.options,
    };

    let product = use_case.execute(&product_id, patch).await?;

    Ok(Json(Data::new(ProductResponse::from(product))))
}

/// DELETE /products/{id}
pub async fn delete_product<R>(
    State(state): State<CatalogAppState<R>>,
    Path(product_id): Path<String>,
) -> CatalogResult<Json<Data<serde_json::Value>>>
where
    R: ProductRepository + ReviewRepository + Clone + Send + Sync + 'static,
{
    let product_id = parse_product_id(&product_id)?;

    let use_case = DeleteProductUseCase::new(state.repo.clone(), state.repo.clone());

    use_case.execute(&product_id).await?;

    Ok(Json(Data::new(serde_json::Value::Null)))
}

// ============================================================================
// Reviews
// ============================================================================

/// POST /reviews
pub async fn create_review<R>(
    State(state): State<CatalogAppState<R>>,
    Json(req): Json<CreateReviewRequest>,
) -> CatalogResult<(StatusCode, Json<Data<ReviewResponse>>)>
where
    R: ProductRepository + ReviewRepository + Clone + Send + Sync + 'static,
{
    let product_id = parse_product_id(&req.product_id)?;

    let use_case = CreateReviewUseCase::new(state.repo.clone(), state.repo.clone());

    let input = CreateReviewInput {
        author: req.author,
        date: req.date,
        text: req.text,
        product_id,
    };

    let review = use_case.execute(input).await?;

    Ok((
        StatusCode::CREATED,
        Json(Data::new(ReviewResponse::from(review))),
    ))
}

/// GET /products/{id}/reviews
pub async fn list_product_reviews<R>(
    State(state): State<CatalogAppState<R>>,
    Path(product_id): Path<String>,
) -> CatalogResult<Json<Data<Vec<ReviewResponse>>>>
where
    R: ProductRepository + ReviewRepository + Clone + Send + Sync + 'static,
{
    let product_id = parse_product_id(&product_id)?;

    let use_case = ListReviewsUseCase::new(state.repo.clone(), state.repo.clone());

    let reviews = use_case.execute(&product_id).await?;

    Ok(Json(Data::new(
        reviews.into_iter().map(ReviewResponse::from).collect(),
    )))
}
