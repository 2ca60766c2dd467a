//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entity::product::{Product, ProductPatch};
use crate::domain::entity::review::Review;
use crate::error::CatalogResult;
use kernel::id::ProductId;

/// Product repository trait
#[trait_variant::make(ProductRepository: Send)]
pub trait LocalProductRepository {
    /// Persist a new product
    async fn insert(&self, product: &Product) -> CatalogResult<()>;

    /// Fetch all products
    async fn find_all(&self) -> CatalogResult<Vec<Product>>;

    /// Find a product by id
    async fn find_by_id(&self, product_id: &ProductId) -> CatalogResult<Option<Product>>;

    /// Check whether a product exists
    async fn exists(&self, product_id: &ProductId) -> CatalogResult<bool>;

    /// Apply a partial update, returning the post-mutation record
    /// (`None` when no product has that id)
    async fn update(
        &self,
        product_id: &ProductId,
        patch: ProductPatch,
    ) -> CatalogResult<Option<Product>>;

    /// Delete a product; returns whether a record was removed
    async fn delete(&self, product_id: &ProductId) -> CatalogResult<bool>;
}

/// Review repository trait
#[trait_variant::make(ReviewRepository: Send)]
pub trait LocalReviewRepository {
    /// Persist a new review
    async fn insert(&self, review: &Review) -> CatalogResult<()>;

    /// Fetch all reviews referencing a product
    async fn find_by_product(&self, product_id: &ProductId) -> CatalogResult<Vec<Review>>;

    /// Delete every review referencing a product; returns the count removed
    async fn delete_by_product(&self, product_id: &ProductId) -> CatalogResult<u64>;
}
