//! Delete Product Use Case
//!
//! The cascade coordinator: deleting a product also removes every review
//! referencing it. Two-phase and not atomic at the storage layer; the
//! client-observable ordering is delete-product-then-reviews-gone. If
//! review deletion fails after the product delete succeeded, the product
//! stays deleted and the failure surfaces as a 5xx.

use std::sync::Arc;

use crate::domain::repository::{ProductRepository, ReviewRepository};
use crate::error::{CatalogError, CatalogResult};
use kernel::id::ProductId;

/// Delete product use case
pub struct DeleteProductUseCase<P, R>
where
    P: ProductRepository,
    R: ReviewRepository,
{
    product_repo: Arc<P>,
    review_repo: Arc<R>,
}

impl<P, R> DeleteProductUseCase<P, R>
where
    P: ProductRepository,
    R: ReviewRepository,
{
    pub fn new(product_repo: Arc<P>, review_repo: Arc<R>) -> Self {
        Self {
            product_repo,
            review_repo,
        }
    }

    /// Delete the product, then cascade to its reviews
    pub async fn execute(&self, product_id: &ProductId) -> CatalogResult<()> {
        let deleted = self.product_repo.delete(product_id).await?;

        if !deleted {
            return Err(CatalogError::ProductNotFound);
        }

        let reviews_deleted = self.review_repo.delete_by_product(product_id).await?;

        tracing::info!(
            product_id = %product_id,
            reviews_deleted,
            "Product deleted with review cascade"
        );

        Ok(())
    }
}
