//! List Reviews Use Case

use std::sync::Arc;

use crate::domain::entity::review::Review;
use crate::domain::repository::{ProductRepository, ReviewRepository};
use crate::error::{CatalogError, CatalogResult};
use kernel::id::ProductId;

/// List reviews use case
pub struct ListReviewsUseCase<P, R>
where
    P: ProductRepository,
    R: ReviewRepository,
{
    product_repo: Arc<P>,
    review_repo: Arc<R>,
}

impl<P, R> ListReviewsUseCase<P, R>
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

    /// Fetch the reviews of one product
    ///
    /// NotFound when the product itself is absent, including after a
    /// cascade delete removed it.
    pub async fn execute(&self, product_id: &ProductId) -> CatalogResult<Vec<Review>> {
        if !self.product_repo.exists(product_id).await? {
            return Err(CatalogError::ProductNotFound);
        }

        self.review_repo.find_by_product(product_id).await
    }
}
