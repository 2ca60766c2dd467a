//! Create Review Use Case

use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::entity::review::Review;
use crate::domain::repository::{ProductRepository, ReviewRepository};
use crate::error::{CatalogError, CatalogResult};
use kernel::id::ProductId;

/// Create review input
pub struct CreateReviewInput {
    pub author: String,
    pub date: NaiveDate,
    pub text: String,
    pub product_id: ProductId,
}

/// Create review use case
pub struct CreateReviewUseCase<P, R>
where
    P: ProductRepository,
    R: ReviewRepository,
{
    product_repo: Arc<P>,
    review_repo: Arc<R>,
}

impl<P, R> CreateReviewUseCase<P, R>
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

    /// Persist a new review for an existing product
    ///
    /// Fails fast with NotFound when the referenced product is absent;
    /// dangling references are never created.
    pub async fn execute(&self, input: CreateReviewInput) -> CatalogResult<Review> {
        if !self.product_repo.exists(&input.product_id).await? {
            return Err(CatalogError::ProductNotFound);
        }

        let review = Review::new(input.author, input.date, input.text, input.product_id);

        self.review_repo.insert(&review).await?;

        tracing::info!(
            review_id = %review.review_id,
            product_id = %review.product_id,
            "Review created"
        );

        Ok(review)
    }
}
