//! Update Product Use Case

use std::sync::Arc;

use crate::domain::entity::product::{Product, ProductPatch};
use crate::domain::repository::ProductRepository;
use crate::error::{CatalogError, CatalogResult};
use kernel::id::ProductId;

/// Update product use case
pub struct UpdateProductUseCase<P>
where
    P: ProductRepository,
{
    product_repo: Arc<P>,
}

impl<P> UpdateProductUseCase<P>
where
    P: ProductRepository,
{
    pub fn new(product_repo: Arc<P>) -> Self {
        Self { product_repo }
    }

    /// Apply a partial merge and return the post-mutation record
    pub async fn execute(
        &self,
        product_id: &ProductId,
        patch: ProductPatch,
    ) -> CatalogResult<Product> {
        let updated = self
            .product_repo
            .update(product_id, patch)
            .await?
            .ok_or(CatalogError::ProductNotFound)?;

        tracing::info!(product_id = %product_id, "Product updated");

        Ok(updated)
    }
}
