//! Create Product Use Case

use std::sync::Arc;

use crate::domain::entity::product::{Product, ProductOption};
use crate::domain::repository::ProductRepository;
use crate::error::CatalogResult;

/// Create product input
pub struct CreateProductInput {
    pub name: String,
    pub price: f64,
    pub options: Vec<ProductOption>,
}

/// Create product use case
pub struct CreateProductUseCase<P>
where
    P: ProductRepository,
{
    product_repo: Arc<P>,
}

impl<P> CreateProductUseCase<P>
where
    P: ProductRepository,
{
    pub fn new(product_repo: Arc<P>) -> Self {
        Self { product_repo }
    }

    /// Persist a new product and return it, generated id included
    pub async fn execute(&self, input: CreateProductInput) -> CatalogResult<Product> {
        let product = Product::new(input.name, input.price, input.options);

        self.product_repo.insert(&product).await?;

        tracing::info!(
            product_id = %product.product_id,
            name = %product.name,
            "Product created"
        );

        Ok(product)
    }
}
