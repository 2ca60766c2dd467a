//! In-Memory Repository Implementation
//!
//! Backs the generic router in tests and local development. Same
//! observable semantics as the Mongo implementation, minus persistence.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::domain::entity::product::{Product, ProductPatch};
use crate::domain::entity::review::Review;
use crate::domain::repository::{ProductRepository, ReviewRepository};
use crate::error::CatalogResult;
use kernel::id::{ProductId, ReviewId};

/// In-memory catalog repository
#[derive(Clone, Default)]
pub struct MemoryCatalogRepository {
    products: Arc<RwLock<HashMap<ProductId, Product>>>,
    reviews: Arc<RwLock<HashMap<ReviewId, Review>>>,
}

impl MemoryCatalogRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProductRepository for MemoryCatalogRepository {
    async fn insert(&self, product: &Product) -> CatalogResult<()> {
        self.products
            .write()
            .expect("product store lock poisoned")
            .insert(product.product_id, product.clone());
        Ok(())
    }

    async fn find_all(&self) -> CatalogResult<Vec<Product>> {
        Ok(self
            .products
            .read()
            .expect("product store lock poisoned")
            .values()
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, product_id: &ProductId) -> CatalogResult<Option<Product>> {
        Ok(self
            .products
            .read()
            .expect("product store lock poisoned")
            .get(product_id)
            .cloned())
    }

    async fn exists(&self, product_id: &ProductId) -> CatalogResult<bool> {
        Ok(self
            .products
            .read()
            .expect("product store lock poisoned")
            .contains_key(product_id))
    }

    async fn update(
        &self,
        product_id: &ProductId,
        patch: ProductPatch,
    ) -> CatalogResult<Option<Product>> {
        let mut products = self.products.write().expect("product store lock poisoned");

        Ok(products.get_mut(product_id).map(|product| {
            product.apply(patch);
            product.clone()
        }))
    }

    async fn delete(&self, product_id: &ProductId) -> CatalogResult<bool> {
        Ok(self
            .products
            .write()
            .expect("product store lock poisoned")
            .remove(product_id)
            .is_some())
    }
}

impl ReviewRepository for MemoryCatalogRepository {
    async fn insert(&self, review: &Review) -> CatalogResult<()> {
        self.reviews
            .write()
            .expect("review store lock poisoned")
            .insert(review.review_id, review.clone());
        Ok(())
    }

    async fn find_by_product(&self, product_id: &ProductId) -> CatalogResult<Vec<Review>> {
        Ok(self
            .reviews
            .read()
            .expect("review store lock poisoned")
            .values()
            .filter(|r| r.product_id == *product_id)
            .cloned()
            .collect())
    }

    async fn delete_by_product(&self, product_id: &ProductId) -> CatalogResult<u64> {
        let mut reviews = self.reviews.write().expect("review store lock poisoned");

        let before = reviews.len();
        reviews.retain(|_, r| r.product_id != *product_id);

        Ok((before - reviews.len()) as u64)
    }
}
