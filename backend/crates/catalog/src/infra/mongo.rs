//! MongoDB Repository Implementations

use bson::oid::ObjectId;
use bson::{Document, doc};
use chrono::NaiveDate;
use futures::TryStreamExt;
use mongodb::options::ReturnDocument;
use mongodb::{Collection, Database};
use serde::{Deserialize, Serialize};

use crate::domain::entity::product::{Product, ProductPatch};
use crate::domain::entity::review::Review;
use crate::domain::repository::{ProductRepository, ReviewRepository};
use crate::error::CatalogResult;
use kernel::id::{ProductId, ReviewId};

const PRODUCTS_COLLECTION: &str = "products";
const REVIEWS_COLLECTION: &str = "reviews";

/// MongoDB-backed catalog repository
///
/// One shared `Database` handle; collections are cheap views over it.
#[derive(Clone)]
pub struct MongoCatalogRepository {
    db: Database,
}

impl MongoCatalogRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    fn products(&self) -> Collection<ProductDocument> {
        self.db.collection(PRODUCTS_COLLECTION)
    }

    fn reviews(&self) -> Collection<ReviewDocument> {
        self.db.collection(REVIEWS_COLLECTION)
    }
}

// ============================================================================
// Product Repository Implementation
// ============================================================================

impl ProductRepository for MongoCatalogRepository {
    async fn insert(&self, product: &Product) -> CatalogResult<()> {
        self.products()
            .insert_one(ProductDocument::from_product(product))
            .await?;
        Ok(())
    }

    async fn find_all(&self) -> CatalogResult<Vec<Product>> {
        let documents: Vec<ProductDocument> =
            self.products().find(doc! {}).await?.try_collect().await?;

        Ok(documents.into_iter().map(|d| d.into_product()).collect())
    }

    async fn find_by_id(&self, product_id: &ProductId) -> CatalogResult<Option<Product>> {
        let document = self
            .products()
            .find_one(doc! { "_id": product_id.as_object_id() })
            .await?;

        Ok(document.map(|d| d.into_product()))
    }

    async fn exists(&self, product_id: &ProductId) -> CatalogResult<bool> {
        let count = self
            .products()
            .count_documents(doc! { "_id": product_id.as_object_id() })
            .await?;

        Ok(count > 0)
    }

    async fn update(
        &self,
        product_id: &ProductId,
        patch: ProductPatch,
    ) -> CatalogResult<Option<Product>> {
        let mut set = Document::new();
        if let Some(name) = patch.name {
            set.insert("name", name);
        }
        if let Some(price) = patch.price {
            set.insert("price", price);
        }
        if let Some(options) = patch.options {
            let options: Vec<bson::Bson> =
                options.into_iter().map(bson::Bson::Document).collect();
            set.insert("options", options);
        }
        set.insert("updatedAt", bson::DateTime::now());

        // ReturnDocument::After so the caller sees the post-mutation state
        let updated = self
            .products()
            .find_one_and_update(
                doc! { "_id": product_id.as_object_id() },
                doc! { "$set": set },
            )
            .return_document(ReturnDocument::After)
            .await?;

        Ok(updated.map(|d| d.into_product()))
    }

    async fn delete(&self, product_id: &ProductId) -> CatalogResult<bool> {
        let result = self
            .products()
            .delete_one(doc! { "_id": product_id.as_object_id() })
            .await?;

        Ok(result.deleted_count > 0)
    }
}

// ============================================================================
// Review Repository Implementation
// ============================================================================

impl ReviewRepository for MongoCatalogRepository {
    async fn insert(&self, review: &Review) -> CatalogResult<()> {
        self.reviews()
            .insert_one(ReviewDocument::from_review(review))
            .await?;
        Ok(())
    }

    async fn find_by_product(&self, product_id: &ProductId) -> CatalogResult<Vec<Review>> {
        let documents: Vec<ReviewDocument> = self
            .reviews()
            .find(doc! { "productId": product_id.as_object_id() })
            .await?
            .try_collect()
            .await?;

        Ok(documents.into_iter().map(|d| d.into_review()).collect())
    }

    async fn delete_by_product(&self, product_id: &ProductId) -> CatalogResult<u64> {
        let result = self
            .reviews()
            .delete_many(doc! { "productId": product_id.as_object_id() })
            .await?;

        Ok(result.deleted_count)
    }
}

// ============================================================================
// Document mapping
// ============================================================================

#[derive(Debug, Serialize, Deserialize)]
struct ProductDocument {
    #[serde(rename = "_id")]
    id: ObjectId,
    name: String,
    price: f64,
    #[serde(default)]
    options: Vec<Document>,
    #[serde(rename = "createdAt")]
    created_at: bson::DateTime,
    #[serde(rename = "updatedAt")]
    updated_at: bson::DateTime,
}

impl ProductDocument {
    fn from_product(product: &Product) -> Self {
        Self {
            id: *product.product_id.as_object_id(),
            name: product.name.clone(),
            price: product.price,
            options: product.options.clone(),
            created_at: bson::DateTime::from_chrono(product.created_at),
            updated_at: bson::DateTime::from_chrono(product.updated_at),
        }
    }

    fn into_product(self) -> Product {
        Product {
            product_id: ProductId::from_object_id(self.id),
            name: self.name,
            price: self.price,
            options: self.options,
            created_at: self.created_at.to_chrono(),
            updated_at: self.updated_at.to_chrono(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct ReviewDocument {
    #[serde(rename = "_id")]
    id: ObjectId,
    author: String,
    // ISO-8601 calendar date, stored as a plain string
    date: NaiveDate,
    text: String,
    #[serde(rename = "productId")]
    product_id: ObjectId,
}

impl ReviewDocument {
    fn from_review(review: &Review) -> Self {
        Self {
            id: *review.review_id.as_object_id(),
            author: review.author.clone(),
            date: review.date,
            text: review.text.clone(),
            product_id: *review.product_id.as_object_id(),
        }
    }

    fn into_review(self) -> Review {
        Review {
            review_id: ReviewId::from_object_id(self.id),
            author: self.author,
            date: self.date,
            text: self.text,
            product_id: ProductId::from_object_id(self.product_id),
        }
    }
}
