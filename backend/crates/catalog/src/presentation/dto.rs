//! API DTOs (Data Transfer Objects)

use bson::Document;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::entity::product::Product;
use crate::domain::entity::review::Review;

// ============================================================================
// Products
// ============================================================================

/// Create product request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub options: Vec<Document>,
}

/// Partial update request; absent fields stay untouched
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductRequest {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub options: Option<Vec<Document>>,
}

/// Product response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub options: Vec<Document>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.product_id.to_hex(),
            name: product.name,
            price: product.price,
            options: product.options,
        }
    }
}

// ============================================================================
// Reviews
// ============================================================================

/// Create review request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReviewRequest {
    pub author: String,
    pub date: NaiveDate,
    pub text: String,
    /// Hex object id of the reviewed product
    pub product_id: String,
}

/// Review response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewResponse {
    pub id: String,
    pub author: String,
    pub date: NaiveDate,
    pub text: String,
    pub product_id: String,
}

impl From<Review> for ReviewResponse {
    fn from(review: Review) -> Self {
        Self {
            id: review.review_id.to_hex(),
            author: review.author,
            date: review.date,
            text: review.text,
            product_id: review.product_id.to_hex(),
        }
    }
}
