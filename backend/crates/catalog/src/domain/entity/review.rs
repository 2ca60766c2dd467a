//! Review Entity

use chrono::NaiveDate;
use kernel::id::{ProductId, ReviewId};

/// Review entity
///
/// Owned by its product by reference, not containment: reviews live in
/// their own collection and are removed by the cascade when the product
/// is deleted.
#[derive(Debug, Clone)]
pub struct Review {
    /// Object id, generated on create
    pub review_id: ReviewId,
    pub author: String,
    pub date: NaiveDate,
    pub text: String,
    /// The product this review belongs to
    pub product_id: ProductId,
}

impl Review {
    /// Create a new review with a freshly generated id
    pub fn new(author: String, date: NaiveDate, text: String, product_id: ProductId) -> Self {
        Self {
            review_id: ReviewId::new(),
            author,
            date,
            text,
            product_id,
        }
    }
}
