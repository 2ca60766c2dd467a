//! Product Entity

use bson::Document;
use chrono::{DateTime, Utc};
use kernel::id::ProductId;

/// A single purchase option, e.g. `{color: "beige"}` or `{size: "one size"}`
///
/// Options are an ordered sequence of single-key mappings; their order is
/// part of the product and survives round trips through the store.
pub type ProductOption = Document;

/// Product entity
#[derive(Debug, Clone)]
pub struct Product {
    /// Object id, generated on create, immutable afterwards
    pub product_id: ProductId,
    pub name: String,
    pub price: f64,
    pub options: Vec<ProductOption>,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Create a new product with a freshly generated id
    pub fn new(name: String, price: f64, options: Vec<ProductOption>) -> Self {
        let now = Utc::now();
        Self {
            product_id: ProductId::new(),
            name,
            price,
            options,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a partial update; only provided fields change
    pub fn apply(&mut self, patch: ProductPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(options) = patch.options {
            self.options = options;
        }
        self.updated_at = Utc::now();
    }
}

/// Partial field replacement for PATCH
#[derive(Debug, Clone, Default)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub options: Option<Vec<ProductOption>>,
}

impl ProductPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.price.is_none() && self.options.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bson::doc;

    #[test]
    fn test_apply_partial() {
        let mut product = Product::new(
            "Bag".to_string(),
            910.0,
            vec![doc! { "color": "beige" }],
        );

        product.apply(ProductPatch {
            price: Some(900.0),
            ..Default::default()
        });

        assert_eq!(product.price, 900.0);
        assert_eq!(product.name, "Bag");
        assert_eq!(product.options, vec![doc! { "color": "beige" }]);
    }

    #[test]
    fn test_apply_empty_patch_keeps_fields() {
        let mut product = Product::new("Bag".to_string(), 910.0, vec![]);
        product.apply(ProductPatch::default());

        assert_eq!(product.name, "Bag");
        assert_eq!(product.price, 910.0);
    }
}
