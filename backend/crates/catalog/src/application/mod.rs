//! Application Layer
//!
//! Use cases and application services.

pub mod create_product;
pub mod create_review;
pub mod delete_product;
pub mod get_product;
pub mod list_products;
pub mod list_reviews;
pub mod update_product;

// Re-exports
pub use create_product::{CreateProductInput, CreateProductUseCase};
pub use create_review::{CreateReviewInput, CreateReviewUseCase};
pub use delete_product::DeleteProductUseCase;
pub use get_product::GetProductUseCase;
pub use list_products::ListProductsUseCase;
pub use list_reviews::ListReviewsUseCase;
pub use update_product::UpdateProductUseCase;
