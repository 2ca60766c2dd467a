//! Domain Layer
//!
//! Contains entities and repository traits.

pub mod entity;
pub mod repository;

// Re-exports
pub use entity::product::{Product, ProductOption, ProductPatch};
pub use entity::review::Review;
pub use repository::{ProductRepository, ReviewRepository};
