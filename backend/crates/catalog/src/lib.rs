//! Catalog Backend Module
//!
//! Products and their nested reviews: CRUD over a document store with a
//! cascade delete tying the two together.
//!
//! Clean Architecture structure:
//! - `domain/` - Entities and repository traits
//! - `application/` - One use case per operation; `DeleteProductUseCase`
//!   is the cascade coordinator
//! - `infra/` - MongoDB and in-memory repository implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! Path parameters are validated syntactically before any storage call:
//! a malformed object id is a 400, a well-formed but unknown one a 404.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use error::{CatalogError, CatalogResult};
pub use infra::memory::MemoryCatalogRepository;
pub use infra::mongo::MongoCatalogRepository;
pub use presentation::router::{catalog_router, catalog_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod models {
    pub use crate::domain::entity::product::{Product, ProductOption, ProductPatch};
    pub use crate::domain::entity::review::Review;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod router {
    pub use crate::presentation::router::*;
}
