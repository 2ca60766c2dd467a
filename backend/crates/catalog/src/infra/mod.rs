//! Infrastructure Layer
//!
//! Database implementations.

pub mod memory;
pub mod mongo;

pub use memory::MemoryCatalogRepository;
pub use mongo::MongoCatalogRepository;
