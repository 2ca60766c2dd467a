//! Infrastructure Layer
//!
//! Database implementations and external service integrations.

pub mod memory;
pub mod mongo;

pub use memory::MemoryUserRepository;
pub use mongo::MongoUserRepository;
