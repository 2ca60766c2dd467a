//! Domain Entities

pub mod product;
pub mod review;
