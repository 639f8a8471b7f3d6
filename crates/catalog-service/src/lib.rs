//! # Catalog Service
//!
//! Read-through product lookups: consult the cache, fall back to the
//! product store on a miss, and repopulate the cache with a fixed TTL.

pub mod cache;
pub mod dto;
pub mod r#impl;
pub mod product_service;

pub use cache::*;
pub use dto::*;
pub use product_service::*;
pub use r#impl::*;
