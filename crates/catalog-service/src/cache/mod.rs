//! Caching infrastructure for the service layer.
//!
//! This module provides a cache abstraction with Redis and in-memory
//! implementations. Cached products expire after a fixed TTL.

mod cache_interface;
pub mod cache_keys;
mod health;
mod memory_cache;
mod redis_cache;

pub use cache_interface::{CacheExt, CacheInterface};
pub use health::CacheHealthCheck;
pub use memory_cache::InMemoryCache;
pub use redis_cache::{
    create_redis_pool, RedisCacheService, RedisCacheServiceParameters,
    DEFAULT_OPERATION_TIMEOUT, DEFAULT_TTL,
};
