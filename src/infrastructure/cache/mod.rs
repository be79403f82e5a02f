//! Key-value store implementations.
//!
//! - [`RedisKvRepository`] - Production Redis-backed store
//! - [`MemoryKvRepository`] - In-process fallback when Redis is not available

mod memory_kv_repository;
mod redis_kv_repository;

pub use memory_kv_repository::MemoryKvRepository;
pub use redis_kv_repository::RedisKvRepository;
