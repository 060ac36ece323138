//! Key-value store abstraction for TTL-scoped security state.

pub mod kv;
pub mod memory;

pub use kv::KeyValueStore;
pub use memory::InMemoryKeyValueStore;
