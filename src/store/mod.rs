//! Persistence module
//!
//! Key-value storage (SQLite or in-memory) and typed collections on top of it.

pub mod collection;
pub mod connection;
pub mod memory;
pub mod migrations;

pub use collection::{load_collection, load_value, save_collection, save_value};
pub use connection::{Database, StoreError, StoreResult};
pub use memory::MemoryStore;

/// String-keyed storage for serialized collections.
///
/// Implementations are synchronous and assumed always available; callers
/// that share one store across tasks serialize their read-modify-write cycles.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> StoreResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> StoreResult<()>;
}

/// Database location: `WELLUP_DATABASE_PATH`, or `data/wellup.db` under the
/// project root (the executable's directory with target/release|debug removed)
pub fn database_path() -> std::path::PathBuf {
    use std::path::PathBuf;

    std::env::var("WELLUP_DATABASE_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let mut path = std::env::current_exe()
                .ok()
                .and_then(|p| p.parent().map(|p| p.to_path_buf()))
                .unwrap_or_else(|| PathBuf::from("."));

            if path.ends_with("release") || path.ends_with("debug") {
                if let Some(root) = path.parent().and_then(|p| p.parent()) {
                    path = root.to_path_buf();
                }
            }

            path.push("data");
            path.push("wellup.db");
            path
        })
}
