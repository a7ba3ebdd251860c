//! Storage layer for the F1 seasons client
//!
//! Local storage is a plain string key-value capability so it can be swapped
//! out in tests:
//! - `store`: the `KeyValueStore` trait and an in-memory implementation
//! - `schema`: the durable SQLite implementation
//! - `pinned`: per-season pinned races on top of any store

pub mod pinned;
pub mod schema;
pub mod store;


pub use pinned::{pinned_races_key, PinStore};
pub use schema::SqliteStore;
pub use store::{KeyValueStore, MemoryStore};
