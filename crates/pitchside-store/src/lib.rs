//! In-memory storage for Pitchside.
//!
//! A thread-safe store with typed tables for users, categories, products
//! and orders, plus a generic session store with JSON-serialized
//! payloads. The API mirrors what a database-backed store would expose
//! so the handlers never touch the collections directly.

mod error;
mod memory;
mod session;

pub use error::StoreError;
pub use memory::MemoryStore;
pub use session::SessionStore;
