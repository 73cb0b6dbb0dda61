//! Whole-inventory persistence boundary.
//!
//! The entire mapping is the unit of storage: every load reads all of it and
//! every save writes all of it. There is no locking; two processes writing the
//! same file race and the later write wins.

pub mod in_memory;
pub mod json_file;
pub mod r#trait;

pub use in_memory::InMemoryInventoryStore;
pub use json_file::JsonFileStore;
pub use r#trait::{InventoryStore, StoreError, StoreResult};
