//! Infrastructure layer: JSON file persistence, configuration, and the
//! read-modify-write stock service.

pub mod config;
pub mod stock_service;
pub mod store;

#[cfg(test)]
mod test_support;

pub use config::{CorruptFilePolicy, StoreConfig};
pub use stock_service::{StockError, StockService};
pub use store::{InMemoryInventoryStore, InventoryStore, JsonFileStore, StoreError, StoreResult};
