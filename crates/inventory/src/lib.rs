//! Inventory domain module.
//!
//! This crate contains the stock-keeping rules (item names, quantities, the
//! ordered item → quantity map, low-stock filtering, reports), implemented
//! purely as deterministic domain logic (no IO, no file handling).

pub mod item;
pub mod log;
pub mod report;
pub mod stock;

pub use item::{ItemName, Quantity};
pub use log::StockLogEntry;
pub use report::StockReport;
pub use stock::{Inventory, RemoveOutcome, StockEntry};
