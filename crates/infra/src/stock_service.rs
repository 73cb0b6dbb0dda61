//! Read-modify-write orchestration over an `InventoryStore`.
//!
//! Every operation loads the whole inventory, applies pure domain logic from
//! `stockfile-inventory`, and (for mutations) saves the whole inventory back.
//! No state is carried between calls.

use chrono::Local;
use thiserror::Error;

use stockfile_core::DomainError;
use stockfile_inventory::{Inventory, ItemName, Quantity, RemoveOutcome, StockLogEntry, StockReport};

use crate::config::{DEFAULT_LOW_STOCK_THRESHOLD, StoreConfig};
use crate::store::{InventoryStore, StoreError};

/// Failure of a stock operation.
#[derive(Debug, Error)]
pub enum StockError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Inventory operations against a persisted store.
#[derive(Debug)]
pub struct StockService<S> {
    store: S,
    low_stock_threshold: Quantity,
}

impl<S> StockService<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            low_stock_threshold: Quantity::from(DEFAULT_LOW_STOCK_THRESHOLD),
        }
    }

    /// Build a service whose default low-stock threshold comes from `config`.
    pub fn with_config(store: S, config: &StoreConfig) -> Self {
        Self::new(store).with_low_stock_threshold(config.low_stock_threshold)
    }

    pub fn with_low_stock_threshold(mut self, threshold: Quantity) -> Self {
        self.low_stock_threshold = threshold;
        self
    }
}

impl<S> StockService<S>
where
    S: InventoryStore,
{
    /// Add `qty` of `item` and persist; returns the item's resulting quantity.
    ///
    /// When `logs` is given, a timestamped entry is appended to it. The file is
    /// rewritten even for a zero quantity.
    pub fn add(
        &self,
        item: &ItemName,
        qty: Quantity,
        logs: Option<&mut Vec<StockLogEntry>>,
    ) -> Result<Quantity, StockError> {
        let mut inventory = self.store.load()?;
        let updated = inventory.add(item, qty)?;

        if let Some(logs) = logs {
            logs.push(StockLogEntry::added(item.clone(), qty, Local::now()));
        }

        self.store.save(&inventory)?;
        tracing::info!(item = %item, qty = %qty, stock = %updated, "stock added");
        Ok(updated)
    }

    /// Remove `qty` of `item` and persist.
    ///
    /// A missing item is reported as `RemoveOutcome::NotFound` (and logged
    /// before the write); the unchanged inventory is still written back.
    pub fn remove(&self, item: &ItemName, qty: Quantity) -> Result<RemoveOutcome, StockError> {
        let mut inventory = self.store.load()?;
        let outcome = inventory.remove(item, qty)?;

        match outcome {
            RemoveOutcome::NotFound => {
                tracing::warn!(item = %item, "item '{item}' not found");
            }
            RemoveOutcome::Removed => {
                tracing::info!(item = %item, qty = %qty, "stock removed; item deleted");
            }
            RemoveOutcome::Remaining(left) => {
                tracing::info!(item = %item, qty = %qty, stock = %left, "stock removed");
            }
        }

        self.store.save(&inventory)?;
        Ok(outcome)
    }

    /// Current quantity, zero when the item is absent.
    pub fn get_quantity(&self, item: &ItemName) -> Result<Quantity, StockError> {
        Ok(self.store.load()?.quantity_of(item.as_str()))
    }

    /// Items strictly below `threshold`, in insertion order.
    pub fn list_low(&self, threshold: Quantity) -> Result<Vec<ItemName>, StockError> {
        Ok(self.store.load()?.low_stock(threshold))
    }

    /// Items strictly below the configured default threshold.
    pub fn list_low_default(&self) -> Result<Vec<ItemName>, StockError> {
        self.list_low(self.low_stock_threshold)
    }

    pub fn report(&self) -> Result<StockReport, StockError> {
        Ok(self.store.load()?.report())
    }

    /// The full persisted inventory.
    pub fn snapshot(&self) -> Result<Inventory, StockError> {
        Ok(self.store.load()?)
    }
}
