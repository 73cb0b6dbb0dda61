//! In-memory stock log entries.
//!
//! Entries are appended to a caller-owned `Vec` and never persisted.

use chrono::{DateTime, Local};
use serde::Serialize;

use crate::item::{ItemName, Quantity};

/// Record of one add operation, stamped with local wall-clock time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StockLogEntry {
    pub item: ItemName,
    pub quantity: Quantity,
    pub occurred_at: DateTime<Local>,
}

impl StockLogEntry {
    pub fn added(item: ItemName, quantity: Quantity, occurred_at: DateTime<Local>) -> Self {
        Self {
            item,
            quantity,
            occurred_at,
        }
    }
}

impl core::fmt::Display for StockLogEntry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{}: Added {} of {}",
            self.occurred_at.format("%Y-%m-%d %H:%M:%S%.6f"),
            self.quantity,
            self.item
        )
    }
}
