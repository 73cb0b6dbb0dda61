use std::path::PathBuf;

use thiserror::Error;

use stockfile_inventory::Inventory;

/// Errors from inventory persistence.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the backing file failed.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The backing file is not a JSON object of item → number.
    #[error("corrupt inventory file {}: {reason}", path.display())]
    Corrupt { path: PathBuf, reason: String },

    #[error("serialization error: {0}")]
    Serialization(String),

    /// Backend-specific failure (e.g. a poisoned lock).
    #[error("storage error: {0}")]
    Storage(String),
}

impl StoreError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Inventory persistence abstraction.
///
/// Implementations read and write the whole inventory; there are no partial updates.
pub trait InventoryStore: Send + Sync {
    /// Load the full inventory. A store with nothing saved yet yields an empty inventory.
    fn load(&self) -> StoreResult<Inventory>;

    /// Replace the persisted inventory with `inventory`.
    fn save(&self, inventory: &Inventory) -> StoreResult<()>;
}

impl<S> InventoryStore for &S
where
    S: InventoryStore + ?Sized,
{
    fn load(&self) -> StoreResult<Inventory> {
        (**self).load()
    }

    fn save(&self, inventory: &Inventory) -> StoreResult<()> {
        (**self).save(inventory)
    }
}
