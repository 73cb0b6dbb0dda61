use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use stockfile_inventory::Inventory;

use super::r#trait::{InventoryStore, StoreError, StoreResult};

/// In-memory inventory store.
///
/// Intended for tests/dev. Counts saves so callers can observe rewrites.
#[derive(Debug, Default)]
pub struct InMemoryInventoryStore {
    inventory: Mutex<Inventory>,
    saves: AtomicUsize,
}

impl InMemoryInventoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of successful `save` calls so far.
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

impl InventoryStore for InMemoryInventoryStore {
    fn load(&self) -> StoreResult<Inventory> {
        let inventory = self
            .inventory
            .lock()
            .map_err(|_| StoreError::Storage("lock poisoned".to_string()))?;
        Ok(inventory.clone())
    }

    fn save(&self, inventory: &Inventory) -> StoreResult<()> {
        let mut current = self
            .inventory
            .lock()
            .map_err(|_| StoreError::Storage("lock poisoned".to_string()))?;
        *current = inventory.clone();
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockfile_inventory::{ItemName, Quantity};

    #[test]
    fn starts_empty() {
        let store = InMemoryInventoryStore::new();
        assert!(store.load().unwrap().is_empty());
        assert_eq!(store.save_count(), 0);
    }

    #[test]
    fn save_replaces_contents() {
        let store = InMemoryInventoryStore::new();
        let mut inv = Inventory::new();
        inv.add(&ItemName::new("apple").unwrap(), Quantity::from(3)).unwrap();

        store.save(&inv).unwrap();
        assert_eq!(store.load().unwrap(), inv);

        store.save(&Inventory::new()).unwrap();
        assert!(store.load().unwrap().is_empty());
        assert_eq!(store.save_count(), 2);
    }
}
