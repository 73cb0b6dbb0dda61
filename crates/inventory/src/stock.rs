//! The inventory map: item name → quantity, in insertion order.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use stockfile_core::DomainResult;

use crate::item::{ItemName, Quantity};
use crate::report::StockReport;

/// One item line of the inventory.
#[derive(Debug, Clone, PartialEq)]
pub struct StockEntry {
    pub name: ItemName,
    pub quantity: Quantity,
}

/// Result of removing stock.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum RemoveOutcome {
    /// Stock remains after the removal.
    Remaining(Quantity),
    /// The quantity dropped to zero or below and the entry was deleted.
    Removed,
    /// The item was not in the inventory; nothing changed.
    NotFound,
}

/// Ordered item → quantity mapping.
///
/// Entries keep insertion order. A deleted entry that is added again goes to
/// the end. Mutations never leave an entry at or below zero.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Inventory {
    entries: Vec<StockEntry>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &StockEntry> {
        self.entries.iter()
    }

    /// Stored quantity, if the item is present.
    pub fn get(&self, name: &str) -> Option<Quantity> {
        self.position(name).map(|idx| self.entries[idx].quantity)
    }

    /// Stored quantity, or zero when the item is absent.
    pub fn quantity_of(&self, name: &str) -> Quantity {
        self.get(name).unwrap_or(Quantity::ZERO)
    }

    /// Increase (or initialize) an item's stock and return the resulting quantity.
    pub fn add(&mut self, name: &ItemName, qty: Quantity) -> DomainResult<Quantity> {
        match self.position(name.as_str()) {
            Some(idx) => {
                let updated = self.entries[idx].quantity.checked_add(qty)?;
                if updated.is_depleted() {
                    self.entries.remove(idx);
                    return Ok(Quantity::ZERO);
                }
                self.entries[idx].quantity = updated;
                Ok(updated)
            }
            None => {
                let initial = Quantity::ZERO.checked_add(qty)?;
                if initial.is_depleted() {
                    return Ok(Quantity::ZERO);
                }
                self.entries.push(StockEntry {
                    name: name.clone(),
                    quantity: initial,
                });
                Ok(initial)
            }
        }
    }

    /// Decrease an item's stock, deleting the entry once it reaches zero or below.
    pub fn remove(&mut self, name: &ItemName, qty: Quantity) -> DomainResult<RemoveOutcome> {
        let Some(idx) = self.position(name.as_str()) else {
            return Ok(RemoveOutcome::NotFound);
        };

        let updated = self.entries[idx].quantity.checked_sub(qty)?;
        if updated.is_depleted() {
            self.entries.remove(idx);
            return Ok(RemoveOutcome::Removed);
        }
        self.entries[idx].quantity = updated;
        Ok(RemoveOutcome::Remaining(updated))
    }

    /// Drop entries at or below zero (e.g. hand-edited into the file) and return them.
    pub fn purge_depleted(&mut self) -> Vec<StockEntry> {
        let (kept, purged): (Vec<StockEntry>, Vec<StockEntry>) = std::mem::take(&mut self.entries)
            .into_iter()
            .partition(|e| !e.quantity.is_depleted());
        self.entries = kept;
        purged
    }

    /// Names of items whose quantity is strictly below `threshold`, in insertion order.
    pub fn low_stock(&self, threshold: Quantity) -> Vec<ItemName> {
        self.entries
            .iter()
            .filter(|e| e.quantity < threshold)
            .map(|e| e.name.clone())
            .collect()
    }

    pub fn report(&self) -> StockReport {
        StockReport::new(
            self.entries
                .iter()
                .map(|e| (e.name.clone(), e.quantity))
                .collect(),
        )
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.name.as_str() == name)
    }

    /// Insert as stored, overwriting in place on a repeated key.
    fn insert_stored(&mut self, name: ItemName, quantity: Quantity) {
        match self.position(name.as_str()) {
            Some(idx) => self.entries[idx].quantity = quantity,
            None => self.entries.push(StockEntry { name, quantity }),
        }
    }
}

impl FromIterator<(ItemName, Quantity)> for Inventory {
    fn from_iter<T: IntoIterator<Item = (ItemName, Quantity)>>(iter: T) -> Self {
        let mut inventory = Inventory::new();
        for (name, quantity) in iter {
            inventory.insert_stored(name, quantity);
        }
        inventory
    }
}

impl Serialize for Inventory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(&entry.name, &entry.quantity)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Inventory {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct InventoryVisitor;

        impl<'de> Visitor<'de> for InventoryVisitor {
            type Value = Inventory;

            fn expecting(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str("an object mapping item names to quantities")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut inventory = Inventory::new();
                while let Some((name, quantity)) = access.next_entry::<String, Quantity>()? {
                    inventory.insert_stored(ItemName::from_stored(name), quantity);
                }
                Ok(inventory)
            }
        }

        deserializer.deserialize_map(InventoryVisitor)
    }
}
