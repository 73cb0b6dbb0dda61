//! JSON file-backed inventory store.
//!
//! The file holds a single JSON object mapping item name to quantity,
//! pretty-printed with 4-space indentation. A missing or blank file is an
//! empty inventory. Stored entries at or below zero are dropped on load with a
//! warning. Writes truncate and rewrite the file in place (no atomic
//! rename), so a crash mid-write can leave it truncated.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Serialize;

use stockfile_inventory::Inventory;

use super::r#trait::{InventoryStore, StoreError, StoreResult};
use crate::config::{CorruptFilePolicy, StoreConfig};

/// Default inventory file name, relative to the working directory.
pub const DEFAULT_FILE_NAME: &str = "inventory.json";

const INDENT: &[u8] = b"    ";

/// Inventory store backed by one JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    corrupt_policy: CorruptFilePolicy,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            corrupt_policy: CorruptFilePolicy::default(),
        }
    }

    pub fn from_config(config: &StoreConfig) -> Self {
        Self::new(config.path.clone()).with_corrupt_policy(config.corrupt_policy)
    }

    pub fn with_corrupt_policy(mut self, policy: CorruptFilePolicy) -> Self {
        self.corrupt_policy = policy;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn decode(&self, content: &str) -> StoreResult<Inventory> {
        let content = content.trim();
        if content.is_empty() {
            return Ok(Inventory::new());
        }

        match serde_json::from_str::<Inventory>(content) {
            Ok(mut inventory) => {
                for entry in inventory.purge_depleted() {
                    tracing::warn!(
                        path = %self.path.display(),
                        item = %entry.name,
                        qty = %entry.quantity,
                        "dropping stored entry at or below zero"
                    );
                }
                Ok(inventory)
            }
            Err(err) => match self.corrupt_policy {
                CorruptFilePolicy::Fail => Err(StoreError::Corrupt {
                    path: self.path.clone(),
                    reason: err.to_string(),
                }),
                CorruptFilePolicy::ResetEmpty => {
                    tracing::warn!(
                        path = %self.path.display(),
                        error = %err,
                        "corrupt inventory file; starting with empty inventory"
                    );
                    Ok(Inventory::new())
                }
            },
        }
    }
}

/// Encode an inventory as pretty-printed JSON with 4-space indentation.
pub fn encode_pretty(inventory: &Inventory) -> StoreResult<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(INDENT);
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    inventory
        .serialize(&mut serializer)
        .map_err(|e| StoreError::Serialization(e.to_string()))?;
    Ok(buf)
}

impl InventoryStore for JsonFileStore {
    fn load(&self) -> StoreResult<Inventory> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::info!(
                    path = %self.path.display(),
                    "inventory file not found; starting with empty inventory"
                );
                return Ok(Inventory::new());
            }
            Err(err) => return Err(StoreError::io(&self.path, err)),
        };

        let inventory = self.decode(&content)?;
        tracing::debug!(path = %self.path.display(), items = inventory.len(), "inventory loaded");
        Ok(inventory)
    }

    fn save(&self, inventory: &Inventory) -> StoreResult<()> {
        let bytes = encode_pretty(inventory)?;
        fs::write(&self.path, bytes).map_err(|err| StoreError::io(&self.path, err))?;
        tracing::debug!(path = %self.path.display(), items = inventory.len(), "inventory saved");
        Ok(())
    }
}
