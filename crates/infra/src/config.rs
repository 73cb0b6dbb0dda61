//! Configuration loading and representation.
//!
//! Settings come from environment variables with defaults:
//!
//! - `STOCKFILE_PATH`: inventory file (default `inventory.json`)
//! - `STOCKFILE_LOW_STOCK_THRESHOLD`: default low-stock threshold (default `5`)
//! - `STOCKFILE_RESET_ON_CORRUPT`: `1`/`true` treats a malformed file as empty

use std::path::PathBuf;

use stockfile_inventory::Quantity;

use crate::store::json_file::DEFAULT_FILE_NAME;

pub const PATH_VAR: &str = "STOCKFILE_PATH";
pub const THRESHOLD_VAR: &str = "STOCKFILE_LOW_STOCK_THRESHOLD";
pub const RESET_ON_CORRUPT_VAR: &str = "STOCKFILE_RESET_ON_CORRUPT";

pub const DEFAULT_LOW_STOCK_THRESHOLD: i32 = 5;

/// What to do when the inventory file exists but cannot be decoded.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum CorruptFilePolicy {
    /// Return `StoreError::Corrupt`.
    #[default]
    Fail,
    /// Log a warning and treat the file as an empty inventory.
    ///
    /// The next save overwrites whatever was in the file.
    ResetEmpty,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StoreConfig {
    pub path: PathBuf,
    pub low_stock_threshold: Quantity,
    pub corrupt_policy: CorruptFilePolicy,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_FILE_NAME),
            low_stock_threshold: Quantity::from(DEFAULT_LOW_STOCK_THRESHOLD),
            corrupt_policy: CorruptFilePolicy::Fail,
        }
    }
}

impl StoreConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup; unset keys keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(path) = lookup(PATH_VAR).filter(|p| !p.trim().is_empty()) {
            config.path = PathBuf::from(path);
        }

        if let Some(raw) = lookup(THRESHOLD_VAR) {
            match raw.trim().parse::<f64>().ok().and_then(|v| Quantity::new(v).ok()) {
                Some(threshold) => config.low_stock_threshold = threshold,
                None => tracing::warn!(
                    value = %raw,
                    "{THRESHOLD_VAR} is not a finite number; using default {DEFAULT_LOW_STOCK_THRESHOLD}"
                ),
            }
        }

        if let Some(raw) = lookup(RESET_ON_CORRUPT_VAR) {
            if matches!(raw.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes") {
                config.corrupt_policy = CorruptFilePolicy::ResetEmpty;
            }
        }

        config
    }
}
