use serde::{Deserialize, Deserializer, Serialize, Serializer};

use stockfile_core::{DomainError, DomainResult, ValueObject};

/// Largest magnitude at which every whole `f64` is exactly representable as an integer.
const MAX_EXACT_INT: f64 = 9_007_199_254_740_992.0;

/// Inventory item name (case-sensitive).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ItemName(String);

impl ItemName {
    /// Validate and wrap a caller-supplied name.
    pub fn new(name: impl Into<String>) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("item name cannot be empty"));
        }
        Ok(Self(name))
    }

    /// Wrap a name read back from storage, as stored.
    pub(crate) fn from_stored(name: String) -> Self {
        Self(name)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for ItemName {}

impl core::fmt::Display for ItemName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Stock quantity.
///
/// Integer or fractional, always finite. Whole values serialize and display as
/// integers (`10`), fractional ones as floats (`2.5`).
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Default)]
pub struct Quantity(f64);

impl Quantity {
    pub const ZERO: Quantity = Quantity(0.0);

    pub fn new(value: f64) -> DomainResult<Self> {
        if !value.is_finite() {
            return Err(DomainError::validation(format!(
                "quantity must be a finite number, got {value}"
            )));
        }
        Ok(Self(value))
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// Entries at or below zero are never kept in an inventory.
    pub fn is_depleted(self) -> bool {
        self.0 <= 0.0
    }

    pub fn checked_add(self, other: Quantity) -> DomainResult<Self> {
        Self::new(self.0 + other.0)
            .map_err(|_| DomainError::invariant("quantity overflow"))
    }

    pub fn checked_sub(self, other: Quantity) -> DomainResult<Self> {
        Self::new(self.0 - other.0)
            .map_err(|_| DomainError::invariant("quantity overflow"))
    }

    fn as_whole(self) -> Option<i64> {
        if self.0.fract() == 0.0 && self.0.abs() < MAX_EXACT_INT {
            Some(self.0 as i64)
        } else {
            None
        }
    }
}

impl ValueObject for Quantity {}

impl From<i32> for Quantity {
    fn from(value: i32) -> Self {
        Self(f64::from(value))
    }
}

impl core::fmt::Display for Quantity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.as_whole() {
            Some(n) => write!(f, "{n}"),
            None => write!(f, "{}", self.0),
        }
    }
}

impl Serialize for Quantity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.as_whole() {
            Some(n) => serializer.serialize_i64(n),
            None => serializer.serialize_f64(self.0),
        }
    }
}

impl<'de> Deserialize<'de> for Quantity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;
        Quantity::new(value).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_name_rejects_blank() {
        let err = ItemName::new("   ").unwrap_err();
        match err {
            DomainError::Validation(_) => {}
            _ => panic!("Expected Validation error for blank name"),
        }
        assert!(ItemName::new("").is_err());
    }

    #[test]
    fn item_name_is_case_sensitive() {
        let lower = ItemName::new("apple").unwrap();
        let upper = ItemName::new("Apple").unwrap();
        assert_ne!(lower, upper);
    }

    #[test]
    fn quantity_rejects_non_finite() {
        assert!(Quantity::new(f64::NAN).is_err());
        assert!(Quantity::new(f64::INFINITY).is_err());
        assert!(Quantity::new(f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn whole_quantities_display_as_integers() {
        assert_eq!(Quantity::from(7).to_string(), "7");
        assert_eq!(Quantity::new(2.5).unwrap().to_string(), "2.5");
        assert_eq!(Quantity::from(-3).to_string(), "-3");
    }

    #[test]
    fn whole_quantities_serialize_as_integers() {
        assert_eq!(serde_json::to_string(&Quantity::from(10)).unwrap(), "10");
        assert_eq!(serde_json::to_string(&Quantity::new(0.25).unwrap()).unwrap(), "0.25");
    }

    #[test]
    fn quantity_deserializes_from_int_and_float() {
        let q: Quantity = serde_json::from_str("4").unwrap();
        assert_eq!(q, Quantity::from(4));
        let q: Quantity = serde_json::from_str("1.5").unwrap();
        assert_eq!(q.value(), 1.5);
        assert!(serde_json::from_str::<Quantity>("\"ten\"").is_err());
    }

    #[test]
    fn depletion_boundary_is_inclusive() {
        assert!(Quantity::ZERO.is_depleted());
        assert!(Quantity::from(-1).is_depleted());
        assert!(!Quantity::new(0.01).unwrap().is_depleted());
    }

    #[test]
    fn overflowing_arithmetic_is_an_invariant_violation() {
        let huge = Quantity::new(f64::MAX).unwrap();
        let err = huge.checked_add(huge).unwrap_err();
        match err {
            DomainError::InvariantViolation(_) => {}
            _ => panic!("Expected InvariantViolation on overflow"),
        }
    }
}
