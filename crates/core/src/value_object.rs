//! Value object trait: equality by value, not identity.
//!
//! Inventory values (item names, quantities) have no identity of their own;
//! two names with the same text are the same name.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one (e.g. `Quantity::checked_add` returns a fresh quantity).
///
/// ## Design Constraints
///
/// The trait requires:
/// - **Clone**: value objects are cheap to copy around
/// - **PartialEq**: value objects are compared by their attribute values
/// - **Debug**: value objects show up in logs and test failures
///
/// ## Usage Pattern
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct ItemName(String);
///
/// impl ValueObject for ItemName {}
///
/// assert_eq!(ItemName("apple".into()), ItemName("apple".into()));
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
