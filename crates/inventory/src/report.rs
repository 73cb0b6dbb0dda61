//! Human-readable stock report.

use crate::item::{ItemName, Quantity};

/// Snapshot of every item line, in inventory order.
///
/// `Display` renders an `Items Report:` header followed by one
/// `<item> -> <qty>` line per item.
#[derive(Debug, Clone, PartialEq)]
pub struct StockReport {
    lines: Vec<(ItemName, Quantity)>,
}

impl StockReport {
    pub fn new(lines: Vec<(ItemName, Quantity)>) -> Self {
        Self { lines }
    }

    /// Item lines without the header.
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .iter()
            .map(|(name, qty)| format!("{name} -> {qty}"))
            .collect()
    }
}

impl core::fmt::Display for StockReport {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "Items Report:")?;
        for line in self.lines() {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_header_and_lines_in_order() {
        let report = StockReport::new(vec![
            (ItemName::new("apple").unwrap(), Quantity::from(7)),
            (ItemName::new("banana").unwrap(), Quantity::new(2.5).unwrap()),
        ]);
        assert_eq!(report.to_string(), "Items Report:\napple -> 7\nbanana -> 2.5\n");
    }

    #[test]
    fn empty_report_is_header_only() {
        let report = StockReport::new(Vec::new());
        assert_eq!(report.to_string(), "Items Report:\n");
    }
}
