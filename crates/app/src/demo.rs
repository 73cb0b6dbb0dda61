//! Demonstration routine: a short add/remove/query session printed as text.

use std::io::Write;

use anyhow::Context;

use stockfile_infra::{InventoryStore, StockService};
use stockfile_inventory::{ItemName, Quantity};

pub const SECURITY_NOTICE: &str = "Eval function removed for security.";

/// Run the demo against `service`, writing plain-text results to `out`.
///
/// Adds 10 apple and 2 banana, removes 3 apple, then prints the apple stock,
/// the low-stock items for the service's default threshold, the full report,
/// and a fixed notice.
pub fn run<S, W>(service: &StockService<S>, out: &mut W) -> anyhow::Result<()>
where
    S: InventoryStore,
    W: Write,
{
    let apple = ItemName::new("apple")?;
    let banana = ItemName::new("banana")?;

    let mut logs = Vec::new();
    service
        .add(&apple, Quantity::from(10), Some(&mut logs))
        .context("adding apple")?;
    service
        .add(&banana, Quantity::from(2), Some(&mut logs))
        .context("adding banana")?;
    service
        .remove(&apple, Quantity::from(3))
        .context("removing apple")?;

    for entry in &logs {
        tracing::debug!(entry = %entry, "stock log");
    }

    let apple_stock = service.get_quantity(&apple)?;
    writeln!(out, "Apple stock: {apple_stock}")?;

    let low = service.list_low_default()?;
    let low: Vec<String> = low.iter().map(|n| format!("'{n}'")).collect();
    writeln!(out, "Low items: [{}]", low.join(", "))?;

    writeln!(out)?;
    write!(out, "{}", service.report()?)?;
    writeln!(out, "{SECURITY_NOTICE}")?;
    Ok(())
}
