//! Read-only rendering of a cart's contents.

use crate::model::{CartItem, ProductId};
use serde::Serialize;
use std::fmt::Display;

/// One rendered cart line with its computed subtotal.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartLine {
    pub product_id: ProductId,
    pub name: String,
    pub unit_price: f64,
    pub quantity: u32,
    pub subtotal: f64,
}

impl From<&CartItem> for CartLine {
    fn from(item: &CartItem) -> Self {
        Self {
            product_id: item.product_id(),
            name: item.product().name().to_string(),
            unit_price: item.product().price(),
            quantity: item.quantity(),
            subtotal: item.subtotal(),
        }
    }
}

/// Snapshot of a cart for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartView {
    pub lines: Vec<CartLine>,
    pub total: f64,
}

impl CartView {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl Display for CartView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return writeln!(f, "Cart is empty");
        }
        for line in &self.lines {
            writeln!(
                f,
                "{} x{} @ {:.2} = {:.2}",
                line.name, line.quantity, line.unit_price, line.subtotal
            )?;
        }
        writeln!(f, "Total: {:.2}", self.total)
    }
}
