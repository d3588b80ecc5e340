//! Custom actions for the Product actor.
//!
//! Every mutating action carries an [`ExpectedVersion`]. The convenience calls on
//! [`ProductClient`](crate::clients::ProductClient) send [`ExpectedVersion::Latest`], which
//! the entity resolves against the row it was handed, so the version read and the write still
//! happen inside one actor step.

use crate::occ::ExpectedVersion;
use crate::model::Product;
use crate::stock::StockDelta;
use rust_decimal::Decimal;

/// Custom actions for Product entities.
#[derive(Debug, Clone)]
pub enum ProductAction {
    Enable { expected: ExpectedVersion },
    Disable { expected: ExpectedVersion },
    /// Increase, decrease or replace the stock quantity.
    ///
    /// # Errors
    /// `InvalidQuantity` for a non-positive delta or a negative target, `InsufficientStock`
    /// when a decrease exceeds the stock on hand.
    AdjustStock {
        delta: StockDelta,
        expected: ExpectedVersion,
    },
    /// Reads the stock quantity. Does not bump the version.
    GetStock,
    EnableDiscount { expected: ExpectedVersion },
    DisableDiscount { expected: ExpectedVersion },
    /// Discounts the current sale price by `percent`.
    ApplyDiscount {
        percent: Decimal,
        expected: ExpectedVersion,
    },
    /// Reads the stored version. Does not bump the version.
    GetVersion,
}

/// Results from ProductActions. Mutations hand back the committed row.
#[derive(Debug, Clone)]
pub enum ProductActionResult {
    Product(Product),
    Stock(i64),
    Version(i64),
}
