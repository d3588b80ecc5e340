//! # Stock Ledger
//!
//! Bounded mutation of an on-hand quantity. The ledger only validates and transforms a
//! snapshot; the product entity runs every result through [`crate::occ::apply`] so that a
//! stock change and its version bump land together.

use crate::error::StoreError;
use serde::{Deserialize, Serialize};

/// Anything that carries a non-negative stock quantity.
pub trait Stocked {
    fn stock_quantity(&self) -> i64;
    fn set_stock_quantity(&mut self, quantity: i64);
}

/// The three ways a quantity can change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StockOperation {
    Increase,
    Decrease,
    Set,
}

/// A requested stock change. Consumed by a single request and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockDelta {
    pub operation: StockOperation,
    pub amount: i64,
}

impl StockDelta {
    pub fn increase(amount: i64) -> Self {
        Self {
            operation: StockOperation::Increase,
            amount,
        }
    }

    pub fn decrease(amount: i64) -> Self {
        Self {
            operation: StockOperation::Decrease,
            amount,
        }
    }

    pub fn set(quantity: i64) -> Self {
        Self {
            operation: StockOperation::Set,
            amount: quantity,
        }
    }

    /// Validates the delta against `current` and returns the changed snapshot.
    pub fn apply<E: Stocked>(self, current: E) -> Result<E, StoreError> {
        match self.operation {
            StockOperation::Increase => increase(current, self.amount),
            StockOperation::Decrease => decrease(current, self.amount),
            StockOperation::Set => set(current, self.amount),
        }
    }
}

/// Replaces the quantity. Negative targets are rejected.
pub fn set<E: Stocked>(mut current: E, new_quantity: i64) -> Result<E, StoreError> {
    if new_quantity < 0 {
        return Err(StoreError::InvalidQuantity(new_quantity));
    }
    current.set_stock_quantity(new_quantity);
    Ok(current)
}

/// Adds a strictly positive amount. There is no upper bound short of `i64` overflow.
pub fn increase<E: Stocked>(mut current: E, amount: i64) -> Result<E, StoreError> {
    if amount <= 0 {
        return Err(StoreError::InvalidQuantity(amount));
    }
    let next = current
        .stock_quantity()
        .checked_add(amount)
        .ok_or(StoreError::InvalidQuantity(amount))?;
    current.set_stock_quantity(next);
    Ok(current)
}

/// Removes a strictly positive amount that does not exceed the stock on hand.
pub fn decrease<E: Stocked>(mut current: E, amount: i64) -> Result<E, StoreError> {
    if amount <= 0 {
        return Err(StoreError::InvalidQuantity(amount));
    }
    let available = current.stock_quantity();
    if amount > available {
        return Err(StoreError::InsufficientStock {
            requested: amount,
            available,
        });
    }
    current.set_stock_quantity(available - amount);
    Ok(current)
}

pub fn get<E: Stocked>(current: &E) -> i64 {
    current.stock_quantity()
}
