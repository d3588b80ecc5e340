//! Product rows and their payloads.
//!
//! A [`Product`] is managed by a [`ResourceActor`](crate::framework::ResourceActor); see
//! [`crate::product_actor`] for the operations it supports.

use crate::discount::{self, Discountable};
use crate::error::StoreError;
use crate::occ::VersionedEntity;
use crate::stock::Stocked;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(pub u32);

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "product_{}", self.0)
    }
}

/// A product in the catalog, with its stock level and pricing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub sale_price: Decimal,
    pub cost_price: Decimal,
    pub stock_quantity: i64,
    pub allow_discount: bool,
    pub status: bool,
    pub version: i64,
}

impl Product {
    /// Creates a new, enabled Product at version 1 with discounts disabled.
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        sale_price: Decimal,
        cost_price: Decimal,
        stock_quantity: i64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: String::new(),
            sale_price,
            cost_price,
            stock_quantity,
            allow_discount: false,
            status: true,
            version: 1,
        }
    }

    /// Builds a validated Product from a create payload.
    pub fn from_create(id: ProductId, params: ProductCreate) -> Result<Self, StoreError> {
        validate_name(&params.name)?;
        let sale_price = checked_price(params.sale_price)?;
        let cost_price = checked_price(params.cost_price)?;
        if params.stock_quantity < 0 {
            return Err(StoreError::InvalidQuantity(params.stock_quantity));
        }
        Ok(Self {
            id,
            name: params.name,
            description: params.description,
            sale_price,
            cost_price,
            stock_quantity: params.stock_quantity,
            allow_discount: params.allow_discount,
            status: params.status.unwrap_or(true),
            version: 1,
        })
    }

    /// Applies the present fields. Stock, status and the discount gate have their own
    /// operations and are not touched here.
    pub fn with_fields(mut self, fields: ProductFields) -> Result<Self, StoreError> {
        if let Some(name) = fields.name {
            validate_name(&name)?;
            self.name = name;
        }
        if let Some(description) = fields.description {
            self.description = description;
        }
        if let Some(price) = fields.sale_price {
            self.sale_price = checked_price(price)?;
        }
        if let Some(price) = fields.cost_price {
            self.cost_price = checked_price(price)?;
        }
        Ok(self)
    }
}

fn validate_name(name: &str) -> Result<(), StoreError> {
    if name.trim().is_empty() {
        return Err(StoreError::Validation("product name must not be blank".into()));
    }
    Ok(())
}

/// Rounds to cents, then requires the stored value to be positive.
fn checked_price(price: Decimal) -> Result<Decimal, StoreError> {
    let rounded = discount::round_price(price);
    if rounded <= Decimal::ZERO {
        return Err(StoreError::InvalidPrice(price));
    }
    Ok(rounded)
}

impl VersionedEntity for Product {
    fn version(&self) -> i64 {
        self.version
    }
    fn set_version(&mut self, version: i64) {
        self.version = version;
    }
    fn status(&self) -> bool {
        self.status
    }
    fn set_status(&mut self, status: bool) {
        self.status = status;
    }
}

impl Stocked for Product {
    fn stock_quantity(&self) -> i64 {
        self.stock_quantity
    }
    fn set_stock_quantity(&mut self, quantity: i64) {
        self.stock_quantity = quantity;
    }
}

impl Discountable for Product {
    fn allow_discount(&self) -> bool {
        self.allow_discount
    }
    fn set_allow_discount(&mut self, allow: bool) {
        self.allow_discount = allow;
    }
    fn sale_price(&self) -> Decimal {
        self.sale_price
    }
    fn set_sale_price(&mut self, price: Decimal) {
        self.sale_price = price;
    }
}

/// Payload for creating a Product.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCreate {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub sale_price: Decimal,
    pub cost_price: Decimal,
    pub stock_quantity: i64,
    #[serde(default)]
    pub allow_discount: bool,
    /// Defaults to enabled.
    #[serde(default)]
    pub status: Option<bool>,
}

/// Editable Product fields. `None` leaves the field unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductFields {
    pub name: Option<String>,
    pub description: Option<String>,
    pub sale_price: Option<Decimal>,
    pub cost_price: Option<Decimal>,
}

/// An update request: the version the caller read, plus the fields to change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductUpdate {
    pub version: i64,
    pub fields: ProductFields,
}
