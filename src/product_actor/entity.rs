//! [`ActorEntity`] implementation for [`Product`].
//!
//! Each hook loads nothing itself: the actor passes in a draft of the stored row, the hook
//! routes it through [`occ::apply`] together with the stock or discount rule, and the
//! actor commits the draft only if the hook returns `Ok`.

use super::actions::{ProductAction, ProductActionResult};
use crate::discount;
use crate::error::StoreError;
use crate::framework::ActorEntity;
use crate::model::{Product, ProductCreate, ProductId, ProductUpdate};
use crate::occ;
use crate::stock;
use async_trait::async_trait;
use tracing::debug;

#[async_trait]
impl ActorEntity for Product {
    type Id = ProductId;
    type Create = ProductCreate;
    type Update = ProductUpdate;
    type Action = ProductAction;
    type ActionResult = ProductActionResult;
    type Context = ();
    type Error = StoreError;

    fn from_create_params(id: ProductId, params: ProductCreate) -> Result<Self, StoreError> {
        Product::from_create(id, params)
    }

    async fn on_update(&mut self, update: ProductUpdate, _ctx: &()) -> Result<(), StoreError> {
        let fields = update.fields;
        *self = occ::apply(self.clone(), update.version, |product| {
            product.with_fields(fields)
        })?;
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: ProductAction,
        _ctx: &(),
    ) -> Result<ProductActionResult, StoreError> {
        let current = self.version;
        let next = match action {
            ProductAction::GetStock => {
                return Ok(ProductActionResult::Stock(stock::get(self)));
            }
            ProductAction::GetVersion => {
                return Ok(ProductActionResult::Version(current));
            }
            ProductAction::Enable { expected } => {
                occ::enable(self.clone(), expected.resolve(current))?
            }
            ProductAction::Disable { expected } => {
                occ::disable(self.clone(), expected.resolve(current))?
            }
            ProductAction::AdjustStock { delta, expected } => {
                debug!(id = %self.id, ?delta, stock = self.stock_quantity, "Adjusting stock");
                occ::apply(self.clone(), expected.resolve(current), |product| {
                    delta.apply(product)
                })?
            }
            ProductAction::EnableDiscount { expected } => {
                occ::apply(self.clone(), expected.resolve(current), |product| {
                    Ok(discount::enable(product))
                })?
            }
            ProductAction::DisableDiscount { expected } => {
                occ::apply(self.clone(), expected.resolve(current), |product| {
                    Ok(discount::disable(product))
                })?
            }
            ProductAction::ApplyDiscount { percent, expected } => {
                occ::apply(self.clone(), expected.resolve(current), |product| {
                    discount::apply(product, percent)
                })?
            }
        };
        *self = next.clone();
        Ok(ProductActionResult::Product(next))
    }
}
