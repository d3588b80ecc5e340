use super::actions::{SupplierAction, SupplierActionResult};
use crate::error::StoreError;
use crate::framework::ActorEntity;
use crate::model::{Supplier, SupplierCreate, SupplierId, SupplierUpdate};
use crate::occ;
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for Supplier {
    type Id = SupplierId;
    type Create = SupplierCreate;
    type Update = SupplierUpdate;
    type Action = SupplierAction;
    type ActionResult = SupplierActionResult;
    type Context = ();
    type Error = StoreError;

    fn from_create_params(id: SupplierId, params: SupplierCreate) -> Result<Self, StoreError> {
        Supplier::from_create(id, params)
    }

    async fn on_update(&mut self, update: SupplierUpdate, _ctx: &()) -> Result<(), StoreError> {
        let fields = update.fields;
        *self = occ::apply(self.clone(), update.version, |supplier| {
            supplier.with_fields(fields)
        })?;
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: SupplierAction,
        _ctx: &(),
    ) -> Result<SupplierActionResult, StoreError> {
        let next = match action {
            SupplierAction::GetVersion => return Ok(SupplierActionResult::Version(self.version)),
            SupplierAction::Enable { version } => occ::enable(self.clone(), version)?,
            SupplierAction::Disable { version } => occ::disable(self.clone(), version)?,
        };
        *self = next.clone();
        Ok(SupplierActionResult::Supplier(next))
    }
}
