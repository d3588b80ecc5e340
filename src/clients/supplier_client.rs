//! # Supplier Client
//!
//! High-level API for the `Supplier` actor. Every status change needs the version the
//! caller last read.

use crate::clients::actor_client::ActorClient;
use crate::error::StoreError;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{Supplier, SupplierCreate, SupplierFields, SupplierId, SupplierUpdate};
use crate::occ;
use crate::supplier_actor::{SupplierAction, SupplierActionResult};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Supplier actor.
#[derive(Clone)]
pub struct SupplierClient {
    inner: ResourceClient<Supplier>,
}

impl SupplierClient {
    pub fn new(inner: ResourceClient<Supplier>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Supplier> for SupplierClient {
    type Error = StoreError;

    fn inner(&self) -> &ResourceClient<Supplier> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        StoreError::from(e)
    }

    fn raw_id(id: &SupplierId) -> u32 {
        id.0
    }
}

impl SupplierClient {
    #[instrument(skip(self))]
    pub async fn create_supplier(&self, params: SupplierCreate) -> Result<SupplierId, StoreError> {
        debug!("Sending request");
        Ok(self.inner.create(params).await?)
    }

    #[instrument(skip(self))]
    pub async fn update(
        &self,
        id: SupplierId,
        version: i64,
        fields: SupplierFields,
    ) -> Result<Supplier, StoreError> {
        occ::ensure_id(id.0)?;
        debug!("Sending request");
        Ok(self.inner.update(id, SupplierUpdate { version, fields }).await?)
    }

    #[instrument(skip(self))]
    pub async fn enable(&self, id: SupplierId, version: i64) -> Result<Supplier, StoreError> {
        self.status_change(id, SupplierAction::Enable { version }).await
    }

    #[instrument(skip(self))]
    pub async fn disable(&self, id: SupplierId, version: i64) -> Result<Supplier, StoreError> {
        self.status_change(id, SupplierAction::Disable { version }).await
    }

    #[instrument(skip(self))]
    pub async fn get_version(&self, id: SupplierId) -> Result<i64, StoreError> {
        occ::ensure_id(id.0)?;
        match self.inner.perform_action(id, SupplierAction::GetVersion).await? {
            SupplierActionResult::Version(version) => Ok(version),
            other => Err(unexpected(other)),
        }
    }

    async fn status_change(
        &self,
        id: SupplierId,
        action: SupplierAction,
    ) -> Result<Supplier, StoreError> {
        occ::ensure_id(id.0)?;
        debug!("Sending request");
        match self.inner.perform_action(id, action).await? {
            SupplierActionResult::Supplier(supplier) => Ok(supplier),
            other => Err(unexpected(other)),
        }
    }
}

fn unexpected(result: SupplierActionResult) -> StoreError {
    StoreError::Persistence(format!("unexpected supplier action result: {result:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::{create_mock_client, expect_action, expect_update, MockClient};

    #[tokio::test]
    async fn test_enable_forwards_caller_version() {
        let (client, mut receiver) = create_mock_client::<Supplier>(10);
        let supplier_client = SupplierClient::new(client);

        let task = tokio::spawn(async move { supplier_client.enable(SupplierId(3), 4).await });

        let (id, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert_eq!(id, SupplierId(3));
        assert!(matches!(action, SupplierAction::Enable { version: 4 }));

        let mut enabled = Supplier::new(SupplierId(3), "Acme", "", "");
        enabled.version = 5;
        responder
            .send(Ok(SupplierActionResult::Supplier(enabled)))
            .unwrap();

        assert_eq!(task.await.unwrap().unwrap().version, 5);
    }

    #[tokio::test]
    async fn test_update_wraps_version_and_fields() {
        let (client, mut receiver) = create_mock_client::<Supplier>(10);
        let supplier_client = SupplierClient::new(client);

        let task = tokio::spawn(async move {
            supplier_client
                .update(
                    SupplierId(1),
                    2,
                    SupplierFields {
                        phone: Some("555-0199".into()),
                        ..Default::default()
                    },
                )
                .await
        });

        let (id, update, responder) = expect_update(&mut receiver).await.unwrap();
        assert_eq!(id, SupplierId(1));
        assert_eq!(update.version, 2);
        assert_eq!(update.fields.phone.as_deref(), Some("555-0199"));
        responder
            .send(Err(FrameworkError::NotFound(id.to_string())))
            .unwrap();

        assert_eq!(
            task.await.unwrap(),
            Err(StoreError::NotFound("supplier_1".into()))
        );
    }

    #[tokio::test]
    async fn test_zero_id_rejected() {
        let mock = MockClient::<Supplier>::new();
        let supplier_client = SupplierClient::new(mock.client());
        assert_eq!(
            supplier_client.disable(SupplierId(0), 1).await,
            Err(StoreError::ZeroId)
        );
        assert_eq!(supplier_client.delete(SupplierId(0)).await, Err(StoreError::ZeroId));
        mock.verify();
    }
}
