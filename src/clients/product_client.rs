//! # Product Client
//!
//! High-level API for the `Product` actor. Stock, status and discount calls without a
//! version argument resolve the version inside the actor; `update` and `adjust_stock` take
//! the caller's token.

use crate::clients::actor_client::ActorClient;
use crate::error::StoreError;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{Product, ProductCreate, ProductFields, ProductId, ProductUpdate};
use crate::occ::{self, ExpectedVersion};
use crate::product_actor::{ProductAction, ProductActionResult};
use crate::stock::StockDelta;
use async_trait::async_trait;
use rust_decimal::Decimal;
use tracing::{debug, instrument};

/// Client for interacting with the Product actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl ProductClient {
    pub fn new(inner: ResourceClient<Product>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Product> for ProductClient {
    type Error = StoreError;

    fn inner(&self) -> &ResourceClient<Product> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        StoreError::from(e)
    }

    fn raw_id(id: &ProductId) -> u32 {
        id.0
    }
}

impl ProductClient {
    #[instrument(skip(self))]
    pub async fn create_product(&self, params: ProductCreate) -> Result<ProductId, StoreError> {
        debug!("Sending request");
        Ok(self.inner.create(params).await?)
    }

    /// Changes the descriptive fields if `version` is still current.
    #[instrument(skip(self))]
    pub async fn update(
        &self,
        id: ProductId,
        version: i64,
        fields: ProductFields,
    ) -> Result<Product, StoreError> {
        occ::ensure_id(id.0)?;
        debug!("Sending request");
        Ok(self.inner.update(id, ProductUpdate { version, fields }).await?)
    }

    pub async fn enable(&self, id: ProductId) -> Result<Product, StoreError> {
        self.mutate(
            id,
            ProductAction::Enable {
                expected: ExpectedVersion::Latest,
            },
        )
        .await
    }

    pub async fn disable(&self, id: ProductId) -> Result<Product, StoreError> {
        self.mutate(
            id,
            ProductAction::Disable {
                expected: ExpectedVersion::Latest,
            },
        )
        .await
    }

    /// Replaces the stock quantity.
    pub async fn update_stock(&self, id: ProductId, quantity: i64) -> Result<Product, StoreError> {
        self.adjust_stock(id, ExpectedVersion::Latest, StockDelta::set(quantity))
            .await
    }

    pub async fn increase_stock(&self, id: ProductId, amount: i64) -> Result<Product, StoreError> {
        self.adjust_stock(id, ExpectedVersion::Latest, StockDelta::increase(amount))
            .await
    }

    pub async fn decrease_stock(&self, id: ProductId, amount: i64) -> Result<Product, StoreError> {
        self.adjust_stock(id, ExpectedVersion::Latest, StockDelta::decrease(amount))
            .await
    }

    /// Applies a stock delta, optionally guarded by a version the caller read earlier.
    ///
    /// A stale token fails with `VersionConflict` even if the delta itself would be valid.
    pub async fn adjust_stock(
        &self,
        id: ProductId,
        expected: impl Into<ExpectedVersion>,
        delta: StockDelta,
    ) -> Result<Product, StoreError> {
        let expected = expected.into();
        self.mutate(id, ProductAction::AdjustStock { delta, expected })
            .await
    }

    #[instrument(skip(self))]
    pub async fn get_stock(&self, id: ProductId) -> Result<i64, StoreError> {
        match self.action(id, ProductAction::GetStock).await? {
            ProductActionResult::Stock(quantity) => Ok(quantity),
            other => Err(unexpected(other)),
        }
    }

    pub async fn enable_discount(&self, id: ProductId) -> Result<Product, StoreError> {
        self.mutate(
            id,
            ProductAction::EnableDiscount {
                expected: ExpectedVersion::Latest,
            },
        )
        .await
    }

    pub async fn disable_discount(&self, id: ProductId) -> Result<Product, StoreError> {
        self.mutate(
            id,
            ProductAction::DisableDiscount {
                expected: ExpectedVersion::Latest,
            },
        )
        .await
    }

    /// Discounts the current sale price by `percent`, compounding on earlier discounts.
    pub async fn apply_discount(
        &self,
        id: ProductId,
        percent: Decimal,
    ) -> Result<Product, StoreError> {
        self.mutate(
            id,
            ProductAction::ApplyDiscount {
                percent,
                expected: ExpectedVersion::Latest,
            },
        )
        .await
    }

    #[instrument(skip(self))]
    pub async fn get_version(&self, id: ProductId) -> Result<i64, StoreError> {
        match self.action(id, ProductAction::GetVersion).await? {
            ProductActionResult::Version(version) => Ok(version),
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self))]
    async fn mutate(&self, id: ProductId, action: ProductAction) -> Result<Product, StoreError> {
        match self.action(id, action).await? {
            ProductActionResult::Product(product) => Ok(product),
            other => Err(unexpected(other)),
        }
    }

    async fn action(
        &self,
        id: ProductId,
        action: ProductAction,
    ) -> Result<ProductActionResult, StoreError> {
        occ::ensure_id(id.0)?;
        debug!("Sending request");
        Ok(self.inner.perform_action(id, action).await?)
    }
}

fn unexpected(result: ProductActionResult) -> StoreError {
    StoreError::Persistence(format!("unexpected product action result: {result:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::{create_mock_client, expect_action, MockClient};
    use crate::stock::StockOperation;
    use rust_decimal_macros::dec;

    fn widget(version: i64, stock: i64) -> Product {
        let mut product = Product::new(ProductId(1), "Widget", dec!(19.99), dec!(8), stock);
        product.version = version;
        product
    }

    #[tokio::test]
    async fn test_decrease_stock_sends_latest_delta() {
        let (client, mut receiver) = create_mock_client::<Product>(10);
        let product_client = ProductClient::new(client);

        let task =
            tokio::spawn(async move { product_client.decrease_stock(ProductId(1), 2).await });

        let (id, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert_eq!(id, ProductId(1));
        match action {
            ProductAction::AdjustStock { delta, expected } => {
                assert_eq!(delta.operation, StockOperation::Decrease);
                assert_eq!(delta.amount, 2);
                assert_eq!(expected, ExpectedVersion::Latest);
            }
            other => panic!("Expected AdjustStock, got {other:?}"),
        }
        responder
            .send(Ok(ProductActionResult::Product(widget(2, 3))))
            .unwrap();

        let product = task.await.unwrap().unwrap();
        assert_eq!(product.stock_quantity, 3);
    }

    #[tokio::test]
    async fn test_entity_error_keeps_its_type() {
        let (client, mut receiver) = create_mock_client::<Product>(10);
        let product_client = ProductClient::new(client);

        let task = tokio::spawn(async move {
            product_client
                .adjust_stock(ProductId(1), 3_i64, StockDelta::decrease(1))
                .await
        });

        let (_, _, responder) = expect_action(&mut receiver).await.unwrap();
        responder
            .send(Err(FrameworkError::EntityError(Box::new(
                StoreError::VersionConflict {
                    expected: 3,
                    actual: 4,
                },
            ))))
            .unwrap();

        let err = task.await.unwrap().unwrap_err();
        assert_eq!(
            err,
            StoreError::VersionConflict {
                expected: 3,
                actual: 4,
            }
        );
        assert_eq!(err.status_code(), 409);
    }

    #[tokio::test]
    async fn test_zero_id_never_reaches_the_actor() {
        let mock = MockClient::<Product>::new();
        let product_client = ProductClient::new(mock.client());

        assert_eq!(product_client.get_stock(ProductId(0)).await, Err(StoreError::ZeroId));
        assert_eq!(product_client.get(ProductId(0)).await, Err(StoreError::ZeroId));
        assert_eq!(
            product_client.update(ProductId(0), 1, ProductFields::default()).await,
            Err(StoreError::ZeroId)
        );
        mock.verify();
    }

    #[tokio::test]
    async fn test_fetch_missing_is_not_found() {
        let mut mock = MockClient::<Product>::new();
        mock.expect_get(ProductId(5)).return_ok(None);
        let product_client = ProductClient::new(mock.client());

        assert_eq!(
            product_client.fetch(ProductId(5)).await,
            Err(StoreError::NotFound("product_5".into()))
        );
        mock.verify();
    }

    #[tokio::test]
    async fn test_get_version() {
        let mut mock = MockClient::<Product>::new();
        mock.expect_action(ProductId(1))
            .return_ok(ProductActionResult::Version(7));
        let product_client = ProductClient::new(mock.client());

        assert_eq!(product_client.get_version(ProductId(1)).await, Ok(7));
        mock.verify();
    }

    #[tokio::test]
    async fn test_mismatched_result_is_persistence_error() {
        let mut mock = MockClient::<Product>::new();
        mock.expect_action(ProductId(1))
            .return_ok(ProductActionResult::Stock(1));
        let product_client = ProductClient::new(mock.client());

        assert!(matches!(
            product_client.enable(ProductId(1)).await,
            Err(StoreError::Persistence(_))
        ));
        mock.verify();
    }
}
