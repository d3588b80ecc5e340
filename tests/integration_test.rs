use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use stockroom::clients::ActorClient;
use stockroom::error::StoreError;
use stockroom::lifecycle::{StoreConfig, StoreSystem};
use stockroom::model::{ProductCreate, ProductFields, ProductId, SupplierCreate, SupplierId};
use stockroom::stock::StockDelta;

fn widget(stock: i64) -> ProductCreate {
    ProductCreate {
        name: "Widget".to_string(),
        description: "Blue".to_string(),
        sale_price: dec!(100.00),
        cost_price: dec!(40.00),
        stock_quantity: stock,
        allow_discount: false,
        status: None,
    }
}

/// A product at version 3 with 5 units: sell out, replay a stale token, then overdraw.
#[tokio::test]
async fn test_product_stock_scenario() {
    let system = StoreSystem::new(&StoreConfig::default());
    let products = &system.product_client;

    let id = products.create_product(widget(5)).await.unwrap();
    products.disable(id).await.unwrap();
    let product = products.enable(id).await.unwrap();
    assert_eq!((product.version, product.stock_quantity), (3, 5));

    let product = products
        .adjust_stock(id, 3_i64, StockDelta::decrease(5))
        .await
        .unwrap();
    assert_eq!((product.version, product.stock_quantity), (4, 0));

    let err = products
        .adjust_stock(id, 3_i64, StockDelta::decrease(1))
        .await
        .unwrap_err();
    assert_eq!(
        err,
        StoreError::VersionConflict {
            expected: 3,
            actual: 4,
        }
    );
    assert_eq!(err.status_code(), 409);

    let version = products.get_version(id).await.unwrap();
    assert_eq!(version, 4);
    let err = products
        .adjust_stock(id, version, StockDelta::decrease(1))
        .await
        .unwrap_err();
    assert_eq!(
        err,
        StoreError::InsufficientStock {
            requested: 1,
            available: 0,
        }
    );

    let stored = products.fetch(id).await.unwrap();
    assert_eq!((stored.version, stored.stock_quantity), (4, 0));

    system.shutdown().await.unwrap();
}

/// A disabled supplier at version 1: enable succeeds once, the replay conflicts.
#[tokio::test]
async fn test_supplier_enable_scenario() {
    let system = StoreSystem::new(&StoreConfig::default());
    let suppliers = &system.supplier_client;

    let id = suppliers
        .create_supplier(SupplierCreate {
            name: "Acme".to_string(),
            email: "sales@acme.test".to_string(),
            phone: "555-0100".to_string(),
            status: Some(false),
        })
        .await
        .unwrap();
    assert_eq!(id, SupplierId(1));

    let supplier = suppliers.enable(id, 1).await.unwrap();
    assert!(supplier.status);
    assert_eq!(supplier.version, 2);

    assert_eq!(
        suppliers.enable(id, 1).await,
        Err(StoreError::VersionConflict {
            expected: 1,
            actual: 2,
        })
    );
    assert_eq!(suppliers.get_version(id).await, Ok(2));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_double_disable_bumps_twice() {
    let system = StoreSystem::new(&StoreConfig::default());
    let products = &system.product_client;

    let id = products.create_product(widget(1)).await.unwrap();
    products.disable(id).await.unwrap();
    let product = products.disable(id).await.unwrap();
    assert!(!product.status);
    assert_eq!(product.version, 3);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_discount_lifecycle() {
    let system = StoreSystem::new(&StoreConfig::default());
    let products = &system.product_client;
    let id = products.create_product(widget(0)).await.unwrap();

    assert_eq!(
        products.apply_discount(id, dec!(10)).await,
        Err(StoreError::DiscountNotAllowed)
    );
    assert_eq!(products.get_version(id).await, Ok(1));

    products.enable_discount(id).await.unwrap();
    products.apply_discount(id, dec!(10)).await.unwrap();
    let product = products.apply_discount(id, dec!(10)).await.unwrap();
    assert_eq!(product.sale_price, dec!(81.00));
    assert_eq!(product.version, 4);

    assert_eq!(
        products.apply_discount(id, dec!(100)).await,
        Err(StoreError::InvalidPercent(dec!(100)))
    );

    let product = products.disable_discount(id).await.unwrap();
    assert!(!product.allow_discount);
    assert_eq!(product.version, 5);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_update_and_delete() {
    let system = StoreSystem::new(&StoreConfig::default());
    let products = &system.product_client;
    let id = products.create_product(widget(2)).await.unwrap();

    let product = products
        .update(
            id,
            1,
            ProductFields {
                name: Some("Gadget".to_string()),
                cost_price: Some(dec!(45)),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(product.name, "Gadget");
    assert_eq!(product.version, 2);
    assert_eq!(product.stock_quantity, 2);

    let err = products
        .update(
            id,
            2,
            ProductFields {
                sale_price: Some(dec!(-1)),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err, StoreError::InvalidPrice(dec!(-1)));
    assert_eq!(products.get_version(id).await, Ok(2));

    assert_eq!(
        products.update(id, 0, ProductFields::default()).await,
        Err(StoreError::InvalidVersion(0))
    );

    products.delete(id).await.unwrap();
    assert_eq!(products.get(id).await, Ok(None));
    assert_eq!(
        products.get_stock(id).await,
        Err(StoreError::NotFound("product_1".to_string()))
    );

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_rejected_create_does_not_consume_an_id() {
    let system = StoreSystem::new(&StoreConfig::default());
    let products = &system.product_client;

    let err = products.create_product(widget(-3)).await.unwrap_err();
    assert_eq!(err, StoreError::InvalidQuantity(-3));
    assert_eq!(err.status_code(), 400);

    assert_eq!(products.create_product(widget(1)).await, Ok(ProductId(1)));
    assert_eq!(products.get_stock(ProductId(0)).await, Err(StoreError::ZeroId));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_sub_cent_prices_never_reach_the_store() {
    let system = StoreSystem::new(&StoreConfig::default());
    let products = &system.product_client;

    let mut tiny = widget(1);
    tiny.sale_price = dec!(0.001);
    assert_eq!(
        products.create_product(tiny).await,
        Err(StoreError::InvalidPrice(dec!(0.001)))
    );

    let id = products.create_product(widget(1)).await.unwrap();
    let err = products
        .update(
            id,
            1,
            ProductFields {
                cost_price: Some(dec!(0.004)),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err, StoreError::InvalidPrice(dec!(0.004)));

    let stored = products.fetch(id).await.unwrap();
    assert_eq!((stored.cost_price, stored.version), (dec!(40.00), 1));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_overflowing_discount_leaves_the_actor_serving() {
    let system = StoreSystem::new(&StoreConfig::default());
    let products = &system.product_client;

    let huge = Decimal::MAX / dec!(2);
    let mut params = widget(3);
    params.sale_price = huge;
    params.allow_discount = true;
    let id = products.create_product(params).await.unwrap();

    assert_eq!(
        products.apply_discount(id, dec!(10)).await,
        Err(StoreError::InvalidPrice(huge))
    );

    assert_eq!(products.get_stock(id).await, Ok(3));
    let other = products.create_product(widget(1)).await.unwrap();
    assert_eq!(products.decrease_stock(other, 1).await.unwrap().stock_quantity, 0);

    system.shutdown().await.unwrap();
}
