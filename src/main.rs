//! Walks one product and one supplier through the versioned operations.
//!
//! Configuration comes from `stockroom.yaml` and `STOCKROOM__*` variables; see
//! [`StoreConfig`].

use rust_decimal::Decimal;
use stockroom::clients::{retry_on_conflict, ActorClient};
use stockroom::error::StoreError;
use stockroom::lifecycle::{setup_tracing, StoreConfig, StoreSystem};
use stockroom::model::{ProductCreate, ProductFields, SupplierCreate};
use stockroom::stock::StockDelta;
use tracing::{info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let config = StoreConfig::load(None)?;
    info!(?config, "Starting store");
    let system = StoreSystem::new(&config);
    let products = system.product_client.clone();
    let suppliers = system.supplier_client.clone();

    let product_id = products
        .create_product(ProductCreate {
            name: "Espresso Beans".to_string(),
            description: "1kg bag".to_string(),
            sale_price: Decimal::new(2499, 2),
            cost_price: Decimal::new(1150, 2),
            stock_quantity: 5,
            allow_discount: false,
            status: None,
        })
        .await?;
    info!(%product_id, "Product created");

    let span = tracing::info_span!("stock_workflow");
    async {
        let before = products.fetch(product_id).await?;
        let product = products
            .adjust_stock(product_id, before.version, StockDelta::decrease(5))
            .await?;
        info!(stock = product.stock_quantity, version = product.version, "Sold out");

        // replaying the same token fails
        if let Err(e) = products
            .adjust_stock(product_id, before.version, StockDelta::decrease(1))
            .await
        {
            warn!(error = %e, status = e.status_code(), "Stale write rejected");
        }

        if let Err(e) = products.decrease_stock(product_id, 1).await {
            warn!(error = %e, status = e.status_code(), "Decrease rejected");
        }

        products.update_stock(product_id, 20).await?;
        Ok::<_, StoreError>(())
    }
    .instrument(span)
    .await?;

    let span = tracing::info_span!("pricing");
    async {
        if let Err(e) = products.apply_discount(product_id, Decimal::TEN).await {
            warn!(error = %e, "Discount rejected");
        }
        products.enable_discount(product_id).await?;
        let product = products.apply_discount(product_id, Decimal::TEN).await?;
        info!(price = %product.sale_price, "Discount applied");

        // a read-recompute-write loop that survives concurrent writers
        let renamed = retry_on_conflict(&config.retry, || {
            let products = products.clone();
            async move {
                let version = products.get_version(product_id).await?;
                products
                    .update(
                        product_id,
                        version,
                        ProductFields {
                            name: Some("Espresso Beans (House)".to_string()),
                            ..Default::default()
                        },
                    )
                    .await
            }
        })
        .await?;
        info!(name = %renamed.name, version = renamed.version, "Product renamed");
        Ok::<_, StoreError>(())
    }
    .instrument(span)
    .await?;

    let supplier_id = suppliers
        .create_supplier(SupplierCreate {
            name: "Roastery Co".to_string(),
            email: "orders@roastery.test".to_string(),
            phone: "555-0142".to_string(),
            status: Some(false),
        })
        .await?;
    let supplier = suppliers.enable(supplier_id, 1).await?;
    info!(%supplier_id, status = supplier.status, version = supplier.version, "Supplier enabled");
    if let Err(e) = suppliers.enable(supplier_id, 1).await {
        warn!(error = %e, "Stale enable rejected");
    }

    drop(products);
    drop(suppliers);
    system.shutdown().await?;

    info!("Demo completed");
    Ok(())
}
