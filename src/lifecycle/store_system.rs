use crate::clients::{ProductClient, SupplierClient};
use crate::error::StoreError;
use crate::lifecycle::config::StoreConfig;
use tracing::{error, info};

/// Owns the running resource actors and hands out their clients.
///
/// # Example
///
/// ```rust
/// use stockroom::lifecycle::{StoreConfig, StoreSystem};
///
/// #[tokio::main]
/// async fn main() {
///     let system = StoreSystem::new(&StoreConfig::default());
///     let products = system.product_client.clone();
///     drop(products);
///     system.shutdown().await.unwrap();
/// }
/// ```
pub struct StoreSystem {
    pub product_client: ProductClient,
    pub supplier_client: SupplierClient,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl StoreSystem {
    /// Spawns the Product and Supplier actors. Must be called inside a Tokio runtime.
    pub fn new(config: &StoreConfig) -> Self {
        let (product_actor, product_client) =
            crate::product_actor::new(config.actors.product_buffer);
        let (supplier_actor, supplier_client) =
            crate::supplier_actor::new(config.actors.supplier_buffer);

        // neither actor has dependencies
        let product_handle = tokio::spawn(product_actor.run(()));
        let supplier_handle = tokio::spawn(supplier_actor.run(()));

        Self {
            product_client: ProductClient::new(product_client),
            supplier_client: SupplierClient::new(supplier_client),
            handles: vec![product_handle, supplier_handle],
        }
    }

    /// Drops the system's clients and waits for the actors to drain their queues.
    ///
    /// Clones of the clients held elsewhere keep their actor alive, so drop them first.
    pub async fn shutdown(self) -> Result<(), StoreError> {
        info!("Shutting down store...");
        drop(self.product_client);
        drop(self.supplier_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = %e, "Actor task failed");
                return Err(StoreError::Persistence(format!("actor task failed: {e}")));
            }
        }

        info!("Store shutdown complete.");
        Ok(())
    }
}
