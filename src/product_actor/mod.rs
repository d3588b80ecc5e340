//! # Product Actor
//!
//! The resource actor for [`Product`]: catalog fields, stock quantity and discounting, all
//! under optimistic concurrency.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`Product`]
//! - [`actions`] - [`ProductAction`] and [`ProductActionResult`]
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use stockroom::clients::ProductClient;
//! use stockroom::model::ProductCreate;
//! use stockroom::product_actor;
//! use rust_decimal::Decimal;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, generic_client) = product_actor::new(32);
//!     let client = ProductClient::new(generic_client);
//!     tokio::spawn(actor.run(()));
//!
//!     let id = client
//!         .create_product(ProductCreate {
//!             name: "Widget".to_string(),
//!             description: String::new(),
//!             sale_price: Decimal::new(2999, 2),
//!             cost_price: Decimal::new(1200, 2),
//!             stock_quantity: 10,
//!             allow_discount: false,
//!             status: None,
//!         })
//!         .await?;
//!
//!     let product = client.decrease_stock(id, 3).await?;
//!     assert_eq!((product.stock_quantity, product.version), (7, 2));
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod entity;

pub use actions::*;

use crate::framework::{ResourceActor, ResourceClient};
use crate::model::Product;

/// Creates a new Product actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Product>, ResourceClient<Product>) {
    ResourceActor::new(buffer_size)
}
