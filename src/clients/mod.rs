//! Type-safe wrappers around [`ResourceClient`](crate::framework::ResourceClient).
//!
//! These are the calls the transport layer makes. Each returns a
//! [`StoreError`](crate::error::StoreError) whose
//! [`status_code`](crate::error::StoreError::status_code) is ready for the wire.

pub mod actor_client;
pub mod product_client;
pub mod retry;
pub mod supplier_client;

pub use actor_client::*;
pub use product_client::*;
pub use retry::*;
pub use supplier_client::*;
