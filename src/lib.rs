//! # Stockroom
//!
//! > **Versioned mutations and stock invariants for a store backend.**
//!
//! Every `Product` and `Supplier` carries a version number. A write succeeds only if the
//! caller's expected version still matches the stored one, and then bumps it by exactly one.
//! Stock quantities never go negative, and a discount only touches the price of a product
//! that allows it.
//!
//! ## Architecture
//!
//! ### 1. The Core ([`occ`], [`stock`], [`discount`], [`error`])
//! Pure functions over entity snapshots. They take a row by value and hand back either the
//! next row or a [`StoreError`](error::StoreError). No I/O, no locks, no retries.
//!
//! ### 2. The Engine ([`framework`])
//! The generic `ResourceActor<T>` owns the rows of one entity type in its own Tokio task and
//! handles one request at a time. It runs each mutation hook on a clone of the stored row and
//! commits the clone only on success, which makes load, check and write one atomic step.
//!
//! ### 3. The Resources ([`model`], [`product_actor`], [`supplier_actor`])
//! `ActorEntity` implementations that route every mutation through the core.
//!
//! ### 4. The Interface ([`clients`])
//! [`ProductClient`](clients::ProductClient) and [`SupplierClient`](clients::SupplierClient)
//! validate ids, send requests and recover the typed error. Retrying a conflict is the
//! caller's choice; see [`retry_on_conflict`](clients::retry_on_conflict).
//!
//! ### 5. The Orchestrator ([`lifecycle`])
//! Configuration, tracing setup, and [`StoreSystem`](lifecycle::StoreSystem), which spawns the
//! actors and shuts them down.
//!
//! ## Running the Demo
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```

pub mod clients;
pub mod discount;
pub mod error;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod occ;
pub mod product_actor;
pub mod stock;
pub mod supplier_actor;
