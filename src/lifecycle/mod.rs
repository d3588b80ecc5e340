//! # System Lifecycle
//!
//! Starts the resource actors, wires their clients, and shuts them down.
//!
//! Shutdown relies on channel closure: once every client clone is dropped, each actor's
//! `recv()` returns `None`, it logs its final size and its task completes.
//! [`StoreSystem::shutdown`] drops the clients it owns and joins the tasks.
//!
//! Configuration ([`config`]) and tracing setup ([`setup_tracing`]) live here too.

pub mod config;
pub mod store_system;
pub mod tracing;

pub use self::config::*;
pub use self::store_system::*;
pub use self::tracing::*;
