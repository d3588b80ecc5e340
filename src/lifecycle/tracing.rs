//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter. Actors log with an
//! `entity_type` field instead of module paths, so targets are hidden.
//!
//! ```bash
//! RUST_LOG=info cargo run      # lifecycle, commits, rejections
//! RUST_LOG=debug cargo run     # request payloads and stock deltas
//! RUST_LOG=stockroom::framework=debug cargo run
//! ```
//!
//! With `RUST_LOG=info` a rejected stock decrease looks like:
//!
//! ```text
//! INFO Created entity_type="Product" id=product_1 size=1
//! INFO Action ok entity_type="Product" id=product_1
//! WARN Action rejected entity_type="Product" id=product_1 error=Insufficient stock: ...
//! ```

use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. Falls back to `info` when `RUST_LOG` is unset or invalid.
///
/// Calling it twice is harmless; the second install is ignored.
pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init();
}
