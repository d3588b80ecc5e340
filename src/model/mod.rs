//! Pure data structures managed by the resource actors.

pub mod product;
pub mod supplier;

pub use product::*;
pub use supplier::*;
