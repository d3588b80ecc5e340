//! Supplier resource logic: contact details and an enabled flag, versioned like every
//! other resource.

pub mod actions;
pub mod entity;

pub use actions::*;

use crate::framework::{ResourceActor, ResourceClient};
use crate::model::Supplier;

/// Creates a new Supplier actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Supplier>, ResourceClient<Supplier>) {
    ResourceActor::new(buffer_size)
}
