//! # ActorClient Trait
//!
//! Common read and delete calls for resource-specific clients, built on top of a generic
//! `ResourceClient`.

use crate::error::StoreError;
use crate::framework::{ActorEntity, FrameworkError, ResourceClient};
use crate::occ;
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit standard operations.
///
/// Implementors provide the inner client, the error mapping and the numeric form of their
/// id; `get`, `fetch` and `delete` come for free and reject a zero id before any message is
/// sent.
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: From<StoreError> + Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the specific resource error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    fn raw_id(id: &T::Id) -> u32;

    fn check_id(id: &T::Id) -> Result<(), Self::Error> {
        occ::ensure_id(Self::raw_id(id)).map_err(Self::Error::from)
    }

    /// Fetch an entity by ID, `None` if it does not exist.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        Self::check_id(&id)?;
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Like [`get`](Self::get), but a missing entity is a `NotFound` error.
    async fn fetch(&self, id: T::Id) -> Result<T, Self::Error> {
        let key = id.to_string();
        self.get(id)
            .await?
            .ok_or_else(|| StoreError::NotFound(key).into())
    }

    /// Delete an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<(), Self::Error> {
        Self::check_id(&id)?;
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }
}
