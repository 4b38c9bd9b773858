//! # ActorClient Trait
//!
//! Common interface for resource-specific clients, providing default `get`,
//! `list` and `delete` methods on top of a generic `ResourceClient`.

use crate::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit standard operations.
///
/// Implementors supply the inner generic client and a mapping from
/// [`FrameworkError`] into their own error type; `get`, `list` and `delete`
/// come for free.
///
/// # Example
///
/// ```rust
/// use resource_actor::{ActorClient, ActorEntity, FrameworkError, ResourceClient};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)]
/// struct Ticket { id: u32 }
/// #[derive(Debug)] struct TicketCreate;
/// #[derive(Debug)] struct TicketUpdate;
/// #[derive(Debug)] enum TicketAction {}
/// #[derive(Debug, thiserror::Error)] #[error("ticket error: {0}")] struct TicketError(String);
///
/// impl From<String> for TicketError {
///     fn from(s: String) -> Self { TicketError(s) }
/// }
///
/// #[async_trait]
/// impl ActorEntity for Ticket {
///     type Id = u32;
///     type Create = TicketCreate;
///     type Update = TicketUpdate;
///     type Action = TicketAction;
///     type ActionResult = ();
///     type Context = ();
///     type Error = TicketError;
///
///     fn from_create_params(id: u32, _: TicketCreate) -> Result<Self, Self::Error> {
///         Ok(Self { id })
///     }
///     async fn on_update(&mut self, _: TicketUpdate, _: &()) -> Result<(), Self::Error> { Ok(()) }
///     async fn handle_action(&mut self, _: TicketAction, _: &()) -> Result<(), Self::Error> { Ok(()) }
/// }
///
/// struct TicketClient {
///     inner: ResourceClient<Ticket>,
/// }
///
/// #[async_trait]
/// impl ActorClient<Ticket> for TicketClient {
///     type Error = TicketError;
///
///     fn inner(&self) -> &ResourceClient<Ticket> {
///         &self.inner
///     }
///
///     fn map_error(e: FrameworkError) -> Self::Error {
///         TicketError(e.to_string())
///     }
/// }
///
/// async fn usage(client: TicketClient) {
///     // get(), list() and delete() are provided automatically
///     let _ = client.get(1).await;
///     let _ = client.list().await;
///     let _ = client.delete(1).await;
/// }
/// ```
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: From<String> + Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the specific resource error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Fetch all entities, in insertion order.
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list().await.map_err(Self::map_error)
    }

    /// Delete an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }
}
