//! # Resource Actor
//!
//! Foundational building blocks for type-safe, concurrent actor systems:
//! a **Resource-Oriented Architecture** (uniform Create / Get / List /
//! Update / Delete / Action surface over well-defined resources) on top of
//! the **Actor Model** (isolated state, message passing, sequential
//! processing inside each actor).
//!
//! Each resource type gets its own actor with completely isolated state.
//! Because an actor processes one message at a time, its store needs no
//! locks, and multi-step mutations are naturally atomic with respect to
//! other requests; when resources need to coordinate, they talk through
//! each other's clients rather than shared memory.
//!
//! ## Layers
//!
//! 1. **Entity** ([`ActorEntity`]) — your domain model and business logic.
//! 2. **Runtime** ([`ResourceActor`]) — message processing and concurrency.
//! 3. **Interface** ([`ResourceClient`], [`ActorClient`]) — type-safe
//!    communication.
//!
//! Business logic is written once in the entity trait; the framework
//! handles the async message passing, error propagation and state
//! management.
//!
//! ```rust
//! use resource_actor::{ActorEntity, ResourceActor};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)]
//! struct Counter { id: u32, value: i64 }
//!
//! #[derive(Debug)] struct CounterCreate { start: i64 }
//! #[derive(Debug)] struct CounterUpdate { set: i64 }
//! #[derive(Debug)] enum CounterAction { Add(i64) }
//! #[derive(Debug, thiserror::Error)] #[error("counter error")] struct CounterError;
//!
//! #[async_trait]
//! impl ActorEntity for Counter {
//!     type Id = u32;
//!     type Create = CounterCreate;
//!     type Update = CounterUpdate;
//!     type Action = CounterAction;
//!     type ActionResult = i64;
//!     type Context = ();
//!     type Error = CounterError;
//!
//!     fn from_create_params(id: u32, params: CounterCreate) -> Result<Self, Self::Error> {
//!         Ok(Self { id, value: params.start })
//!     }
//!
//!     async fn on_update(&mut self, update: CounterUpdate, _: &()) -> Result<(), Self::Error> {
//!         self.value = update.set;
//!         Ok(())
//!     }
//!
//!     async fn handle_action(&mut self, action: CounterAction, _: &()) -> Result<i64, Self::Error> {
//!         match action {
//!             CounterAction::Add(n) => {
//!                 self.value += n;
//!                 Ok(self.value)
//!             }
//!         }
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = ResourceActor::<Counter>::new(10);
//!     tokio::spawn(actor.run(()));
//!
//!     let id = client.create(CounterCreate { start: 40 }).await.unwrap();
//!     let value = client.perform_action(id, CounterAction::Add(2)).await.unwrap();
//!     assert_eq!(value, 42);
//! }
//! ```
//!
//! ## Context Injection
//!
//! Dependencies are injected at **runtime** via `run()`, not at construction
//! time. Create all actors first, then start each one with the clients it
//! needs — late binding that sidesteps circular construction dependencies.
//! An actor with no dependencies runs with `()`.
//!
//! ## Testing
//!
//! The [`mock`] module provides `MockClient`, which implements the same
//! client API backed by an expectation queue, plus raw channel helpers for
//! asserting on request payloads. See that module for the patterns.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod tracing;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
