//! # Quickbite
//!
//! The core of a mobile-first food-ordering storefront: menu browsing, a
//! session-scoped cart, checkout with simulated payment, an order store
//! with a status lifecycle, and a user session driven by a mocked OTP
//! flow. Built on the [`resource_actor`] framework — every mutable store is
//! its own actor, so all writes are serialized without locks.
//!
//! ## Modules
//!
//! - **[model]**: Pure data structures ([`Cart`](model::Cart),
//!   [`Order`](model::Order), [`Session`](model::Session), menu types).
//! - **[cart_actor]** / **[order_actor]** / **[session_actor]**: the actor
//!   entity implementations and their error types.
//! - **[clients]**: Type-safe wrappers (e.g. [`CartClient`](clients::CartClient))
//!   that hide the message passing.
//! - **[catalog]** / **[auth]** / **[payment]**: boundary traits with mock
//!   implementations that simulate network latency.
//! - **[checkout]**: the cart → payment → order orchestrator.
//! - **[kitchen]**: simulated status progression for placed orders.
//! - **[lifecycle]**: [`Storefront`](lifecycle::Storefront), which wires
//!   everything together and manages shutdown.
//!
//! ## Testing
//!
//! See [`resource_actor::mock`] for utilities to test clients and
//! orchestration without spawning full actors.

pub mod auth;
pub mod cart_actor;
pub mod catalog;
pub mod checkout;
pub mod clients;
pub mod kitchen;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod payment;
pub mod session_actor;
