//! Type-safe client wrappers over the generic resource clients.
//!
//! Each wrapper exposes the domain vocabulary (add to cart, place order,
//! log out) and maps framework errors back into the owning actor's error
//! type, downcasting boxed entity errors so callers can match on the
//! specific variant.

pub mod cart_client;
pub mod order_client;
pub mod session_client;

pub use cart_client::CartClient;
pub use order_client::{OrderClient, OrderWatch};
pub use session_client::SessionClient;
