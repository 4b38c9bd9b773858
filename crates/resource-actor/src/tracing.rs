//! # Observability & Tracing
//!
//! Tracing setup shared by every binary and integration test in the system.
//!
//! The framework logs with the `tracing` crate throughout: actors record
//! lifecycle events (startup, shutdown, final store size) and per-operation
//! events with the entity type and id as structured fields; clients attach
//! `#[instrument]` spans so a request can be followed end to end.
//!
//! Log verbosity is driven by `RUST_LOG`:
//!
//! ```bash
//! RUST_LOG=info cargo run      # compact workflow logs
//! RUST_LOG=debug cargo run     # full request payloads
//! ```
//!
//! The compact format shows span hierarchy inline, e.g.
//! `INFO checkout:place_order: Payment confirmed`.

/// Initializes the global tracing subscriber. Call once, at process start.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // entity_type fields identify the source instead
        .compact()
        .init();
}
