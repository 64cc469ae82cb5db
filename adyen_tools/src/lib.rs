//! Typed wrapper over the Adyen Checkout HTTP API.
//!
//! This crate is the only place in the workspace that speaks Adyen's wire model. It owns
//! * the [`AdyenApi`] client and its five checkout operations,
//! * the wire request/response shapes in [`data_objects`],
//! * credential and environment configuration, and
//! * merchant-reference and idempotency-key generation.
//!
//! Everything above it (the payment orchestrator, the HTTP boundary) works with the values this
//! crate exposes and never constructs Adyen URLs or headers itself.
mod api;
mod config;
mod error;

pub mod data_objects;

pub use api::{idempotency_key, order_reference, AdyenApi};
pub use config::{AdyenConfig, Environment};
pub use error::AdyenApiError;
