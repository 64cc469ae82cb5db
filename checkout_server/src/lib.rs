//! # Adyen checkout demo server
//! This crate hosts the HTTP boundary between a merchant storefront and the Adyen PSP. It is
//! responsible for:
//! * Opening PSP-hosted checkout sessions for the browser drop-in widget.
//! * Driving the server-side ("advanced") authorisation flow, including 3-D Secure challenges and
//!   redirect completions.
//! * Routing terminal result codes to the success / pending / failed outcome pages.
//!
//! ## Configuration
//! The server is configured via environment variables. See [config](config/index.html) for more
//! information.
//!
//! ## Routes
//! * `/health`: health check.
//! * `/api/sessions`, `/api/payments/details`, `/api/payments/3DSDetails`, `/api/sessions/result`:
//!   Sessions flow.
//! * `/advanced/api/paymentMethods`, `/advanced/api/payments`, `/advanced/api/payments/details`:
//!   Advanced flow.
//! * `/api/payments/webhook`: PSP notification sink.
//! * `/result`, `/success`: browser landing pages after an off-site redirect.

pub mod cli;
pub mod config;
pub mod data_objects;
pub mod errors;
pub mod gateway;
pub mod helpers;
pub mod orchestrator;
pub mod routes;
pub mod server;
pub mod views;

#[cfg(test)]
mod endpoint_tests;
