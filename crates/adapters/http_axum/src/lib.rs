//! # hometic-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the JSON pairing endpoint (`POST /pair-device`)
//! - Map HTTP requests into `DevicePairing` calls (driving adapter)
//! - Write every response through the [`response::JsonWriter`] seam so the
//!   handler logic never touches axum's response type directly
//!
//! ## Dependency rule
//! Depends on `hometic-app` (for port traits) and `hometic-domain`
//! (for domain types used in request mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod error;
pub mod response;
pub mod router;
pub mod state;
