//! # hometic-app
//!
//! Application layer: **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the driven port adapters must implement:
//!   - `DevicePairing`: pair a device with a user
//! - Provide `PairFn`, which turns a plain async closure into a
//!   `DevicePairing` (handy for tests and ad-hoc wiring)
//!
//! ## Dependency rule
//! Depends on `hometic-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
