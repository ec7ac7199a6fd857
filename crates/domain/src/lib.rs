//! # hometic-domain
//!
//! Pure domain model for the hometic device pairing service.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers and the opaque pairing error
//! - Define the **Pair** record (one device associated with one user)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod pairing;
