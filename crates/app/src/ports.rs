//! Port definitions: traits that adapters implement.
//!
//! Ports are the boundaries between the application core and the outside world.
//! They are defined here (in `app`) so that both the HTTP adapter and the
//! storage adapter can depend on them without depending on each other.

pub mod pairing;

pub use pairing::{DevicePairing, PairFn};
