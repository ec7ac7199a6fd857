//! Pair: the association of one device with one user.

use crate::id::{DeviceId, UserId};

/// A request to associate a device with a user.
///
/// No range or existence checks are performed here; referential rules belong
/// to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pair {
    /// The device being paired.
    pub device_id: DeviceId,
    /// The user the device is paired with.
    pub user_id: UserId,
}

impl Pair {
    /// Build a pair from raw integer identifiers.
    #[must_use]
    pub fn new(device_id: i64, user_id: i64) -> Self {
        Self {
            device_id: DeviceId::new(device_id),
            user_id: UserId::new(user_id),
        }
    }
}
