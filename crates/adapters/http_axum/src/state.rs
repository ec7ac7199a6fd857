//! Shared application state for axum handlers.

use std::sync::Arc;

use hometic_app::ports::DevicePairing;

/// Application state shared across all axum handlers.
///
/// Generic over the pairing implementation to avoid dynamic dispatch.
/// `Clone` is implemented manually so the pairing type itself does not need
/// to be `Clone`; only the `Arc` wrapper is cloned.
pub struct AppState<P> {
    /// Pairing capability invoked by `POST /pair-device`.
    pub pairing: Arc<P>,
}

impl<P> Clone for AppState<P> {
    fn clone(&self) -> Self {
        Self {
            pairing: Arc::clone(&self.pairing),
        }
    }
}

impl<P> AppState<P>
where
    P: DevicePairing + Send + Sync + 'static,
{
    /// Create a new application state around a pairing implementation.
    pub fn new(pairing: P) -> Self {
        Self {
            pairing: Arc::new(pairing),
        }
    }
}
