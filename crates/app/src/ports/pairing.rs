//! Pairing port: associate a device with a user.

use std::future::Future;
use std::sync::Arc;

use hometic_domain::error::PairingError;
use hometic_domain::pairing::Pair;

/// Pairs a device with a user.
///
/// Every failure is reported as an opaque [`PairingError`]; callers treat
/// them all as "pairing failed".
pub trait DevicePairing {
    /// Record the given pairing.
    fn pair(&self, pair: Pair) -> impl Future<Output = Result<(), PairingError>> + Send;
}

impl<T: DevicePairing + Send + Sync> DevicePairing for Arc<T> {
    fn pair(&self, pair: Pair) -> impl Future<Output = Result<(), PairingError>> + Send {
        (**self).pair(pair)
    }
}

/// Adapts an async closure into a [`DevicePairing`].
///
/// ```
/// use hometic_app::ports::PairFn;
///
/// let always_ok = PairFn::new(|_pair| async { Ok(()) });
/// ```
#[derive(Clone)]
pub struct PairFn<F>(F);

impl<F> PairFn<F> {
    /// Wrap `f`, called once per [`DevicePairing::pair`].
    pub fn new<Fut>(f: F) -> Self
    where
        F: Fn(Pair) -> Fut,
        Fut: Future<Output = Result<(), PairingError>>,
    {
        Self(f)
    }
}

impl<F, Fut> DevicePairing for PairFn<F>
where
    F: Fn(Pair) -> Fut + Send + Sync,
    Fut: Future<Output = Result<(), PairingError>> + Send,
{
    fn pair(&self, pair: Pair) -> impl Future<Output = Result<(), PairingError>> + Send {
        (self.0)(pair)
    }
}
