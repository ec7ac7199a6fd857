//! Error raised when a pairing cannot be completed.

use std::error::Error;

/// Opaque pairing failure.
///
/// Carries whatever went wrong underneath (a store error, a stub failure, …)
/// and displays its message unchanged. Callers do not inspect the kind.
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct PairingError(Box<dyn Error + Send + Sync + 'static>);

impl PairingError {
    /// Wrap an underlying error.
    pub fn new<E>(err: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self(Box::new(err))
    }

    /// Build an error from a plain message.
    pub fn msg(message: impl Into<String>) -> Self {
        let message: String = message.into();
        Self(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, thiserror::Error)]
    #[error("constraint failed: pairs.device_id")]
    struct FakeStoreError;

    #[test]
    fn should_display_message_verbatim_when_built_from_text() {
        let err = PairingError::msg("boom");
        assert_eq!(err.to_string(), "boom");
    }

    #[test]
    fn should_display_inner_message_when_wrapping_error() {
        let err = PairingError::new(FakeStoreError);
        assert_eq!(err.to_string(), "constraint failed: pairs.device_id");
    }
}
