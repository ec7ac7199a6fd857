//! `SQLite` implementation of [`DevicePairing`].

use sqlx::SqlitePool;

use hometic_app::ports::DevicePairing;
use hometic_domain::error::PairingError;
use hometic_domain::pairing::Pair;

use crate::executor::StatementExecutor;

const INSERT: &str = "INSERT INTO pairs VALUES ($1, $2)";

/// Store-backed pairing: one `INSERT` per call, no dedup, no retry.
///
/// Store errors come back as [`PairingError`] with their message unchanged.
pub struct PairRepository<E = SqlitePool> {
    executor: E,
}

impl<E> PairRepository<E> {
    /// Create a new repository on top of the given executor (usually a pool).
    #[must_use]
    pub fn new(executor: E) -> Self {
        Self { executor }
    }
}

impl<E> DevicePairing for PairRepository<E>
where
    E: StatementExecutor + Send + Sync,
{
    #[tracing::instrument(skip_all, fields(device_id = %pair.device_id, user_id = %pair.user_id))]
    async fn pair(&self, pair: Pair) -> Result<(), PairingError> {
        self.executor
            .execute(INSERT, &[pair.device_id.get(), pair.user_id.get()])
            .await
            .map_err(PairingError::new)
    }
}
