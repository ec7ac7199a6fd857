//! Statement execution seam between the pairing insert and the database.

use std::future::Future;

use sqlx::SqlitePool;

/// Executes a parameterized statement with positional integer arguments.
///
/// Arguments are bound in order: the first one fills `$1`, the second `$2`,
/// and so on. Implemented for [`SqlitePool`]; tests substitute a recorder.
pub trait StatementExecutor {
    /// Error reported by the underlying store, passed through untouched.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Run `statement` once with the given arguments.
    fn execute(
        &self,
        statement: &'static str,
        args: &[i64],
    ) -> impl Future<Output = Result<(), Self::Error>> + Send;
}

impl StatementExecutor for SqlitePool {
    type Error = sqlx::Error;

    fn execute(
        &self,
        statement: &'static str,
        args: &[i64],
    ) -> impl Future<Output = Result<(), Self::Error>> + Send {
        let pool = self.clone();
        let args = args.to_vec();
        async move {
            let mut query = sqlx::query(statement);
            for arg in args {
                query = query.bind(arg);
            }
            let result = query.execute(&pool).await?;
            tracing::debug!(rows_affected = result.rows_affected(), "statement executed");
            Ok(())
        }
    }
}
