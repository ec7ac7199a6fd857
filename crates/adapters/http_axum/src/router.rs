//! Axum router assembly.

use axum::Router;
use tower_http::trace::TraceLayer;

use hometic_app::ports::DevicePairing;

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Serves `POST /pair-device`.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build<P>(state: AppState<P>) -> Router
where
    P: DevicePairing + Send + Sync + 'static,
{
    Router::new()
        .merge(crate::api::routes::<P>())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
