//! JSON API handler modules.

pub mod pairing;

use axum::Router;
use axum::routing::post;

use hometic_app::ports::DevicePairing;

use crate::state::AppState;

/// Build the API router.
pub fn routes<P>() -> Router<AppState<P>>
where
    P: DevicePairing + Send + Sync + 'static,
{
    Router::new().route("/pair-device", post(pairing::pair_device::<P>))
}
