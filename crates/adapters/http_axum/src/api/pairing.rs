//! JSON handler for device pairing.

use axum::body::Body;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Response;
use serde::de::{self, Deserializer, IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Serialize};

use hometic_app::ports::DevicePairing;
use hometic_domain::id::{DeviceId, UserId};
use hometic_domain::pairing::Pair;

use crate::error::DecodeError;
use crate::response::{AxumJsonWriter, JsonWriter};
use crate::state::AppState;

/// Largest request body accepted by [`pair_device`].
pub const MAX_BODY_BYTES: usize = 64 * 1024;

/// Request body for pairing a device with a user.
///
/// `DeviceID` and `UserID` are matched ignoring ASCII case, so `deviceid`
/// works too. Unknown fields are ignored. Both ids are required; when a key
/// appears more than once the last value wins.
#[derive(Debug)]
pub struct PairDeviceRequest {
    pub device_id: DeviceId,
    pub user_id: UserId,
}

const DEVICE_ID: &str = "DeviceID";
const USER_ID: &str = "UserID";

impl<'de> Deserialize<'de> for PairDeviceRequest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct RequestVisitor;

        impl<'de> Visitor<'de> for RequestVisitor {
            type Value = PairDeviceRequest;

            fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                formatter.write_str("an object with DeviceID and UserID")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut device_id = None;
                let mut user_id = None;

                while let Some(key) = map.next_key::<String>()? {
                    if key.eq_ignore_ascii_case(DEVICE_ID) {
                        device_id = Some(map.next_value()?);
                    } else if key.eq_ignore_ascii_case(USER_ID) {
                        user_id = Some(map.next_value()?);
                    } else {
                        map.next_value::<IgnoredAny>()?;
                    }
                }

                Ok(PairDeviceRequest {
                    device_id: device_id.ok_or_else(|| de::Error::missing_field(DEVICE_ID))?,
                    user_id: user_id.ok_or_else(|| de::Error::missing_field(USER_ID))?,
                })
            }
        }

        deserializer.deserialize_map(RequestVisitor)
    }
}

impl From<PairDeviceRequest> for Pair {
    fn from(req: PairDeviceRequest) -> Self {
        Self {
            device_id: req.device_id,
            user_id: req.user_id,
        }
    }
}

/// Pairing status reported on success.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PairStatus {
    Active,
}

/// Response body for a successful pairing: `{"status":"active"}`.
#[derive(Debug, Serialize)]
pub struct PairDeviceResponse {
    pub status: PairStatus,
}

/// `POST /pair-device`
pub async fn pair_device<P>(State(state): State<AppState<P>>, body: Body) -> Response
where
    P: DevicePairing + Send + Sync + 'static,
{
    handle_pair_device(state.pairing.as_ref(), body, AxumJsonWriter).await
}

/// Decode `body`, pair, and answer through `writer`.
///
/// - undecodable body: `400` with the decode message, `pairing` is not called
/// - pairing failure: `500` with the error message
/// - success: `200` with [`PairDeviceResponse`]
///
/// The body is consumed by the decode step and released on every path.
pub async fn handle_pair_device<P, W>(pairing: &P, body: Body, writer: W) -> W::Output
where
    P: DevicePairing + Sync,
    W: JsonWriter,
{
    tracing::info!("pair-device");

    let request = match decode(body).await {
        Ok(request) => request,
        Err(err) => {
            tracing::debug!(error = %err, "rejecting undecodable pair-device body");
            return writer.write_json(StatusCode::BAD_REQUEST, &err.to_string());
        }
    };

    let pair = Pair::from(request);
    tracing::debug!(device_id = %pair.device_id, user_id = %pair.user_id, "pairing device");

    match pairing.pair(pair).await {
        Ok(()) => writer.write_json(
            StatusCode::OK,
            &PairDeviceResponse {
                status: PairStatus::Active,
            },
        ),
        Err(err) => {
            tracing::error!(error = %err, "pairing failed");
            writer.write_json(StatusCode::INTERNAL_SERVER_ERROR, &err.to_string())
        }
    }
}

/// Reads the first JSON value; anything after it is left unread.
async fn decode(body: Body) -> Result<PairDeviceRequest, DecodeError> {
    let bytes = axum::body::to_bytes(body, MAX_BODY_BYTES).await?;
    let mut deserializer = serde_json::Deserializer::from_slice(&bytes);
    Ok(PairDeviceRequest::deserialize(&mut deserializer)?)
}
