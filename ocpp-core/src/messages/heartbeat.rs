use chrono::{DateTime, Utc};

use crate::action::Action;

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
pub struct HeartbeatRequest {}

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HeartbeatResponse {
    pub current_time: DateTime<Utc>,
}

pub struct Heartbeat;

impl Action for Heartbeat {
    const NAME: &'static str = "Heartbeat";
    const REQUEST_TAG: &'static str = "heartbeatRequest";
    type Request = HeartbeatRequest;
    type Response = HeartbeatResponse;
}
