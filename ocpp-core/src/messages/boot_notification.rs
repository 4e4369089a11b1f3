use chrono::{DateTime, Utc};

use crate::action::Action;
use crate::types::RegistrationStatus;

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BootNotificationRequest {
    pub charge_box_identity: String,
}

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BootNotificationResponse {
    pub status: RegistrationStatus,
    pub current_time: DateTime<Utc>,
    pub interval: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heartbeat: Option<u64>,
}

pub struct BootNotification;

impl Action for BootNotification {
    const NAME: &'static str = "BootNotification";
    const REQUEST_TAG: &'static str = "bootNotificationRequest";
    type Request = BootNotificationRequest;
    type Response = BootNotificationResponse;
}
