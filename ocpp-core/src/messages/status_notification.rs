use crate::action::Action;
use crate::types::StatusInfo;

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StatusNotificationRequest {
    pub status: StatusInfo,
}

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StatusNotificationResponse {
    pub status: String,
}

pub struct StatusNotification;

impl Action for StatusNotification {
    const NAME: &'static str = "StatusNotification";
    const REQUEST_TAG: &'static str = "statusNotificationRequest";
    type Request = StatusNotificationRequest;
    type Response = StatusNotificationResponse;
}
