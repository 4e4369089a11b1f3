use super::ErrorCode;

/// Payload of a StatusNotification: the error code plus free-form
/// detail text.
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StatusInfo {
    pub error_code: ErrorCode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<String>,
}
