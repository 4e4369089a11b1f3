use chrono::{DateTime, Utc};

use super::AuthorizationStatus;

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IdTagInfo {
    pub status: AuthorizationStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id_tag: Option<String>,
}

impl IdTagInfo {
    /// Whether the tag authorizes charging at `current_time`. A tag
    /// without an expiry date never expires; passing `None` skips the
    /// expiry check.
    pub fn is_valid(&self, current_time: Option<DateTime<Utc>>) -> bool {
        if self.status != AuthorizationStatus::Accepted {
            return false;
        }
        match (self.expiry_date, current_time) {
            (Some(expiry_date), Some(time_now)) => time_now <= expiry_date,
            _ => true,
        }
    }
}
