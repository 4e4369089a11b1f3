use crate::action::Action;
use crate::types::DataTransferStatus;

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DataTransferRequest {
    pub vendor_id: String,
    pub message_data: String,
}

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DataTransferResponse {
    pub status: DataTransferStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
}

pub struct DataTransfer;

impl Action for DataTransfer {
    const NAME: &'static str = "DataTransfer";
    const REQUEST_TAG: &'static str = "dataTransferRequest";
    type Request = DataTransferRequest;
    type Response = DataTransferResponse;
}
