use crate::action::Action;
use crate::types::TransactionEventStatus;

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StopTransactionRequest {
    pub transaction_id: i32,
}

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StopTransactionResponse {
    pub status: TransactionEventStatus,
}

pub struct StopTransaction;

impl Action for StopTransaction {
    const NAME: &'static str = "StopTransaction";
    const REQUEST_TAG: &'static str = "stopTransactionRequest";
    type Request = StopTransactionRequest;
    type Response = StopTransactionResponse;
}
