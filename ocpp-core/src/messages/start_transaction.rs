use crate::action::Action;

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StartTransactionRequest {
    pub connector_id: u32,
    pub id_tag: String,
}

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StartTransactionResponse {
    pub transaction_id: i32,
}

pub struct StartTransaction;

impl Action for StartTransaction {
    const NAME: &'static str = "StartTransaction";
    const REQUEST_TAG: &'static str = "startTransactionRequest";
    type Request = StartTransactionRequest;
    type Response = StartTransactionResponse;
}
