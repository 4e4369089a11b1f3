#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
pub enum TransactionEventStatus {
    Accepted,
    Rejected,
}
