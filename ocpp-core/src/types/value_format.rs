#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
pub enum ValueFormat {
    Raw,
    SignedData,
}
