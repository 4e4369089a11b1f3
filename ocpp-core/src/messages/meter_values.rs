use crate::action::Action;
use crate::types::MeterValue;

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MeterValuesRequest {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub meter_value: Vec<MeterValue>,
}

// The central system acknowledges with a bare status string; the
// protocol assigns it no closed vocabulary.
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MeterValuesResponse {
    pub status: String,
}

pub struct MeterValues;

impl Action for MeterValues {
    const NAME: &'static str = "MeterValues";
    const REQUEST_TAG: &'static str = "meterValuesRequest";
    type Request = MeterValuesRequest;
    type Response = MeterValuesResponse;
}
