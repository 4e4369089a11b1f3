use crate::action::Action;
use crate::types::IdTagInfo;

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AuthorizeRequest {
    pub id_tag: String,
}

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AuthorizeResponse {
    pub id_tag_info: IdTagInfo,
}

pub struct Authorize;

impl Action for Authorize {
    const NAME: &'static str = "Authorize";
    const REQUEST_TAG: &'static str = "authorizeRequest";
    type Request = AuthorizeRequest;
    type Response = AuthorizeResponse;
}
