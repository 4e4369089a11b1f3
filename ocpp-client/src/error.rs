use thiserror::Error;

use crate::transport::TransportError;

/// Failure of a single dispatch, tagged with the action it belonged
/// to. One variant per stage of the round trip so callers can match
/// on the category; nothing is retried or classified further (a 404
/// and a 503 are both `RemoteStatus`).
#[derive(Debug, Error)]
pub enum CallError {
    #[error("{action}: failed to encode request: {source}")]
    Encode {
        action: &'static str,
        #[source]
        source: quick_xml::SeError,
    },

    #[error("{action}: transport error: {source}")]
    Transport {
        action: &'static str,
        #[source]
        source: TransportError,
    },

    #[error("{action}: unexpected HTTP status {status}")]
    RemoteStatus { action: &'static str, status: u16 },

    #[error("{action}: failed to read response body: {source}")]
    BodyRead {
        action: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("{action}: failed to decode response: {source}")]
    Decode {
        action: &'static str,
        #[source]
        source: quick_xml::DeError,
    },
}
