use std::time::Duration;

/// Construction-time options for [`crate::Client`].
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Base URL of the central system; the action name is appended as
    /// a path segment.
    pub endpoint: String,
    /// When set, at most one call is in flight per client instance; a
    /// second caller blocks until the first round trip completes.
    /// Turn this off only with a transport that is safe to use
    /// concurrently.
    pub serialize_calls: bool,
    /// Request timeout applied to the default transport. Ignored when
    /// a transport is supplied explicitly.
    pub request_timeout: Duration,
}

impl ClientConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            serialize_calls: true,
            request_timeout: Duration::from_secs(10),
        }
    }
}
