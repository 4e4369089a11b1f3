use core::fmt;

/// Error code reported in a StatusNotification.
///
/// Unlike the status vocabularies this set is open: the constants
/// below cover the conventional values, but any other string a party
/// sends is preserved verbatim.
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(transparent)]
pub struct ErrorCode(String);

impl ErrorCode {
    pub const GENERIC_ERROR: &'static str = "GenericError";
    pub const PROTOCOL_ERROR: &'static str = "ProtocolError";
    pub const INTERNAL_ERROR: &'static str = "InternalError";
    pub const NOT_IMPLEMENTED: &'static str = "NotImplemented";
    pub const UNKNOWN_MESSAGE_TYPE: &'static str = "UnknownMessageType";

    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ErrorCode {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

impl From<String> for ErrorCode {
    fn from(code: String) -> Self {
        Self(code)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
