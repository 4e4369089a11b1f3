use serde::{de::DeserializeOwned, Serialize};

/// Static description of one OCPP action.
///
/// Implemented by a zero-sized marker per action. The dispatcher is
/// generic over this trait, so the set of actions is a compile-time
/// table: adding one means adding a message pair and an impl, nothing
/// else. There are no ordering constraints between actions.
pub trait Action {
    /// Wire name of the action, used as the URL path segment.
    const NAME: &'static str;
    /// Root element name of the encoded request document.
    const REQUEST_TAG: &'static str;

    type Request: Serialize;
    type Response: DeserializeOwned;
}
