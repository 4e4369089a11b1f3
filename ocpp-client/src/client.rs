use std::io::Read;
use std::sync::{Mutex, PoisonError};

use ocpp_xml_core::action::Action;
use ocpp_xml_core::messages::authorize::{Authorize, AuthorizeRequest, AuthorizeResponse};
use ocpp_xml_core::messages::boot_notification::{
    BootNotification, BootNotificationRequest, BootNotificationResponse,
};
use ocpp_xml_core::messages::data_transfer::{
    DataTransfer, DataTransferRequest, DataTransferResponse,
};
use ocpp_xml_core::messages::heartbeat::{Heartbeat, HeartbeatRequest, HeartbeatResponse};
use ocpp_xml_core::messages::meter_values::{MeterValues, MeterValuesRequest, MeterValuesResponse};
use ocpp_xml_core::messages::start_transaction::{
    StartTransaction, StartTransactionRequest, StartTransactionResponse,
};
use ocpp_xml_core::messages::status_notification::{
    StatusNotification, StatusNotificationRequest, StatusNotificationResponse,
};
use ocpp_xml_core::messages::stop_transaction::{
    StopTransaction, StopTransactionRequest, StopTransactionResponse,
};
use ocpp_xml_core::types::{MeterValue, StatusInfo};

use crate::config::ClientConfig;
use crate::error::CallError;
use crate::transport::{HttpClientTransport, HttpTransport, TransportError};

const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";
const CONTENT_TYPE_XML: &str = "application/xml";

/// OCPP client bound to one central-system endpoint.
///
/// Owns no protocol state: every call is an independent round trip
/// and nothing is remembered between calls.
pub struct Client {
    endpoint: String,
    transport: Box<dyn HttpTransport>,
    call_lock: Option<Mutex<()>>,
}

impl Client {
    /// Client with default options: serialized calls and a reqwest
    /// transport with a 10 second timeout.
    pub fn new(endpoint: impl Into<String>) -> Result<Self, TransportError> {
        Self::with_config(ClientConfig::new(endpoint))
    }

    pub fn with_config(config: ClientConfig) -> Result<Self, TransportError> {
        let transport = HttpClientTransport::new(config.request_timeout)?;
        Ok(Self::with_transport(config, Box::new(transport)))
    }

    /// Client over a caller-supplied transport. The configured
    /// timeout does not apply; the transport owns its own deadlines.
    pub fn with_transport(config: ClientConfig, transport: Box<dyn HttpTransport>) -> Self {
        Self {
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            transport,
            call_lock: config.serialize_calls.then(|| Mutex::new(())),
        }
    }

    /// Performs one action call: encode, POST, check status, decode.
    ///
    /// With `serialize_calls` set the whole round trip runs under the
    /// client's lock. A poisoned lock is recovered, not propagated:
    /// the client keeps no state a panicked call could corrupt.
    pub fn call<A: Action>(&self, request: &A::Request) -> Result<A::Response, CallError> {
        let _guard = self
            .call_lock
            .as_ref()
            .map(|lock| lock.lock().unwrap_or_else(PoisonError::into_inner));
        let result = self.dispatch::<A>(request);
        if let Err(err) = &result {
            log::warn!("{err}");
        }
        result
    }

    fn dispatch<A: Action>(&self, request: &A::Request) -> Result<A::Response, CallError> {
        let document = quick_xml::se::to_string_with_root(A::REQUEST_TAG, request)
            .map_err(|source| CallError::Encode {
                action: A::NAME,
                source,
            })?;
        let url = format!("{}/{}", self.endpoint, A::NAME);
        log::debug!("[{}] POST {}", A::NAME, url);

        let response = self
            .transport
            .post(&url, CONTENT_TYPE_XML, format!("{XML_DECLARATION}{document}"))
            .map_err(|source| CallError::Transport {
                action: A::NAME,
                source,
            })?;

        // The central system signals success with 200 only; any other
        // status fails the call without looking at the body.
        if response.status != 200 {
            return Err(CallError::RemoteStatus {
                action: A::NAME,
                status: response.status,
            });
        }

        let mut raw = Vec::new();
        let mut body = response.body;
        body.read_to_end(&mut raw)
            .map_err(|source| CallError::BodyRead {
                action: A::NAME,
                source,
            })?;

        quick_xml::de::from_reader(raw.as_slice()).map_err(|source| CallError::Decode {
            action: A::NAME,
            source,
        })
    }

    pub fn boot_notification(
        &self,
        charge_box_identity: impl Into<String>,
    ) -> Result<BootNotificationResponse, CallError> {
        self.call::<BootNotification>(&BootNotificationRequest {
            charge_box_identity: charge_box_identity.into(),
        })
    }

    pub fn heartbeat(&self) -> Result<HeartbeatResponse, CallError> {
        self.call::<Heartbeat>(&HeartbeatRequest {})
    }

    pub fn authorize(&self, id_tag: impl Into<String>) -> Result<AuthorizeResponse, CallError> {
        self.call::<Authorize>(&AuthorizeRequest {
            id_tag: id_tag.into(),
        })
    }

    pub fn start_transaction(
        &self,
        connector_id: u32,
        id_tag: impl Into<String>,
    ) -> Result<StartTransactionResponse, CallError> {
        self.call::<StartTransaction>(&StartTransactionRequest {
            connector_id,
            id_tag: id_tag.into(),
        })
    }

    /// No precondition ties this to a prior `start_transaction`; any
    /// session ordering is the caller's concern.
    pub fn stop_transaction(
        &self,
        transaction_id: i32,
    ) -> Result<StopTransactionResponse, CallError> {
        self.call::<StopTransaction>(&StopTransactionRequest { transaction_id })
    }

    pub fn meter_values(
        &self,
        meter_value: Vec<MeterValue>,
    ) -> Result<MeterValuesResponse, CallError> {
        self.call::<MeterValues>(&MeterValuesRequest { meter_value })
    }

    pub fn status_notification(
        &self,
        status: StatusInfo,
    ) -> Result<StatusNotificationResponse, CallError> {
        self.call::<StatusNotification>(&StatusNotificationRequest { status })
    }

    pub fn data_transfer(
        &self,
        vendor_id: impl Into<String>,
        message_data: impl Into<String>,
    ) -> Result<DataTransferResponse, CallError> {
        self.call::<DataTransfer>(&DataTransferRequest {
            vendor_id: vendor_id.into(),
            message_data: message_data.into(),
        })
    }
}
