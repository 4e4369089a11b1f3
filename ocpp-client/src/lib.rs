//! Synchronous OCPP client speaking XML over HTTP.
//!
//! Every action is one blocking request/response round trip: the typed
//! request is encoded as an XML document, POSTed to
//! `{endpoint}/{ActionName}`, and the response body is decoded back
//! into the typed response. There is no message correlation, no retry
//! and no protocol state; callers wanting resilience re-invoke the
//! client themselves.
//!
//! ```no_run
//! use ocpp_xml_client::Client;
//!
//! let client = Client::new("http://central.example/ocpp")?;
//! let boot = client.boot_notification("CP-001")?;
//! println!("registered: {:?}, next heartbeat in {}s", boot.status, boot.interval);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod client;
mod config;
mod error;
mod transport;

pub use client::Client;
pub use config::ClientConfig;
pub use error::CallError;
pub use transport::{HttpClientTransport, HttpTransport, TransportError, TransportResponse};
