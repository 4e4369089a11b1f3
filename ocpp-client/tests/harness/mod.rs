use std::io::Cursor;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Barrier, Mutex};
use std::time::Duration;

use ocpp_xml_client::{HttpTransport, TransportError, TransportResponse};

#[derive(Clone, Debug)]
pub struct RecordedRequest {
    pub url: String,
    pub content_type: String,
    pub body: String,
}

/// Canned-response transport. Clones share state, so a test keeps one
/// handle for inspection and hands another to the client.
#[derive(Clone)]
pub struct StubTransport {
    state: Arc<StubState>,
}

struct StubState {
    status: Mutex<u16>,
    response_body: Mutex<String>,
    delay: Mutex<Duration>,
    rendezvous: Mutex<Option<Arc<Barrier>>>,
    requests: Mutex<Vec<RecordedRequest>>,
    active: AtomicUsize,
    max_active: AtomicUsize,
}

impl StubTransport {
    pub fn new(status: u16, response_body: &str) -> Self {
        Self {
            state: Arc::new(StubState {
                status: Mutex::new(status),
                response_body: Mutex::new(response_body.to_string()),
                delay: Mutex::new(Duration::ZERO),
                rendezvous: Mutex::new(None),
                requests: Mutex::new(Vec::new()),
                active: AtomicUsize::new(0),
                max_active: AtomicUsize::new(0),
            }),
        }
    }

    pub fn respond_with(&self, status: u16, response_body: &str) {
        *self.state.status.lock().unwrap() = status;
        *self.state.response_body.lock().unwrap() = response_body.to_string();
    }

    /// Holds each call inside the transport for `delay`, widening the
    /// window in which overlapping calls would be observed.
    pub fn set_delay(&self, delay: Duration) {
        *self.state.delay.lock().unwrap() = delay;
    }

    /// Blocks every call inside `post` until `parties` calls have
    /// arrived. Calls can only rendezvous if they run concurrently;
    /// with a serialized client this deadlocks instead of passing.
    pub fn set_rendezvous(&self, parties: usize) {
        *self.state.rendezvous.lock().unwrap() = Some(Arc::new(Barrier::new(parties)));
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }

    /// Highest number of calls that were ever inside `post` at once.
    pub fn max_active(&self) -> usize {
        self.state.max_active.load(Ordering::SeqCst)
    }
}

impl HttpTransport for StubTransport {
    fn post(
        &self,
        url: &str,
        content_type: &str,
        body: String,
    ) -> Result<TransportResponse, TransportError> {
        let active = self.state.active.fetch_add(1, Ordering::SeqCst) + 1;
        self.state.max_active.fetch_max(active, Ordering::SeqCst);

        let delay = *self.state.delay.lock().unwrap();
        if !delay.is_zero() {
            std::thread::sleep(delay);
        }

        let rendezvous = self.state.rendezvous.lock().unwrap().clone();
        if let Some(barrier) = rendezvous {
            barrier.wait();
        }

        self.state.requests.lock().unwrap().push(RecordedRequest {
            url: url.to_string(),
            content_type: content_type.to_string(),
            body,
        });

        let status = *self.state.status.lock().unwrap();
        let response_body = self.state.response_body.lock().unwrap().clone();
        self.state.active.fetch_sub(1, Ordering::SeqCst);

        Ok(TransportResponse {
            status,
            body: Box::new(Cursor::new(response_body.into_bytes())),
        })
    }
}

/// Transport whose response body dies mid-read, after a 200 status
/// was already delivered.
pub struct BrokenBodyTransport;

struct BrokenRead;

impl std::io::Read for BrokenRead {
    fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
        Err(std::io::Error::new(
            std::io::ErrorKind::ConnectionReset,
            "connection reset mid-body",
        ))
    }
}

impl HttpTransport for BrokenBodyTransport {
    fn post(
        &self,
        _url: &str,
        _content_type: &str,
        _body: String,
    ) -> Result<TransportResponse, TransportError> {
        Ok(TransportResponse {
            status: 200,
            body: Box::new(BrokenRead),
        })
    }
}

/// Transport that never reaches the remote side.
pub struct FailingTransport;

impl HttpTransport for FailingTransport {
    fn post(
        &self,
        _url: &str,
        _content_type: &str,
        _body: String,
    ) -> Result<TransportResponse, TransportError> {
        Err(TransportError::new("connection refused"))
    }
}
