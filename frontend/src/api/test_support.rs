use crate::api::client::mock_support::{register_mock, MockResponse, TestResponder};
use crate::api::ApiError;
use reqwest::Method;
use serde_json::Value;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// In-process stand-in for the WorkHub backend. Stubs are keyed by method
/// and API-relative path (the `/api` prefix is added here), so a test reads
/// the same way the endpoint code under test does.
pub struct MockBackend {
    stubs: Arc<Mutex<Vec<Stub>>>,
    origin: String,
}

struct Stub {
    method: Method,
    path: String,
    status: u16,
    body: Value,
}

impl MockBackend {
    pub fn start() -> Self {
        static NEXT_ID: AtomicUsize = AtomicUsize::new(1);
        let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
        Self {
            stubs: Arc::new(Mutex::new(Vec::new())),
            origin: format!("http://backend-{}.test", id),
        }
    }

    /// Base URL to hand to `ApiClient::new_with_base_url`. Registering it
    /// routes every request for this origin into the stub table instead of
    /// the network.
    pub fn base_url(&self) -> String {
        let base = format!("{}/api", self.origin);
        register_mock(
            base.clone(),
            Arc::new(StubResponder {
                stubs: Arc::clone(&self.stubs),
            }),
        );
        base
    }

    /// Later stubs win, so a test can override a default response.
    pub fn stub(&self, method: Method, path: &str, status: u16, body: Value) {
        self.stubs.lock().expect("stub table lock").push(Stub {
            method,
            path: format!("/api{}", path),
            status,
            body,
        });
    }
}

struct StubResponder {
    stubs: Arc<Mutex<Vec<Stub>>>,
}

impl TestResponder for StubResponder {
    fn respond(&self, request: &reqwest::Request) -> Result<MockResponse, ApiError> {
        let stubs = self
            .stubs
            .lock()
            .map_err(|_| ApiError::unknown("stub table lock"))?;
        stubs
            .iter()
            .rev()
            .find(|stub| stub.method == *request.method() && stub.path == request.url().path())
            .map(|stub| MockResponse::json(stub.status, stub.body.clone()))
            .ok_or_else(|| {
                ApiError::unknown(format!(
                    "No stub for {} {}",
                    request.method(),
                    request.url().path()
                ))
            })
    }
}
