//! BDD test world for the Tally core

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use cucumber::World;

use tally_core::guard::NavDecision;
use tally_core::http::{HttpClient, HttpResponse};
use tally_core::layout::Chrome;
use tally_core::session::{MemoryTokenStore, Session, TokenStore};
use tally_core::{ApiClient, ApiConfig, TallyError};

/// A recorded outgoing request
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: &'static str,
    pub url: String,
    pub bearer: Option<String>,
}

/// HTTP client double that records every request and replays canned
/// responses in order
#[derive(Debug, Default)]
pub struct RecordingClient {
    responses: Mutex<VecDeque<tally_core::Result<HttpResponse>>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl RecordingClient {
    pub fn enqueue(&self, response: tally_core::Result<HttpResponse>) {
        self.responses
            .lock()
            .expect("response queue lock poisoned")
            .push_back(response);
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests
            .lock()
            .expect("request log lock poisoned")
            .clone()
    }

    fn record(
        &self,
        method: &'static str,
        url: &str,
        bearer: Option<&str>,
    ) -> tally_core::Result<HttpResponse> {
        self.requests
            .lock()
            .expect("request log lock poisoned")
            .push(RecordedRequest {
                method,
                url: url.to_string(),
                bearer: bearer.map(str::to_string),
            });
        self.responses
            .lock()
            .expect("response queue lock poisoned")
            .pop_front()
            .unwrap_or_else(|| Err(TallyError::Http("no canned response".to_string())))
    }
}

#[async_trait(?Send)]
impl HttpClient for RecordingClient {
    async fn get(&self, url: &str, bearer: Option<&str>) -> tally_core::Result<HttpResponse> {
        self.record("GET", url, bearer)
    }

    async fn post_json(
        &self,
        url: &str,
        _body: &str,
        bearer: Option<&str>,
    ) -> tally_core::Result<HttpResponse> {
        self.record("POST", url, bearer)
    }

    async fn put_json(
        &self,
        url: &str,
        _body: &str,
        bearer: Option<&str>,
    ) -> tally_core::Result<HttpResponse> {
        self.record("PUT", url, bearer)
    }

    async fn delete(&self, url: &str, bearer: Option<&str>) -> tally_core::Result<HttpResponse> {
        self.record("DELETE", url, bearer)
    }
}

#[derive(Debug, World)]
#[world(init = Self::new)]
pub struct TallyWorld {
    pub store: Arc<MemoryTokenStore>,
    pub session: Session,
    pub http: Arc<RecordingClient>,
    pub decision: Option<NavDecision>,
    pub chrome: Option<Chrome>,
    pub last_result: Option<tally_core::Result<()>>,
}

impl TallyWorld {
    pub fn new() -> Self {
        let store = Arc::new(MemoryTokenStore::default());
        let session = Session::new(Arc::clone(&store) as Arc<dyn TokenStore>);
        Self {
            store,
            session,
            http: Arc::new(RecordingClient::default()),
            decision: None,
            chrome: None,
            last_result: None,
        }
    }

    /// Gateway wired to the recording client and the world's session
    pub fn client(&self) -> ApiClient {
        ApiClient::new(
            Arc::clone(&self.http) as Arc<dyn HttpClient>,
            self.session.clone(),
            &ApiConfig::default(),
        )
    }
}
