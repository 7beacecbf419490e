//! In-process mock of the content API for tests.

use axum::extract::{Query, State};
use axum::http::{StatusCode, header};
use axum::routing::get;
use axum::Router;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

/// Canned reply served for every request to `/search`.
#[derive(Debug, Clone)]
pub struct MockResponse {
    pub status: u16,
    pub body: Vec<u8>,
    pub content_type: String,
}

impl MockResponse {
    pub fn ok(body: &str) -> Self {
        Self::status(200, body)
    }

    /// A 200 reply with a raw, possibly non-UTF-8, body.
    pub fn ok_bytes(body: Vec<u8>) -> Self {
        Self {
            body,
            ..Self::ok("")
        }
    }

    pub fn status(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.as_bytes().to_vec(),
            content_type: "text/plain; charset=utf-8".to_string(),
        }
    }

    pub fn with_content_type(mut self, content_type: &str) -> Self {
        self.content_type = content_type.to_string();
        self
    }
}

#[derive(Clone)]
struct MockState {
    reply: MockResponse,
    seen: Arc<Mutex<Vec<HashMap<String, String>>>>,
}

pub struct MockServer {
    pub addr: SocketAddr,
    seen: Arc<Mutex<Vec<HashMap<String, String>>>>,
}

impl MockServer {
    pub fn url(&self, path_and_query: &str) -> String {
        format!("http://{}{}", self.addr, path_and_query)
    }

    /// Query parameters of every request received so far.
    pub fn requests(&self) -> Vec<HashMap<String, String>> {
        self.seen.lock().unwrap().clone()
    }
}

async fn search(
    State(state): State<MockState>,
    Query(params): Query<HashMap<String, String>>,
) -> (StatusCode, [(header::HeaderName, String); 1], Vec<u8>) {
    state.seen.lock().unwrap().push(params);
    let status = StatusCode::from_u16(state.reply.status).unwrap();
    let content_type = [(header::CONTENT_TYPE, state.reply.content_type.clone())];
    (status, content_type, state.reply.body.clone())
}

pub async fn spawn_mock(reply: MockResponse) -> MockServer {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let state = MockState {
        reply,
        seen: Arc::clone(&seen),
    };
    let app = Router::new().route("/search", get(search)).with_state(state);
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    MockServer { addr, seen }
}
