//! In-process fake backend for integration tests.
//!
//! Serves canned JSON replies from a `tiny_http` server bound to
//! `127.0.0.1:0` and records every request it receives. Each request is
//! handled on its own thread so delayed replies can overlap.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex, MutexGuard};
use std::thread;
use std::time::Duration;

use naplog_config::ApiConfig;

use crate::SleepApiClient;

/// A canned reply.
#[derive(Debug, Clone)]
pub struct Reply {
    pub status: u16,
    pub body: String,
    pub delay: Duration,
}

impl Reply {
    #[must_use]
    pub fn json(status: u16, body: serde_json::Value) -> Self {
        Self {
            status,
            body: body.to_string(),
            delay: Duration::ZERO,
        }
    }

    #[must_use]
    pub fn ok(body: serde_json::Value) -> Self {
        Self::json(200, body)
    }

    /// A non-JSON body, for exercising parse failures.
    #[must_use]
    pub fn raw(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
            delay: Duration::ZERO,
        }
    }

    #[must_use]
    pub const fn delayed(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

/// One request as seen by the fake backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub method: String,
    /// Path plus query string, e.g. `/summary?date=2024-01-05`.
    pub url: String,
    pub body: String,
    pub content_type: Option<String>,
}

impl RecordedRequest {
    #[must_use]
    pub fn path(&self) -> &str {
        self.url.split('?').next().unwrap_or(&self.url)
    }

    /// Body decoded as JSON (`Null` when empty or malformed).
    #[must_use]
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).unwrap_or(serde_json::Value::Null)
    }
}

#[derive(Default)]
struct Routes {
    /// Keyed by `"METHOD url"`; the url may include a query string.
    replies: HashMap<String, VecDeque<Reply>>,
    requests: Vec<RecordedRequest>,
}

impl Routes {
    /// Exact url match first, then path-only. The last queued reply is sticky.
    fn next_reply(&mut self, method: &str, url: &str) -> Option<Reply> {
        let path = url.split('?').next().unwrap_or(url);
        let key = [format!("{method} {url}"), format!("{method} {path}")]
            .into_iter()
            .find(|key| self.replies.contains_key(key))?;
        let queue = self.replies.get_mut(&key)?;
        if queue.len() > 1 {
            queue.pop_front()
        } else {
            queue.front().cloned()
        }
    }
}

/// Fake sleep-tracking backend. Stops serving when dropped.
pub struct FakeBackend {
    server: Arc<tiny_http::Server>,
    routes: Arc<Mutex<Routes>>,
    base_url: String,
}

impl FakeBackend {
    /// Bind to a random local port and start serving.
    ///
    /// # Panics
    ///
    /// Panics if the listener cannot bind.
    #[must_use]
    pub fn start() -> Self {
        let server = Arc::new(tiny_http::Server::http("127.0.0.1:0").expect("fake backend binds"));
        let port = server
            .server_addr()
            .to_ip()
            .map(|addr| addr.port())
            .expect("fake backend has an ip address");
        let routes = Arc::new(Mutex::new(Routes::default()));

        let accept_server = Arc::clone(&server);
        let accept_routes = Arc::clone(&routes);
        thread::spawn(move || {
            for request in accept_server.incoming_requests() {
                let routes = Arc::clone(&accept_routes);
                thread::spawn(move || serve(request, &routes));
            }
        });

        Self {
            server,
            routes,
            base_url: format!("http://127.0.0.1:{port}"),
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// API settings pointing at this backend with a short timeout.
    #[must_use]
    pub fn api_config(&self) -> ApiConfig {
        ApiConfig {
            base_url: self.base_url.clone(),
            timeout_secs: 2,
            ..Default::default()
        }
    }

    /// A client pointing at this backend.
    ///
    /// # Panics
    ///
    /// Panics if the client cannot be built.
    #[must_use]
    pub fn client(&self) -> SleepApiClient {
        SleepApiClient::new(&self.api_config()).expect("client builds")
    }

    /// Queue a reply for `method` + `url`. `url` may carry a query string to
    /// match more specifically than the bare path.
    pub fn reply(&self, method: &str, url: &str, reply: Reply) -> &Self {
        self.lock()
            .replies
            .entry(format!("{method} {url}"))
            .or_default()
            .push_back(reply);
        self
    }

    /// Replace every queued reply for `method` + `url` with `reply`.
    pub fn set_reply(&self, method: &str, url: &str, reply: Reply) -> &Self {
        self.lock()
            .replies
            .insert(format!("{method} {url}"), VecDeque::from([reply]));
        self
    }

    /// Every request received so far, in arrival order.
    #[must_use]
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.lock().requests.clone()
    }

    /// Requests received for `method` on `path` (query string ignored).
    #[must_use]
    pub fn requests_to(&self, method: &str, path: &str) -> Vec<RecordedRequest> {
        self.lock()
            .requests
            .iter()
            .filter(|r| r.method == method && r.path() == path)
            .cloned()
            .collect()
    }

    #[must_use]
    pub fn count(&self, method: &str, path: &str) -> usize {
        self.requests_to(method, path).len()
    }

    fn lock(&self) -> MutexGuard<'_, Routes> {
        self.routes.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl Drop for FakeBackend {
    fn drop(&mut self) {
        self.server.unblock();
    }
}

fn serve(mut request: tiny_http::Request, routes: &Mutex<Routes>) {
    let mut body = String::new();
    let _ = request.as_reader().read_to_string(&mut body);
    let content_type = request
        .headers()
        .iter()
        .find(|h| h.field.equiv("Content-Type"))
        .map(|h| h.value.as_str().to_string());
    let method = request.method().as_str().to_uppercase();
    let url = request.url().to_string();

    let reply = {
        let mut routes = routes.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        routes.requests.push(RecordedRequest {
            method: method.clone(),
            url: url.clone(),
            body,
            content_type,
        });
        routes.next_reply(&method, &url)
    }
    .unwrap_or_else(|| Reply::json(404, serde_json::json!({ "error": "not found" })));

    if !reply.delay.is_zero() {
        thread::sleep(reply.delay);
    }

    let header = tiny_http::Header::from_bytes("Content-Type", "application/json")
        .expect("static header is valid");
    let response = tiny_http::Response::from_string(reply.body)
        .with_status_code(reply.status)
        .with_header(header);
    let _ = request.respond(response);
}
