// Programmable HTTP redirect server shared by the integration tests.
//
// Every registered path owns an ordered queue of scripted responses, consumed one
// per request. Unregistered paths and exhausted queues answer 200 with no
// Location header. Responses are written by hand over a raw TCP socket so the
// exact status line and headers (including Transfer-Encoding on HEAD responses)
// reach the client unchanged.

#![allow(dead_code)] // Each test file uses a different subset

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

use redirect_resolver::ResolverConfig;

/// One scripted response.
#[derive(Debug, Clone)]
pub struct ScriptedResponse {
    pub status: u16,
    pub location: Option<String>,
    pub chunked: bool,
}

impl ScriptedResponse {
    pub fn ok() -> Self {
        Self {
            status: 200,
            location: None,
            chunked: false,
        }
    }

    pub fn redirect(status: u16, location: impl Into<String>) -> Self {
        Self {
            status,
            location: Some(location.into()),
            chunked: false,
        }
    }

    pub fn chunked(mut self) -> Self {
        self.chunked = true;
        self
    }
}

/// A request as seen by the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
}

#[derive(Default)]
struct ServerState {
    scripts: Mutex<HashMap<String, VecDeque<ScriptedResponse>>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl ServerState {
    fn next_response(&self, method: &str, path: &str) -> ScriptedResponse {
        self.requests
            .lock()
            .expect("Poisoned lock")
            .push(RecordedRequest {
                method: method.to_string(),
                path: path.to_string(),
            });
        self.scripts
            .lock()
            .expect("Poisoned lock")
            .get_mut(path)
            .and_then(VecDeque::pop_front)
            .unwrap_or_else(ScriptedResponse::ok)
    }
}

/// HTTP/1.1 server on an ephemeral localhost port. Stops when dropped.
pub struct RedirectServer {
    base_url: String,
    state: Arc<ServerState>,
    next_path: AtomicUsize,
    handle: JoinHandle<()>,
}

impl RedirectServer {
    pub async fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind");
        let addr = listener.local_addr().expect("Failed to get address");
        let state = Arc::new(ServerState::default());

        let accept_state = Arc::clone(&state);
        let handle = tokio::spawn(async move {
            loop {
                let Ok((stream, _)) = listener.accept().await else {
                    break;
                };
                tokio::spawn(handle_connection(stream, Arc::clone(&accept_state)));
            }
        });

        Self {
            base_url: format!("http://{}", addr),
            state,
            next_path: AtomicUsize::new(0),
            handle,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn fresh_path(&self) -> String {
        format!("/path/{}", self.next_path.fetch_add(1, Ordering::SeqCst))
    }

    /// Appends `responses` to the queue of `path`.
    pub fn register(&self, path: &str, responses: Vec<ScriptedResponse>) {
        self.state
            .scripts
            .lock()
            .expect("Poisoned lock")
            .entry(path.to_string())
            .or_default()
            .extend(responses);
    }

    /// A path that answers 200 without a Location header.
    pub fn no_redirects(&self) -> String {
        let path = self.fresh_path();
        self.register(&path, vec![ScriptedResponse::ok()]);
        self.url(&path)
    }

    /// `n` redirects with status `code` through `n - 1` intermediate paths to a
    /// target that answers 200. Returns `(entry_url, target_url)`.
    pub fn many_redirects(&self, code: u16, n: usize) -> (String, String) {
        let entry = self.fresh_path();
        if n == 0 {
            return (self.url(&entry), self.url(&entry));
        }
        let mut hops = vec![entry];
        for _ in 1..n {
            hops.push(self.fresh_path());
        }
        let target = self.fresh_path();
        for (i, hop) in hops.iter().enumerate() {
            let next = hops.get(i + 1).unwrap_or(&target);
            self.register(hop, vec![ScriptedResponse::redirect(code, self.url(next))]);
        }
        (self.url(&hops[0]), self.url(&target))
    }

    /// Redirects with status `code` through `n - 1` intermediate paths and back
    /// to the entry path. Returns the entry URL.
    pub fn cyclic_redirect(&self, code: u16, n: usize) -> String {
        assert!(n >= 1, "A cycle needs at least one redirect");
        let hops: Vec<String> = (0..n).map(|_| self.fresh_path()).collect();
        for (i, hop) in hops.iter().enumerate() {
            let next = &hops[(i + 1) % n];
            self.register(hop, vec![ScriptedResponse::redirect(code, self.url(next))]);
        }
        self.url(&hops[0])
    }

    /// A path that answers 200 with `Transfer-Encoding: chunked`.
    pub fn unlimited_content(&self) -> String {
        let path = self.fresh_path();
        self.register(&path, vec![ScriptedResponse::ok().chunked()]);
        self.url(&path)
    }

    /// A redirect that is also chunked, to a target answering 200.
    /// Returns `(entry_url, target_url)`.
    pub fn chunked_redirect(&self, code: u16) -> (String, String) {
        let entry = self.fresh_path();
        let target = self.fresh_path();
        self.register(
            &entry,
            vec![ScriptedResponse::redirect(code, self.url(&target)).chunked()],
        );
        (self.url(&entry), self.url(&target))
    }

    /// A redirect whose Location is a path relative to the server root.
    /// Returns `(entry_url, target_url)`.
    pub fn relative_redirect(&self, code: u16) -> (String, String) {
        let entry = self.fresh_path();
        let target = self.fresh_path();
        self.register(&entry, vec![ScriptedResponse::redirect(code, target.clone())]);
        (self.url(&entry), self.url(&target))
    }

    /// A redirect status without a Location header.
    pub fn redirect_without_location(&self, code: u16) -> String {
        let path = self.fresh_path();
        self.register(
            &path,
            vec![ScriptedResponse {
                status: code,
                location: None,
                chunked: false,
            }],
        );
        self.url(&path)
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().expect("Poisoned lock").clone()
    }

    pub fn request_count(&self) -> usize {
        self.state.requests.lock().expect("Poisoned lock").len()
    }
}

impl Drop for RedirectServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn handle_connection(mut stream: TcpStream, state: Arc<ServerState>) {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
        match stream.read(&mut chunk).await {
            Ok(0) | Err(_) => return,
            Ok(n) => buf.extend_from_slice(&chunk[..n]),
        }
    }

    let head = String::from_utf8_lossy(&buf);
    let mut request_line = head.lines().next().unwrap_or_default().split_whitespace();
    let method = request_line.next().unwrap_or("GET").to_string();
    let path = request_line.next().unwrap_or("/").to_string();

    let scripted = state.next_response(&method, &path);
    let mut response = format!(
        "HTTP/1.1 {} {}\r\nConnection: close\r\n",
        scripted.status,
        reason_phrase(scripted.status)
    );
    if let Some(location) = &scripted.location {
        response.push_str(&format!("Location: {}\r\n", location));
    }
    if scripted.chunked {
        response.push_str("Transfer-Encoding: chunked\r\n");
    } else {
        response.push_str("Content-Length: 0\r\n");
    }
    response.push_str("\r\n");
    if scripted.chunked && method != "HEAD" {
        // Terminating zero-length chunk
        response.push_str("0\r\n\r\n");
    }

    let _ = stream.write_all(response.as_bytes()).await;
    let _ = stream.shutdown().await;
}

fn reason_phrase(status: u16) -> &'static str {
    match status {
        200 => "OK",
        301 => "Moved Permanently",
        302 => "Found",
        303 => "See Other",
        307 => "Temporary Redirect",
        308 => "Permanent Redirect",
        _ => "Unknown",
    }
}

/// Resolver configuration for tests: no proxy and a short timeout.
pub fn test_config(max_redirects: usize, ignore_unlimited: bool) -> ResolverConfig {
    ResolverConfig {
        max_redirects,
        ignore_unlimited,
        timeout_seconds: 5,
        no_proxy: true,
        ..Default::default()
    }
}

/// Returns a localhost URL on which nothing is listening.
pub async fn unused_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let addr = listener.local_addr().expect("Failed to get address");
    drop(listener);
    format!("http://{}/", addr)
}
