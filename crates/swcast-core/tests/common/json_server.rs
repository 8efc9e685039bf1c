//! Minimal HTTP/1.1 server that serves canned JSON bodies for integration tests.
//!
//! Routes are matched on the exact request path. Unknown paths get a SWAPI-style
//! `404 {"detail":"Not found"}`. Every request path is recorded so tests can
//! check how many fetches happened and in which order.

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone)]
struct Route {
    status: &'static str,
    body: String,
}

#[derive(Default)]
struct State {
    routes: HashMap<String, Route>,
    hits: Vec<String>,
}

pub struct JsonServer {
    base: String,
    state: Arc<Mutex<State>>,
}

impl JsonServer {
    /// Starts a server in a background thread. The server runs until the process exits.
    pub fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
        let port = listener.local_addr().unwrap().port();
        let state = Arc::new(Mutex::new(State::default()));
        let shared = Arc::clone(&state);
        thread::spawn(move || {
            for stream in listener.incoming().flatten() {
                let state = Arc::clone(&shared);
                thread::spawn(move || handle(stream, &state));
            }
        });
        Self {
            base: format!("http://127.0.0.1:{}/", port),
            state,
        }
    }

    /// Base URL ending in `/`, e.g. "http://127.0.0.1:12345/".
    pub fn base_url(&self) -> &str {
        &self.base
    }

    /// Absolute URL for `path` (no leading slash).
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    /// Serve `body` with `200 OK` at `/path`.
    pub fn json(&self, path: &str, body: &str) {
        self.route(path, "200 OK", body);
    }

    pub fn route(&self, path: &str, status: &'static str, body: &str) {
        self.state.lock().unwrap().routes.insert(
            format!("/{}", path),
            Route {
                status,
                body: body.to_string(),
            },
        );
    }

    /// Request paths seen so far, in arrival order.
    pub fn hits(&self) -> Vec<String> {
        self.state.lock().unwrap().hits.clone()
    }
}

/// A URL on a port nothing listens on, for connection-refused failures.
pub fn refused_url(path: &str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}/{}", port, path)
}

fn handle(mut stream: TcpStream, state: &Mutex<State>) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));
    let mut request = Vec::new();
    let mut buf = [0u8; 4096];
    while !request.windows(4).any(|w| w == b"\r\n\r\n") {
        match stream.read(&mut buf) {
            Ok(0) | Err(_) => return,
            Ok(n) => request.extend_from_slice(&buf[..n]),
        }
    }
    let request = String::from_utf8_lossy(&request);
    let path = request
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .unwrap_or("/")
        .to_string();

    let route = {
        let mut state = state.lock().unwrap();
        state.hits.push(path.clone());
        state.routes.get(&path).cloned()
    };
    let route = route.unwrap_or(Route {
        status: "404 Not Found",
        body: r#"{"detail":"Not found"}"#.to_string(),
    });
    let response = format!(
        "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        route.status,
        route.body.len(),
        route.body
    );
    let _ = stream.write_all(response.as_bytes());
}
