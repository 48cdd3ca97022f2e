//! Mock clientes API server for testing
//!
//! A tiny HTTP server that behaves like a json-server `clientes` collection:
//! - GET /clientes returns the stored array
//! - POST /clientes stores the body with a fresh `id` and echoes it back
//! - PUT /clientes/{id} replaces the stored record and echoes it back
//!
//! Every request is recorded so tests can assert on paths and bodies.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;

use serde_json::{json, Value as JsonValue};

/// Mock clientes server for testing
pub struct MockClientesServer {
    port: u16,
    running: Arc<AtomicBool>,
    state: Arc<ServerState>,
    thread_handle: Option<thread::JoinHandle<()>>,
}

/// Configuration for the mock server
#[derive(Debug, Clone, Default)]
pub struct MockConfig {
    /// Number of customers seeded before the first request
    pub num_customers: usize,
    /// Answer every request with this status instead of serving it
    pub fail_status: Option<u16>,
    /// Delay in milliseconds before responding
    pub delay_ms: u64,
}

/// A request as seen by the server
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub body: String,
}

struct ServerState {
    config: MockConfig,
    customers: Mutex<Vec<JsonValue>>,
    requests: Mutex<Vec<RecordedRequest>>,
    next_id: AtomicU64,
}

impl MockClientesServer {
    /// Start a new mock server on a random available port
    pub fn start(config: MockConfig) -> std::io::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0")?;
        let port = listener.local_addr()?.port();
        let running = Arc::new(AtomicBool::new(true));
        let running_clone = running.clone();

        let state = Arc::new(ServerState {
            customers: Mutex::new(generate_mock_customers(config.num_customers)),
            requests: Mutex::new(Vec::new()),
            next_id: AtomicU64::new(config.num_customers as u64 + 1),
            config,
        });
        let state_clone = state.clone();

        // Set listener to non-blocking for graceful shutdown
        listener.set_nonblocking(true)?;

        let thread_handle = thread::spawn(move || {
            while running_clone.load(Ordering::SeqCst) {
                match listener.accept() {
                    Ok((stream, _)) => {
                        let state = state_clone.clone();
                        thread::spawn(move || {
                            handle_connection(stream, &state);
                        });
                    }
                    Err(ref e) if e.kind() == std::io::ErrorKind::WouldBlock => {
                        thread::sleep(std::time::Duration::from_millis(10));
                    }
                    Err(_) => break,
                }
            }
        });

        Ok(Self {
            port,
            running,
            state,
            thread_handle: Some(thread_handle),
        })
    }

    /// Get the base URL for this mock server
    pub fn base_url(&self) -> String {
        format!("http://127.0.0.1:{}", self.port)
    }

    /// Requests received so far, in arrival order
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }

    /// Current server-side collection
    pub fn customers(&self) -> Vec<JsonValue> {
        self.state.customers.lock().unwrap().clone()
    }

    /// Stop the mock server
    pub fn stop(&mut self) {
        self.running.store(false, Ordering::SeqCst);
        if let Some(handle) = self.thread_handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for MockClientesServer {
    fn drop(&mut self) {
        self.stop();
    }
}

fn generate_mock_customers(count: usize) -> Vec<JsonValue> {
    (1..=count)
        .map(|i| {
            json!({
                "id": i.to_string(),
                "nome": format!("Cliente {}", i),
                "email": format!("cliente{}@example.com", i),
                "telefone": format!("1199999{:04}", i),
                "cidade": "São Paulo",
            })
        })
        .collect()
}

/// Read one HTTP request: head, then `Content-Length` bytes of body
fn read_request(stream: &mut TcpStream) -> Option<(String, String, String)> {
    let mut data = Vec::new();
    let mut buffer = [0; 4096];

    let head_end = loop {
        let n = stream.read(&mut buffer).ok()?;
        if n == 0 {
            return None;
        }
        data.extend_from_slice(&buffer[..n]);
        if let Some(pos) = data.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let head = String::from_utf8_lossy(&data[..head_end]).to_string();
    let content_length = head
        .lines()
        .filter_map(|line| line.split_once(':'))
        .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
        .and_then(|(_, value)| value.trim().parse::<usize>().ok())
        .unwrap_or(0);

    while data.len() < head_end + content_length {
        let n = stream.read(&mut buffer).ok()?;
        if n == 0 {
            break;
        }
        data.extend_from_slice(&buffer[..n]);
    }

    let mut parts = head.lines().next().unwrap_or("").split_whitespace();
    let method = parts.next()?.to_string();
    let path = parts.next()?.to_string();
    let body = String::from_utf8_lossy(&data[head_end..]).to_string();
    Some((method, path, body))
}

fn handle_connection(mut stream: TcpStream, state: &ServerState) {
    let _ = stream.set_nonblocking(false);

    let Some((method, path, body)) = read_request(&mut stream) else {
        return;
    };

    state.requests.lock().unwrap().push(RecordedRequest {
        method: method.clone(),
        path: path.clone(),
        body: body.clone(),
    });

    if state.config.delay_ms > 0 {
        thread::sleep(std::time::Duration::from_millis(state.config.delay_ms));
    }

    if let Some(status) = state.config.fail_status {
        send_response(&mut stream, status, r#"{"error": "simulated failure"}"#);
        return;
    }

    let path_without_query = path.split('?').next().unwrap_or(&path);
    let segments: Vec<&str> = path_without_query
        .trim_matches('/')
        .split('/')
        .filter(|s| !s.is_empty())
        .collect();

    match (method.as_str(), segments.as_slice()) {
        ("GET", ["clientes"]) => {
            let customers = state.customers.lock().unwrap();
            let json = serde_json::to_string(&*customers).unwrap();
            send_response(&mut stream, 200, &json);
        }
        ("POST", ["clientes"]) => {
            let Ok(JsonValue::Object(mut record)) = serde_json::from_str::<JsonValue>(&body) else {
                send_response(&mut stream, 400, r#"{"error": "invalid body"}"#);
                return;
            };
            let id = state.next_id.fetch_add(1, Ordering::SeqCst);
            record.insert("id".to_string(), JsonValue::String(id.to_string()));
            let record = JsonValue::Object(record);
            state.customers.lock().unwrap().push(record.clone());
            send_response(&mut stream, 201, &record.to_string());
        }
        ("PUT", ["clientes", id]) => {
            let Ok(record) = serde_json::from_str::<JsonValue>(&body) else {
                send_response(&mut stream, 400, r#"{"error": "invalid body"}"#);
                return;
            };
            let mut customers = state.customers.lock().unwrap();
            match customers.iter_mut().find(|c| c["id"] == JsonValue::from(*id)) {
                Some(existing) => {
                    *existing = record.clone();
                    send_response(&mut stream, 200, &record.to_string());
                }
                None => {
                    send_response(&mut stream, 404, r#"{"error": "not found"}"#);
                }
            }
        }
        _ => send_response(&mut stream, 404, r#"{"error": "not found"}"#),
    }
}

fn reason_phrase(status: u16) -> &'static str {
    match status {
        200 => "OK",
        201 => "Created",
        400 => "Bad Request",
        404 => "Not Found",
        500 => "Internal Server Error",
        503 => "Service Unavailable",
        _ => "Unknown",
    }
}

fn send_response(stream: &mut TcpStream, status: u16, body: &str) {
    let response = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        reason_phrase(status),
        body.len(),
        body
    );
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.flush();
}
