// Rust guideline compliant 2026-10-18

//! Loopback HTTP responder for client tests.
//!
//! Each expected request is answered on its own connection with a canned
//! status and body; the requests are recorded for later assertions.

#![allow(dead_code)]

use jira_util_core::{AuthScheme, EnvironmentConfig};
use serde_json::Value;
use std::io::{BufRead, BufReader, Read, Write};
use std::net::{TcpListener, TcpStream};
use std::thread::{self, JoinHandle};

/// One request as seen by the responder.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: String,
    pub target: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl Recorded {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn json(&self) -> Value {
        serde_json::from_str(&self.body).expect("request body is JSON")
    }
}

/// A running responder bound to a loopback port.
pub struct Loopback {
    pub base_url: String,
    handle: JoinHandle<Vec<Recorded>>,
}

impl Loopback {
    /// Waits for every canned response to be served.
    pub fn finish(self) -> Vec<Recorded> {
        self.handle.join().expect("responder thread panicked")
    }
}

/// Serves the given `(status, body)` responses in order, one per connection.
pub fn serve(responses: Vec<(u16, &'static str)>) -> Loopback {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback");
    let base_url = format!("http://{}", listener.local_addr().expect("local addr"));

    let handle = thread::spawn(move || {
        let mut seen = Vec::new();
        for (status, body) in responses {
            let (mut stream, _) = listener.accept().expect("accept");
            seen.push(read_request(&stream));
            write_response(&mut stream, status, body);
        }
        seen
    });

    Loopback { base_url, handle }
}

/// A base URL nothing listens on.
pub fn closed_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    format!("http://{}", addr)
}

fn read_request(stream: &TcpStream) -> Recorded {
    let mut reader = BufReader::new(stream.try_clone().expect("clone stream"));

    let mut request_line = String::new();
    reader.read_line(&mut request_line).expect("request line");
    let mut parts = request_line.split_whitespace();
    let method = parts.next().unwrap_or_default().to_string();
    let target = parts.next().unwrap_or_default().to_string();

    let mut headers = Vec::new();
    loop {
        let mut line = String::new();
        reader.read_line(&mut line).expect("header line");
        let line = line.trim_end();
        if line.is_empty() {
            break;
        }
        if let Some((key, value)) = line.split_once(':') {
            headers.push((key.trim().to_string(), value.trim().to_string()));
        }
    }

    let length = headers
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case("content-length"))
        .and_then(|(_, value)| value.parse::<usize>().ok())
        .unwrap_or(0);
    let mut body = vec![0; length];
    reader.read_exact(&mut body).expect("request body");

    Recorded {
        method,
        target,
        headers,
        body: String::from_utf8(body).expect("utf-8 body"),
    }
}

fn write_response(stream: &mut TcpStream, status: u16, body: &str) {
    let mut response = format!("HTTP/1.1 {} Canned\r\nConnection: close\r\n", status);
    if status != 204 {
        response.push_str(&format!(
            "Content-Type: application/json\r\nContent-Length: {}\r\n",
            body.len()
        ));
    }
    response.push_str("\r\n");
    if status != 204 {
        response.push_str(body);
    }
    stream.write_all(response.as_bytes()).expect("write response");
    stream.flush().expect("flush response");
}

/// Basic-auth environment pointed at `base_url`.
pub fn basic_env(base_url: &str) -> EnvironmentConfig {
    EnvironmentConfig {
        base_url: Some(base_url.to_string()),
        auth: AuthScheme::Basic,
        user: Some("bob".to_string()),
        api_token: Some("secret".to_string()),
        ..EnvironmentConfig::default()
    }
}

/// Bearer-auth environment pointed at `base_url`.
pub fn bearer_env(base_url: &str) -> EnvironmentConfig {
    EnvironmentConfig {
        base_url: Some(base_url.to_string()),
        auth: AuthScheme::Bearer,
        user: None,
        api_token: Some("tok-123".to_string()),
        ..EnvironmentConfig::default()
    }
}
