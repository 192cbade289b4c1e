//! Shared helpers for the data crate's behavioural tests.

use std::io::{BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// A one-shot HTTP server answering a single request with a canned response.
pub struct StubServer {
    /// Base URL the server listens on, e.g. `http://127.0.0.1:41234`.
    pub base_url: String,
    handle: JoinHandle<String>,
}

impl StubServer {
    /// Serve `body` with `status` to the first client that connects.
    pub fn respond(status: u16, body: &str) -> Self {
        let response = format!(
            concat!(
                "HTTP/1.1 {status} Stub\r\n",
                "content-type: application/json\r\n",
                "content-length: {length}\r\n",
                "connection: close\r\n\r\n",
                "{body}",
            ),
            status = status,
            length = body.len(),
            body = body,
        );
        Self::spawn(move |mut stream| {
            stream
                .write_all(response.as_bytes())
                .unwrap_or_else(|err| panic!("failed to write stub response: {err}"));
        })
    }

    /// Accept the first request and hold the connection open without replying.
    pub fn stall(delay: Duration) -> Self {
        Self::spawn(move |stream| {
            thread::sleep(delay);
            drop(stream);
        })
    }

    fn spawn(reply: impl FnOnce(TcpStream) + Send + 'static) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .unwrap_or_else(|err| panic!("failed to bind stub server: {err}"));
        let address = listener
            .local_addr()
            .unwrap_or_else(|err| panic!("stub server has no address: {err}"));
        let handle = thread::spawn(move || {
            let (stream, _) = listener
                .accept()
                .unwrap_or_else(|err| panic!("stub server failed to accept: {err}"));
            let request_line = read_request(&stream);
            reply(stream);
            request_line
        });
        Self {
            base_url: format!("http://{address}"),
            handle,
        }
    }

    /// Wait for the request to complete and return its request line.
    pub fn request_line(self) -> String {
        self.handle
            .join()
            .unwrap_or_else(|_| panic!("stub server thread panicked"))
    }
}

/// Read the request head, returning its first line.
fn read_request(stream: &TcpStream) -> String {
    let mut reader = BufReader::new(stream);
    let mut first = String::new();
    reader
        .read_line(&mut first)
        .unwrap_or_else(|err| panic!("failed to read request line: {err}"));
    let mut line = String::new();
    loop {
        line.clear();
        let read = reader
            .read_line(&mut line)
            .unwrap_or_else(|err| panic!("failed to read request header: {err}"));
        if read == 0 || line == "\r\n" {
            break;
        }
    }
    first.trim_end().to_owned()
}

/// Base URL of a port with nothing listening on it.
pub fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .unwrap_or_else(|err| panic!("failed to bind probe listener: {err}"));
    let address = listener
        .local_addr()
        .unwrap_or_else(|err| panic!("probe listener has no address: {err}"));
    drop(listener);
    format!("http://{address}")
}
