// Mock drop server shared by the integration tests. It answers exactly one
// request and hands what it saw back to the test.

#![allow(dead_code)]

use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::mpsc::{channel, Receiver};
use std::thread;
use std::time::Duration;

use tiny_http::{Response, Server, StatusCode};

pub struct Captured {
    pub method: String,
    pub url: String,
    pub content_type: String,
    pub user_agent: String,
    pub body: Vec<u8>,
}

pub struct Part {
    pub name: String,
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub content: Vec<u8>,
}

pub struct MockServer {
    pub base: String,
    rx: Receiver<Option<Captured>>,
}

impl MockServer {
    /// Serve one request, replying with `status` and `body`. Gives up after
    /// `wait` without a request.
    pub fn start(status: u16, body: &str, wait: Duration) -> MockServer {
        let srv = Server::http("127.0.0.1:0").unwrap();
        let base = format!("http://{}", srv.server_addr());
        let body = body.to_string();
        let (tx, rx) = channel();

        thread::spawn(move || {
            let mut req = match srv.recv_timeout(wait) {
                Ok(Some(v)) => v,
                _ => {
                    tx.send(None).unwrap();
                    return;
                }
            };
            let mut content_type = String::new();
            let mut user_agent = String::new();
            for h in req.headers() {
                if h.field.equiv("Content-Type") {
                    content_type = h.value.as_str().to_string();
                } else if h.field.equiv("User-Agent") {
                    user_agent = h.value.as_str().to_string();
                }
            }
            let method = req.method().to_string();
            let url = req.url().to_string();
            let mut data = Vec::new();
            req.as_reader().read_to_end(&mut data).unwrap();

            let res = Response::from_string(body).with_status_code(StatusCode(status));
            req.respond(res).unwrap();

            tx.send(Some(Captured {
                method,
                url,
                content_type,
                user_agent,
                body: data,
            }))
            .unwrap();
        });

        MockServer { base, rx }
    }

    pub fn ok(token: &str) -> MockServer {
        MockServer::start(200, token, Duration::from_secs(10))
    }

    pub fn captured(self) -> Option<Captured> {
        self.rx.recv().unwrap()
    }
}

/// Serve one request with a 200 whose body stops short of its
/// `Content-Length`, then close the connection.
pub fn start_truncated(token: &str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());
    let token = token.to_string();

    thread::spawn(move || {
        let (mut conn, _) = match listener.accept() {
            Ok(v) => v,
            Err(_) => return,
        };
        read_request(&mut conn);
        let head = format!(
            "HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\nContent-Length: {}\r\n\r\n",
            token.len() + 64
        );
        let _ = conn.write_all(head.as_bytes());
        let _ = conn.write_all(token.as_bytes());
        let _ = conn.flush();
    });

    base
}

// Drain headers and body so the client sees the response rather than a
// reset while it is still sending.
fn read_request(conn: &mut impl Read) {
    let mut data = Vec::new();
    let mut buf = [0u8; 4096];
    let mut expected: Option<usize> = None;
    let mut chunked = false;
    loop {
        let n = match conn.read(&mut buf) {
            Ok(0) | Err(_) => return,
            Ok(n) => n,
        };
        data.extend_from_slice(&buf[..n]);
        if expected.is_none() {
            if let Some(end) = data.windows(4).position(|w| w == b"\r\n\r\n") {
                let head = String::from_utf8_lossy(&data[..end]).to_ascii_lowercase();
                chunked = head.contains("transfer-encoding: chunked");
                let len = head
                    .lines()
                    .find_map(|l| l.strip_prefix("content-length:"))
                    .and_then(|v| v.trim().parse::<usize>().ok())
                    .unwrap_or(0);
                expected = Some(end + 4 + len);
            }
        }
        if chunked {
            if data.ends_with(b"0\r\n\r\n") {
                return;
            }
        } else if let Some(total) = expected {
            if data.len() >= total {
                return;
            }
        }
    }
}

/// Split a multipart/form-data body into its parts, in order.
pub fn parse_multipart(content_type: &str, body: &[u8]) -> Vec<Part> {
    let boundary = multer::parse_boundary(content_type).unwrap();
    let data = body.to_vec();
    let stream = futures::stream::once(async move { Ok::<Vec<u8>, std::io::Error>(data) });
    let mut multipart = multer::Multipart::new(stream, boundary);

    futures::executor::block_on(async move {
        let mut parts = Vec::new();
        while let Some(field) = multipart.next_field().await.unwrap() {
            let name = field.name().unwrap_or("").to_string();
            let file_name = field.file_name().map(str::to_string);
            let content_type = field.content_type().map(|m| m.to_string());
            let content = field.bytes().await.unwrap().to_vec();
            parts.push(Part {
                name,
                file_name,
                content_type,
                content,
            });
        }
        parts
    })
}
